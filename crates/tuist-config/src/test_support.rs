//! Scratch project trees for unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary project tree, removed on drop.
pub struct ProjectTree(
    /// Backing directory.
    TempDir,
);

impl ProjectTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self(tempfile::tempdir().unwrap())
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.0.path()
    }

    /// Creates `rel` and any missing parents.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a `.tuist.toml` inside `rel` (the tree root when empty).
    pub fn config(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&path, contents).unwrap();
        path
    }
}
