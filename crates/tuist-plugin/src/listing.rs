//! Immediate directory listings.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::PluginError;

/// A non-directory entry found directly inside a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    /// Base file name.
    pub name: String,
    /// Full path to the entry.
    pub path: PathBuf,
}

impl ListedEntry {
    /// Builds an entry from a full path, taking the base name from its last component.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }
}

/// Lists the immediate entries of a directory.
pub trait DirectoryLister {
    /// Returns the entries directly inside `dir`.
    fn list(&self, dir: &Path) -> Result<Vec<ListedEntry>, PluginError>;
}

/// Filesystem-backed lister.
///
/// Returns files and symlinks (not subdirectories) sorted by file name. A directory that does
/// not exist lists as empty; any other failure is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, dir: &Path) -> Result<Vec<ListedEntry>, PluginError> {
        match fs::metadata(dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(PluginError::NotADirectory {
                    path: dir.to_path_buf(),
                });
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(PluginError::Metadata {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        }

        let mut entries = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| PluginError::ListDirectory {
                path: dir.to_path_buf(),
                source,
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            entries.push(ListedEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.into_path(),
            });
        }

        Ok(entries)
    }
}
