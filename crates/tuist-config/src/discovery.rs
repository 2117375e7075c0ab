//! Configuration file discovery.
//!
//! Finds the project's `.tuist.toml` by walking up the directory tree from the working root.
//! Unlike layered configuration systems, only the nearest file applies.

use std::path::{Path, PathBuf};

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".tuist.toml";

/// Finds the configuration file that applies to `root`.
///
/// Walks up from `root` to the filesystem root and returns the first `.tuist.toml` that is a
/// regular file. Returns `None` if no configuration file is found.
pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    root.ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}
