//! Lookup of commands installed on the search path.

use std::{env, path::PathBuf};

/// Finds the executable a bare command name resolves to.
pub trait CommandLocator {
    /// Returns the executable `name` resolves to, if any.
    fn locate(&self, name: &str) -> Option<PathBuf>;

    /// Returns true if `name` resolves to an executable.
    fn exists(&self, name: &str) -> bool {
        self.locate(name).is_some()
    }
}

/// Locator that searches `PATH` like a shell would.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandLocator;

impl CommandLocator for SystemCommandLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Returns the directories listed in `PATH`, in search order.
pub fn system_search_path() -> Vec<PathBuf> {
    env::var_os("PATH")
        .map(|path| env::split_paths(&path).collect())
        .unwrap_or_default()
}
