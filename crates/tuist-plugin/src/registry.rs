//! Release directories of fetched plugins.
//!
//! Git plugins are fetched into `<plugins_dir>/<name>/` and their built binaries live in the
//! `release` subdirectory. A plugin that has not been fetched or built has no release
//! directory and contributes nothing.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;
use tuist_config::{Config, Plugin};

use crate::PluginError;

/// Name of the directory holding a plugin's built binaries.
pub const RELEASE_DIR: &str = "release";

/// Enumerates plugin release directories reachable from a configuration.
pub trait PluginRegistry {
    /// Returns release directories in registry order.
    fn release_dirs(&self, config: &Config) -> Result<Vec<PathBuf>, PluginError>;
}

/// Registry backed by the on-disk plugins directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct CachePluginRegistry;

impl CachePluginRegistry {
    /// Returns where `plugin`'s release directory would live.
    pub fn release_path(config: &Config, plugin: &Plugin) -> PathBuf {
        config.plugins_dir.join(&plugin.name).join(RELEASE_DIR)
    }
}

impl PluginRegistry for CachePluginRegistry {
    fn release_dirs(&self, config: &Config) -> Result<Vec<PathBuf>, PluginError> {
        let mut dirs = Vec::new();
        for plugin in config.git_plugins() {
            let path = Self::release_path(config, plugin);
            if is_existing_dir(&path)? {
                dirs.push(path);
            } else {
                debug!(plugin = %plugin.name, path = %path.display(), "plugin has no release");
            }
        }
        Ok(dirs)
    }
}

/// Returns whether `path` is an existing directory, treating absence as `false`.
fn is_existing_dir(path: &Path) -> Result<bool, PluginError> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(PluginError::Metadata {
            path: path.to_path_buf(),
            source,
        }),
    }
}
