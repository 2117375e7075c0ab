//! The seam through which the dispatcher obtains configuration.

use std::path::Path;

use crate::{Config, ConfigError};

/// Loads the configuration that applies to a project root.
pub trait ConfigProvider {
    /// Returns the configuration for `root`.
    fn load(&self, root: &Path) -> Result<Config, ConfigError>;
}

/// Loads configuration from `.tuist.toml` files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileConfigProvider;

impl ConfigProvider for FileConfigProvider {
    fn load(&self, root: &Path) -> Result<Config, ConfigError> {
        Config::load(root)
    }
}
