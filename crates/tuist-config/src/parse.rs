//! Configuration file parsing.
//!
//! Parses a `.tuist.toml` file into an intermediate `RawConfig` that keeps plugin entries
//! exactly as written, before validation and path resolution.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{ConfigError, Settings};

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// General settings section.
    pub settings: Settings,
    /// Plugin declarations, in file order.
    pub plugin: Vec<RawPlugin>,
}

/// Raw `[[plugin]]` entry from TOML.
///
/// Every field is optional here; which combinations are valid is decided when the entry is
/// resolved into a [`Plugin`](crate::Plugin).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawPlugin {
    /// Explicit plugin name.
    pub name: Option<String>,
    /// Local plugin directory.
    pub path: Option<String>,
    /// Git repository URL.
    pub git: Option<String>,
    /// Git tag to fetch.
    pub tag: Option<String>,
    /// Git commit to fetch.
    pub sha: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
