//! Project configuration for tuist.
//!
//! tuist reads a TOML file named `.tuist.toml`. The nearest such file found by walking up from
//! the working root is the project configuration; when there is none, defaults apply. The
//! configuration declares plugins and where their fetched copies live on disk.

#![warn(missing_docs)]

mod discovery;
mod error;
mod parse;
mod plugin;
mod provider;
mod resolve;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, find_config_file};
pub use error::ConfigError;
pub use parse::{RawConfig, RawPlugin, parse_config_file, parse_config_str};
pub use plugin::{GitReference, Plugin, PluginLocation, resolve_plugins};
pub use provider::{ConfigProvider, FileConfigProvider};
pub use resolve::{resolve_config_path, resolve_plugin_path};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default location of fetched plugins, relative to the project configuration.
pub const DEFAULT_PLUGINS_DIR: &str = ".plugins";

/// Fully resolved project configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Declared plugins, in declaration order.
    pub plugins: Vec<Plugin>,
    /// Directory containing the configuration file, if one was found.
    pub config_root: Option<PathBuf>,
    /// Absolute directory holding fetched plugins.
    pub plugins_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            plugins: Vec::new(),
            config_root: None,
            plugins_dir: PathBuf::from(DEFAULT_PLUGINS_DIR),
        }
    }
}

impl Config {
    /// Loads the configuration that applies to `root`.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Finds the nearest `.tuist.toml` from `root` up to the filesystem root
    /// 2. Parses it and validates its plugin declarations
    /// 3. Resolves the plugins directory against the file's directory
    ///
    /// When no file is found, returns defaults with the plugins directory anchored at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        match find_config_file(root) {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!(root = %root.display(), "no configuration file found, using defaults");
                Self::defaults_for(root)
            }
        }
    }

    /// Loads configuration from a specific `.tuist.toml` file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading configuration");
        let raw = parse_config_file(path)?;
        Self::from_raw(&raw, path)
    }

    /// Builds a configuration from parsed contents of the file at `config_path`.
    pub fn from_raw(raw: &RawConfig, config_path: &Path) -> Result<Self, ConfigError> {
        let config_dir = config_path.parent().unwrap_or(Path::new("."));
        let plugins = resolve_plugins(&raw.plugin, config_path)?;
        let plugins_dir = resolve_config_path(&raw.settings.plugins_dir, config_dir)?;

        Ok(Self {
            settings: raw.settings.clone(),
            plugins,
            config_root: Some(config_dir.to_path_buf()),
            plugins_dir,
        })
    }

    /// Default configuration for a project without a `.tuist.toml`.
    fn defaults_for(root: &Path) -> Result<Self, ConfigError> {
        let settings = Settings::default();
        let plugins_dir = resolve_config_path(&settings.plugins_dir, root)?;
        Ok(Self {
            settings,
            plugins_dir,
            ..Self::default()
        })
    }

    /// Returns the plugins fetched from git, in declaration order.
    pub fn git_plugins(&self) -> impl Iterator<Item = &Plugin> {
        self.plugins.iter().filter(|plugin| plugin.is_git())
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.tuist.toml` file. Plugins are not included since
    /// their paths are resolved.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            settings: self.settings.clone(),
        };
        toml::to_string_pretty(&serializable)
            .map_err(|source| ConfigError::SerializeToml { source })
    }
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding fetched plugins, relative to the configuration file.
    pub plugins_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            plugins_dir: String::from(DEFAULT_PLUGINS_DIR),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// General settings.
    settings: Settings,
}
