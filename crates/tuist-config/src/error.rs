//! Error types for tuist configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::{de, ser};

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// Failed to render settings back to TOML.
    #[error("failed to serialize settings: {source}")]
    SerializeToml {
        /// Underlying TOML serialization error.
        source: ser::Error,
    },

    /// A `[[plugin]]` entry is malformed.
    #[error("invalid plugin #{index} in {path}: {reason}")]
    InvalidPlugin {
        /// Config file declaring the plugin.
        path: PathBuf,
        /// One-based position of the entry in the file.
        index: usize,
        /// What is wrong with the entry.
        reason: String,
    },

    /// Two plugins resolve to the same name.
    #[error("duplicate plugin name '{name}' in {path}")]
    DuplicatePlugin {
        /// Config file declaring the plugins.
        path: PathBuf,
        /// The repeated name.
        name: String,
    },

    /// A local plugin path is not a directory.
    #[error("plugin path is not a directory: {path}")]
    PluginPathNotDirectory {
        /// The path that is not a directory.
        path: PathBuf,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// Failed to canonicalize a path.
    #[error("failed to resolve path {path}: {source}")]
    PathResolution {
        /// The path that could not be resolved.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
