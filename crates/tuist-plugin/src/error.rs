//! Error types for plugin discovery.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while locating plugin binaries.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Failed to inspect a plugin path.
    #[error("failed to inspect plugin path {path}: {source}")]
    Metadata {
        /// Path that could not be inspected.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A path expected to be a directory is something else.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// Failed to list the contents of a directory.
    #[error("failed to list directory {path}: {source}")]
    ListDirectory {
        /// Directory that could not be listed.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },
}
