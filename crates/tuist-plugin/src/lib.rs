//! Plugin release discovery for tuist.
//!
//! Maps a project configuration to the directories holding fetched plugin binaries, and lists
//! those directories.

#![warn(missing_docs)]

mod error;
mod listing;
mod registry;

pub use error::PluginError;
pub use listing::{DirectoryLister, FsDirectoryLister, ListedEntry};
pub use registry::{CachePluginRegistry, PluginRegistry, RELEASE_DIR};
