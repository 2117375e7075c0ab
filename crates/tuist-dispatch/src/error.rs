//! Error types for command dispatch.

use std::io;

use thiserror::Error;
use tuist_config::ConfigError;
use tuist_plugin::PluginError;

/// Exit code used when a task cannot be resolved (`EX_UNAVAILABLE`).
pub const TASK_UNAVAILABLE_EXIT_CODE: u8 = 69;

/// Errors that can occur while resolving or launching a task.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The argument vector was empty.
    #[error("no task given")]
    MissingTask,

    /// A path-override flag was the last argument.
    #[error("missing value for {flag}")]
    MissingPathValue {
        /// The flag as spelled by the user.
        flag: String,
    },

    /// Neither a plugin binary nor a system command handles the task.
    #[error("Task was not found in the environment")]
    TaskUnavailable {
        /// The task name as requested.
        task: String,
    },

    /// Loading the project configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Locating plugin binaries failed.
    #[error(transparent)]
    Plugin(#[from] PluginError),

    /// The resolved executable could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl DispatchError {
    /// Returns true for errors reported with their description alone, without detail.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::TaskUnavailable { .. })
    }

    /// Exit code the binary terminates with for this error.
    pub fn exit_code(&self) -> u8 {
        if self.is_silent() {
            TASK_UNAVAILABLE_EXIT_CODE
        } else {
            1
        }
    }
}
