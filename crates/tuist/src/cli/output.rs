//! Error reporting and JSON serialization for CLI output.

use std::process::ExitCode;

use serde::Serialize;
use tracing::debug;
use tuist_dispatch::{AvailableTask, DispatchError};

/// Prints a dispatch error and returns the matching exit code.
///
/// Unavailable tasks print only their fixed description.
pub fn report_error(err: &DispatchError) -> ExitCode {
    if let DispatchError::TaskUnavailable { task } = err {
        debug!(task = %task, "no executable handles task");
    }
    eprintln!("error: {err}");
    ExitCode::from(err.exit_code())
}

/// JSON output for a single task.
#[derive(Serialize)]
pub struct JsonTask {
    /// Task name.
    pub name: String,
    /// `plugin` or `system`.
    pub source: &'static str,
    /// Executable path.
    pub path: String,
}

impl From<&AvailableTask> for JsonTask {
    fn from(task: &AvailableTask) -> Self {
        Self {
            name: task.name.clone(),
            source: task.source.as_str(),
            path: task.path.display().to_string(),
        }
    }
}

/// JSON output for `tuist tasks`.
#[derive(Serialize)]
pub struct JsonTaskList {
    /// Available tasks, sorted by name.
    pub tasks: Vec<JsonTask>,
}
