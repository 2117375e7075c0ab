//! Naming and argument conventions for external tasks.
//!
//! A task `foo` is handled by an executable named `tuist-foo`. The working root of a task is
//! taken from a `--path`/`--p` argument when present; the argument stays in place so the
//! task sees it too.

use std::path::{Component, Path, PathBuf};

use crate::DispatchError;

/// Command namespace shared by the tool and its tasks.
pub const TOOL_PREFIX: &str = "tuist";

/// Flags that override the working root, in lookup order.
pub const PATH_FLAGS: [&str; 2] = ["--path", "--p"];

/// Returns the executable name that handles `task`.
pub fn task_command_name(task: &str) -> String {
    format!("{TOOL_PREFIX}-{task}")
}

/// Returns the task handled by an executable named `command`, if it follows the convention.
pub fn task_name(command: &str) -> Option<&str> {
    command
        .strip_prefix(TOOL_PREFIX)?
        .strip_prefix('-')
        .filter(|task| !task.is_empty())
}

/// Determines the directory a task operates on.
///
/// `--path` is looked up before `--p`; the value that follows is resolved against `cwd`.
/// Without either flag the working root is `cwd` itself.
pub fn working_root(args: &[String], cwd: &Path) -> Result<PathBuf, DispatchError> {
    let Some(index) = PATH_FLAGS
        .iter()
        .find_map(|flag| args.iter().position(|arg| arg == flag))
    else {
        return Ok(cwd.to_path_buf());
    };

    match args.get(index + 1) {
        Some(value) => Ok(normalize(&cwd.join(value))),
        None => Err(DispatchError::MissingPathValue {
            flag: args[index].clone(),
        }),
    }
}

/// Removes `.` and `..` components without consulting the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
