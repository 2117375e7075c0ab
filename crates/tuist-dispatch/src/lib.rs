//! Dispatch of external tasks for tuist.
//!
//! `tuist <task>` is handled by an executable named `tuist-<task>`: a binary shipped by one of
//! the project's plugins, or failing that, a command installed on the search path. The
//! [`CommandDispatcher`] picks that executable and runs it with the caller's arguments,
//! stdio and environment, adding `TUIST_BINARY_PATH` so the task can call back into the tool.
//!
//! All collaborators (configuration, plugin registry, directory listing, command lookup and
//! process spawning) are injected through traits so resolution can be exercised with fakes.

#![warn(missing_docs)]

mod catalog;
mod dispatcher;
mod environment;
mod error;
mod locator;
mod runner;
mod task;
#[cfg(test)]
mod test_support;

pub use catalog::{AvailableTask, TaskSource};
pub use dispatcher::{BINARY_PATH_ENV, CommandDispatcher, Resolution, ResolvedCommand};
pub use environment::{Environment, VERBOSE_ENV, is_truthy};
pub use error::{DispatchError, TASK_UNAVAILABLE_EXIT_CODE};
pub use locator::{CommandLocator, SystemCommandLocator, system_search_path};
pub use runner::{ChildExit, ProcessRunner, SystemProcessRunner};
pub use task::{PATH_FLAGS, TOOL_PREFIX, task_command_name, task_name, working_root};
