//! Enumeration of the tasks a user can run.
//!
//! Follows the same precedence as resolution: a plugin binary shadows a system command of the
//! same name, and earlier directories shadow later ones.

use std::{
    collections::{BTreeMap, btree_map::Entry},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{CommandDispatcher, DispatchError, task::task_name};

/// Where an available task comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSource {
    /// A plugin release binary.
    Plugin,
    /// A command on the search path.
    System,
}

impl TaskSource {
    /// Lowercase label for display.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plugin => "plugin",
            Self::System => "system",
        }
    }
}

/// A task that would resolve if requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableTask {
    /// Task name as typed by the user.
    pub name: String,
    /// Where the executable comes from.
    pub source: TaskSource,
    /// Path of the executable that would run.
    pub path: PathBuf,
}

/// Lists the tasks available for the project at `root`, sorted by name.
///
/// Plugin binaries are taken from the project's plugin release directories. System commands
/// are discovered in `search_path` and reported at the executable they resolve to by bare
/// name, or hidden if they do not resolve; search path directories that cannot be listed are
/// skipped.
pub fn available_tasks(
    dispatcher: &CommandDispatcher,
    root: &Path,
    search_path: &[PathBuf],
) -> Result<Vec<AvailableTask>, DispatchError> {
    let config = dispatcher.load_config(root)?;
    let mut tasks = BTreeMap::new();

    for entry in dispatcher.plugin_candidates(&config)? {
        insert_task(&mut tasks, &entry.name, TaskSource::Plugin, entry.path);
    }

    for dir in search_path {
        // PATH may name directories that are gone or unreadable.
        let entries = match dispatcher.tool_binaries(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping search path entry");
                continue;
            }
        };
        for entry in entries {
            if let Some(path) = dispatcher.locate_command(&entry.name) {
                insert_task(&mut tasks, &entry.name, TaskSource::System, path);
            }
        }
    }

    Ok(tasks.into_values().collect())
}

/// Records a task unless an earlier source already provides it.
fn insert_task(
    tasks: &mut BTreeMap<String, AvailableTask>,
    command: &str,
    source: TaskSource,
    path: PathBuf,
) {
    let Some(name) = task_name(command) else {
        return;
    };
    match tasks.entry(name.to_string()) {
        Entry::Vacant(slot) => {
            slot.insert(AvailableTask {
                name: name.to_string(),
                source,
                path,
            });
        }
        Entry::Occupied(existing) => {
            debug!(
                task = name,
                kept = %existing.get().path.display(),
                shadowed = %path.display(),
                "task provided more than once"
            );
        }
    }
}
