//! Resolution of a task to one executable, and its invocation.
//!
//! Resolution precedence, first match wins:
//! 1. a plugin release binary named `tuist-<task>`, searched in registry order
//! 2. a command named `tuist-<task>` found on the search path
//!
//! Nothing is cached between calls; every call reloads configuration and relists plugin
//! directories.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use tracing::debug;
use tuist_config::{Config, ConfigProvider, FileConfigProvider};
use tuist_plugin::{
    CachePluginRegistry, DirectoryLister, FsDirectoryLister, ListedEntry, PluginRegistry,
};

use crate::{
    AvailableTask, ChildExit, CommandLocator, DispatchError, Environment, ProcessRunner,
    SystemCommandLocator, SystemProcessRunner, catalog,
    task::{TOOL_PREFIX, task_command_name, working_root},
};

/// Environment variable through which a task learns the path of the tool that launched it.
pub const BINARY_PATH_ENV: &str = "TUIST_BINARY_PATH";

/// The executable chosen for a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCommand {
    /// A binary shipped by a plugin, by full path.
    Plugin(PathBuf),
    /// A command found on the search path, by bare name.
    System(String),
}

impl ResolvedCommand {
    /// Returns the program string placed at the front of the argument vector.
    pub fn program(&self) -> String {
        match self {
            Self::Plugin(path) => path.to_string_lossy().into_owned(),
            Self::System(name) => name.clone(),
        }
    }
}

/// Outcome of resolving a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Arguments to run, with element 0 rewritten to the resolved program.
    pub args: Vec<String>,
    /// The executable that was chosen.
    pub command: ResolvedCommand,
}

/// Maps sub-commands to plugin or system executables and runs them.
pub struct CommandDispatcher {
    /// Ambient state snapshot.
    env: Environment,
    /// Source of project configuration.
    config: Box<dyn ConfigProvider>,
    /// Source of plugin release directories.
    registry: Box<dyn PluginRegistry>,
    /// Lists plugin release directories.
    lister: Box<dyn DirectoryLister>,
    /// Checks for commands on the search path.
    locator: Box<dyn CommandLocator>,
    /// Launches the resolved executable.
    runner: Box<dyn ProcessRunner>,
}

impl CommandDispatcher {
    /// Creates a dispatcher from explicit collaborators.
    pub fn new(
        env: Environment,
        config: Box<dyn ConfigProvider>,
        registry: Box<dyn PluginRegistry>,
        lister: Box<dyn DirectoryLister>,
        locator: Box<dyn CommandLocator>,
        runner: Box<dyn ProcessRunner>,
    ) -> Self {
        Self {
            env,
            config,
            registry,
            lister,
            locator,
            runner,
        }
    }

    /// Creates a dispatcher backed by the filesystem, `PATH` and real processes.
    pub fn system(env: Environment) -> Self {
        Self::new(
            env,
            Box::new(FileConfigProvider),
            Box::new(CachePluginRegistry),
            Box::new(FsDirectoryLister),
            Box::new(SystemCommandLocator),
            Box::new(SystemProcessRunner),
        )
    }

    /// Returns the ambient state this dispatcher was built with.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Resolves and runs a task, blocking until it exits.
    ///
    /// `args[0]` names the task; the remaining arguments are forwarded untouched. The child
    /// inherits stdio and environment, plus `TUIST_BINARY_PATH` set to `self_binary_path`.
    pub fn run(
        &self,
        args: Vec<String>,
        self_binary_path: &Path,
    ) -> Result<ChildExit, DispatchError> {
        let resolution = self.resolve(args)?;
        let overlay = BTreeMap::from([(
            BINARY_PATH_ENV.to_string(),
            self_binary_path.to_string_lossy().into_owned(),
        )]);
        self.runner.exec(&resolution.args, self.env.verbose, &overlay)
    }

    /// Picks the executable for a task without running it.
    pub fn resolve(&self, mut args: Vec<String>) -> Result<Resolution, DispatchError> {
        let task = args.first().cloned().ok_or(DispatchError::MissingTask)?;
        let command_name = task_command_name(&task);
        let root = working_root(&args, &self.env.cwd)?;
        debug!(task = %task, root = %root.display(), "resolving task");

        let config = self.config.load(&root)?;
        let candidates = self.plugin_candidates(&config)?;

        let mut matches = candidates.iter().filter(|c| c.name == command_name);
        let command = if let Some(found) = matches.next() {
            for shadowed in matches {
                debug!(path = %shadowed.path.display(), "ignoring shadowed plugin binary");
            }
            ResolvedCommand::Plugin(found.path.clone())
        } else if self.locator.exists(&command_name) {
            ResolvedCommand::System(command_name)
        } else {
            return Err(DispatchError::TaskUnavailable { task });
        };
        debug!(command = ?command, "resolved task");

        if let Some(first) = args.first_mut() {
            *first = command.program();
        }
        Ok(Resolution { args, command })
    }

    /// Loads the configuration that applies to `root`.
    pub fn load_config(&self, root: &Path) -> Result<Config, DispatchError> {
        Ok(self.config.load(root)?)
    }

    /// Lists the tool-prefixed binaries of every plugin release directory, in registry order.
    pub fn plugin_candidates(&self, config: &Config) -> Result<Vec<ListedEntry>, DispatchError> {
        let mut candidates = Vec::new();
        for dir in self.registry.release_dirs(config)? {
            candidates.extend(self.tool_binaries(&dir)?);
        }
        Ok(candidates)
    }

    /// Lists the tasks available for the project at `root`, sorted by name.
    ///
    /// Plugins shadow system commands of the same name; `search_path` is searched in order.
    pub fn available_tasks(
        &self,
        root: &Path,
        search_path: &[PathBuf],
    ) -> Result<Vec<AvailableTask>, DispatchError> {
        catalog::available_tasks(self, root, search_path)
    }

    /// Lists entries of `dir` whose name carries the tool prefix.
    pub fn tool_binaries(&self, dir: &Path) -> Result<Vec<ListedEntry>, DispatchError> {
        let marker = format!("{TOOL_PREFIX}-");
        Ok(self
            .lister
            .list(dir)?
            .into_iter()
            .filter(|entry| entry.name.starts_with(&marker))
            .collect())
    }

    /// Returns the executable `name` resolves to on the search path.
    pub fn locate_command(&self, name: &str) -> Option<PathBuf> {
        self.locator.locate(name)
    }
}
