//! Shared context for running CLI commands.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use tuist_dispatch::{CommandDispatcher, Environment};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Dispatcher wired to the real filesystem and process table.
    pub dispatcher: CommandDispatcher,
}

impl CommandContext {
    /// Captures the ambient environment and builds the dispatcher.
    pub fn load(verbose_flag: bool) -> Result<Self, ExitCode> {
        let env = Environment::capture(verbose_flag).map_err(|e| {
            eprintln!("error: could not determine current directory: {e}");
            ExitCode::FAILURE
        })?;
        Ok(Self {
            dispatcher: CommandDispatcher::system(env),
        })
    }

    /// Returns the captured ambient environment.
    pub fn environment(&self) -> &Environment {
        self.dispatcher.environment()
    }

    /// Resolves an optional `--path` value against the working directory.
    pub fn project_root(&self, path: Option<&Path>) -> PathBuf {
        let cwd = &self.environment().cwd;
        path.map_or_else(|| cwd.clone(), |p| cwd.join(p))
    }
}
