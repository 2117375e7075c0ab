//! Snapshot of the ambient process state the dispatcher depends on.

use std::{env, io, path::PathBuf};

/// Environment variable that enables verbose output.
pub const VERBOSE_ENV: &str = "TUIST_VERBOSE";

/// Ambient state captured once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Whether verbose output was requested.
    pub verbose: bool,
}

impl Environment {
    /// Captures the working directory and verbosity of the running process.
    ///
    /// Verbosity is on when `verbose_flag` is set or `TUIST_VERBOSE` holds a truthy value.
    pub fn capture(verbose_flag: bool) -> io::Result<Self> {
        let verbose_env = env::var(VERBOSE_ENV).is_ok_and(|value| is_truthy(&value));
        Ok(Self {
            cwd: env::current_dir()?,
            verbose: verbose_flag || verbose_env,
        })
    }
}

/// Interprets an environment variable value as a boolean.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
