//! Launching the resolved executable.

use std::{
    collections::BTreeMap,
    process::{Command, ExitStatus},
};

#[cfg(unix)]
use std::{
    io,
    sync::{Arc, atomic::AtomicBool},
};

#[cfg(unix)]
use signal_hook::{
    SigId,
    consts::{SIGINT, SIGQUIT},
    flag, low_level,
};
use tracing::{info, warn};

use crate::DispatchError;

/// How a child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// The child exited with a status code.
    Code(i32),
    /// The child was killed by a signal.
    Signal(i32),
}

impl ChildExit {
    /// Returns true if the child exited with status zero.
    pub fn success(self) -> bool {
        self == Self::Code(0)
    }

    /// Exit code to terminate with so the parent mirrors the child.
    ///
    /// Signals map to `128 + signal`, matching shell conventions.
    pub fn exit_code(self) -> u8 {
        let code = match self {
            Self::Code(code) => code,
            Self::Signal(signal) => 128 + signal,
        };
        u8::try_from(code).unwrap_or(u8::MAX)
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Code(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::Signal(signal);
            }
        }
        Self::Code(1)
    }
}

/// Runs a command with the caller's stdio attached.
pub trait ProcessRunner {
    /// Runs `args[0]` with the remaining arguments and blocks until it exits.
    ///
    /// `env` is merged over the inherited environment.
    fn exec(
        &self,
        args: &[String],
        verbose: bool,
        env: &BTreeMap<String, String>,
    ) -> Result<ChildExit, DispatchError>;
}

/// Runner that spawns real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn exec(
        &self,
        args: &[String],
        verbose: bool,
        env: &BTreeMap<String, String>,
    ) -> Result<ChildExit, DispatchError> {
        let (program, rest) = args.split_first().ok_or(DispatchError::MissingTask)?;

        if verbose {
            info!(command = %args.join(" "), "running");
        }

        #[cfg(unix)]
        let _interrupts = InterruptGuard::install()
            .inspect_err(|e| warn!(error = %e, "could not defer terminal interrupts"))
            .ok();

        let status = Command::new(program)
            .args(rest)
            .envs(env)
            .status()
            .map_err(|source| DispatchError::Spawn {
                program: program.clone(),
                source,
            })?;

        Ok(ChildExit::from(status))
    }
}

/// Keeps terminal interrupts from killing the dispatcher while a child runs.
///
/// Ctrl-C reaches the whole foreground process group. While the guard is alive the
/// dispatcher absorbs `SIGINT` and `SIGQUIT`, so the child alone decides how the run ends.
/// Caught handlers reset to the default action across `exec`, so the child is unaffected.
#[cfg(unix)]
struct InterruptGuard {
    /// Registered handler ids, removed on drop.
    ids: Vec<SigId>,
}

#[cfg(unix)]
impl InterruptGuard {
    /// Installs handlers for the terminal interrupt signals.
    fn install() -> io::Result<Self> {
        let received = Arc::new(AtomicBool::new(false));
        let mut guard = Self { ids: Vec::new() };
        for signal in [SIGINT, SIGQUIT] {
            guard
                .ids
                .push(flag::register(signal, Arc::clone(&received))?);
        }
        Ok(guard)
    }
}

#[cfg(unix)]
impl Drop for InterruptGuard {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            low_level::unregister(id);
        }
    }
}
