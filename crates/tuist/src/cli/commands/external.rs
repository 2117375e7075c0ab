//! Execution of external tasks.

use std::{env, process::ExitCode};

use crate::cli::{context::CommandContext, output::report_error};

/// Resolves `args[0]` to a task executable and runs it, mirroring its exit status.
pub fn run(ctx: &CommandContext, args: Vec<String>) -> ExitCode {
    let self_binary = match env::current_exe() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: could not determine tuist binary path: {e}");
            return ExitCode::FAILURE;
        }
    };

    match ctx.dispatcher.run(args, &self_binary) {
        Ok(exit) => ExitCode::from(exit.exit_code()),
        Err(e) => report_error(&e),
    }
}
