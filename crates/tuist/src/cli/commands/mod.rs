//! Command implementations and dispatch.

pub mod config;
pub mod external;
pub mod tasks;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Tasks(cmd) => tasks::run(ctx, &cmd),
        Commands::Config(cmd) => config::run(ctx, &cmd),
        Commands::External(args) => external::run(ctx, args),
    }
}
