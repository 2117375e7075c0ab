//! Command-line interface for the `tuist` tool.

use std::process::ExitCode;

use clap::Parser;
use tuist::cli::{CommandContext, args::Cli, commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match CommandContext::load(cli.verbose) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    logging::init(ctx.environment().verbose);

    commands::run(cli.command, &ctx)
}
