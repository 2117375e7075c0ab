//! Clap argument definitions for the `tuist` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "tuist")]
#[command(about = "Project tooling with pluggable tasks")]
#[command(after_help = "\
TASKS:
  Any other command runs an external task: `tuist <task>` executes a plugin
  binary named `tuist-<task>` from the project's plugins, or a `tuist-<task>`
  command installed on PATH. Plugin binaries take precedence.")]
pub struct Cli {
    /// Enable verbose output (also enabled by TUIST_VERBOSE=1)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Project directory selection shared by built-in commands.
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Project directory [default: current directory]
    #[arg(long, alias = "p")]
    pub path: Option<PathBuf>,
}

/// Arguments for `tuist tasks`.
#[derive(Args, Debug, Clone, Default)]
pub struct TasksCommand {
    #[command(flatten)]
    /// Project directory selection.
    pub path: PathArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Supported `tuist` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List tasks provided by plugins and installed commands
    Tasks(TasksCommand),

    /// Show effective settings and declared plugins
    Config(PathArgs),

    /// Run an external task
    #[command(external_subcommand)]
    External(Vec<String>),
}
