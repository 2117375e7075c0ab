//! Implementation of `tuist config`.

use std::process::ExitCode;

use tuist_config::PluginLocation;

use crate::cli::{args::PathArgs, context::CommandContext, output::report_error};

/// Shows effective settings and the declared plugins.
pub fn run(ctx: &CommandContext, cmd: &PathArgs) -> ExitCode {
    let root = ctx.project_root(cmd.path.as_deref());
    let config = match ctx.dispatcher.load_config(&root) {
        Ok(config) => config,
        Err(e) => return report_error(&e),
    };

    match &config.config_root {
        Some(dir) => println!("# config root: {}", dir.display()),
        None => println!("# no configuration file found, showing defaults"),
    }
    println!("# plugins dir: {}", config.plugins_dir.display());

    match config.settings_to_toml() {
        Ok(toml) => print!("{toml}"),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    if !config.plugins.is_empty() {
        println!();
        println!("# plugins");
        for plugin in &config.plugins {
            match &plugin.location {
                PluginLocation::Local { path } => {
                    println!("#   {} (local) {}", plugin.name, path.display());
                }
                PluginLocation::Git { url, reference } => {
                    println!("#   {} (git) {url} @ {reference}", plugin.name);
                }
            }
        }
    }

    ExitCode::SUCCESS
}
