//! Tracing setup for the binary.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Environment variable holding tracing filter directives.
pub const LOG_ENV: &str = "TUIST_LOG";

/// Installs a stderr subscriber.
///
/// Directives in `TUIST_LOG` take precedence; otherwise only warnings are shown, or debug
/// output when `verbose` is set.
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

/// Builds the filter for the requested verbosity.
fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(level)
    })
}
