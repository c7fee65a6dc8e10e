//! Logging setup for `bdr`.
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only rendered
//! output. The filter is built from CLI flags alone, never from the
//! environment.

use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{CliError, Result};

/// Map `-v` count and `--quiet` to a filter directive.
#[must_use]
pub fn level_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns `Logging` if the directive is rejected or a subscriber is already set.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_new(level_directive(verbose, quiet))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
