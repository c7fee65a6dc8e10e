//! Error types for the `bdr` binary.
//!
//! Loader failures come from [`beads_records::BeadsError`]; this layer adds
//! the command-line failure kinds. Every variant ends the process with exit
//! status 1.

use thiserror::Error;

/// Commands `bdr` accepts, as listed in error messages.
pub const AVAILABLE_COMMANDS: &str = "list, show, stats, quickstart";

#[derive(Error, Debug)]
pub enum CliError {
    /// Loading the issue log failed.
    #[error(transparent)]
    Records(#[from] beads_records::BeadsError),

    /// A required argument was not supplied.
    #[error("Usage: {usage}")]
    Usage { usage: String },

    /// The first argument is not a known command.
    #[error("Unknown command: {command}\nAvailable commands: {}", AVAILABLE_COMMANDS)]
    UnknownCommand { command: String },

    /// Arguments clap could not parse, with clap's explanation.
    #[error("{0}")]
    Arguments(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl CliError {
    #[must_use]
    pub fn usage(usage: impl Into<String>) -> Self {
        Self::Usage {
            usage: usage.into(),
        }
    }
}

/// Result type using `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
