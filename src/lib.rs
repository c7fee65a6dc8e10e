//! `beads_reader` - read-only fallback reader for beads issue logs
//!
//! This crate provides the `bdr` CLI, used where the full beads tracker is
//! not installed. It reads `.beads/issues.jsonl` and offers list, show and
//! stats views; it never writes.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap, plus the commands
//! - [`config`] - Issue log path resolution
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup
//!
//! Record parsing and queries live in the `beads-records` crate.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;

pub use error::{CliError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
