//! Command-line interface for `bdr`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::ffi::OsString;
use std::path::Path;

use anyhow::{Context, Result};
use beads_records::{Issue, jsonl};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Args, Parser, Subcommand};

use crate::config::{self, CliOverrides};
use crate::error::CliError;
use crate::logging;

/// Usage line for `show` when the id is missing.
pub const SHOW_USAGE: &str = "bdr show <issue-id>";

/// `bdr` - read-only fallback reader for beads issue logs.
#[derive(Parser, Debug)]
#[command(name = "bdr")]
#[command(disable_help_subcommand = true)]
#[command(
    author,
    version,
    about = "Read-only fallback reader for beads issue logs (.beads/issues.jsonl)",
    long_about = None,
    after_help = "Read-only: bdr never writes to the issue log."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Project directory containing .beads/ (default: current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub repo: Option<std::path::PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run; shows the quickstart when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List issues
    List(ListArgs),

    /// Show issue details
    Show(ShowArgs),

    /// Stats summary
    Stats,

    /// Show the quickstart help
    Quickstart,

    /// Anything else; rejected with the list of valid commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Arguments for `list`.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only show issues with exactly this status (case-sensitive)
    #[arg(long)]
    pub status: Option<String>,
}

/// Arguments for `show`.
#[derive(Args, Debug, Clone, Default)]
pub struct ShowArgs {
    /// Issue ID to display
    pub id: Option<String>,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the arguments do not parse, logging cannot be set
/// up, an argument is missing, the command is unknown, or the issue log is
/// malformed.
pub fn run() -> Result<()> {
    let args: Vec<OsString> = std::env::args_os().collect();
    let cli = parse_cli(&args)?;
    logging::init_logging(cli.verbose, cli.quiet)?;

    let overrides = CliOverrides {
        repo: cli.repo.clone(),
    };
    dispatch(cli.command, cli.json, &overrides)
}

/// Parse the full argument vector, program name included.
///
/// `--help` and `--version` print and exit 0. Any other clap failure is
/// returned so it exits 1 like every other error.
fn parse_cli(args: &[OsString]) -> std::result::Result<Cli, CliError> {
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => parse_error(&e, args.get(1)),
    })
}

/// An unrecognised flag in command position is reported like an unknown
/// command; anything else keeps clap's explanation.
fn parse_error(err: &clap::Error, leading: Option<&OsString>) -> CliError {
    if err.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
            if leading.and_then(|word| word.to_str()) == Some(arg.as_str()) {
                return CliError::UnknownCommand {
                    command: arg.clone(),
                };
            }
        }
    }

    let message = err.to_string();
    let message = message.strip_prefix("error: ").unwrap_or(&message);
    CliError::Arguments(message.trim_end().to_string())
}

/// Route a parsed command to its implementation.
///
/// # Errors
///
/// See [`run`].
pub fn dispatch(command: Option<Commands>, json: bool, overrides: &CliOverrides) -> Result<()> {
    let Some(command) = command else {
        commands::quickstart::execute();
        return Ok(());
    };
    tracing::info!("Running {} command", command.name());

    match command {
        Commands::Quickstart => commands::quickstart::execute(),
        Commands::List(args) => {
            let issues = load_issues(overrides)?;
            commands::list::execute(&args, &issues, json)?;
        }
        Commands::Show(args) => {
            let id = args.id.ok_or_else(|| CliError::usage(SHOW_USAGE))?;
            let issues = load_issues(overrides)?;
            commands::show::execute(&id, &issues, json)?;
        }
        Commands::Stats => {
            let issues = load_issues(overrides)?;
            commands::stats::execute(&issues, json)?;
        }
        Commands::Unknown(words) => {
            let command = words.into_iter().next().unwrap_or_default();
            return Err(CliError::UnknownCommand { command }.into());
        }
    }

    Ok(())
}

fn load_issues(overrides: &CliOverrides) -> Result<Vec<Issue>> {
    let path = config::issues_path(overrides);
    read_log(&path)
}

fn read_log(path: &Path) -> Result<Vec<Issue>> {
    jsonl::load(path)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to load issues from {}", path.display()))
}

impl Commands {
    fn name(&self) -> &str {
        match self {
            Self::List(_) => "list",
            Self::Show(_) => "show",
            Self::Stats => "stats",
            Self::Quickstart => "quickstart",
            Self::Unknown(words) => words.first().map_or("", String::as_str),
        }
    }
}
