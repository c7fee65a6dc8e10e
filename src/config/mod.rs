//! Path configuration for `bdr`.
//!
//! The issue log lives at a fixed location relative to the project root:
//! `<repo>/.beads/issues.jsonl`. The root defaults to the current directory
//! and can be overridden with `--repo`. There is no config file and no
//! environment lookup.

use std::path::{Path, PathBuf};

/// Workspace directory holding beads data.
pub const BEADS_DIR: &str = ".beads";

/// Issue log file name inside [`BEADS_DIR`].
pub const ISSUES_FILE: &str = "issues.jsonl";

/// Global CLI options that affect where data is read from.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub repo: Option<PathBuf>,
}

/// Resolve the project root.
///
/// Existing directories are canonicalized; a missing one is returned as
/// given so the loader can report an empty log.
#[must_use]
pub fn resolve_repo_root(repo: Option<&Path>) -> PathBuf {
    let root = repo.unwrap_or_else(|| Path::new("."));
    dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf())
}

/// Full path of the issue log for these overrides.
#[must_use]
pub fn issues_path(cli: &CliOverrides) -> PathBuf {
    let path = resolve_repo_root(cli.repo.as_deref())
        .join(BEADS_DIR)
        .join(ISSUES_FILE);
    tracing::debug!("Issue log path: {}", path.display());
    path
}
