//! Quickstart command implementation.

/// Static help shown with no arguments or by `bdr quickstart`.
pub const QUICKSTART: &str = "
============================================================
Beads Quickstart (Reader Mode)
============================================================

bdr reads beads issues directly from the .beads/issues.jsonl
file. Use it where the full 'bd' CLI is not available.

Available commands:
  bdr list                - List all issues
  bdr list --status open  - List open issues
  bdr show <issue-id>     - Show issue details
  bdr stats               - Show statistics
  bdr quickstart          - Show this help

Global options:
  --json                  - Machine-readable output
  --repo <PATH>           - Project directory containing .beads/

bdr is read-only. To create or update issues, use the full
'bd' CLI or edit .beads/issues.jsonl by hand (one JSON object
per line).
============================================================
";

/// Execute the quickstart command.
pub fn execute() {
    println!("{QUICKSTART}");
}
