//! Stats command implementation.

use beads_records::Issue;

use crate::error::Result;
use crate::format::{Statistics, format_statistics};

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(issues: &[Issue], json: bool) -> Result<()> {
    let stats = Statistics::from_issues(issues);
    if json {
        let output = serde_json::to_string_pretty(&stats)?;
        println!("{output}");
    } else {
        print!("{}", format_statistics(&stats));
    }
    Ok(())
}

/// Render the statistics block for `issues`.
#[must_use]
pub fn render(issues: &[Issue]) -> String {
    format_statistics(&Statistics::from_issues(issues))
}
