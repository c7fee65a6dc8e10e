//! Show command implementation.

use beads_records::{Issue, query};

use crate::error::Result;
use crate::format::{IssueView, format_issue_details, format_not_found};

/// Execute the show command.
///
/// An unknown id is reported on stdout and is not an error.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(id: &str, issues: &[Issue], json: bool) -> Result<()> {
    match query::find_issue(issues, id) {
        Some(issue) if json => {
            let output = serde_json::to_string_pretty(issue)?;
            println!("{output}");
        }
        _ => print!("{}", render(issues, id)),
    }
    Ok(())
}

/// Render the detail block for `id`, or the not-found message.
#[must_use]
pub fn render(issues: &[Issue], id: &str) -> String {
    query::find_issue(issues, id).map_or_else(
        || format_not_found(id),
        |issue| format_issue_details(&IssueView::from(issue)),
    )
}
