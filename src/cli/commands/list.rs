//! List command implementation.
//!
//! Status-filtered, id-sorted one-line summaries, or a JSON array with
//! `--json`.

use beads_records::{Issue, ListFilters, query};

use crate::cli::ListArgs;
use crate::error::Result;
use crate::format::{IssueView, format_issue_list};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: &ListArgs, issues: &[Issue], json: bool) -> Result<()> {
    let filters = build_filters(args);

    if json {
        let selected = query::list_issues(issues, &filters);
        let output = serde_json::to_string_pretty(&selected)?;
        println!("{output}");
    } else {
        print!("{}", render(issues, &filters));
    }

    Ok(())
}

/// Render the text listing for `issues` under `filters`.
#[must_use]
pub fn render(issues: &[Issue], filters: &ListFilters) -> String {
    let views: Vec<IssueView<'_>> = query::list_issues(issues, filters)
        .into_iter()
        .map(IssueView::from)
        .collect();
    format_issue_list(&views)
}

/// Convert CLI args to a record filter. An empty `--status` means no filter.
fn build_filters(args: &ListArgs) -> ListFilters {
    ListFilters {
        status: args.status.clone().filter(|s| !s.is_empty()),
    }
}
