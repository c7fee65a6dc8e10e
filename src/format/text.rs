//! Text formatting functions for `bdr`.
//!
//! Plain (non-ANSI) layouts for terminal output:
//! - Status icons (○ ◐ ●, `?` for anything else)
//! - One-line issue summaries for `list`
//! - The bordered detail block for `show`
//! - The statistics block for `stats`

use beads_records::Status;
use unicode_width::UnicodeWidthStr;

use super::output::Statistics;
use super::view::IssueView;

/// Printed by `list` and `stats` when there is nothing to show.
pub const NO_ISSUES: &str = "No issues found.";

const ID_WIDTH: usize = 12;
const TYPE_WIDTH: usize = 8;
const DETAIL_RULE_WIDTH: usize = 60;
const STATS_RULE_WIDTH: usize = 40;
const STATS_KEY_WIDTH: usize = 12;
const STATS_COUNT_WIDTH: usize = 3;

/// Status icon characters.
pub mod icons {
    /// Open issue (hollow circle).
    pub const OPEN: &str = "○";
    /// In progress (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Closed (filled circle).
    pub const CLOSED: &str = "●";
    /// Any other status, including a missing one.
    pub const UNKNOWN: &str = "?";
}

/// Return the icon for a status.
///
/// Only `open`, `in_progress` and `closed` have icons of their own; every
/// other value, known to beads or not, maps to [`icons::UNKNOWN`].
#[must_use]
pub const fn format_status_icon(status: Option<&Status>) -> &'static str {
    match status {
        Some(Status::Open) => icons::OPEN,
        Some(Status::InProgress) => icons::IN_PROGRESS,
        Some(Status::Closed) => icons::CLOSED,
        Some(
            Status::Blocked
            | Status::Deferred
            | Status::Tombstone
            | Status::Pinned
            | Status::Custom(_),
        )
        | None => icons::UNKNOWN,
    }
}

/// Left-align `value` in a column of `width` terminal cells. Never truncates.
#[must_use]
pub fn pad_right(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.width());
    format!("{value}{}", " ".repeat(fill))
}

/// Right-align `value` in a column of `width` terminal cells. Never truncates.
#[must_use]
pub fn pad_left(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.width());
    format!("{}{value}", " ".repeat(fill))
}

/// Format a single-line issue summary.
///
/// Format: `{icon} {id:12} [P{priority}] [{type:8}] {title}`
#[must_use]
pub fn format_issue_line(view: &IssueView<'_>) -> String {
    format!(
        "{} {} [P{}] [{}] {}",
        format_status_icon(view.status_kind),
        pad_right(view.id, ID_WIDTH),
        view.priority,
        pad_right(view.issue_type, TYPE_WIDTH),
        view.title,
    )
}

/// Format the lines of a listing, or the empty-result notice.
#[must_use]
pub fn format_issue_list(views: &[IssueView<'_>]) -> String {
    if views.is_empty() {
        return format!("{NO_ISSUES}\n");
    }
    let mut out = String::new();
    for view in views {
        out.push_str(&format_issue_line(view));
        out.push('\n');
    }
    out
}

/// Format the bordered detail block for one issue.
#[must_use]
pub fn format_issue_details(view: &IssueView<'_>) -> String {
    let rule = "=".repeat(DETAIL_RULE_WIDTH);
    let mut out = format!("\n{rule}\nIssue: {}\n{rule}\n", view.id);

    out.push_str(&format!("Title:       {}\n", view.title));
    out.push_str(&format!("Status:      {}\n", view.status));
    out.push_str(&format!("Priority:    {}\n", view.priority));
    out.push_str(&format!("Type:        {}\n", view.issue_type));
    out.push_str(&format!("Created:     {}\n", view.created_at));
    out.push_str(&format!("Updated:     {}\n", view.updated_at));

    if let Some(closed_at) = view.closed_at {
        out.push_str(&format!("Closed:      {closed_at}\n"));
    }
    if let Some(description) = view.description {
        out.push_str(&format!("\nDescription:\n{description}\n"));
    }
    if let Some(notes) = view.notes {
        out.push_str(&format!("\nNotes:\n{notes}\n"));
    }
    if !view.dependencies.is_empty() {
        out.push_str("\nDependencies:\n");
        for dep in &view.dependencies {
            out.push_str(&format!("  - {}: {}\n", dep.dep_type, dep.depends_on_id));
        }
    }

    out.push_str(&format!("{rule}\n\n"));
    out
}

/// Message printed by `show` for an id that is not in the log.
#[must_use]
pub fn format_not_found(id: &str) -> String {
    format!("Issue {id} not found.\n")
}

/// Format the statistics block, or the empty-log notice.
#[must_use]
pub fn format_statistics(stats: &Statistics) -> String {
    if stats.total == 0 {
        return format!("{NO_ISSUES}\n");
    }

    let rule = "=".repeat(STATS_RULE_WIDTH);
    let mut out = format!("\n{rule}\nBeads Statistics\n{rule}\n");
    out.push_str(&format!("Total issues: {}\n", stats.total));

    for (heading, counts) in [("By Status", &stats.by_status), ("By Type", &stats.by_type)] {
        out.push_str(&format!("\n{heading}:\n"));
        for (key, count) in counts {
            out.push_str(&format!(
                "  {} {}\n",
                pad_right(key, STATS_KEY_WIDTH),
                pad_left(&count.to_string(), STATS_COUNT_WIDTH)
            ));
        }
    }

    out.push_str(&format!("{rule}\n\n"));
    out
}
