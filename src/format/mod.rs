//! Output formatting for `bdr`.
//!
//! Human-readable text layouts plus the serializable payloads used by
//! `--json`. Every renderer works from an [`IssueView`], which is where
//! missing fields get their defaults.

mod output;
mod text;
mod view;

pub use output::Statistics;
pub use text::{
    NO_ISSUES, format_issue_details, format_issue_line, format_issue_list, format_not_found,
    format_statistics, format_status_icon, icons, pad_left, pad_right,
};
pub use view::{DependencyView, IssueView, defaults};
