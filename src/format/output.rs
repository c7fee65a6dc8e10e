use std::collections::BTreeMap;

use beads_records::Issue;
use serde::Serialize;

use super::view::IssueView;

/// Aggregate statistics for `stats`.
///
/// Both groupings are keyed by the displayed value (so a missing status
/// counts as `unknown` and a missing type as `task`), and each sums to
/// `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_type: BTreeMap<String, usize>,
}

impl Statistics {
    #[must_use]
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut stats = Self::default();
        for view in issues.iter().map(IssueView::from) {
            stats.total += 1;
            *stats.by_status.entry(view.status.to_string()).or_default() += 1;
            *stats.by_type.entry(view.issue_type.to_string()).or_default() += 1;
        }
        stats
    }
}
