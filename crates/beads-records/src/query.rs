//! Query and filter helpers over a loaded issue log.

use crate::model::Issue;

/// Filter options for listing issues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    /// Exact, case-sensitive status match. Issues without a status never match.
    pub status: Option<String>,
}

impl ListFilters {
    #[must_use]
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }

    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        self.status
            .as_deref()
            .is_none_or(|wanted| issue.status_str() == Some(wanted))
    }
}

/// Select issues matching `filters`, sorted by id ascending.
///
/// The sort is stable: issues sharing an id keep their file order.
#[must_use]
pub fn list_issues<'a>(issues: &'a [Issue], filters: &ListFilters) -> Vec<&'a Issue> {
    let mut selected: Vec<&Issue> = issues.iter().filter(|i| filters.matches(i)).collect();
    selected.sort_by(|a, b| a.id.cmp(&b.id));
    selected
}

/// First issue whose id equals `id` exactly.
#[must_use]
pub fn find_issue<'a>(issues: &'a [Issue], id: &str) -> Option<&'a Issue> {
    issues.iter().find(|issue| issue.id == id)
}
