//! Display view of an issue with every default filled in.
//!
//! All "what to show when a field is missing" decisions live here; the text
//! and JSON renderers only lay out an [`IssueView`].

use beads_records::{Dependency, Issue, Status};

/// Fallback values for absent fields.
pub mod defaults {
    pub const ID: &str = "unknown";
    pub const TITLE: &str = "No title";
    pub const STATUS: &str = "unknown";
    pub const PRIORITY: &str = "-";
    pub const ISSUE_TYPE: &str = "task";
    pub const TIMESTAMP: &str = "unknown";
    pub const DEPENDENCY_FIELD: &str = "unknown";
}

/// An issue ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueView<'a> {
    pub id: &'a str,
    pub title: &'a str,
    /// Typed status, kept for glyph lookup.
    pub status_kind: Option<&'a Status>,
    pub status: &'a str,
    pub priority: String,
    pub issue_type: &'a str,
    pub created_at: &'a str,
    pub updated_at: &'a str,
    /// Present only when the log has a non-empty value.
    pub closed_at: Option<&'a str>,
    pub description: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub dependencies: Vec<DependencyView<'a>>,
}

/// A dependency ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyView<'a> {
    pub dep_type: &'a str,
    pub depends_on_id: &'a str,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl<'a> From<&'a Issue> for IssueView<'a> {
    fn from(issue: &'a Issue) -> Self {
        Self {
            id: if issue.id.is_empty() {
                defaults::ID
            } else {
                issue.id.as_str()
            },
            title: issue.title.as_deref().unwrap_or(defaults::TITLE),
            status_kind: issue.status.as_ref(),
            status: issue.status_str().unwrap_or(defaults::STATUS),
            priority: issue
                .priority
                .map_or_else(|| defaults::PRIORITY.to_string(), |p| p.to_string()),
            issue_type: issue
                .issue_type
                .as_ref()
                .map_or(defaults::ISSUE_TYPE, |t| t.as_str()),
            created_at: issue.created_at.as_deref().unwrap_or(defaults::TIMESTAMP),
            updated_at: issue.updated_at.as_deref().unwrap_or(defaults::TIMESTAMP),
            closed_at: non_empty(issue.closed_at.as_ref()),
            description: non_empty(issue.description.as_ref()),
            notes: non_empty(issue.notes.as_ref()),
            dependencies: issue.dependencies.iter().map(DependencyView::from).collect(),
        }
    }
}

impl<'a> From<&'a Dependency> for DependencyView<'a> {
    fn from(dep: &'a Dependency) -> Self {
        Self {
            dep_type: dep
                .dep_type
                .as_ref()
                .map_or(defaults::DEPENDENCY_FIELD, |t| t.as_str()),
            depends_on_id: dep
                .depends_on_id
                .as_deref()
                .unwrap_or(defaults::DEPENDENCY_FIELD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beads_records::{DependencyType, IssueType, Priority};

    #[test]
    fn test_all_defaults() {
        let issue = Issue {
            id: "bd-1".to_string(),
            ..Default::default()
        };
        let view = IssueView::from(&issue);
        assert_eq!(view.id, "bd-1");
        assert_eq!(view.title, "No title");
        assert_eq!(view.status, "unknown");
        assert_eq!(view.status_kind, None);
        assert_eq!(view.priority, "-");
        assert_eq!(view.issue_type, "task");
        assert_eq!(view.created_at, "unknown");
        assert_eq!(view.updated_at, "unknown");
        assert_eq!(view.closed_at, None);
        assert_eq!(view.description, None);
        assert_eq!(view.notes, None);
        assert!(view.dependencies.is_empty());
    }

    #[test]
    fn test_present_fields_pass_through() {
        let issue = Issue {
            id: "chess-1".to_string(),
            title: Some("Fix bug".to_string()),
            status: Some(Status::Closed),
            priority: Some(Priority::HIGH),
            issue_type: Some(IssueType::Bug),
            created_at: Some("2025-01-01".to_string()),
            updated_at: Some("not-a-date".to_string()),
            closed_at: Some("2025-01-03".to_string()),
            description: Some("Pawn promotion".to_string()),
            notes: Some("See PR".to_string()),
            dependencies: vec![Dependency {
                dep_type: Some(DependencyType::Blocks),
                depends_on_id: Some("chess-0".to_string()),
                ..Default::default()
            }],
        };
        let view = IssueView::from(&issue);
        assert_eq!(view.title, "Fix bug");
        assert_eq!(view.status, "closed");
        assert_eq!(view.priority, "1");
        assert_eq!(view.issue_type, "bug");
        assert_eq!(view.updated_at, "not-a-date");
        assert_eq!(view.closed_at, Some("2025-01-03"));
        assert_eq!(view.description, Some("Pawn promotion"));
        assert_eq!(view.notes, Some("See PR"));
        assert_eq!(
            view.dependencies,
            vec![DependencyView {
                dep_type: "blocks",
                depends_on_id: "chess-0",
            }]
        );
    }

    #[test]
    fn test_empty_text_fields_are_hidden() {
        let issue = Issue {
            id: "bd-1".to_string(),
            closed_at: Some(String::new()),
            description: Some(String::new()),
            notes: Some(String::new()),
            ..Default::default()
        };
        let view = IssueView::from(&issue);
        assert_eq!(view.closed_at, None);
        assert_eq!(view.description, None);
        assert_eq!(view.notes, None);
    }

    #[test]
    fn test_missing_id_displays_unknown() {
        let issue = Issue {
            title: Some("orphan".to_string()),
            ..Default::default()
        };
        assert_eq!(IssueView::from(&issue).id, "unknown");
    }

    #[test]
    fn test_empty_title_is_kept() {
        let issue = Issue {
            id: "bd-1".to_string(),
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(IssueView::from(&issue).title, "");
    }

    #[test]
    fn test_dependency_defaults() {
        let dep = Dependency::default();
        let view = DependencyView::from(&dep);
        assert_eq!(view.dep_type, "unknown");
        assert_eq!(view.depends_on_id, "unknown");
    }
}
