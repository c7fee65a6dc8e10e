//! `beads-records` - read-only access to a beads issue log.
//!
//! Parses `.beads/issues.jsonl` into typed [`Issue`] records and offers the
//! small set of queries the fallback reader needs. Nothing in this crate
//! writes to disk.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use beads_records::{ListFilters, jsonl, query};
//!
//! let issues = jsonl::load(Path::new(".beads/issues.jsonl")).unwrap();
//! let open = query::list_issues(&issues, &ListFilters::with_status("open"));
//! let first = query::find_issue(&issues, "bd-abc123");
//! ```

pub mod error;
pub mod jsonl;
pub mod model;
pub mod query;

pub use error::{BeadsError, Result};
pub use model::{Dependency, DependencyType, Issue, IssueType, Priority, Status};
pub use query::ListFilters;
