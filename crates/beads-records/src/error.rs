//! Error types for `beads-records`.

use thiserror::Error;

/// Longest slice of an offending line kept in a [`BeadsError::MalformedRecord`].
pub const PREVIEW_CHARS: usize = 80;

/// Primary error type for record loading.
#[derive(Error, Debug)]
pub enum BeadsError {
    /// A non-blank line of the log is not a valid issue record.
    #[error("Malformed record at line {line}: {reason} (content: {content})")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BeadsError {
    /// Build a `MalformedRecord` error, keeping only a bounded preview of the line.
    #[must_use]
    pub fn malformed(line: usize, content: &str, reason: impl Into<String>) -> Self {
        let mut preview: String = content.chars().take(PREVIEW_CHARS).collect();
        if content.chars().count() > PREVIEW_CHARS {
            preview.push('…');
        }
        Self::MalformedRecord {
            line,
            content: preview,
            reason: reason.into(),
        }
    }
}

/// Result type using `BeadsError`.
pub type Result<T> = std::result::Result<T, BeadsError>;
