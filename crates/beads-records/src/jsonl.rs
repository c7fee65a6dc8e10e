//! JSONL file reading for beads issue logs.
//!
//! Each non-blank line in the file is one complete `Issue`.

use std::fs;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::{BeadsError, Result};
use crate::model::Issue;

/// Load issues from a JSONL file, in file order.
///
/// A missing file is an empty log, not an error. Blank and whitespace-only
/// lines are skipped.
///
/// # Errors
///
/// Returns `Io` if the file exists but cannot be read, or `MalformedRecord`
/// for the first line that is not a valid issue.
pub fn load(path: &Path) -> Result<Vec<Issue>> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No issue log at {}; treating as empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(BeadsError::Io(e)),
    };

    let issues = parse_lines(BufReader::new(file))?;
    tracing::debug!("Loaded {} issue(s) from {}", issues.len(), path.display());
    Ok(issues)
}

/// Parse issues from any line-oriented reader.
///
/// # Errors
///
/// Returns `Io` on read failure or `MalformedRecord` for an invalid line.
pub fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let issue: Issue = serde_json::from_str(trimmed)
            .map_err(|e| BeadsError::malformed(line_num + 1, trimmed, e.to_string()))?;
        issues.push(issue);
    }

    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Status};

    const CHESS_1: &str =
        r#"{"id":"chess-1","title":"Fix bug","status":"closed","priority":1}"#;
    const CHESS_2: &str = r#"{"id":"chess-2","title":"Add castling","status":"open"}"#;

    fn write_log(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("issues.jsonl");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let issues = load(&dir.path().join("nope/issues.jsonl")).unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let (_dir, path) = write_log("");
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_single_record() {
        let (_dir, path) = write_log(&format!("{CHESS_1}\n"));
        let issues = load(&path).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "chess-1");
        assert_eq!(issues[0].title.as_deref(), Some("Fix bug"));
        assert_eq!(issues[0].status, Some(Status::Closed));
        assert_eq!(issues[0].priority, Some(Priority::HIGH));
    }

    #[test]
    fn test_load_preserves_file_order() {
        let (_dir, path) = write_log(&format!("{CHESS_2}\n{CHESS_1}\n"));
        let ids: Vec<String> = load(&path).unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["chess-2", "chess-1"]);
    }

    #[test]
    fn test_load_no_trailing_newline() {
        let (_dir, path) = write_log(CHESS_1);
        assert_eq!(load(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_blank_padding_does_not_change_result() {
        for body in [
            String::new(),
            CHESS_1.to_string(),
            format!("{CHESS_1}\n{CHESS_2}"),
        ] {
            let padded: String = body
                .lines()
                .map(|line| format!("\n   \n{line}\n\t\n"))
                .collect();
            let (_a, plain) = write_log(&body);
            let (_b, with_blanks) = write_log(&format!("\n{padded}\n\n"));
            assert_eq!(load(&plain).unwrap(), load(&with_blanks).unwrap());
        }
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let (_dir, path) = write_log(&format!("{CHESS_1}\n\n{{not json\n{CHESS_2}\n"));
        let err = load(&path).unwrap_err();
        match err {
            BeadsError::MalformedRecord { line, content, .. } => {
                assert_eq!(line, 3);
                assert_eq!(content, "{not json");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_record_without_id_loads() {
        let (_dir, path) = write_log(&format!("{CHESS_1}\n{{\"title\":\"orphan\",\"status\":\"open\"}}\n"));
        let issues = load(&path).unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[1].id, "");
        assert_eq!(issues[1].title.as_deref(), Some("orphan"));
    }

    #[test]
    fn test_non_object_line_is_malformed() {
        let (_dir, path) = write_log("42\n");
        assert!(matches!(
            load(&path),
            Err(BeadsError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_lines_from_reader() {
        let input = format!("{CHESS_1}\n   \n{CHESS_2}\n");
        let issues = parse_lines(input.as_bytes()).unwrap();
        assert_eq!(issues.len(), 2);
    }
}
