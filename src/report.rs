//! Per-board reports for the command-line driver.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::parser::Markers;
use crate::validation::{validate_file, Violation};

/// Outcome of checking one board file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardReport {
    pub path: PathBuf,
    pub compliant: bool,
    pub violation: Option<Violation>,
    /// Set when the board could not be read or parsed
    pub error: Option<String>,
}

impl BoardReport {
    pub fn check(path: &Path, markers: &Markers) -> Self {
        match validate_file(path, markers) {
            Ok(result) => Self {
                path: path.to_path_buf(),
                compliant: result.is_valid(),
                violation: result.violation,
                error: None,
            },
            Err(e) => {
                log::warn!("skipping {}: {}", path.display(), e);
                Self {
                    path: path.to_path_buf(),
                    compliant: false,
                    violation: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn is_fault(&self) -> bool {
        self.error.is_some()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Text => {
                let path = self.path.display();
                Ok(match (&self.error, &self.violation) {
                    (Some(error), _) => format!("{path}: error: {error}"),
                    (None, Some(violation)) => format!("{path}: false ({violation})"),
                    (None, None) => format!("{path}: {}", self.compliant),
                })
            }
        }
    }
}

/// Process exit status for a batch: 0 all compliant, 1 some board fails the
/// rules, 2 some board could not be read
pub fn exit_status(reports: &[BoardReport]) -> u8 {
    if reports.iter().any(BoardReport::is_fault) {
        2
    } else if reports.iter().any(|r| !r.compliant) {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::LineRef;

    fn report(compliant: bool, violation: Option<Violation>, error: Option<&str>) -> BoardReport {
        BoardReport {
            path: PathBuf::from("board.txt"),
            compliant,
            violation,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            report(true, None, None).render(OutputFormat::Text).unwrap(),
            "board.txt: true"
        );

        let failed = report(
            false,
            Some(Violation::DuplicateHeight {
                line: LineRef::Row(1),
                height: 5,
            }),
            None,
        );
        assert_eq!(
            failed.render(OutputFormat::Text).unwrap(),
            "board.txt: false (height 5 repeats in row 1)"
        );

        let broken = report(false, None, Some("board is empty"));
        assert_eq!(
            broken.render(OutputFormat::Text).unwrap(),
            "board.txt: error: board is empty"
        );
    }

    #[test]
    fn test_render_json() {
        let json = report(true, None, None).render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["path"], "board.txt");
        assert_eq!(value["compliant"], true);
        assert!(value["violation"].is_null());
        assert!(value["error"].is_null());
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&[report(true, None, None)]), 0);
        assert_eq!(
            exit_status(&[
                report(true, None, None),
                report(false, Some(Violation::Unfinished { row: 1, column: 1 }), None)
            ]),
            1
        );
        assert_eq!(
            exit_status(&[
                report(false, Some(Violation::Unfinished { row: 1, column: 1 }), None),
                report(false, None, Some("board is empty"))
            ]),
            2
        );
    }

    #[test]
    fn test_check_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let r = BoardReport::check(&dir.path().join("nope.txt"), &Markers::default());
        assert!(r.is_fault());
        assert!(!r.compliant);
    }
}
