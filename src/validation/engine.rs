//! Validation Engine
//!
//! Runs the board checks in a fixed order and stops at the first violation:
//! completion, row uniqueness, row visibility, then columns.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::GridError;
use crate::parser::{Grid, Markers, Side};
use crate::reader::read_grid;
use crate::validation::completion::check_completion;
use crate::validation::line::LineRef;
use crate::validation::uniqueness::check_row_uniqueness;
use crate::validation::visibility::{check_columns, check_row_visibility};

/// Why a board is not compliant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A cell still holds the unfinished marker
    Unfinished { row: usize, column: usize },
    /// A row, or a hinted column, repeats a height
    DuplicateHeight { line: LineRef, height: u8 },
    /// A hint disagrees with the number of visible buildings
    VisibilityMismatch {
        side: Side,
        index: usize,
        hint: u8,
        visible: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Unfinished { row, column } => {
                write!(f, "unresolved cell at row {row}, column {column}")
            }
            Violation::DuplicateHeight { line, height } => {
                write!(f, "height {height} repeats in {line}")
            }
            Violation::VisibilityMismatch {
                side,
                index,
                hint,
                visible,
            } => {
                let line = match side {
                    Side::Left | Side::Right => LineRef::Row(*index),
                    Side::Top | Side::Bottom => LineRef::Column(*index),
                };
                write!(
                    f,
                    "{side} hint {hint} on {line} but {visible} buildings are visible"
                )
            }
        }
    }
}

/// Result of validating a board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// First violation found; checks stop there
    pub violation: Option<Violation>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed(violation: Violation) -> Self {
        Self {
            violation: Some(violation),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }
}

/// Validate a board and report the first violation
pub fn validate_grid(grid: &Grid) -> ValidationResult {
    match run_checks(grid) {
        Ok(()) => ValidationResult::new(),
        Err(violation) => {
            log::debug!("board rejected: {violation}");
            ValidationResult::failed(violation)
        }
    }
}

fn run_checks(grid: &Grid) -> Result<(), Violation> {
    check_completion(grid)?;
    check_row_uniqueness(grid)?;
    check_row_visibility(grid)?;
    check_columns(grid)?;
    Ok(())
}

/// Whether a board satisfies every rule
pub fn check_grid(grid: &Grid) -> bool {
    validate_grid(grid).is_valid()
}

/// Load and validate a board file
pub fn validate_file(
    path: impl AsRef<Path>,
    markers: &Markers,
) -> Result<ValidationResult, GridError> {
    let grid = read_grid(path, markers)?;
    Ok(validate_grid(&grid))
}

/// Whether the board stored at `path` satisfies every rule
///
/// Rule violations give `Ok(false)`; only an unreadable or malformed file is
/// an error.
pub fn check_skyscrapers(path: impl AsRef<Path>, markers: &Markers) -> Result<bool, GridError> {
    validate_file(path, markers).map(|result| result.is_valid())
}
