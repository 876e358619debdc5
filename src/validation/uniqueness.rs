//! Row uniqueness
//!
//! Only rows are scanned here. Columns are checked for repeated heights by
//! [`super::visibility::check_columns`], and only when they carry a hint;
//! a column without a hint on either end is never checked.

use std::collections::HashSet;

use crate::parser::Grid;
use crate::validation::engine::Violation;
use crate::validation::line::{Line, LineRef};

/// Every interior row holds pairwise-distinct heights
///
/// Unresolved cells are not compared; [`super::completion`] reports them.
pub fn check_row_uniqueness(grid: &Grid) -> Result<(), Violation> {
    for row in grid.interior() {
        let mut seen = HashSet::new();
        let duplicate = grid
            .interior_row(row)
            .iter()
            .filter_map(|cell| cell.height())
            .find(|height| !seen.insert(*height));

        if let Some(height) = duplicate {
            log::debug!("height {height} repeats in row {row}");
            return Err(Violation::DuplicateHeight {
                line: LineRef::Row(row),
                height,
            });
        }
    }
    Ok(())
}

/// Whether no interior row repeats a height
pub fn rows_unique(grid: &Grid) -> bool {
    check_row_uniqueness(grid).is_ok()
}

/// Fail when `line` repeats a height
pub(crate) fn require_distinct(line: &Line, line_ref: LineRef) -> Result<(), Violation> {
    match line.first_duplicate() {
        Some(height) => {
            log::debug!("height {height} repeats in {line_ref}");
            Err(Violation::DuplicateHeight {
                line: line_ref,
                height,
            })
        }
        None => Ok(()),
    }
}
