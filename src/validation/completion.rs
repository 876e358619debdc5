//! Completion check: no unresolved cell anywhere on the board.

use crate::parser::Grid;
use crate::validation::engine::Violation;

/// Fail on the first unresolved cell, scanning row by row
pub fn check_completion(grid: &Grid) -> Result<(), Violation> {
    for (row, cells) in grid.rows().enumerate() {
        if let Some(column) = cells.iter().position(|cell| cell.is_unfinished()) {
            return Err(Violation::Unfinished { row, column });
        }
    }
    Ok(())
}

/// Whether no cell holds the unfinished marker
pub fn is_complete(grid: &Grid) -> bool {
    check_completion(grid).is_ok()
}
