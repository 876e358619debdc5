//! Faults raised while loading a board
//!
//! Rule violations are not errors: they are reported through
//! [`crate::validation::ValidationResult`]. Only input that cannot be turned
//! into a square bordered grid ends up here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("cannot read board {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("board is empty")]
    Empty,

    #[error("board has {size} rows, need at least 3")]
    TooSmall { size: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("board is {rows}x{columns}, expected a square")]
    NotSquare { rows: usize, columns: usize },

    #[error("unknown character {ch:?} at row {row}, column {column}")]
    UnknownCell { row: usize, column: usize, ch: char },

    #[error("border filler at interior position row {row}, column {column}")]
    FillerInInterior { row: usize, column: usize },
}
