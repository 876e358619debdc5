//! Board Parser
//!
//! Turns board text into a typed [`Grid`]. Line handling matches the board
//! file format: trailing whitespace is dropped and blank lines are skipped.

pub mod grid;
pub mod lexer;

pub use grid::{Grid, Side};
pub use lexer::{classify_cell, Cell, Markers};

use crate::error::GridError;

/// Split board text into rows, skipping blank lines
pub fn split_rows(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse board text into a grid
///
/// This is the main entry point for in-memory boards; see
/// [`crate::reader::read_grid`] for files.
pub fn parse_grid(content: &str, markers: &Markers) -> Result<Grid, GridError> {
    let rows = split_rows(content);
    Grid::from_rows(&rows, markers)
}
