//! Bordered Board Grid
//!
//! Immutable square grid: one hint row/column on each side around the
//! interior heights. Built once from text and only read afterwards.

use std::ops::Range;

use serde::Serialize;

use crate::error::GridError;
use crate::parser::lexer::{classify_cell, Cell, Markers};

/// Border a hint is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid from rows of text
    ///
    /// Rows must form a square of side at least 3. Corners are stored as
    /// [`Cell::Blank`] whatever they contain.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], markers: &Markers) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        if rows.len() < 3 {
            return Err(GridError::TooSmall { size: rows.len() });
        }

        let expected = rows[0].as_ref().chars().count();
        for (row, line) in rows.iter().enumerate() {
            let found = line.as_ref().chars().count();
            if found != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found,
                });
            }
        }
        if expected != rows.len() {
            return Err(GridError::NotSquare {
                rows: rows.len(),
                columns: expected,
            });
        }

        let last = expected - 1;
        let mut cells = Vec::with_capacity(rows.len());
        for (row, line) in rows.iter().enumerate() {
            let mut parsed = Vec::with_capacity(expected);
            for (column, ch) in line.as_ref().chars().enumerate() {
                let on_row_border = row == 0 || row == last;
                let on_column_border = column == 0 || column == last;

                if on_row_border && on_column_border {
                    parsed.push(Cell::Blank);
                    continue;
                }

                let cell = classify_cell(ch, markers)
                    .ok_or(GridError::UnknownCell { row, column, ch })?;
                if cell == Cell::Blank && !on_row_border && !on_column_border {
                    return Err(GridError::FillerInInterior { row, column });
                }
                parsed.push(cell);
            }
            cells.push(parsed);
        }

        Ok(Self { cells })
    }

    /// Side length, borders included
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Indices of interior rows and columns
    pub fn interior(&self) -> Range<usize> {
        1..self.size() - 1
    }

    /// Cell at `row`, `column`, borders included
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// All rows top to bottom, borders included
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Interior cells of a row, left to right
    pub fn interior_row(&self, row: usize) -> &[Cell] {
        let last = self.size() - 1;
        &self.cells[row][1..last]
    }

    /// Interior cells of a column, top to bottom
    pub fn interior_column(&self, column: usize) -> Vec<Cell> {
        self.interior().map(|row| self.cells[row][column]).collect()
    }

    /// Hint on `side` for the interior row or column `index`
    ///
    /// Corners never yield a hint.
    pub fn hint(&self, side: Side, index: usize) -> Option<u8> {
        if !self.interior().contains(&index) {
            return None;
        }
        let last = self.size() - 1;
        let cell = match side {
            Side::Left => self.cells[index][0],
            Side::Right => self.cells[index][last],
            Side::Top => self.cells[0][index],
            Side::Bottom => self.cells[last][index],
        };
        cell.height()
    }
}
