//! Line scanning
//!
//! A line is the interior of one row or column, read in a viewing direction.
//! Visibility is always counted over the whole line: a building is visible
//! when it is strictly taller than every building before it.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::parser::lexer::DEFAULT_FILLER;
use crate::parser::Grid;
use crate::validation::engine::Violation;

/// Which row or column of the board a line was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "axis", content = "index", rename_all = "lowercase")]
pub enum LineRef {
    Row(usize),
    Column(usize),
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRef::Row(row) => write!(f, "row {row}"),
            LineRef::Column(column) => write!(f, "column {column}"),
        }
    }
}

impl LineRef {
    /// Read the interior heights, in reading order (left to right, top to
    /// bottom)
    ///
    /// Fails on the first unresolved cell.
    pub fn read(self, grid: &Grid) -> Result<Line, Violation> {
        let cells = match self {
            LineRef::Row(row) => grid.interior_row(row).to_vec(),
            LineRef::Column(column) => grid.interior_column(column),
        };

        let mut heights = Vec::with_capacity(cells.len());
        for (offset, cell) in cells.into_iter().enumerate() {
            let Some(height) = cell.height() else {
                let (row, column) = match self {
                    LineRef::Row(row) => (row, offset + 1),
                    LineRef::Column(column) => (offset + 1, column),
                };
                return Err(Violation::Unfinished { row, column });
            };
            heights.push(height);
        }

        Ok(Line { heights })
    }
}

/// Resolved interior heights in scan order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    heights: Vec<u8>,
}

impl Line {
    pub fn new(heights: impl Into<Vec<u8>>) -> Self {
        Self {
            heights: heights.into(),
        }
    }

    pub fn heights(&self) -> &[u8] {
        &self.heights
    }

    /// The same line seen from the opposite border
    pub fn reversed(&self) -> Self {
        let mut heights = self.heights.clone();
        heights.reverse();
        Self { heights }
    }

    pub fn visible_count(&self) -> usize {
        visible_count(&self.heights)
    }

    pub fn scan_visible(&self, pivot: u8) -> bool {
        scan_visible(&self.heights, pivot)
    }

    /// First height that occurs a second time, scanning in order
    pub fn first_duplicate(&self) -> Option<u8> {
        let mut seen = HashSet::with_capacity(self.heights.len());
        self.heights.iter().copied().find(|h| !seen.insert(*h))
    }
}

/// Number of buildings visible from the start of `heights`
pub fn visible_count(heights: &[u8]) -> usize {
    let mut tallest = 0;
    let mut visible = 0;
    for &height in heights {
        if height > tallest {
            tallest = height;
            visible += 1;
        }
    }
    visible
}

/// Whether exactly `pivot` buildings are visible from the start of `heights`
pub fn scan_visible(heights: &[u8], pivot: u8) -> bool {
    visible_count(heights) == usize::from(pivot)
}

/// Check a row written as its hint followed by the interior
///
/// The first character is the hint position and is skipped; `pivot` is the
/// value to compare against. A trailing filler border cell is ignored, so
/// both `"412453"` and `"412453*"` scan `1 2 4 5 3`. Any other character
/// outside `1`-`9`, the unfinished marker included, fails the check.
pub fn left_to_right_check(line: &str, pivot: u8) -> bool {
    let mut chars = line.chars();
    if chars.next().is_none() {
        return false;
    }
    let rest = chars.as_str();
    let rest = rest.strip_suffix(DEFAULT_FILLER).unwrap_or(rest);

    let heights: Option<Vec<u8>> = rest
        .chars()
        .map(|c| match c {
            '1'..='9' => Some(c as u8 - b'0'),
            _ => None,
        })
        .collect();

    heights.is_some_and(|heights| scan_visible(&heights, pivot))
}
