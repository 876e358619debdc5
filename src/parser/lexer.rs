//! Board Lexer
//!
//! Classifies single characters of a board row into cells.

/// Default character for an unresolved cell
pub const DEFAULT_UNFINISHED: char = '?';

/// Default character for a border position without a hint
pub const DEFAULT_FILLER: char = '*';

/// A single position of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Building height in the interior, visibility hint on the border
    Height(u8),
    /// Not yet resolved
    Unfinished,
    /// Border filler, or a corner
    Blank,
}

impl Cell {
    /// Height or hint value, `None` for markers
    pub fn height(self) -> Option<u8> {
        match self {
            Cell::Height(h) => Some(h),
            Cell::Unfinished | Cell::Blank => None,
        }
    }

    /// Whether the cell still holds the unfinished marker
    pub fn is_unfinished(self) -> bool {
        matches!(self, Cell::Unfinished)
    }
}

/// The two non-digit characters a board file uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub unfinished: char,
    pub filler: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            unfinished: DEFAULT_UNFINISHED,
            filler: DEFAULT_FILLER,
        }
    }
}

/// Classify a character, `None` if it is outside the board alphabet
///
/// Only `1`-`9` are heights; `0` is never a valid height or hint.
pub fn classify_cell(ch: char, markers: &Markers) -> Option<Cell> {
    match ch {
        '1'..='9' => Some(Cell::Height(ch as u8 - b'0')),
        c if c == markers.unfinished => Some(Cell::Unfinished),
        c if c == markers.filler => Some(Cell::Blank),
        _ => None,
    }
}
