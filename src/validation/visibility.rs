//! Visibility checks for rows and columns
//!
//! Every present hint must equal the number of buildings visible from its
//! border. A hint-less border imposes nothing.

use crate::parser::{Grid, Side};
use crate::validation::engine::Violation;
use crate::validation::line::{Line, LineRef};
use crate::validation::uniqueness::require_distinct;

/// Left and right hints of every interior row
pub fn check_row_visibility(grid: &Grid) -> Result<(), Violation> {
    for row in grid.interior() {
        let left = grid.hint(Side::Left, row);
        let right = grid.hint(Side::Right, row);
        if left.is_none() && right.is_none() {
            continue;
        }

        let line = LineRef::Row(row).read(grid)?;
        if let Some(hint) = left {
            expect_visible(&line, Side::Left, row, hint)?;
        }
        if let Some(hint) = right {
            expect_visible(&line.reversed(), Side::Right, row, hint)?;
        }
    }
    Ok(())
}

/// Whether every row hint matches its visible count
pub fn rows_visible(grid: &Grid) -> bool {
    check_row_visibility(grid).is_ok()
}

/// Top and bottom hints of every interior column
///
/// A hinted column must also hold distinct heights; it is checked once per
/// hinted end.
pub fn check_columns(grid: &Grid) -> Result<(), Violation> {
    for column in grid.interior() {
        let line_ref = LineRef::Column(column);

        if let Some(hint) = grid.hint(Side::Top, column) {
            let line = line_ref.read(grid)?;
            require_distinct(&line, line_ref)?;
            expect_visible(&line, Side::Top, column, hint)?;
        }

        if let Some(hint) = grid.hint(Side::Bottom, column) {
            let line = line_ref.read(grid)?.reversed();
            require_distinct(&line, line_ref)?;
            expect_visible(&line, Side::Bottom, column, hint)?;
        }
    }
    Ok(())
}

/// Whether every hinted column is distinct and matches its hints
pub fn columns_valid(grid: &Grid) -> bool {
    check_columns(grid).is_ok()
}

fn expect_visible(line: &Line, side: Side, index: usize, hint: u8) -> Result<(), Violation> {
    if line.scan_visible(hint) {
        return Ok(());
    }

    let visible = line.visible_count();
    log::debug!("{side} hint {hint} at index {index}: {visible} visible");
    Err(Violation::VisibilityMismatch {
        side,
        index,
        hint,
        visible,
    })
}
