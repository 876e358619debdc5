//! Board file reader
//!
//! Loads a board file from disk. Faults are reported as [`GridError`] so a
//! missing file never looks like an empty board.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::GridError;
use crate::parser::{Grid, Markers};

/// Read the non-blank rows of a board file, trailing whitespace removed
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<String>, GridError> {
    let path = path.as_ref();
    let unavailable = |source| GridError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let mut rows = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(unavailable)?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        rows.push(line.to_string());
    }

    log::debug!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read and parse a board file
pub fn read_grid(path: impl AsRef<Path>, markers: &Markers) -> Result<Grid, GridError> {
    let rows = read_rows(&path)?;
    let grid = Grid::from_rows(&rows, markers)?;
    log::debug!(
        "parsed {}x{} board from {}",
        grid.size(),
        grid.size(),
        path.as_ref().display()
    );
    Ok(grid)
}
