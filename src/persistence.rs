//! File I/O for saving and loading finished word searches.
//!
//! The on-disk format is exactly [`Grid::to_text`]: one row per line, no
//! trailing newline, so a saved grid loads back identically.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::grid::{Grid, GridParseError};

/// Errors from [`load`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] GridParseError),
}

/// Writes the grid to `path` as text.
pub fn save(grid: &Grid, path: &Path) -> io::Result<()> {
    fs::write(path, grid.to_text())
}

/// Reads a grid back from a file written by [`save`].
pub fn load(path: &Path) -> Result<Grid, LoadError> {
    let text = fs::read_to_string(path)?;
    Ok(Grid::parse(&text)?)
}
