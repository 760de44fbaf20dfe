//! Square character grid for word-search puzzles.
//!
//! Cells are stored row-major in a flat vector; a cell is either empty or
//! holds a single letter. Text rendering shows empty cells as '.', one row
//! per line with no trailing newline, and [`Grid::parse`] reads the same
//! format back.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Returned by [`Grid::fill_empty`] when no fill characters were supplied.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("alphabet is empty, cannot fill grid")]
pub struct EmptyAlphabet;

/// Errors from [`Grid::parse`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridParseError {
    #[error("grid text is empty")]
    Empty,
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },
    #[error("grid is {rows} rows by {columns} columns, expected a square")]
    NotSquare { rows: usize, columns: usize },
}

/// A square grid of optionally-filled character cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dim: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates an empty grid of the given dimension.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![None; dim * dim],
        }
    }

    /// The grid dimension (side length).
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.dim && y < self.dim);
        y * self.dim + x
    }

    /// Returns the cell at column `x`, row `y`, or `None` if it is empty.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells[self.idx(x, y)]
    }

    /// Writes a letter into the cell at column `x`, row `y`.
    pub fn set(&mut self, x: usize, y: usize, letter: char) {
        let idx = self.idx(x, y);
        self.cells[idx] = Some(letter);
    }

    /// Returns true if every cell holds a letter.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Fills every empty cell with a character drawn uniformly from
    /// `alphabet`. Cells that already hold a letter are never touched.
    pub fn fill_empty<R: Rng>(
        &mut self,
        alphabet: &[char],
        rng: &mut R,
    ) -> Result<(), EmptyAlphabet> {
        if alphabet.is_empty() {
            return Err(EmptyAlphabet);
        }
        for cell in &mut self.cells {
            if cell.is_none() {
                // choose only fails on an empty slice, checked above
                *cell = alphabet.choose(rng).copied();
            }
        }
        Ok(())
    }

    /// Renders the grid as text: one row per line, '.' for empty cells,
    /// no trailing newline.
    pub fn to_text(&self) -> String {
        let mut output = String::with_capacity(self.dim * (self.dim + 1));
        for y in 0..self.dim {
            if y > 0 {
                output.push('\n');
            }
            for x in 0..self.dim {
                output.push(self.get(x, y).unwrap_or('.'));
            }
        }
        output
    }

    /// Parses the text format produced by [`Grid::to_text`].
    pub fn parse(text: &str) -> Result<Self, GridParseError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(GridParseError::Empty);
        }

        let dim = rows.len();
        let mut cells = Vec::with_capacity(dim * dim);
        for (row, line) in rows.iter().enumerate() {
            let count = line.chars().count();
            if count != dim {
                // distinguish a consistent rectangle from a ragged one
                if rows.iter().all(|l| l.chars().count() == count) {
                    return Err(GridParseError::NotSquare {
                        rows: dim,
                        columns: count,
                    });
                }
                return Err(GridParseError::RaggedRow {
                    row,
                    expected: dim,
                    got: count,
                });
            }
            cells.extend(line.chars().map(|c| if c == '.' { None } else { Some(c) }));
        }

        Ok(Self { dim, cells })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
