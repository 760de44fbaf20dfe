//! Puzzle spec file parsing.
//!
//! The text format, shared with the companion input tool:
//!
//! ```text
//! DIMENSION
//! 5
//! WORDS
//! hello 0
//! ready 2
//! have 4
//! ```
//!
//! Each word line is `word direction`, where the direction is an index into
//! [`crate::direction::ALL`]. Blank lines and surrounding whitespace are
//! tolerated anywhere; everything else is a parse error.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::direction::Direction;
use crate::words::Word;

/// Errors from [`PuzzleSpec::parse`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("DIMENSION line wasn't found")]
    MissingDimensionHeader,
    #[error("DIMENSION line not followed by a dimension number")]
    MissingDimension,
    #[error("dimension must be a positive number, got {0:?}")]
    BadDimension(String),
    #[error("WORDS line wasn't found")]
    MissingWordsHeader,
    #[error("word line must be `word direction`, got {0:?}")]
    BadWordLine(String),
    #[error("word must be alphabetic, got {0:?}")]
    BadWord(String),
    #[error("direction must be a number in 0..8, got {0:?}")]
    BadDirection(String),
    #[error("word {word:?} has {length} letters, too long for a {dimension}x{dimension} grid")]
    WordTooLong {
        word: String,
        length: usize,
        dimension: usize,
    },
    #[error("word {0:?} appears twice")]
    DuplicateWord(String),
    #[error("there wasn't any words in the spec")]
    NoWords,
}

/// Everything needed to generate one word search: the grid dimension and the
/// ordered word list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleSpec {
    pub dimension: usize,
    pub words: Vec<Word>,
}

impl PuzzleSpec {
    /// Parses the `DIMENSION` / `WORDS` text format.
    ///
    /// Words are lowercased. Rejects non-positive dimensions, malformed
    /// word lines, unknown directions, duplicate words, words longer than
    /// the grid, and an empty word list.
    pub fn parse(text: &str) -> Result<Self, SpecError> {
        let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

        if !lines.any(|line| line == "DIMENSION") {
            return Err(SpecError::MissingDimensionHeader);
        }
        let dim_line = lines.next().ok_or(SpecError::MissingDimension)?;
        if dim_line == "WORDS" {
            return Err(SpecError::MissingDimension);
        }
        let dimension: usize = dim_line
            .parse()
            .ok()
            .filter(|&dim| dim >= 1)
            .ok_or_else(|| SpecError::BadDimension(dim_line.to_string()))?;

        if !lines.any(|line| line == "WORDS") {
            return Err(SpecError::MissingWordsHeader);
        }

        let mut words = Vec::new();
        let mut seen = FxHashSet::default();
        for line in lines {
            let mut fields = line.split_whitespace();
            let (Some(text), Some(dir), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(SpecError::BadWordLine(line.to_string()));
            };

            if !text.chars().all(char::is_alphabetic) {
                return Err(SpecError::BadWord(text.to_string()));
            }
            let direction = dir
                .parse::<usize>()
                .ok()
                .and_then(Direction::from_index)
                .ok_or_else(|| SpecError::BadDirection(dir.to_string()))?;

            let text = text.to_lowercase();
            let length = text.chars().count();
            if length > dimension {
                return Err(SpecError::WordTooLong {
                    word: text,
                    length,
                    dimension,
                });
            }
            if !seen.insert(text.clone()) {
                return Err(SpecError::DuplicateWord(text));
            }
            words.push(Word::new(text, direction));
        }

        if words.is_empty() {
            return Err(SpecError::NoWords);
        }

        Ok(Self { dimension, words })
    }
}
