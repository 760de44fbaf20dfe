//! Lexicon of allowed words.
//!
//! Puzzle words are vetted against a word list before placement; a word
//! missing from the list is replaced with a random lexicon entry that fits
//! the grid. Entries are sorted on load so membership checks can use binary
//! search.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::puzzle::PuzzleSpec;

/// Errors from lexicon loading and vetting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    #[error("lexicon contains no words")]
    Empty,
    #[error("no lexicon word fits in a {0}x{0} grid")]
    NothingFits(usize),
}

/// A sorted list of known words.
#[derive(Clone, Debug)]
pub struct Lexicon {
    entries: Vec<String>,
}

impl Lexicon {
    /// Parses one word per line, lowercased; blank lines are skipped.
    /// The entries are sorted regardless of file order.
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        let mut entries: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();
        if entries.is_empty() {
            return Err(LexiconError::Empty);
        }
        entries.sort_unstable();
        entries.dedup();
        Ok(Self { entries })
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Binary-search membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.entries
            .binary_search_by(|entry| entry.as_str().cmp(word))
            .is_ok()
    }

    /// Replaces every puzzle word missing from the lexicon with a random
    /// entry short enough for the grid, keeping the word's direction.
    ///
    /// Returns the `(old, new)` replacement pairs for reporting. Fails only
    /// when a replacement is needed and no lexicon entry fits the grid.
    pub fn vet<R: Rng>(
        &self,
        puzzle: &mut PuzzleSpec,
        rng: &mut R,
    ) -> Result<Vec<(String, String)>, LexiconError> {
        let fitting: Vec<&String> = self
            .entries
            .iter()
            .filter(|entry| entry.chars().count() <= puzzle.dimension)
            .collect();

        let mut replacements = Vec::new();
        for word in &mut puzzle.words {
            if !self.contains(&word.text) {
                let replacement = *fitting
                    .choose(rng)
                    .ok_or(LexiconError::NothingFits(puzzle.dimension))?;
                replacements.push((word.text.clone(), replacement.clone()));
                word.text = replacement.clone();
            }
        }
        Ok(replacements)
    }
}
