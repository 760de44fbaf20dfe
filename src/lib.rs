//! Word Search Generator Library
//!
//! Provides the core functionality for generating word-search puzzles:
//! placing a list of directed words into a square grid via backtracking
//! search, then filling the leftover cells with random letters.
//!
//! The placement pipeline is deterministic under a fixed RNG seed; all
//! randomness (candidate shuffling, filler letters, lexicon replacements)
//! flows through an explicitly passed [`rand::Rng`].

pub mod direction;
pub mod grid;
pub mod lexicon;
pub mod persistence;
pub mod puzzle;
pub mod solver;
pub mod words;

pub use direction::Direction;
pub use grid::Grid;
pub use puzzle::PuzzleSpec;
pub use solver::generate;
pub use words::Word;

/// Default fill characters for the leftover cells of a solved grid.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
