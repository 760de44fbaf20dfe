//! Words to place and their candidate start positions.
//!
//! For each word, [`start_positions`] enumerates every grid coordinate the
//! word can start at without running out of bounds. The solver walks those
//! positions through a [`Candidates`] cursor: the sequence is shuffled once
//! up front and never reordered again, only the cursor moves.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::direction::Direction;

/// A start coordinate `(x, y)`: column, then row.
pub type Pos = (i32, i32);

/// A word to place in the grid, with its assigned writing direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub direction: Direction,
}

impl Word {
    pub fn new(text: impl Into<String>, direction: Direction) -> Self {
        Self {
            text: text.into(),
            direction,
        }
    }

    /// The word length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Enumerates every start `(x, y)` from which a word of `len` characters,
/// written in `direction`, stays fully inside a `dim` x `dim` grid.
///
/// Enumeration order is row-major (`y` outer, `x` inner) and deterministic;
/// an empty result simply means the word cannot fit in that direction.
pub fn start_positions(dim: usize, len: usize, direction: Direction) -> Vec<Pos> {
    let dim = dim as i32;
    let (dx, dy) = direction.step();
    let span = len.saturating_sub(1) as i32;

    let mut positions = Vec::new();
    for y in 0..dim {
        for x in 0..dim {
            let end_x = x + dx * span;
            let end_y = y + dy * span;
            if (0..dim).contains(&end_x) && (0..dim).contains(&end_y) {
                positions.push((x, y));
            }
        }
    }
    positions
}

/// The candidate start positions for one word, plus a forward-only cursor.
///
/// The cursor advances as positions are tried and resets to the front when
/// the solver backtracks past the word; the position sequence itself is
/// fixed at construction and never reshuffled.
#[derive(Clone, Debug)]
pub struct Candidates {
    starts: Vec<Pos>,
    tried: usize,
}

impl Candidates {
    /// Wraps a position list, keeping its order.
    pub fn new(starts: Vec<Pos>) -> Self {
        Self { starts, tried: 0 }
    }

    /// Wraps a position list after shuffling it once.
    pub fn shuffled<R: Rng>(mut starts: Vec<Pos>, rng: &mut R) -> Self {
        starts.shuffle(rng);
        Self::new(starts)
    }

    /// The next untried position, or `None` once all have been tried.
    pub fn current(&self) -> Option<Pos> {
        self.starts.get(self.tried).copied()
    }

    /// Marks the current position as tried.
    pub fn advance(&mut self) {
        self.tried += 1;
    }

    /// Rewinds the cursor so the whole sequence can be retried, in the same
    /// order as before.
    pub fn reset(&mut self) {
        self.tried = 0;
    }

    /// Total number of candidate positions.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::ALL;

    #[test]
    fn test_start_positions_horizontal() {
        // 5-letter word going right in a 5x5 grid: only x = 0 works
        let positions = start_positions(5, 5, Direction::Right);
        assert_eq!(positions, vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
    }

    #[test]
    fn test_start_positions_diagonal() {
        // 4-letter word going right-up in a 5x5 grid: x in 0..2, y in 3..5
        let positions = start_positions(5, 4, Direction::RightUp);
        assert_eq!(positions, vec![(0, 3), (1, 3), (0, 4), (1, 4)]);
    }

    #[test]
    fn test_start_positions_count_matches_closed_form() {
        for dim in 1..=7usize {
            for len in 1..=8usize {
                for dir in ALL {
                    let (dx, dy) = dir.step();
                    let span = len.saturating_sub(1) as i32;
                    let axis = |step: i32| -> i64 {
                        let free = dim as i32 - span * step.abs();
                        free.max(0) as i64
                    };
                    let expected = axis(dx) * axis(dy);
                    let got = start_positions(dim, len, dir).len() as i64;
                    assert_eq!(got, expected, "dim={dim} len={len} dir={dir}");
                }
            }
        }
    }

    #[test]
    fn test_oversized_word_has_no_positions() {
        for dir in ALL {
            assert!(start_positions(5, 7, dir).is_empty());
        }
    }

    #[test]
    fn test_cursor_walks_forward_and_resets() {
        let mut candidates = Candidates::new(vec![(0, 0), (1, 0)]);
        assert_eq!(candidates.current(), Some((0, 0)));
        candidates.advance();
        assert_eq!(candidates.current(), Some((1, 0)));
        candidates.advance();
        assert_eq!(candidates.current(), None);

        candidates.reset();
        // same sequence, same order
        assert_eq!(candidates.current(), Some((0, 0)));
    }

    #[test]
    fn test_empty_candidates_are_immediately_exhausted() {
        let candidates = Candidates::new(Vec::new());
        assert!(candidates.is_empty());
        assert_eq!(candidates.current(), None);
    }

    #[test]
    fn test_shuffled_keeps_the_same_positions() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let original = start_positions(6, 3, Direction::Down);
        let mut rng = StdRng::seed_from_u64(42);
        let mut cursor = Candidates::shuffled(original.clone(), &mut rng);

        let mut collected = Vec::new();
        while let Some(pos) = cursor.current() {
            collected.push(pos);
            cursor.advance();
        }
        collected.sort_unstable();
        let mut expected = original;
        expected.sort_unstable();
        assert_eq!(collected, expected);
    }
}
