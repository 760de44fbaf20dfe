//! The eight compass directions a word can be written in.
//!
//! Each direction is a unit step `(dx, dy)` with `x` as the column and `y`
//! as the row, `y` growing downwards. Puzzle spec files refer to directions
//! by their index in [`ALL`], so the declaration order is part of the file
//! format and must not change.

use std::fmt;

/// A per-letter step `(dx, dy)`, each component in `{-1, 0, 1}`.
pub type Step = (i32, i32);

/// The direction a word advances along in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    RightDown,
    RightUp,
    LeftDown,
    LeftUp,
}

/// All directions in file-format order: a spec file's direction number `i`
/// maps to `ALL[i]`.
pub const ALL: [Direction; 8] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
    Direction::RightDown,
    Direction::RightUp,
    Direction::LeftDown,
    Direction::LeftUp,
];

impl Direction {
    /// Returns the unit step applied per letter.
    pub const fn step(self) -> Step {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
            Direction::RightDown => (1, 1),
            Direction::RightUp => (1, -1),
            Direction::LeftDown => (-1, 1),
            Direction::LeftUp => (-1, -1),
        }
    }

    /// Looks up a direction by its file-format index.
    pub fn from_index(index: usize) -> Option<Self> {
        ALL.get(index).copied()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::RightDown => "right-down",
            Direction::RightUp => "right-up",
            Direction::LeftDown => "left-down",
            Direction::LeftUp => "left-up",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lookup_matches_table_order() {
        for (i, &dir) in ALL.iter().enumerate() {
            assert_eq!(Direction::from_index(i), Some(dir));
        }
        assert_eq!(Direction::from_index(8), None);
    }

    #[test]
    fn test_steps_are_nonzero_units() {
        for dir in ALL {
            let (dx, dy) = dir.step();
            assert!((-1..=1).contains(&dx) && (-1..=1).contains(&dy));
            assert!((dx, dy) != (0, 0), "{dir} has a zero step");
        }
    }

    #[test]
    fn test_all_eight_steps_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.step(), b.step());
            }
        }
    }
}
