//! Backtracking word placement.
//!
//! Words are placed one at a time in list order. Each word tries its
//! candidate start positions in sequence against the grid produced by the
//! words before it; when a word runs out of positions the search steps back
//! to the previous word and resumes from that word's next untried position.
//! The grid after each successful placement is kept as an independent
//! snapshot so stepping back never has to undo cell writes.

use rand::Rng;

use crate::grid::Grid;
use crate::puzzle::PuzzleSpec;
use crate::words::{start_positions, Candidates, Pos, Word};

/// Attempts to write `word` into a copy of `grid`, starting at `start` and
/// advancing along the word's direction.
///
/// Empty cells receive the letter; cells already holding the same letter are
/// shared; any other letter aborts the placement. The input grid is never
/// modified. Returns the extended copy, or `None` on conflict or when the
/// word would leave the grid.
pub fn try_place(word: &Word, start: Pos, grid: &Grid) -> Option<Grid> {
    let dim = grid.dim() as i32;
    let (dx, dy) = word.direction.step();
    let (start_x, start_y) = start;

    let mut placed = grid.clone();
    for (i, letter) in word.text.chars().enumerate() {
        let x = start_x + dx * i as i32;
        let y = start_y + dy * i as i32;
        if !(0..dim).contains(&x) || !(0..dim).contains(&y) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        match placed.get(x, y) {
            None => placed.set(x, y, letter),
            Some(existing) if existing == letter => {}
            Some(_) => return None,
        }
    }
    Some(placed)
}

/// Places every word into an empty `dim` x `dim` grid by backtracking over
/// each word's candidate positions.
///
/// `candidates[i]` supplies the start positions for `words[i]`; cursors are
/// consumed and reset in place as the search runs. Returns the solved grid,
/// or `None` when every combination has been exhausted.
///
/// Snapshots of the grid after each placement are kept on a stack whose
/// length always equals the active word index plus one; a successful
/// placement pushes, a backtrack pops. Each snapshot is an independent clone,
/// so no retained state is ever written to again.
pub fn solve(dim: usize, words: &[Word], candidates: &mut [Candidates]) -> Option<Grid> {
    assert_eq!(
        words.len(),
        candidates.len(),
        "one candidate list per word"
    );
    if words.is_empty() {
        return Some(Grid::new(dim));
    }

    let mut snapshots = Vec::with_capacity(words.len() + 1);
    snapshots.push(Grid::new(dim));
    let mut active = 0usize;

    loop {
        let Some(start) = candidates[active].current() else {
            // this word is out of positions; give it a fresh cursor for any
            // later retry and step back to the previous word
            if active == 0 {
                return None;
            }
            candidates[active].reset();
            snapshots.pop();
            active -= 1;
            continue;
        };
        candidates[active].advance();

        if let Some(placed) = try_place(&words[active], start, &snapshots[active]) {
            snapshots.push(placed);
            if active == words.len() - 1 {
                return snapshots.pop();
            }
            active += 1;
        }
        // on conflict the cursor has already advanced; try the next position
    }
}

/// Generates a word-search grid for a puzzle spec: enumerates and shuffles
/// each word's start positions, then runs the backtracking search.
///
/// The returned grid still has empty cells; the caller decides how to fill
/// them (see [`Grid::fill_empty`]). `None` means no arrangement of the words
/// fits the grid.
pub fn generate<R: Rng>(puzzle: &PuzzleSpec, rng: &mut R) -> Option<Grid> {
    let mut candidates: Vec<Candidates> = puzzle
        .words
        .iter()
        .map(|word| {
            let starts = start_positions(puzzle.dimension, word.len(), word.direction);
            Candidates::shuffled(starts, rng)
        })
        .collect();

    solve(puzzle.dimension, &puzzle.words, &mut candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unshuffled(dim: usize, words: &[Word]) -> Vec<Candidates> {
        words
            .iter()
            .map(|w| Candidates::new(start_positions(dim, w.len(), w.direction)))
            .collect()
    }

    #[test]
    fn test_place_into_empty_grid() {
        let grid = Grid::new(5);
        let word = Word::new("bye", Direction::Right);

        let placed = try_place(&word, (1, 0), &grid).unwrap();
        assert_eq!(placed.to_text(), ".bye.\n.....\n.....\n.....\n.....");
        // the input grid is untouched
        assert_eq!(grid, Grid::new(5));
    }

    #[test]
    fn test_place_shares_matching_letters() {
        let grid = try_place(&Word::new("bye", Direction::Right), (1, 0), &Grid::new(5)).unwrap();
        // "enemy" downward reuses the 'e' of "bye"
        let placed = try_place(&Word::new("enemy", Direction::Down), (3, 0), &grid).unwrap();
        assert_eq!(placed.to_text(), ".bye.\n...n.\n...e.\n...m.\n...y.");
    }

    #[test]
    fn test_place_fails_on_conflicting_letter() {
        let grid = try_place(&Word::new("bye", Direction::Right), (1, 0), &Grid::new(5)).unwrap();
        let grid = try_place(&Word::new("enemy", Direction::Down), (3, 0), &grid).unwrap();
        // "bare" right-down from (1,0) shares the 'b', then hits the 'e' of
        // "enemy" at (3,2) with its 'r'
        let result = try_place(&Word::new("bare", Direction::RightDown), (1, 0), &grid);
        assert!(result.is_none());
        // input unchanged after a failed call
        assert_eq!(grid.to_text(), ".bye.\n...n.\n...e.\n...m.\n...y.");
    }

    #[test]
    fn test_place_is_idempotent() {
        let word = Word::new("loop", Direction::Down);
        let once = try_place(&word, (2, 0), &Grid::new(4)).unwrap();
        let twice = try_place(&word, (2, 0), &once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_place_rejects_out_of_bounds_start() {
        let result = try_place(&Word::new("long", Direction::Right), (2, 0), &Grid::new(4));
        assert!(result.is_none());
    }

    #[test]
    fn test_solve_fixture_with_backtracking() {
        // "ready" cannot share a column with "hello" in row 0, so the solver
        // must step back and move "hello" down a row before everything fits
        let words = [
            Word::new("hello", Direction::Right),
            Word::new("ready", Direction::Down),
            Word::new("have", Direction::RightDown),
        ];
        let mut candidates = unshuffled(5, &words);

        let solved = solve(5, &words, &mut candidates).unwrap();
        assert_eq!(solved.to_text(), ".r...\nhello\n.a...\n.dv..\n.y.e.");
    }

    #[test]
    fn test_solve_reports_no_solution() {
        let words = [
            Word::new("have", Direction::RightDown),
            Word::new("care", Direction::Left),
        ];
        let mut candidates = unshuffled(4, &words);
        assert_eq!(solve(4, &words, &mut candidates), None);
    }

    #[test]
    fn test_no_solution_is_independent_of_candidate_order() {
        // same unsolvable instance, with each candidate sequence reversed
        let words = [
            Word::new("have", Direction::RightDown),
            Word::new("care", Direction::Left),
        ];
        let mut candidates: Vec<Candidates> = words
            .iter()
            .map(|w| {
                let mut starts = start_positions(4, w.len(), w.direction);
                starts.reverse();
                Candidates::new(starts)
            })
            .collect();
        assert_eq!(solve(4, &words, &mut candidates), None);
    }

    #[test]
    fn test_word_without_positions_fails_immediately() {
        // a 2-letter word cannot fit a 1x1 grid in any direction
        let words = [Word::new("no", Direction::Right)];
        let mut candidates = unshuffled(1, &words);
        assert!(candidates[0].is_empty());
        assert_eq!(solve(1, &words, &mut candidates), None);
    }

    #[test]
    fn test_single_cell_grid() {
        let words = [Word::new("a", Direction::Up)];
        let mut candidates = unshuffled(1, &words);
        let solved = solve(1, &words, &mut candidates).unwrap();
        assert_eq!(solved.to_text(), "a");
    }

    #[test]
    fn test_generate_places_every_word() {
        let puzzle = PuzzleSpec {
            dimension: 8,
            words: vec![
                Word::new("puzzle", Direction::Right),
                Word::new("search", Direction::Down),
                Word::new("word", Direction::RightDown),
                Word::new("grid", Direction::Left),
            ],
        };

        let mut rng = StdRng::seed_from_u64(7);
        let solved = generate(&puzzle, &mut rng).unwrap();
        for word in &puzzle.words {
            assert!(
                grid_contains(&solved, word),
                "missing {:?} going {}",
                word.text,
                word.direction
            );
        }
    }

    #[test]
    fn test_generate_is_deterministic_under_a_fixed_seed() {
        let puzzle = PuzzleSpec {
            dimension: 6,
            words: vec![
                Word::new("stone", Direction::Right),
                Word::new("tree", Direction::Down),
            ],
        };

        let mut first_rng = StdRng::seed_from_u64(123);
        let mut second_rng = StdRng::seed_from_u64(123);
        assert_eq!(
            generate(&puzzle, &mut first_rng),
            generate(&puzzle, &mut second_rng)
        );
    }

    /// Scans the whole grid for `word` written at any position along its
    /// assigned direction.
    fn grid_contains(grid: &Grid, word: &Word) -> bool {
        start_positions(grid.dim(), word.len(), word.direction)
            .into_iter()
            .any(|(sx, sy)| {
                let (dx, dy) = word.direction.step();
                word.text.chars().enumerate().all(|(i, letter)| {
                    let x = (sx + dx * i as i32) as usize;
                    let y = (sy + dy * i as i32) as usize;
                    grid.get(x, y) == Some(letter)
                })
            })
    }
}
