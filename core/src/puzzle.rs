//! The built-in 10x10 puzzle.

use crate::{Crossword, Direction};
use serde::Serialize;

pub const GRID_ROWS: usize = 10;
pub const GRID_COLS: usize = 10;

/// A word waiting to be placed: answer, clue, start cell and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordSpec {
    pub text: &'static str,
    pub clue: &'static str,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl WordSpec {
    pub const fn new(
        text: &'static str,
        clue: &'static str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Self {
        Self {
            text,
            clue,
            row,
            col,
            direction,
        }
    }
}

pub const BUILTIN_WORDS: [WordSpec; 8] = [
    WordSpec::new("CPU", "Central Processing Unit", 1, 1, Direction::Across),
    WordSpec::new("RAM", "Volatile memory", 3, 1, Direction::Across),
    WordSpec::new("API", "Interface for software interaction", 0, 5, Direction::Down),
    WordSpec::new("BUG", "An error in code", 5, 3, Direction::Across),
    WordSpec::new("GIT", "Version control system", 3, 7, Direction::Down),
    WordSpec::new("LINKER", "Combines object files", 0, 8, Direction::Down),
    WordSpec::new("CODE", "Set of program instructions", 7, 0, Direction::Across),
    WordSpec::new("NULL", "Represents no value or address", 7, 5, Direction::Across),
];

/// Places [`BUILTIN_WORDS`] on a fresh [`GRID_ROWS`] x [`GRID_COLS`] grid.
///
/// The display grid still has to be prepared before rendering.
pub fn builtin() -> Crossword {
    Crossword::from_specs(GRID_ROWS, GRID_COLS, &BUILTIN_WORDS)
}
