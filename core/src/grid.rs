use serde::{Deserialize, Serialize};

/// Marker printed for cells no word occupies.
pub const BLOCKED: char = '#';
/// Display-grid entry for a blocked cell.
pub const BLOCKED_DISPLAY: &str = "###";
/// Display-grid entry for a fillable cell without a number.
pub const BLANK_DISPLAY: &str = " _ ";

/// A cell of the solution grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Blocked,
    Letter(char),
}

impl Cell {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Cell::Blocked)
    }

    pub fn letter(&self) -> Option<char> {
        match self {
            Cell::Letter(c) => Some(*c),
            Cell::Blocked => None,
        }
    }

    pub fn get_display_char(&self) -> char {
        match self {
            Cell::Blocked => BLOCKED,
            Cell::Letter(c) => *c,
        }
    }
}

/// A cell of the player grid. Players only see which cells are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Square {
    Blocked,
    Fillable,
}

impl Square {
    pub fn is_fillable(&self) -> bool {
        matches!(self, Square::Fillable)
    }
}

/// Row-major 2D storage with dimensions fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Vec<T>>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        let cells = vec![vec![fill; width]; height];
        Self {
            width,
            height,
            cells,
        }
    }
}

impl<T> Grid<T> {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get(row)?.get(col)
    }

    pub fn get_cell_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.iter().map(Vec::as_slice)
    }
}
