use crate::grid::{BLANK_DISPLAY, BLOCKED_DISPLAY};
use crate::puzzle::WordSpec;
use crate::{Cell, Direction, Grid, PlacementIssue, Square, WordEntry};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Outcome of a single [`Crossword::place_word`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementReport {
    /// Sequence number handed to the word.
    pub number: u32,
    /// How many letters ended up on the grid.
    pub placed: usize,
    pub issues: Vec<PlacementIssue>,
}

impl PlacementReport {
    fn new(number: u32) -> Self {
        Self {
            number,
            placed: 0,
            issues: Vec::new(),
        }
    }

    fn flag(&mut self, issue: PlacementIssue) {
        warn!(number = self.number, "{}", issue);
        self.issues.push(issue);
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn conflicts(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, PlacementIssue::Conflict { .. }))
            .count()
    }
}

/// Fixed-size crossword: solution letters, the player's view, a numbered
/// display grid derived from both, and the words in placement order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crossword {
    pub(crate) solution: Grid<Cell>,
    pub(crate) player: Grid<Square>,
    pub(crate) display: Grid<String>,
    pub(crate) words: Vec<WordEntry>,
    next_number: u32,
    display_stale: bool,
}

impl Crossword {
    /// Creates a `rows` x `cols` puzzle with every cell blocked.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            solution: Grid::new(cols, rows, Cell::Blocked),
            player: Grid::new(cols, rows, Square::Blocked),
            display: Grid::new(cols, rows, BLOCKED_DISPLAY.to_string()),
            words: Vec::new(),
            next_number: 0,
            display_stale: false,
        }
    }

    /// Builds a puzzle by placing `specs` in order.
    ///
    /// Placement problems are logged, the same as for [`Crossword::place_word`].
    pub fn from_specs(rows: usize, cols: usize, specs: &[WordSpec]) -> Self {
        let mut crossword = Self::new(rows, cols);
        for spec in specs {
            crossword.place_word(spec.text, spec.clue, spec.row, spec.col, spec.direction);
        }
        crossword
    }

    pub fn rows(&self) -> usize {
        self.solution.height
    }

    pub fn cols(&self) -> usize {
        self.solution.width
    }

    /// Places `text` starting at `(row, col)` and records it with `clue`.
    ///
    /// The word always receives the next sequence number and is always
    /// recorded, even if nothing of it fits. Letters running past the edge are
    /// dropped; letters disagreeing with an existing one replace it.
    pub fn place_word(
        &mut self,
        text: &str,
        clue: &str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> PlacementReport {
        self.next_number += 1;
        self.display_stale = true;

        let on_grid = self.solution.contains(row, col);
        let entry = WordEntry::new(self.next_number, direction, text, clue, row, col, on_grid);
        let mut report = PlacementReport::new(entry.number);

        if !on_grid {
            report.flag(PlacementIssue::StartOutOfBounds {
                word: entry.text.clone(),
                row,
                col,
            });
            self.words.push(entry);
            return report;
        }

        for ((r, c), letter) in entry.positions().into_iter().zip(entry.text.chars()) {
            let Some(cell) = self.solution.get_cell_mut(r, c) else {
                report.flag(PlacementIssue::Overflow {
                    word: entry.text.clone(),
                    direction,
                    placed: report.placed,
                });
                break;
            };

            if let Cell::Letter(existing) = *cell {
                if existing != letter {
                    report.flag(PlacementIssue::Conflict {
                        word: entry.text.clone(),
                        row: r,
                        col: c,
                        existing,
                        incoming: letter,
                    });
                }
            }
            *cell = Cell::Letter(letter);

            if let Some(square) = self.player.get_cell_mut(r, c) {
                *square = Square::Fillable;
            }
            report.placed += 1;
        }

        debug!(label = %entry.label(), word = %entry.text, placed = report.placed, "placed word");
        self.words.push(entry);
        report
    }

    /// Rebuilds the numbered display grid from the player grid and word list.
    ///
    /// Words sharing a starting cell leave the later word's number there.
    pub fn prepare_display_grid(&mut self) {
        for (display_row, player_row) in self.display.cells.iter_mut().zip(&self.player.cells) {
            for (entry, square) in display_row.iter_mut().zip(player_row) {
                let marker = match square {
                    Square::Blocked => BLOCKED_DISPLAY,
                    Square::Fillable => BLANK_DISPLAY,
                };
                *entry = marker.to_string();
            }
        }

        for word in &self.words {
            let fillable = self
                .player
                .get_cell(word.row, word.col)
                .is_some_and(Square::is_fillable);
            if !fillable {
                continue;
            }
            if let Some(entry) = self.display.get_cell_mut(word.row, word.col) {
                *entry = number_label(word.number);
            }
        }

        self.display_stale = false;
    }

    /// True once a placement happened after the last [`Crossword::prepare_display_grid`].
    pub fn is_display_stale(&self) -> bool {
        self.display_stale
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn words_by_direction(&self, direction: Direction) -> Vec<&WordEntry> {
        self.words
            .iter()
            .filter(|word| word.direction == direction)
            .collect()
    }

    /// First word placed in `direction` whose on-grid span covers `(row, col)`.
    pub fn word_at(&self, row: usize, col: usize, direction: Direction) -> Option<&WordEntry> {
        if !self.is_fillable(row, col) {
            return None;
        }
        self.words
            .iter()
            .find(|word| word.on_grid && word.direction == direction && word.covers(row, col))
    }

    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.solution.get_cell(row, col).and_then(Cell::letter)
    }

    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        self.player
            .get_cell(row, col)
            .is_some_and(Square::is_fillable)
    }

    /// The display-grid entry for a cell, as of the last preparation.
    pub fn display_at(&self, row: usize, col: usize) -> Option<&str> {
        self.display.get_cell(row, col).map(String::as_str)
    }

    pub fn solution(&self) -> &Grid<Cell> {
        &self.solution
    }

    pub fn player(&self) -> &Grid<Square> {
        &self.player
    }
}

/// Formats a word number into a 3-character display cell.
///
/// Numbers past 99 keep only their first three digits.
pub fn number_label(number: u32) -> String {
    let digits = number.to_string();
    match digits.len() {
        1 => format!(" {} ", digits),
        2 => format!("{} ", digits),
        _ => digits[..3].to_string(),
    }
}
