use crate::Direction;
use serde::{Deserialize, Serialize};

/// A word that has gone through placement, together with its clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub number: u32,
    pub direction: Direction,
    pub text: String,
    pub clue: String,
    pub row: usize,
    pub col: usize,
    /// Whether the starting cell was inside the grid when the word was placed.
    pub on_grid: bool,
}

impl WordEntry {
    pub fn new(
        number: u32,
        direction: Direction,
        text: &str,
        clue: &str,
        row: usize,
        col: usize,
        on_grid: bool,
    ) -> Self {
        Self {
            number,
            direction,
            text: text.to_ascii_uppercase(),
            clue: clue.to_string(),
            row,
            col,
            on_grid,
        }
    }

    /// Number of letters, as shown next to the clue.
    pub fn length(&self) -> usize {
        self.text.chars().count()
    }

    /// Clue reference such as `1A` or `6D`.
    pub fn label(&self) -> String {
        format!("{}{}", self.number, self.direction.letter())
    }

    /// Every cell the word spans, ignoring the grid edge.
    pub fn positions(&self) -> Vec<(usize, usize)> {
        let (dr, dc) = self.direction.delta();
        (0..self.length())
            .map(|i| (self.row + dr * i, self.col + dc * i))
            .collect()
    }

    /// Whether the word's span includes `(row, col)`.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        match self.direction {
            Direction::Across => {
                row == self.row && col >= self.col && col - self.col < self.length()
            }
            Direction::Down => {
                col == self.col && row >= self.row && row - self.row < self.length()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_uppercased() {
        let word = WordEntry::new(1, Direction::Across, "pygame", "Library", 6, 4, true);
        assert_eq!(word.text, "PYGAME");
        assert_eq!(word.length(), 6);
    }

    #[test]
    fn test_uppercasing_keeps_letter_count() {
        let word = WordEntry::new(1, Direction::Down, "straße", "Street", 0, 0, true);
        assert_eq!(word.text, "STRAßE");
        assert_eq!(word.length(), 6);
        assert_eq!(word.positions().len(), 6);
    }

    #[test]
    fn test_label() {
        let word = WordEntry::new(6, Direction::Down, "LINKER", "Combines object files", 0, 8, true);
        assert_eq!(word.label(), "6D");
    }

    #[test]
    fn test_positions_follow_direction() {
        let across = WordEntry::new(1, Direction::Across, "CPU", "", 1, 1, true);
        assert_eq!(across.positions(), vec![(1, 1), (1, 2), (1, 3)]);

        let down = WordEntry::new(2, Direction::Down, "API", "", 0, 5, true);
        assert_eq!(down.positions(), vec![(0, 5), (1, 5), (2, 5)]);
    }

    #[test]
    fn test_covers() {
        let down = WordEntry::new(5, Direction::Down, "GIT", "", 3, 7, true);
        assert!(down.covers(3, 7));
        assert!(down.covers(5, 7));
        assert!(!down.covers(6, 7));
        assert!(!down.covers(2, 7));
        assert!(!down.covers(4, 6));
    }
}
