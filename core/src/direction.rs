use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    /// Row and column step taken for each successive letter.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// Single-letter tag used in clue labels such as `3D`.
    pub fn letter(self) -> char {
        match self {
            Direction::Across => 'A',
            Direction::Down => 'D',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Across => "Across",
            Direction::Down => "Down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_advances_one_axis() {
        assert_eq!(Direction::Across.delta(), (0, 1));
        assert_eq!(Direction::Down.delta(), (1, 0));
    }

    #[test]
    fn test_serialized_as_variant_name() {
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"Down\"");
        let parsed: Direction = serde_json::from_str("\"Across\"").unwrap();
        assert_eq!(parsed, Direction::Across);
    }
}
