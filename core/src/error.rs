use crate::Direction;
use thiserror::Error;

/// Something that went wrong while laying a word onto the grid.
///
/// None of these abort a placement; they are collected in a
/// [`PlacementReport`](crate::PlacementReport) and logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementIssue {
    #[error("word '{word}' starting position ({row},{col}) is out of bounds")]
    StartOutOfBounds { word: String, row: usize, col: usize },

    #[error("word '{word}' ({direction}) goes out of bounds after {placed} letters")]
    Overflow {
        word: String,
        direction: Direction,
        placed: usize,
    },

    #[error("conflict for word {word} at ({row},{col}) with existing char {existing}")]
    Conflict {
        word: String,
        row: usize,
        col: usize,
        existing: char,
        incoming: char,
    },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("display grid is out of date, prepare it before rendering")]
    StaleDisplay,
}
