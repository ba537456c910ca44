pub mod crossword;
pub mod direction;
pub mod error;
pub mod grid;
pub mod puzzle;
mod render;
pub mod word;

pub use crossword::{Crossword, PlacementReport};
pub use direction::Direction;
pub use error::{PlacementIssue, RenderError};
pub use grid::{Cell, Grid, Square};
pub use puzzle::WordSpec;
pub use word::WordEntry;
