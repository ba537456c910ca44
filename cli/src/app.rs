use crate::prompt::{SOLUTION_PROMPT, wants_solution};
use color_eyre::eyre::Result;
use crossword_core::{Crossword, puzzle};
use std::io::{Read, Write};
use tracing::error;

pub struct App {
    /// Puzzle with its display grid already prepared.
    pub crossword: Crossword,
}

impl App {
    /// Construct a new instance of [`App`] around the built-in puzzle.
    pub fn new() -> Self {
        Self::with_crossword(puzzle::builtin())
    }

    pub fn with_crossword(mut crossword: Crossword) -> Self {
        crossword.prepare_display_grid();
        Self { crossword }
    }

    /// Prints the numbered grid and clues, asks about the solution, and
    /// prints it on a yes.
    pub fn run<R: Read, W: Write>(&self, input: R, out: &mut W) -> Result<()> {
        self.crossword.render_numbered_grid(out)?;
        self.crossword.render_clues(out)?;

        write!(out, "\n{}", SOLUTION_PROMPT)?;
        out.flush()?;

        if wants_solution(input)? {
            self.crossword.render_solution(out)?;
        }
        Ok(())
    }

    /// Like [`App::run`], but a failure to read or print is logged instead of
    /// returned. The process exit status never depends on the terminal.
    pub fn run_logged<R: Read, W: Write>(&self, input: R, out: &mut W) {
        if let Err(report) = self.run(input, out) {
            error!(error = %report, "could not present the puzzle");
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
