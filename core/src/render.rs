//! Text views of a [`Crossword`].
//!
//! Every view writes into any [`Write`] sink, so the binary can hand over
//! stdout while tests capture into a buffer.

use crate::{Crossword, Direction, RenderError};
use std::io::Write;

impl Crossword {
    /// Writes the empty puzzle with word numbers in their starting cells.
    ///
    /// Fails with [`RenderError::StaleDisplay`] if words were placed since the
    /// display grid was last prepared.
    pub fn render_numbered_grid<W: Write>(&self, out: &mut W) -> Result<(), RenderError> {
        if self.is_display_stale() {
            return Err(RenderError::StaleDisplay);
        }

        writeln!(out, "Crossword Puzzle ({}x{}):", self.rows(), self.cols())?;
        write_column_header(out, self.cols(), 3)?;

        for (i, row) in self.display.rows().enumerate() {
            write!(out, "{:>2}|", i)?;
            for entry in row {
                write!(out, "{}", entry)?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Writes the filled grid, blocked cells included.
    pub fn render_solution<W: Write>(&self, out: &mut W) -> Result<(), RenderError> {
        writeln!(out, "Solution:")?;
        write_column_header(out, self.cols(), 2)?;

        for (i, row) in self.solution.rows().enumerate() {
            write!(out, "{:>2}| ", i)?;
            for cell in row {
                write!(out, "{} ", cell.get_display_char())?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Writes the Across clues, then the Down clues, each in placement order.
    ///
    /// Words whose starting cell fell outside the grid are left out.
    pub fn render_clues<W: Write>(&self, out: &mut W) -> Result<(), RenderError> {
        writeln!(out, "Clues:")?;
        writeln!(out, "------")?;

        for direction in Direction::ALL {
            writeln!(out, "{}:", direction)?;
            for word in self.words_by_direction(direction) {
                if !word.on_grid {
                    continue;
                }
                writeln!(
                    out,
                    "{:>2}. {} ({} letters)",
                    word.number,
                    word.clue,
                    word.length()
                )?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Column indices padded to `width`, followed by a dashed rule.
fn write_column_header<W: Write>(out: &mut W, cols: usize, width: usize) -> std::io::Result<()> {
    write!(out, "   ")?;
    for j in 0..cols {
        write!(out, "{:>width$}", j, width = width)?;
    }
    writeln!(out)?;
    writeln!(out, "   {}", "-".repeat(cols * width))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), RenderError>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_numbered_grid_layout() {
        let mut crossword = Crossword::new(2, 3);
        crossword.place_word("AB", "First two", 0, 1, Direction::Across);
        crossword.prepare_display_grid();

        let text = render(|out| crossword.render_numbered_grid(out));
        let expected = "\
Crossword Puzzle (2x3):
     0  1  2
   ---------
 0|### 1  _ 
 1|#########

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_numbered_grid_refuses_stale_display() {
        let mut crossword = Crossword::new(2, 2);
        crossword.place_word("AB", "", 0, 0, Direction::Down);
        let mut buf = Vec::new();
        let result = crossword.render_numbered_grid(&mut buf);
        assert!(matches!(result, Err(RenderError::StaleDisplay)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_solution_layout() {
        let mut crossword = Crossword::new(2, 2);
        crossword.place_word("HI", "Greeting", 1, 0, Direction::Across);

        let text = render(|out| crossword.render_solution(out));
        let expected = "\
Solution:
    0 1
   ----
 0| # # 
 1| H I 

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_clues_grouped_by_direction_in_placement_order() {
        let mut crossword = Crossword::new(10, 10);
        crossword.place_word("CPU", "Central Processing Unit", 1, 1, Direction::Across);
        crossword.place_word("API", "Interface for software interaction", 0, 5, Direction::Down);
        crossword.place_word("RAM", "Volatile memory", 3, 1, Direction::Across);

        let text = render(|out| crossword.render_clues(out));
        let expected = "\
Clues:
------
Across:
 1. Central Processing Unit (3 letters)
 3. Volatile memory (3 letters)

Down:
 2. Interface for software interaction (3 letters)

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_clues_skip_words_starting_off_grid() {
        let mut crossword = Crossword::new(5, 5);
        crossword.place_word("LOST", "Nowhere to be found", 9, 9, Direction::Across);
        crossword.place_word("KEPT", "Held on to", 0, 0, Direction::Across);

        let text = render(|out| crossword.render_clues(out));
        assert!(!text.contains("Nowhere"));
        assert!(text.contains(" 2. Held on to (4 letters)"));
    }
}
