use std::io::{self, Read};

pub const SOLUTION_PROMPT: &str = "Would you like to see the solution? (y/n): ";

/// Reads the answer to [`SOLUTION_PROMPT`].
///
/// Leading whitespace is skipped and only the first character counts. End of
/// input is a "no".
pub fn wants_solution<R: Read>(input: R) -> io::Result<bool> {
    for byte in input.bytes() {
        let byte = byte?;
        if byte.is_ascii_whitespace() {
            continue;
        }
        return Ok(matches!(byte, b'y' | b'Y'));
    }
    Ok(false)
}
