use super::{compile, FilterError};
use std::io::{BufRead, Write};

/// Prints every range of lines from a `start` match through the next `end` match.
///
/// The end pattern is only tried from the line after the one that opened the range,
/// and a range left open runs to the end of the input.
pub fn print_block<R, W>(start: &str, end: &str, input: R, out: &mut W) -> Result<(), FilterError>
where
    R: BufRead,
    W: Write,
{
    let start = compile(start)?;
    let end = compile(end)?;
    let mut inside = false;

    for line in input.lines() {
        let line = line?;
        if inside {
            writeln!(out, "{}", line)?;
            inside = !end.is_match(&line);
        } else if start.is_match(&line) {
            writeln!(out, "{}", line)?;
            inside = true;
        }
    }
    out.flush()?;
    Ok(())
}
