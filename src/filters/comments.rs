use super::FilterError;
use std::io::{BufRead, Write};

/// Cuts each line at the first character found in `markers` and skips lines left blank.
pub fn remove_comments<R, W>(markers: &str, input: R, out: &mut W) -> Result<(), FilterError>
where
    R: BufRead,
    W: Write,
{
    if markers.is_empty() {
        return Err(FilterError::EmptyMarkers);
    }

    for line in input.lines() {
        let line = line?;
        let code = match line.find(|c: char| markers.contains(c)) {
            Some(cut) => &line[..cut],
            None => line.as_str(),
        };
        if !code.trim().is_empty() {
            writeln!(out, "{}", code)?;
        }
    }
    out.flush()?;
    Ok(())
}
