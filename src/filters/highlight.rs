use super::{compile, FilterError};
use crate::ui::{Palette, TermColor};
use regex::Captures;
use std::io::{BufRead, Write};

/// Wraps every match of `pattern` in the bold `color` escape, one flushed line at a time.
pub fn highlight<R, W>(
    palette: &Palette,
    color: TermColor,
    pattern: &str,
    input: R,
    out: &mut W,
) -> Result<(), FilterError>
where
    R: BufRead,
    W: Write,
{
    let pattern = compile(pattern)?;
    let start = palette.emphasis(color);
    let reset = palette.reset();

    for line in input.lines() {
        let line = line?;
        let marked = pattern.replace_all(&line, |caps: &Captures| {
            format!("{}{}{}", start, &caps[0], reset)
        });
        writeln!(out, "{}", marked)?;
        out.flush()?;
    }
    Ok(())
}
