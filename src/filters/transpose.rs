use super::FilterError;
use std::io::{BufRead, Write};

/// Swaps rows and columns of whitespace-separated text.
pub fn transpose<R, W>(input: R, out: &mut W) -> Result<(), FilterError>
where
    R: BufRead,
    W: Write,
{
    let rows: Vec<Vec<String>> = input
        .lines()
        .map(|line| Ok(line?.split_whitespace().map(str::to_string).collect()))
        .collect::<Result<_, FilterError>>()?;
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);

    for column in 0..columns {
        let cells: Vec<&str> = rows
            .iter()
            .map(|row| row.get(column).map_or("", String::as_str))
            .collect();
        writeln!(out, "{}", cells.join(" "))?;
    }
    out.flush()?;
    Ok(())
}
