use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("I/O error: {0}")]
    GenericIo(#[from] io::Error),
}

/// Opens `path` for line reading, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, IoError> {
    let Some(path) = path else {
        return Ok(Box::new(io::stdin().lock()));
    };

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => IoError::FileNotFound(path.display().to_string()),
        io::ErrorKind::PermissionDenied => IoError::PermissionDenied(path.display().to_string()),
        _ => IoError::GenericIo(e),
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Writes each line followed by a newline, flushing once at the end.
pub fn write_lines<W, I, S>(out: &mut W, lines: I) -> Result<(), IoError>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()?;
    Ok(())
}
