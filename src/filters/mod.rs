//! Line filters over a reader, writing to a writer.

mod block;
mod comments;
mod highlight;
mod transpose;

pub use block::print_block;
pub use comments::remove_comments;
pub use highlight::highlight;
pub use transpose::transpose;

use regex::Regex;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("comment character must not be empty")]
    EmptyMarkers,
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn compile(pattern: &str) -> Result<Regex, FilterError> {
    Regex::new(pattern).map_err(|source| FilterError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn run_filter<'a, F>(input: &'a str, filter: F) -> String
where
    F: FnOnce(std::io::Cursor<&'a str>, &mut Vec<u8>) -> Result<(), FilterError>,
{
    let mut out = Vec::new();
    filter(std::io::Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}
