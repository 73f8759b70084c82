//! Column-aware word wrapping across parallel text fields (`printf-wrap`).
//!
//! A [`ColumnWrapper`] is built from a printf-style template and up to one text field
//! per width-bearing conversion. Each call to `next` takes a word-safe slice from every
//! field and renders the slices through the template, until all fields are used up.

mod boundary;
mod format;

pub use boundary::{cut_slice, is_word_char};
pub use format::FormatSpec;

use std::iter::FusedIterator;
use thiserror::Error;
use tracing::{debug, trace, warn};

pub const USAGE: &str = "Usage: printf-wrap \"<format>\" \"<text>\" \"<text>\" ...";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapError {
    #[error(
        "number of input text fields ({fields}) MUST NOT EXCEED number of columns specified ({columns})"
    )]
    ArgumentCount { fields: usize, columns: usize },
    #[error("column {column} has zero width but its text is not empty")]
    MalformedFormat { column: usize },
    #[error("no progress at line {line}: column {column} holds a word longer than its width")]
    Stalled { line: usize, column: usize },
}

/// What to do when an iteration cannot consume anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Reject zero-width columns up front and end with [`WrapError::Stalled`].
    #[default]
    Guarded,
    /// Keep emitting the same line, the way the shell function loops.
    Compat,
}

/// Lazily wraps fields into lines. Not restartable.
#[derive(Debug)]
pub struct ColumnWrapper {
    spec: FormatSpec,
    fields: Vec<String>,
    mode: WrapMode,
    emitted: usize,
    finished: bool,
}

impl ColumnWrapper {
    pub fn new<I, S>(format: &str, fields: I, mode: WrapMode) -> Result<Self, WrapError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec = FormatSpec::parse(format);
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();

        let columns = spec.widths().len();
        if fields.len() > columns {
            return Err(WrapError::ArgumentCount {
                fields: fields.len(),
                columns,
            });
        }

        if mode == WrapMode::Guarded {
            let zero_width = fields
                .iter()
                .zip(spec.widths())
                .position(|(field, &width)| width == 0 && !is_blank(field));
            if let Some(index) = zero_width {
                return Err(WrapError::MalformedFormat { column: index + 1 });
            }
        }

        debug!(widths = ?spec.widths(), fields = fields.len(), ?mode, "column wrapper ready");

        Ok(Self {
            spec,
            fields,
            mode,
            emitted: 0,
            finished: false,
        })
    }

    pub fn spec(&self) -> &FormatSpec {
        &self.spec
    }

    /// The unconsumed text of every field.
    pub fn remaining(&self) -> &[String] {
        &self.fields
    }

    pub fn is_exhausted(&self) -> bool {
        self.fields.iter().all(|field| is_blank(field))
    }

    /// Runs one iteration of the wrap loop and returns the slice taken from each field.
    pub fn next_slices(&mut self) -> Vec<String> {
        let widths = self.spec.widths();
        self.fields
            .iter_mut()
            .zip(widths)
            .map(|(field, &width)| {
                let indent = field.len() - field.trim_start().len();
                field.drain(..indent);
                let slice = cut_slice(field, width).to_string();
                field.drain(..slice.len());
                slice
            })
            .collect()
    }
}

impl Iterator for ColumnWrapper {
    type Item = Result<String, WrapError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.is_exhausted() {
            self.finished = true;
            return None;
        }

        let slices = self.next_slices();
        trace!(line = self.emitted + 1, ?slices, "wrap iteration");

        if self.mode == WrapMode::Guarded && slices.iter().all(String::is_empty) {
            self.finished = true;
            let column = self
                .fields
                .iter()
                .position(|field| !is_blank(field))
                .map_or(1, |index| index + 1);
            let line = self.emitted + 1;
            warn!(line, column, "wrap made no progress");
            return Some(Err(WrapError::Stalled { line, column }));
        }

        self.emitted += 1;
        let args: Vec<&str> = slices.iter().map(String::as_str).collect();
        Some(Ok(self.spec.render(&args)))
    }
}

impl FusedIterator for ColumnWrapper {}

/// Result of interpreting a `printf-wrap` argument list.
#[derive(Debug)]
pub enum Invocation {
    Help,
    Wrap(ColumnWrapper),
}

/// Interprets `format text...`, short-circuiting on a help token in first position.
pub fn invoke(args: &[String], mode: WrapMode) -> Result<Invocation, WrapError> {
    let (format, fields) = match args.split_first() {
        Some((first, _)) if is_help_token(first) => return Ok(Invocation::Help),
        Some((format, fields)) => (format.as_str(), fields),
        None => ("", args),
    };
    ColumnWrapper::new(format, fields.iter().cloned(), mode).map(Invocation::Wrap)
}

/// `-h`, `--h`, `-help`, `--help`, `h` or `help`.
pub fn is_help_token(arg: &str) -> bool {
    let name = arg
        .strip_prefix("--")
        .or_else(|| arg.strip_prefix('-'))
        .unwrap_or(arg);
    name == "h" || name == "help"
}

fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
