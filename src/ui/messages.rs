use super::palette::{Palette, Tone};
use std::io::{self, BufRead, Write};

pub const PROGRAM_TAG: &str = "shkit";

/// Kinds of one-line status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MessageKind {
    Warning,
    WarningAlert,
    Note,
    Comment,
    CommentDim,
    CommentCyan,
    CommentGreen,
    CommentGreenDim,
    CommentWhite,
    /// Framed failure notice; the caller exits with status 1.
    Error,
    /// Framed completion notice.
    Done,
}

impl MessageKind {
    pub fn is_failure(self) -> bool {
        self == MessageKind::Error
    }

    fn tone(self) -> Tone {
        match self {
            MessageKind::Warning | MessageKind::Error => Tone::Error,
            MessageKind::WarningAlert => Tone::Alert,
            MessageKind::Note => Tone::Note,
            MessageKind::Comment => Tone::Comment,
            MessageKind::CommentDim => Tone::CommentDim,
            MessageKind::CommentCyan => Tone::Cyan,
            MessageKind::CommentGreen | MessageKind::Done => Tone::Success,
            MessageKind::CommentGreenDim => Tone::SuccessDim,
            MessageKind::CommentWhite => Tone::Plain,
        }
    }
}

/// Renders `text` for `kind`, without a trailing newline.
pub fn render(kind: MessageKind, text: &str, palette: &Palette) -> String {
    match kind {
        MessageKind::Error => format!(
            "{}\n\n{}[{}]   {}{}          ~~~ EXIT ~~~\n\n{}",
            palette.start(Tone::Error),
            palette.start(Tone::ErrorDim),
            PROGRAM_TAG,
            palette.start(Tone::Error),
            text,
            palette.reset()
        ),
        MessageKind::Done => format!(
            "{}\n\n{}          Job done.\n\n{}",
            palette.start(Tone::Success),
            text,
            palette.reset()
        ),
        other => palette.paint(other.tone(), text),
    }
}

/// Prints a prompt and blocks until a line (or end of input) arrives on `input`.
pub fn pause<R, W>(
    palette: &Palette,
    message: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    match message {
        Some(message) => {
            writeln!(out, "{}", palette.paint(Tone::Comment, message))?;
            writeln!(
                out,
                "{}   Ok?\n   Press any key to continue or Ctrl+C to stop me{}",
                palette.start(Tone::CommentDim),
                palette.reset()
            )?;
        }
        None => write!(out, "{}", palette.paint(Tone::CommentDim, "-pause-"))?,
    }
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(())
}
