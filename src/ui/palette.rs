//! Terminal styling, resolved once and passed to whatever prints.

use crate::config::ColorMode;
use crossterm::tty::IsTty;
use tracing::debug;

const RESET: &str = "\x1b[0m";

/// Named styles used by the message helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    ErrorDim,
    Note,
    Success,
    SuccessDim,
    Comment,
    CommentDim,
    Cyan,
    Alert,
    Plain,
}

impl Tone {
    const fn sgr(self) -> &'static str {
        match self {
            Tone::Error => "1;31",
            Tone::ErrorDim => "0;31",
            Tone::Note => "1;93",
            Tone::Success => "1;32",
            Tone::SuccessDim => "0;32",
            Tone::Comment => "1;34",
            Tone::CommentDim => "0;34",
            Tone::Cyan => "1;36",
            Tone::Alert => "48;5;95;38;5;214",
            Tone::Plain => "0",
        }
    }
}

/// The eight basic terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TermColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl TermColor {
    pub const ALL: [TermColor; 8] = [
        TermColor::Black,
        TermColor::Red,
        TermColor::Green,
        TermColor::Yellow,
        TermColor::Blue,
        TermColor::Magenta,
        TermColor::Cyan,
        TermColor::White,
    ];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn foreground(self) -> u8 {
        30 + self.index()
    }

    pub const fn background(self) -> u8 {
        40 + self.index()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// `auto` colors only an interactive stdout, and never when `NO_COLOR` is set.
    pub fn resolve(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_tty()
            }
        };
        debug!(?mode, enabled, "palette resolved");
        Self::new(enabled)
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn sequence(&self, params: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m", params)
        } else {
            String::new()
        }
    }

    pub fn start(&self, tone: Tone) -> String {
        self.sequence(tone.sgr())
    }

    pub fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        format!("{}{}{}", self.start(tone), text, self.reset())
    }

    pub fn foreground(&self, color: TermColor) -> String {
        self.sequence(&color.foreground().to_string())
    }

    pub fn background(&self, color: TermColor) -> String {
        self.sequence(&color.background().to_string())
    }

    /// Bold variant used for highlighted matches.
    pub fn emphasis(&self, color: TermColor) -> String {
        self.sequence(&format!("1;{}", color.foreground()))
    }
}
