use crate::config::ColorMode;
use crate::ui::messages::MessageKind;
use crate::ui::TermColor;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal text and color utilities", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, value_name = "FILE", help = "Path to a custom configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, help = "When to use colors")]
    pub color: Option<ColorMode>,

    #[arg(long, global = true, value_name = "COLUMNS", help = "Terminal width to assume")]
    pub width: Option<u16>,

    #[arg(long, global = true, help = "Print the resolved configuration and exit")]
    pub debug_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Printf with word wrapping for every column
    #[command(alias = "printf-wrap", disable_help_flag = true)]
    Wrap {
        #[arg(long, help = "Loop like the shell version when a column cannot advance")]
        compat: bool,

        /// "<format>" "<text>" "<text>" ...
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Fails unless every file exists
    CheckFiles {
        files: Vec<PathBuf>,
    },
    /// Fails unless every folder exists
    CheckFolders {
        folders: Vec<PathBuf>,
    },
    /// Removes comments and blank lines
    RemoveComments {
        #[arg(help = "Comment character(s); any of them starts a comment")]
        marker: String,

        #[arg(help = "Input file (stdin when omitted)")]
        input: Option<PathBuf>,
    },
    /// Prints the text between two patterns
    PrintBlock {
        #[arg(help = "Pattern opening a block")]
        start: String,

        #[arg(help = "Pattern closing a block")]
        end: String,

        #[arg(help = "Input file (stdin when omitted)")]
        input: Option<PathBuf>,
    },
    /// Swaps rows and columns of space separated text
    Transpose {
        #[arg(help = "Input file (stdin when omitted)")]
        input: Option<PathBuf>,
    },
    /// Prints a centered banner across the terminal
    #[command(alias = "print-banner")]
    Banner {
        #[arg(help = "Fill character (defaults to the configured banner_char)")]
        fill: Option<String>,

        #[arg(help = "Text to center in the banner")]
        text: Option<String>,
    },
    /// Runs a command and prints its runtime
    RunWithTime {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Shows every foreground/background color combination
    #[command(alias = "tput-colors")]
    Colors,
    /// Colors every match of a pattern
    Highlight {
        #[arg(value_enum, id = "highlight_color", value_name = "COLOR")]
        color: TermColor,

        pattern: String,

        #[arg(help = "Input file (stdin when omitted)")]
        input: Option<PathBuf>,
    },
    /// Prints a styled message
    Say {
        #[arg(value_enum)]
        kind: MessageKind,

        message: String,

        #[arg(short = 'n', long, help = "Do not print the trailing newline")]
        no_newline: bool,
    },
    /// Waits for Enter
    Pause { message: Option<String> },
    /// Shows the git log in a compact layout
    GitLog {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Lists the available utilities
    List,
}
