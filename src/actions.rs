use crate::app::AppState;
use crate::checks;
use crate::commands::Commands;
use crate::errors::AppResult;
use crate::filters;
use crate::io::{open_input, write_lines, IoError};
use crate::runner;
use crate::ui::{banner, color_demo, help, messages};
use crate::wrap::{self, Invocation, WrapMode};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::ExitStatus;
use tracing::debug;

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;

/// Runs one subcommand, writing its regular output to `out`, and returns the exit status.
pub fn execute_action<W: Write>(command: Commands, app: &AppState, out: &mut W) -> Result<u8> {
    debug!(?command, "executing");
    match command {
        Commands::Wrap { compat, args } => wrap_columns(&args, app.wrap_mode(compat), out)?,
        Commands::CheckFiles { files } => checks::check_files(&files)?,
        Commands::CheckFolders { folders } => checks::check_folders(&folders)?,
        Commands::RemoveComments { marker, input } => {
            filters::remove_comments(&marker, open_input(input.as_deref())?, out)?
        }
        Commands::PrintBlock { start, end, input } => {
            filters::print_block(&start, &end, open_input(input.as_deref())?, out)?
        }
        Commands::Transpose { input } => filters::transpose(open_input(input.as_deref())?, out)?,
        Commands::Highlight {
            color,
            pattern,
            input,
        } => filters::highlight(&app.palette, color, &pattern, open_input(input.as_deref())?, out)?,
        Commands::Banner { fill, text } => {
            let fill = fill.unwrap_or_else(|| app.config.banner_char.clone());
            let line = banner::banner(&fill, text.as_deref(), usize::from(app.terminal_width));
            write_lines(out, [line])?;
        }
        Commands::Colors => write_lines(out, color_demo::color_matrix(&app.palette))?,
        Commands::Say {
            kind,
            message,
            no_newline,
        } => {
            let rendered = messages::render(kind, &message, &app.palette);
            if no_newline {
                write!(out, "{}", rendered)?;
            } else {
                writeln!(out, "{}", rendered)?;
            }
            out.flush()?;
            if kind.is_failure() {
                return Ok(FAILURE);
            }
        }
        Commands::Pause { message } => {
            let mut input = io::stdin().lock();
            messages::pause(&app.palette, message.as_deref(), &mut input, out)?;
        }
        Commands::RunWithTime { command } => {
            let run = runner::run_with_time(&app.config.shell, &command)
                .context("run-with-time could not start the shell")?;
            write_lines(out, [run.report()])?;
            return Ok(exit_code(run.status));
        }
        Commands::GitLog { args } => return Ok(exit_code(runner::git_log(&args)?)),
        Commands::List => {
            let lines = help::catalog_lines()?;
            out.write_all(lines.concat().as_bytes())?;
            out.flush()?;
        }
    }
    Ok(SUCCESS)
}

/// `printf-wrap`: help text, or one template line per wrap iteration.
pub fn wrap_columns<W: Write>(args: &[String], mode: WrapMode, out: &mut W) -> AppResult<()> {
    match wrap::invoke(args, mode)? {
        Invocation::Help => write_lines(out, [wrap::USAGE])?,
        Invocation::Wrap(wrapper) => {
            for line in wrapper {
                let line = line?;
                out.write_all(line.as_bytes()).map_err(IoError::from)?;
            }
            out.flush().map_err(IoError::from)?;
        }
    }
    Ok(())
}

// Signals and codes outside 0..=255 count as plain failure.
fn exit_code(status: ExitStatus) -> u8 {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(FAILURE)
}
