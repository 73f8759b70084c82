//! Child processes: timed shell commands and the pretty git log.

use std::process::{Command, ExitStatus};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

pub const GIT_LOG_FORMAT: &str = "format:%C(blue)%h%C(reset) - %C(green)(%ar)%C(reset) %C(white)%s%C(reset) %C(dim white)- %an%C(reset)%C(auto)%d%C(reset)";

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a timed run.
#[derive(Debug, Clone, Copy)]
pub struct TimedRun {
    pub status: ExitStatus,
    pub elapsed: Duration,
}

impl TimedRun {
    pub fn report(&self) -> String {
        format!("Runtime: {}", format_runtime(self.elapsed))
    }
}

/// Whole seconds as `HH:MM:SS`; hours keep counting past a day.
pub fn format_runtime(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Builds the shell invocation for `words`; with no words the script comes from stdin.
pub fn shell_command(shell: &str, words: &[String]) -> Command {
    let mut command = Command::new(shell);
    if words.is_empty() {
        command.arg("-s");
    } else {
        command.arg("-c").arg(words.join(" "));
    }
    command
}

/// Runs `words` through `shell` with inherited stdio and measures wall time.
pub fn run_with_time(shell: &str, words: &[String]) -> Result<TimedRun, RunError> {
    let started = Instant::now();
    debug!(shell, command = %words.join(" "), "running timed command");
    let status = spawn_and_wait(shell_command(shell, words), shell)?;
    let elapsed = started.elapsed();
    debug!(?status, ?elapsed, "timed command finished");
    Ok(TimedRun { status, elapsed })
}

pub fn git_log_command(extra_args: &[String]) -> Command {
    let mut command = Command::new("git");
    command
        .arg("log")
        .arg("--decorate=short")
        .arg("--date=relative")
        .arg("--date-order")
        .arg(format!("--format={}", GIT_LOG_FORMAT))
        .args(extra_args);
    command
}

pub fn git_log(extra_args: &[String]) -> Result<ExitStatus, RunError> {
    spawn_and_wait(git_log_command(extra_args), "git")
}

fn spawn_and_wait(mut command: Command, program: &str) -> Result<ExitStatus, RunError> {
    command
        .spawn()
        .and_then(|mut child| child.wait())
        .map_err(|source| RunError::Spawn {
            program: program.to_string(),
            source,
        })
}
