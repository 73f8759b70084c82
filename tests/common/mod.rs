use shkit::wrap::{ColumnWrapper, WrapMode};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Collect every line of a guarded wrap, panicking on errors
#[allow(dead_code)]
pub fn wrap_lines(format: &str, fields: &[&str]) -> Vec<String> {
    ColumnWrapper::new(format, fields.iter().copied(), WrapMode::Guarded)
        .expect("wrapper should build")
        .collect::<Result<_, _>>()
        .expect("wrap should not fail")
}

/// Slices taken from one column across the whole wrap
#[allow(dead_code)]
pub fn column_slices(format: &str, fields: &[&str], column: usize) -> Vec<String> {
    let mut wrapper = ColumnWrapper::new(format, fields.iter().copied(), WrapMode::Guarded)
        .expect("wrapper should build");
    let mut slices = Vec::new();
    while !wrapper.is_exhausted() {
        let taken = wrapper.next_slices();
        assert!(
            taken.iter().any(|slice| !slice.is_empty()),
            "wrap stalled on {:?}",
            wrapper.remaining()
        );
        slices.push(taken[column].clone());
    }
    slices
}

/// Write a fixture file and return its path
#[allow(dead_code)]
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Run the built binary with colors off and an empty config file
#[allow(dead_code)]
pub fn run_shkit(args: &[&str], stdin: Option<&str>) -> Output {
    run_shkit_with_config("", args, stdin)
}

/// Run the built binary with colors off and the given config file contents
#[allow(dead_code)]
pub fn run_shkit_with_config(config_toml: &str, args: &[&str], stdin: Option<&str>) -> Output {
    let config_dir = tempfile::TempDir::new().unwrap();
    let config = write_fixture(config_dir.path(), "config.toml", config_toml);

    let mut command = Command::new(env!("CARGO_BIN_EXE_shkit"));
    command
        .arg("--config")
        .arg(&config)
        .arg("--color")
        .arg("never")
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for key in ["COLOR", "BANNER_CHAR", "TERMINAL_WIDTH", "WRAP_COMPAT", "SHELL"] {
        command.env_remove(format!("SHKIT_{key}"));
    }

    let mut child = command.spawn().expect("failed to start shkit");
    if let Some(text) = stdin {
        child
            .stdin
            .take()
            .unwrap()
            .write_all(text.as_bytes())
            .unwrap();
    }
    // Dropping stdin closes it for commands that read to the end
    drop(child.stdin.take());
    child.wait_with_output().expect("shkit did not finish")
}

#[allow(dead_code)]
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[allow(dead_code)]
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
