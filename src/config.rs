use crate::commands::Cli;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

const DEFAULT_BANNER_CHAR: &str = "=";
const DEFAULT_WRAP_COMPAT: bool = false;
const DEFAULT_SHELL: &str = "sh";
const ENV_PREFIX: &str = "SHKIT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// When to emit color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

// Values as they appear in the file or environment; all optional so layers can merge.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    color: Option<ColorMode>,
    banner_char: Option<String>,
    terminal_width: Option<u16>,
    wrap_compat: Option<bool>,
    shell: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub color: ColorMode,
    pub banner_char: String,
    /// Overrides the detected terminal width when set.
    pub terminal_width: Option<u16>,
    /// Reproduce the endless loop of the shell `printf-wrap` instead of failing.
    pub wrap_compat: bool,
    pub shell: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            color: ColorMode::default(),
            banner_char: DEFAULT_BANNER_CHAR.to_string(),
            terminal_width: None,
            wrap_compat: DEFAULT_WRAP_COMPAT,
            shell: DEFAULT_SHELL.to_string(),
        }
    }
}

/// Loads configuration: defaults, then the config file, then `SHKIT_*` variables,
/// then command-line flags.
pub fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX).separator("__");
    // Unreadable variables are skipped rather than fatal.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config(cli, Some(env_map))
}

pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "shkit")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

// Separate from `load_config` so tests can inject overrides instead of real env vars.
fn build_config(
    cli: &Cli,
    override_source: Option<Map<String, Value>>,
) -> Result<Config, ConfigError> {
    let config_file_path = cli.config.clone().or_else(default_config_path);

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        debug!(path = %path.display(), "config file source");
        // An explicit --config must exist; the default location is optional.
        config_builder =
            config_builder.add_source(File::from(path.clone()).required(cli.config.is_some()));
    }

    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = config_builder.build()?.try_deserialize()?;

    // args > overrides > file > defaults
    let config = Config {
        color: cli.color.or(loaded.color).unwrap_or_default(),
        banner_char: loaded
            .banner_char
            .unwrap_or_else(|| DEFAULT_BANNER_CHAR.to_string()),
        terminal_width: cli.width.or(loaded.terminal_width),
        wrap_compat: loaded.wrap_compat.unwrap_or(DEFAULT_WRAP_COMPAT),
        shell: loaded.shell.unwrap_or_else(|| DEFAULT_SHELL.to_string()),
    };

    validate_config(&config)?;
    debug!(?config, "configuration loaded");
    Ok(config)
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.banner_char.is_empty() {
        return Err(ConfigError::ValidationError(
            "banner_char must not be empty".to_string(),
        ));
    }
    if config.terminal_width == Some(0) {
        return Err(ConfigError::ValidationError(
            "terminal_width must be at least 1".to_string(),
        ));
    }
    if config.shell.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "shell must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use config::ValueKind;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut cmd = vec!["shkit"];
        cmd.extend_from_slice(args);
        cmd.push("colors");
        Cli::try_parse_from(cmd).expect("Failed to parse test args")
    }

    // Points --config at a file that is guaranteed to exist and be empty.
    fn isolated(dir: &TempDir, extra: &[&str]) -> Cli {
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();
        let path = path.to_str().unwrap().to_string();
        let mut args = vec!["--config", path.as_str()];
        args.extend_from_slice(extra);
        cli(&args)
    }

    #[test]
    fn test_default_config() {
        let dir = TempDir::new().unwrap();
        let config = build_config(&isolated(&dir, &[]), None).expect("default config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "color = \"never\"\nbanner_char = \"#\"\nterminal_width = 100\nwrap_compat = true\n",
        )
        .unwrap();

        let config = build_config(&cli(&["--config", path.to_str().unwrap()]), None).unwrap();
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.banner_char, "#");
        assert_eq!(config.terminal_width, Some(100));
        assert!(config.wrap_compat);
    }

    #[test]
    fn test_env_override() {
        let dir = TempDir::new().unwrap();
        let mut override_map = Map::new();
        override_map.insert(
            "terminal_width".to_string(),
            Value::new(None, ValueKind::U64(64)),
        );
        override_map.insert(
            "shell".to_string(),
            Value::new(None, ValueKind::String("bash".to_string())),
        );

        let config = build_config(&isolated(&dir, &[]), Some(override_map)).unwrap();
        assert_eq!(config.terminal_width, Some(64));
        assert_eq!(config.shell, "bash");
        assert_eq!(config.banner_char, DEFAULT_BANNER_CHAR);
    }

    #[test]
    fn test_arg_override() {
        let dir = TempDir::new().unwrap();
        let mut override_map = Map::new();
        override_map.insert(
            "terminal_width".to_string(),
            Value::new(None, ValueKind::U64(64)),
        );

        let args = isolated(&dir, &["--width", "120", "--color", "always"]);
        let config = build_config(&args, Some(override_map)).unwrap();
        assert_eq!(config.terminal_width, Some(120));
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let result = build_config(&cli(&["--config", path.to_str().unwrap()]), None);
        assert!(matches!(result, Err(ConfigError::ConfigFile(_))));
    }

    #[test]
    fn test_empty_banner_char_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "banner_char = \"\"\n").unwrap();
        let result = build_config(&cli(&["--config", path.to_str().unwrap()]), None);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
