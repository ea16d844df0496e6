//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tally/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::LogLevel;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<LogLevel>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TuiConfig {
    pub mouse: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "tally.log";
pub const DEFAULT_MOUSE: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub log_level: LogLevel,
    pub log_file: PathBuf,
    pub mouse: bool,
    /// Problems found while resolving, logged as warnings once logging is up
    pub notes: Vec<String>,
}

/// Values given on the command line. `None` means the flag was not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
    pub no_mouse: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tally/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tally").join("config.toml"))
}

/// What happened while loading the config file.
///
/// Loading runs before the logger exists (the log file and level come from
/// the config), so the outcome is returned and written to the log by
/// [`LoadOutcome::log`] once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(PathBuf),
    Generated(PathBuf),
    GenerateFailed { path: PathBuf, error: String },
    NoHomeDir,
}

impl LoadOutcome {
    pub fn log(&self) {
        match self {
            LoadOutcome::Loaded(path) => info!("Loaded config from {}", path.display()),
            LoadOutcome::Generated(path) => info!(
                "No config file found, generated default at {}",
                path.display()
            ),
            LoadOutcome::GenerateFailed { path, error } => warn!(
                "No config file found, failed to write default at {}: {}",
                path.display(),
                error
            ),
            LoadOutcome::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

/// Load config from `~/.tally/config.toml`.
pub fn load_config() -> Result<(TallyConfig, LoadOutcome), ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok((TallyConfig::default(), LoadOutcome::NoHomeDir)),
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TallyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<(TallyConfig, LoadOutcome), ConfigError> {
    if !path.exists() {
        let outcome = match generate_default_config(path) {
            Ok(()) => LoadOutcome::Generated(path.to_path_buf()),
            Err(e) => LoadOutcome::GenerateFailed {
                path: path.to_path_buf(),
                error: e.to_string(),
            },
        };
        return Ok((TallyConfig::default(), outcome));
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TallyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok((config, LoadOutcome::Loaded(path.to_path_buf())))
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Tally Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [logging]
# level = "info"          # "off", "error", "warn", "info", "debug", "trace"
# file = "tally.log"      # Or set TALLY_LOG_FILE env var

# [tui]
# mouse = true            # Click keypad buttons with the mouse
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TallyConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &TallyConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut notes = Vec::new();

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| {
            env("TALLY_LOG_LEVEL").and_then(|raw| {
                let level = LogLevel::parse(&raw);
                if level.is_none() {
                    notes.push(format!("Ignoring unknown TALLY_LOG_LEVEL value {raw:?}"));
                }
                level
            })
        })
        .or(config.logging.level)
        .unwrap_or_default();

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("TALLY_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Mouse: --no-mouse wins, then config
    let mouse = !cli.no_mouse && config.tui.mouse.unwrap_or(DEFAULT_MOUSE);

    ResolvedConfig {
        log_level,
        log_file,
        mouse,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = TallyConfig::default();
        assert!(config.logging.level.is_none());
        assert!(config.tui.mouse.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&TallyConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, LogLevel::Info);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert!(resolved.mouse);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TallyConfig {
            logging: LoggingConfig {
                level: Some(LogLevel::Debug),
                file: Some(PathBuf::from("/tmp/calc.log")),
            },
            tui: TuiConfig { mouse: Some(false) },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, LogLevel::Debug);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/calc.log"));
        assert!(!resolved.mouse);
    }

    #[test]
    fn test_env_overrides_config() {
        let config = TallyConfig {
            logging: LoggingConfig {
                level: Some(LogLevel::Debug),
                file: Some(PathBuf::from("config.log")),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "TALLY_LOG_LEVEL" => Some("error".to_string()),
            "TALLY_LOG_FILE" => Some("env.log".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.log_level, LogLevel::Error);
        assert_eq!(resolved.log_file, PathBuf::from("env.log"));
    }

    #[test]
    fn test_unknown_env_level_falls_through_to_config() {
        let config = TallyConfig {
            logging: LoggingConfig {
                level: Some(LogLevel::Warn),
                file: None,
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "TALLY_LOG_LEVEL").then(|| "chatty".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.log_level, LogLevel::Warn);
        assert_eq!(resolved.notes.len(), 1);
        assert!(resolved.notes[0].contains("chatty"));
    }

    #[test]
    fn test_cli_wins() {
        let config = TallyConfig {
            tui: TuiConfig { mouse: Some(true) },
            ..Default::default()
        };
        let cli = CliOverrides {
            log_level: Some(LogLevel::Trace),
            log_file: Some(PathBuf::from("cli.log")),
            no_mouse: true,
        };
        let env = |key: &str| (key == "TALLY_LOG_LEVEL").then(|| "error".to_string());
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.log_level, LogLevel::Trace);
        assert_eq!(resolved.log_file, PathBuf::from("cli.log"));
        assert!(!resolved.mouse);
    }

    #[test]
    fn test_toml_parse() {
        let toml_str = r#"
[logging]
level = "debug"
file = "/var/log/tally.log"

[tui]
mouse = false
"#;
        let config: TallyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.level, Some(LogLevel::Debug));
        assert_eq!(
            config.logging.file.as_deref(),
            Some(Path::new("/var/log/tally.log"))
        );
        assert_eq!(config.tui.mouse, Some(false));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[tui]
mouse = false
"#;
        let config: TallyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tui.mouse, Some(false));
        assert!(config.logging.level.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_bad_level_is_parse_error() {
        let result: Result<TallyConfig, _> = toml::from_str("[logging]\nlevel = \"loud\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("tally-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let (config, outcome) = load_config_from(&path).unwrap();
        assert!(config.logging.level.is_none());
        assert_eq!(outcome, LoadOutcome::Generated(path.clone()));

        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.starts_with("# Tally Configuration"));
        // The generated file is all comments, so it loads as defaults too.
        let (reloaded, outcome) = load_config_from(&path).unwrap();
        assert!(reloaded.tui.mouse.is_none());
        assert_eq!(outcome, LoadOutcome::Loaded(path.clone()));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("tally-config-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[logging\nlevel = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_generate_failure_is_reported_not_fatal() {
        let dir = std::env::temp_dir().join(format!("tally-config-blocked-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        // A plain file where the config directory should be
        let blocker = dir.join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        let (config, outcome) = load_config_from(&path).unwrap();
        assert!(config.tui.mouse.is_none());
        assert!(matches!(outcome, LoadOutcome::GenerateFailed { .. }));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_resolve_without_problems_has_no_notes() {
        let resolved = resolve_with_env(&TallyConfig::default(), &CliOverrides::default(), no_env);
        assert!(resolved.notes.is_empty());
    }
}
