//! # CLI Configuration
//!
//! Configuration management for the `ariary` command.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --format json                                                      │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     ARIARY_FORMAT=json                                                 │
//! │     ARIARY_LOG=debug                                                   │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/ariary/ariary.toml (Linux)                               │
//! │     ~/Library/Application Support/mg.ariary.ariary/ariary.toml (macOS) │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     format = text, log filter = warn                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # ariary.toml
//! [output]
//! format = "json"   # text | json
//!
//! [logging]
//! filter = "ariary_cli=debug"
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{CliResult, ConfigError};

/// Environment variable overriding the output format.
pub const FORMAT_ENV: &str = "ARIARY_FORMAT";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "ARIARY_LOG";

// =============================================================================
// Output Format
// =============================================================================

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One phrase per line.
    #[default]
    Text,

    /// JSON records, for scripts and the template builders.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl CliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (ariary.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Configuration for one `ariary` invocation.
    ///
    /// An explicit `--config` file must load; a broken per-user file only
    /// warns and falls back to defaults. The `--format` flag wins over both.
    pub fn resolve(
        config_path: Option<PathBuf>,
        format_flag: Option<OutputFormat>,
    ) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::load(Some(path))?,
            None => Self::load_or_default(None),
        };

        if let Some(format) = format_flag {
            config.output.format = format;
        }

        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides looked up by environment variable name.
    ///
    /// Unparsable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup(FORMAT_ENV) {
            match format.parse() {
                Ok(parsed) => {
                    debug!(format = %format, "Overriding output format from environment");
                    self.output.format = parsed;
                }
                Err(e) => warn!(format = %format, error = %e, "Ignoring output format override"),
            }
        }

        if let Some(filter) = lookup(LOG_ENV) {
            debug!(filter = %filter, "Overriding log filter from environment");
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("mg", "ariary", "ariary")
            .map(|dirs| dirs.config_dir().join("ariary.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::logging::build_subscriber;
    use crate::logging::tests::CapturedLogs;
    use std::collections::HashMap;
    use std::io::Write;
    use tracing_subscriber::EnvFilter;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.logging.filter, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [output]
            format = "json"

            [logging]
            filter = "ariary_cli=debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.filter, "ariary_cli=debug");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: CliConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config.apply_overrides(env(&[(FORMAT_ENV, "json"), (LOG_ENV, "debug")]));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_bad_env_format_is_ignored() {
        let mut config = CliConfig::default();
        config.apply_overrides(env(&[(FORMAT_ENV, "xml")]));
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_empty_log_filter_is_rejected() {
        let mut config = CliConfig::default();
        config.logging.filter = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output\nformat = ").unwrap();

        assert!(matches!(
            CliConfig::from_file(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            CliConfig::from_file(&dir.path().join("absent.toml")),
            Err(ConfigError::LoadFailed(_))
        ));
    }

    #[test]
    fn test_bad_env_format_logs_warning() {
        let logs = CapturedLogs::default();
        let (subscriber, _handle) = build_subscriber(EnvFilter::new("warn"), logs.clone());

        let mut config = CliConfig::default();
        tracing::subscriber::with_default(subscriber, || {
            config.apply_overrides(env(&[(FORMAT_ENV, "xml")]));
        });

        let output = logs.contents();
        assert!(output.contains("Ignoring output format override"), "{}", output);
        assert!(output.contains("xml"), "{}", output);
    }

    #[test]
    fn test_env_overrides_log_at_debug() {
        let logs = CapturedLogs::default();
        let (subscriber, _handle) = build_subscriber(EnvFilter::new("debug"), logs.clone());

        let mut config = CliConfig::default();
        tracing::subscriber::with_default(subscriber, || {
            config.apply_overrides(env(&[(FORMAT_ENV, "json"), (LOG_ENV, "trace")]));
        });

        let output = logs.contents();
        assert!(output.contains("Overriding output format from environment"));
        assert!(output.contains("Overriding log filter from environment"));
    }

    #[test]
    fn test_load_or_default_falls_back_with_warning() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output\nformat = ").unwrap();

        let logs = CapturedLogs::default();
        let (subscriber, _handle) = build_subscriber(EnvFilter::new("warn"), logs.clone());

        let config = tracing::subscriber::with_default(subscriber, || {
            CliConfig::load_or_default(Some(file.path().to_path_buf()))
        });

        assert_eq!(config, CliConfig::default());
        assert!(logs.contents().contains("Failed to load config"));
    }

    #[test]
    fn test_resolve_explicit_bad_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output\nformat = ").unwrap();

        assert!(matches!(
            CliConfig::resolve(Some(file.path().to_path_buf()), None),
            Err(CliError::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn test_resolve_flag_wins_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"text\"").unwrap();

        let config =
            CliConfig::resolve(Some(file.path().to_path_buf()), Some(OutputFormat::Json)).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }
}
