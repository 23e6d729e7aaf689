//! Configuration management for multicomplete
//!
//! This module handles loading, parsing, and managing configuration from various sources:
//! - Configuration files (TOML format)
//! - Command-line arguments
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::completion::{CaseSensitivity, MatchMode, Separator, TokenAutocompleteEngine};
use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Completion editor configuration
    #[serde(default)]
    pub editor: EditorConfig,

    /// History configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Token completion and line editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Character dividing the buffer into tokens
    #[serde(default)]
    pub separator: Separator,

    /// Append the separator and a space after each accepted completion
    #[serde(default = "default_add_space_after_completing")]
    pub add_space_after_completing: bool,

    /// How candidates are matched (prefix, substring)
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Whether matching distinguishes case (sensitive, insensitive)
    #[serde(default)]
    pub case_sensitivity: CaseSensitivity,

    /// Completion candidates
    #[serde(default)]
    pub vocabulary: Vec<String>,

    /// Label shown in front of the input line
    #[serde(default = "default_header")]
    pub header: String,

    /// Hint rendered as the right-hand prompt
    #[serde(default)]
    pub placeholder: String,

    /// Flag tokens that are not in the vocabulary
    #[serde(default = "default_highlight_unknown")]
    pub highlight_unknown: bool,
}

/// Command history configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of history entries
    #[serde(default = "default_max_history_size")]
    pub max_size: usize,

    /// Path to history file
    #[serde(default = "default_history_file")]
    pub file_path: PathBuf,

    /// Enable history persistence
    #[serde(default = "default_persist_history")]
    pub persist: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_add_space_after_completing() -> bool {
    true
}

fn default_header() -> String {
    "tokens".to_string()
}

fn default_highlight_unknown() -> bool {
    true
}

fn default_max_history_size() -> usize {
    1000
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".multicomplete")
}

fn default_history_file() -> PathBuf {
    config_dir().join("history.txt")
}

fn default_persist_history() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            separator: Separator::default(),
            add_space_after_completing: default_add_space_after_completing(),
            match_mode: MatchMode::default(),
            case_sensitivity: CaseSensitivity::default(),
            vocabulary: Vec::new(),
            header: default_header(),
            placeholder: String::new(),
            highlight_unknown: default_highlight_unknown(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_history_size(),
            file_path: default_history_file(),
            persist: default_persist_history(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a file
    ///
    /// With `None`, the default path is used and a missing file yields the
    /// default configuration. An explicitly named file must exist.
    ///
    /// # Arguments
    /// * `path` - Optional path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - Path to default configuration file
    pub fn default_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Save configuration to a file
    ///
    /// # Arguments
    /// * `path` - Path where to save the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.history.max_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history.max_size".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl EditorConfig {
    /// Build an engine with these settings and an empty buffer
    pub fn build_engine(&self) -> Result<TokenAutocompleteEngine> {
        TokenAutocompleteEngine::builder()
            .vocabulary(self.vocabulary.iter().cloned())
            .separator(self.separator.as_char())
            .add_space_after_completing(self.add_space_after_completing)
            .match_mode(self.match_mode)
            .case_sensitivity(self.case_sensitivity)
            .build()
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MulticompleteError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.editor.separator.as_char(), ',');
        assert!(config.editor.add_space_after_completing);
        assert_eq!(config.editor.match_mode, MatchMode::PrefixAtTokenStart);
        assert_eq!(config.editor.case_sensitivity, CaseSensitivity::Insensitive);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = Config::from_toml_str(
            r#"
            [editor]
            separator = ";"
            match_mode = "substring"
            case_sensitivity = "sensitive"
            vocabulary = ["Monday", "Sunday"]

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.editor.separator.as_char(), ';');
        assert_eq!(config.editor.match_mode, MatchMode::SubstringAnywhere);
        assert_eq!(config.editor.case_sensitivity, CaseSensitivity::Sensitive);
        assert_eq!(config.editor.vocabulary, vec!["Monday", "Sunday"]);
        assert_eq!(config.editor.header, "tokens");
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.history.max_size, 1000);
    }

    #[test]
    fn test_empty_separator_rejected() {
        let err = Config::from_toml_str("[editor]\nseparator = \"\"\n").unwrap_err();
        assert!(matches!(
            err,
            MulticompleteError::Config(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_history_size() {
        let mut config = Config::default();
        config.history.max_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_custom_separator() {
        let config = Config::from_toml_str("[editor]\nseparator = \";\"\nplaceholder = \"days\"\n").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.editor.placeholder, "days");

        assert!(Config::from_toml_str("[editor]\nseparator = \"\\u0007\"\n").is_err());
    }

    #[test]
    fn test_build_engine_uses_settings() {
        let config = Config::from_toml_str(
            "[editor]\nseparator = \"|\"\nadd_space_after_completing = false\nvocabulary = [\"red\", \"green\"]\n",
        )
        .unwrap();
        let mut engine = config.editor.build_engine().unwrap();
        engine.set_text("red|gr");
        engine.accept_completion("green").unwrap();
        assert_eq!(engine.text(), "red|green");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("multicomplete-config-{}", std::process::id()))
            .join("config.toml");
        let mut config = Config::default();
        config.editor.vocabulary = vec!["alpha".to_string()];
        config.editor.header = "Tags".to_string();

        config.save(&path).unwrap();
        let loaded = Config::load_from_file(Some(&path)).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_explicit_file() {
        let path = std::env::temp_dir().join("multicomplete-does-not-exist.toml");
        assert!(matches!(
            Config::load_from_file(Some(&path)),
            Err(MulticompleteError::Config(ConfigError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
    }
}
