//! Display and logging settings for the terminal game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Color of X marks.
    #[serde(default = "default_x_color")]
    x_color: Color,

    /// Color of O marks.
    #[serde(default = "default_o_color")]
    o_color: Color,

    /// Background of the winning line when highlighted.
    #[serde(default = "default_highlight_color")]
    highlight_color: Color,

    /// Whether to highlight the completed line once the game is won.
    #[serde(default = "default_highlight_winning_line")]
    highlight_winning_line: bool,

    /// File receiving log output while the terminal UI runs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_x_color() -> Color {
    Color::Blue
}

fn default_o_color() -> Color {
    Color::Red
}

fn default_highlight_color() -> Color {
    Color::Green
}

fn default_highlight_winning_line() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            x_color: default_x_color(),
            o_color: default_o_color(),
            highlight_color: default_highlight_color(),
            highlight_winning_line: default_highlight_winning_line(),
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!("Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let toml = "x_color = \"magenta\"\nhighlight_winning_line = false";
        let settings = Settings::from_toml(toml).unwrap();
        assert_eq!(*settings.x_color(), Color::Magenta);
        assert_eq!(*settings.o_color(), Color::Red);
        assert!(!settings.highlight_winning_line());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::from_toml("x_colour = \"blue\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_with_log_file() {
        let settings = Settings::default().with_log_file(PathBuf::from("other.log"));
        assert_eq!(settings.log_file(), &PathBuf::from("other.log"));
    }
}
