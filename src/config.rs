//! Game configuration loaded from TOML.

use crate::games::tictactoe::{DEFAULT_DIMENSION, EngineSettings, TURN_SECONDS};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strum::Display as StrumDisplay;
use tracing::{debug, info, instrument};

/// Color scheme for the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, StrumDisplay)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Game configuration.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    #[serde(default = "default_dimension")]
    dimension: usize,

    /// Seconds each player gets per turn.
    #[serde(default = "default_turn_seconds")]
    turn_seconds: u32,

    /// Length of one countdown tick in milliseconds.
    #[serde(default = "default_tick_millis")]
    tick_millis: u64,

    /// Initial UI theme.
    #[serde(default)]
    theme: Theme,
}

fn default_dimension() -> usize {
    DEFAULT_DIMENSION
}

fn default_turn_seconds() -> u32 {
    TURN_SECONDS
}

fn default_tick_millis() -> u64 {
    1000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            turn_seconds: default_turn_seconds(),
            tick_millis: default_tick_millis(),
            theme: Theme::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml(&content)?;
        info!(
            dimension = config.dimension,
            turn_seconds = config.turn_seconds,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the dimension if one is given.
    pub fn with_dimension(mut self, dimension: Option<usize>) -> Self {
        if let Some(dimension) = dimension {
            self.dimension = dimension;
        }
        self
    }

    /// Replaces the turn length if one is given.
    pub fn with_turn_seconds(mut self, turn_seconds: Option<u32>) -> Self {
        if let Some(turn_seconds) = turn_seconds {
            self.turn_seconds = turn_seconds;
        }
        self
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine_settings()?;
        if self.tick_millis == 0 {
            return Err(ConfigError::new("Tick length must be at least 1 ms".to_string()));
        }
        Ok(())
    }

    /// Engine parameters derived from this configuration.
    pub fn engine_settings(&self) -> Result<EngineSettings, ConfigError> {
        EngineSettings::new(self.dimension, self.turn_seconds)
            .map_err(|e| ConfigError::new(e.to_string()))
    }

    /// Length of one countdown tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
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
    fn test_empty_file_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_file() {
        let config = GameConfig::from_toml("dimension = 4\ntheme = \"dark\"\n").unwrap();
        assert_eq!(*config.dimension(), 4);
        assert_eq!(*config.turn_seconds(), TURN_SECONDS);
        assert_eq!(*config.theme(), Theme::Dark);
    }

    #[test]
    fn test_rejects_zero_turn_seconds() {
        let err = GameConfig::from_toml("turn_seconds = 0").unwrap_err();
        assert!(err.message.contains("Turn seconds"));
    }

    #[test]
    fn test_rejects_oversized_dimension() {
        let config = GameConfig::default().with_dimension(Some(usize::MAX / 2));
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("Board dimension must be between 1 and"));

        let err = GameConfig::from_toml("dimension = 1000").unwrap_err();
        assert!(err.message.contains("got 1000"));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = GameConfig::from_toml("dimension = \"three\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default()
            .with_dimension(Some(5))
            .with_turn_seconds(None);
        assert_eq!(*config.dimension(), 5);
        assert_eq!(*config.turn_seconds(), TURN_SECONDS);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
