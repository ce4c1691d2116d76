//! Configuration management module
//!
//! Handles loading, saving, and validation of application settings:
//! where the flashcard file lives and how quiz results are presented.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{QuizDeckError, Result, APP_NAME, CARDS_FILE, CONFIG_FILE};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path of the flashcard CSV file
    pub cards_path: PathBuf,
    /// Whether to show the correct-answer review listing after grading
    pub show_review: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let cards_path = dirs::data_dir()
            .map(|dir| dir.join(APP_NAME).join(CARDS_FILE))
            .unwrap_or_else(|| PathBuf::from(CARDS_FILE));

        Self {
            cards_path,
            show_review: true,
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.cards_path.as_os_str().is_empty() {
            return Err(QuizDeckError::ConfigError(
                "Cards path must not be empty".to_string(),
            ));
        }

        if self.cards_path.file_name().is_none() {
            return Err(QuizDeckError::ConfigError(format!(
                "Cards path is not a file path: {}",
                self.cards_path.display()
            )));
        }

        Ok(())
    }

    /// Set the flashcard file path
    pub fn with_cards_path(mut self, path: PathBuf) -> Self {
        self.cards_path = path;
        self
    }

    /// Set whether the review listing is shown after grading
    pub fn with_show_review(mut self, show: bool) -> Self {
        self.show_review = show;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            QuizDeckError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            QuizDeckError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuizDeckError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            QuizDeckError::ConfigError(format!("Failed to serialize configuration: {}", e))
        })?;

        fs::write(&config_path, content).map_err(|e| {
            QuizDeckError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/quizdeck/quizdeck.toml or falls back to $HOME/.config/quizdeck/quizdeck.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            QuizDeckError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config
            .cards_path
            .to_string_lossy()
            .contains("flashcards.csv"));
        assert!(config.show_review);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default()
            .with_cards_path(PathBuf::from("/tmp/cards.csv"))
            .with_show_review(false);

        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: AppConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");

        assert_eq!(config.cards_path, deserialized.cards_path);
        assert_eq!(config.show_review, deserialized.show_review);
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = AppConfig::default().with_cards_path(PathBuf::new());
        assert!(matches!(
            config.validate().unwrap_err(),
            QuizDeckError::ConfigError(_)
        ));
    }

    #[test]
    fn test_config_file_path() {
        let path = AppConfig::config_file_path().unwrap();
        assert!(path.to_string_lossy().contains("quizdeck"));
        assert!(path.to_string_lossy().contains("quizdeck.toml"));
    }
}
