//! QUIZDECK - Flashcard Quiz TUI
//!
//! A terminal application for creating flashcards, reviewing them,
//! and taking self-graded quizzes backed by a flat CSV file.

use std::fmt;

// Public re-exports
pub mod app;
pub mod config;
pub mod models;
pub mod quiz;
pub mod store;

// Common error types
#[derive(Debug)]
pub enum QuizDeckError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Card storage read/write or parse error
    StorageError(String),
    /// A required input field was left empty
    ValidationError(String),
    /// An operation needs at least one flashcard
    EmptyDeck(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for QuizDeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizDeckError::IoError(err) => write!(f, "I/O error: {}", err),
            QuizDeckError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            QuizDeckError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            QuizDeckError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            QuizDeckError::EmptyDeck(msg) => write!(f, "Empty deck: {}", msg),
            QuizDeckError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for QuizDeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizDeckError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuizDeckError {
    fn from(err: std::io::Error) -> Self {
        QuizDeckError::IoError(err)
    }
}

impl From<csv::Error> for QuizDeckError {
    fn from(err: csv::Error) -> Self {
        QuizDeckError::StorageError(format!("CSV error: {}", err))
    }
}

impl From<toml::de::Error> for QuizDeckError {
    fn from(err: toml::de::Error) -> Self {
        QuizDeckError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for QuizDeckError {
    fn from(err: toml::ser::Error) -> Self {
        QuizDeckError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for QUIZDECK operations
pub type Result<T> = std::result::Result<T, QuizDeckError>;

/// Error handling utilities
pub mod error {
    use super::QuizDeckError;

    /// Check if an error is an informational warning rather than a failure.
    ///
    /// Warnings short-circuit an operation but leave the session healthy;
    /// the UI renders them on the status line without error styling.
    pub fn is_warning(error: &QuizDeckError) -> bool {
        matches!(error, QuizDeckError::EmptyDeck(_))
    }

    /// Convert error to user-friendly status-line message
    pub fn user_friendly_message(error: &QuizDeckError) -> String {
        match error {
            QuizDeckError::ValidationError(_) => "Both fields are required.".to_string(),
            QuizDeckError::EmptyDeck(_) => {
                "No flashcards available. Add some first!".to_string()
            }
            QuizDeckError::StorageError(msg) => {
                format!("Failed to access flashcard storage: {}", msg)
            }
            QuizDeckError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "quizdeck";
pub const CONFIG_FILE: &str = "quizdeck.toml";
pub const CARDS_FILE: &str = "flashcards.csv";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_classification() {
        assert!(error::is_warning(&QuizDeckError::EmptyDeck("x".into())));
        assert!(!error::is_warning(&QuizDeckError::ValidationError("x".into())));
        assert!(!error::is_warning(&QuizDeckError::StorageError("x".into())));
    }

    #[test]
    fn test_user_friendly_messages() {
        let msg = error::user_friendly_message(&QuizDeckError::ValidationError("x".into()));
        assert!(msg.contains("required"));

        let msg = error::user_friendly_message(&QuizDeckError::EmptyDeck("x".into()));
        assert!(msg.contains("No flashcards"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: QuizDeckError = io_err.into();
        assert!(matches!(err, QuizDeckError::IoError(_)));
        assert!(err.to_string().contains("I/O error"));
    }
}
