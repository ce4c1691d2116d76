//! Flashcard storage module
//!
//! Handles loading and saving the card set as a flat CSV file with a
//! `question,answer` header row. Every save rewrites the whole file.

use std::fs;
use std::path::PathBuf;

use crate::models::Flashcard;
use crate::{QuizDeckError, Result, APP_NAME, CARDS_FILE};

/// Card storage manager
#[derive(Debug)]
pub struct CardStore {
    cards_path: PathBuf,
}

impl CardStore {
    /// Create a card store at the standard data file location
    pub fn new() -> Result<Self> {
        let cards_path = Self::cards_file_path()?;
        Ok(Self { cards_path })
    }

    /// Create a card store backed by a specific file
    pub fn with_path(cards_path: PathBuf) -> Self {
        Self { cards_path }
    }

    /// Get the standard cards file path
    /// Uses $DATA_HOME/quizdeck/flashcards.csv or falls back to $HOME/.local/share/quizdeck/flashcards.csv
    pub fn cards_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            QuizDeckError::StorageError("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(CARDS_FILE))
    }

    /// Load all flashcards from the backing file.
    ///
    /// A missing file is an empty card set, not an error. A file that
    /// exists but cannot be parsed fails the whole load; bad rows are
    /// never silently skipped.
    pub fn load(&self) -> Result<Vec<Flashcard>> {
        if !self.cards_path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.cards_path)
            .map_err(|e| {
                QuizDeckError::StorageError(format!(
                    "Failed to read cards file {}: {}",
                    self.cards_path.display(),
                    e
                ))
            })?;

        let mut cards = Vec::new();
        for record in reader.deserialize() {
            let card: Flashcard = record.map_err(|e| {
                QuizDeckError::StorageError(format!(
                    "Failed to parse cards file {}: {}",
                    self.cards_path.display(),
                    e
                ))
            })?;
            cards.push(card);
        }

        Ok(cards)
    }

    /// Save all flashcards, replacing the backing file entirely.
    ///
    /// The header row is written even for an empty set, so a saved file
    /// is always distinguishable from a missing one.
    pub fn save(&self, cards: &[Flashcard]) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.cards_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuizDeckError::StorageError(format!(
                    "Failed to create cards directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.cards_path)
            .map_err(|e| {
                QuizDeckError::StorageError(format!(
                    "Failed to write cards file {}: {}",
                    self.cards_path.display(),
                    e
                ))
            })?;

        writer
            .write_record(["question", "answer"])
            .map_err(|e| QuizDeckError::StorageError(format!("Failed to write header: {}", e)))?;

        for card in cards {
            writer.serialize(card).map_err(|e| {
                QuizDeckError::StorageError(format!("Failed to serialize card: {}", e))
            })?;
        }

        writer
            .flush()
            .map_err(|e| QuizDeckError::StorageError(format!("Failed to flush cards: {}", e)))?;

        Ok(())
    }

    /// Get the cards file path for external access
    pub fn path(&self) -> &PathBuf {
        &self.cards_path
    }
}
