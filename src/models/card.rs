//! Flashcard data model
//!
//! The atomic unit of study content: a question/answer pair. Field order
//! matters, it defines the column order of the persisted CSV file.

use serde::{Deserialize, Serialize};

use crate::{QuizDeckError, Result};

/// A single flashcard: question text plus the expected answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Question shown to the user
    pub question: String,
    /// Expected answer, stored exactly as entered
    pub answer: String,
}

impl Flashcard {
    /// Create a flashcard without validating the fields
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Create a flashcard, rejecting empty fields.
    ///
    /// Only the literal empty string is rejected; whitespace-only input is
    /// accepted and stored untrimmed. Trimming happens at quiz-comparison
    /// time, never at storage time.
    pub fn create(question: impl Into<String>, answer: impl Into<String>) -> Result<Self> {
        let question = question.into();
        let answer = answer.into();

        if question.is_empty() || answer.is_empty() {
            return Err(QuizDeckError::ValidationError(
                "question and answer must both be non-empty".to_string(),
            ));
        }

        Ok(Self { question, answer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_valid_card() {
        let card = Flashcard::create("2+2", "4").unwrap();
        assert_eq!(card.question, "2+2");
        assert_eq!(card.answer, "4");
    }

    #[test]
    fn test_create_rejects_empty_fields() {
        assert!(Flashcard::create("", "x").is_err());
        assert!(Flashcard::create("x", "").is_err());
        assert!(Flashcard::create("", "").is_err());
    }

    #[test]
    fn test_whitespace_only_fields_accepted() {
        // Matches the original behavior: only truly empty input is invalid
        let card = Flashcard::create("  ", " ").unwrap();
        assert_eq!(card.question, "  ");
        assert_eq!(card.answer, " ");
    }

    #[test]
    fn test_stored_values_untrimmed() {
        let card = Flashcard::create(" Capital of France ", " Paris ").unwrap();
        assert_eq!(card.question, " Capital of France ");
        assert_eq!(card.answer, " Paris ");
    }
}
