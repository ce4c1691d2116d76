//! Quiz grading module
//!
//! Compares submitted answers against stored answers and produces a
//! score plus a reviewable correct-answer listing.

use std::collections::HashMap;

use crate::models::{Flashcard, QuizReport};
use crate::{QuizDeckError, Result};

/// Submitted answers keyed by 0-based question position.
///
/// Transient: rebuilt for every quiz pass and discarded after grading.
pub type AnswerSheet = HashMap<usize, String>;

/// Normalize an answer for comparison: strip surrounding whitespace,
/// then lowercase. Stored values are never modified.
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Grade a full quiz pass.
///
/// Every card is compared against the submitted answer at its position;
/// a missing entry grades as the empty string. Matching is exact string
/// equality after normalization, with no partial credit.
pub fn grade(cards: &[Flashcard], answers: &AnswerSheet) -> Result<QuizReport> {
    if cards.is_empty() {
        return Err(QuizDeckError::EmptyDeck(
            "no flashcards to quiz".to_string(),
        ));
    }

    let score = cards
        .iter()
        .enumerate()
        .filter(|(idx, card)| {
            let submitted = answers.get(idx).map(String::as_str).unwrap_or("");
            normalize(&card.answer) == normalize(submitted)
        })
        .count();

    Ok(QuizReport::new(cards, score))
}
