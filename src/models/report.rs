//! Quiz result data models
//!
//! Produced by the grader after all answers are submitted; holds the
//! score and a reviewable listing of the correct answers.

use crate::models::Flashcard;

/// Outcome of grading one full quiz pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    /// Number of answers that matched after normalization
    pub score: usize,
    /// Number of flashcards in the quiz
    pub total: usize,
    /// Correct answers in original card order, for post-quiz review
    pub review: Vec<ReviewEntry>,
}

/// One line of the correct-answer review listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    /// 1-based question number, matching the quiz display
    pub number: usize,
    /// Original question text
    pub question: String,
    /// Stored answer, not normalized
    pub answer: String,
}

impl QuizReport {
    /// Build a report from the graded card set and the match count
    pub fn new(cards: &[Flashcard], score: usize) -> Self {
        let review = cards
            .iter()
            .enumerate()
            .map(|(idx, card)| ReviewEntry {
                number: idx + 1,
                question: card.question.clone(),
                answer: card.answer.clone(),
            })
            .collect();

        Self {
            score,
            total: cards.len(),
            review,
        }
    }

    /// Get a human-readable summary of the quiz outcome
    pub fn summary(&self) -> String {
        format!("You got {} out of {} correct!", self.score, self.total)
    }

    /// Check whether every answer matched
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cards() -> Vec<Flashcard> {
        vec![
            Flashcard::new("2+2", "4"),
            Flashcard::new("Capital of France", "Paris"),
        ]
    }

    #[test]
    fn test_report_review_preserves_order_and_text() {
        let cards = sample_cards();
        let report = QuizReport::new(&cards, 1);

        assert_eq!(report.total, 2);
        assert_eq!(report.score, 1);
        assert_eq!(report.review.len(), 2);
        assert_eq!(report.review[0].number, 1);
        assert_eq!(report.review[0].question, "2+2");
        assert_eq!(report.review[1].number, 2);
        assert_eq!(report.review[1].answer, "Paris");
    }

    #[test]
    fn test_report_summary() {
        let cards = sample_cards();
        let report = QuizReport::new(&cards, 2);
        assert_eq!(report.summary(), "You got 2 out of 2 correct!");
        assert!(report.is_perfect());

        let report = QuizReport::new(&cards, 0);
        assert!(!report.is_perfect());
    }
}
