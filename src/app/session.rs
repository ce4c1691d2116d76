//! Session state and screen navigation
//!
//! Holds the per-session mutable state: the card set, the active screen,
//! and quiz bookkeeping. Constructed once per session; every card
//! mutation is written through to storage before it is considered done.

use crate::models::{Flashcard, QuizReport};
use crate::quiz::{self, AnswerSheet};
use crate::store::CardStore;
use crate::Result;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Menu screen with Add Flashcards, Take Quiz, View Flashcards
    Home,
    /// Flashcard entry form
    Add,
    /// Card listing
    View,
    /// All-questions-at-once quiz
    Quiz,
}

impl Default for Screen {
    fn default() -> Self {
        Self::Home
    }
}

/// Per-session mutable state
///
/// Every screen can reach every other screen directly; entering the quiz
/// screen resets the quiz bookkeeping as a transition side effect.
#[derive(Debug)]
pub struct SessionState {
    cards: Vec<Flashcard>,
    screen: Screen,
    quiz_index: usize,
    score: usize,
    quiz_active: bool,
}

impl SessionState {
    /// Create a session, loading the card set from storage
    pub fn new(store: &CardStore) -> Result<Self> {
        Ok(Self::with_cards(store.load()?))
    }

    /// Create a session from an in-memory card set
    pub fn with_cards(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            screen: Screen::Home,
            quiz_index: 0,
            score: 0,
            quiz_active: false,
        }
    }

    /// Get the current card set
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Get the active screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Get the score recorded by the last graded quiz
    pub fn score(&self) -> usize {
        self.score
    }

    /// Check whether a quiz pass is in progress
    pub fn quiz_active(&self) -> bool {
        self.quiz_active
    }

    /// Get the quiz cursor position.
    ///
    /// Reset on quiz entry but never advanced: the quiz renders all
    /// questions at once, so this is a vestige of a one-question-at-a-time
    /// flow kept for compatibility.
    pub fn quiz_index(&self) -> usize {
        self.quiz_index
    }

    /// Switch to another screen.
    ///
    /// Entering the quiz screen resets the quiz bookkeeping regardless of
    /// prior state. No other transition touches the card set or quiz
    /// state.
    pub fn navigate(&mut self, target: Screen) {
        if target == Screen::Quiz {
            self.quiz_index = 0;
            self.score = 0;
            self.quiz_active = true;
        }
        self.screen = target;
    }

    /// Append a new flashcard and write the full set through to storage.
    ///
    /// Either field empty: validation error, nothing changes. A failed
    /// save rolls the append back so memory and file stay consistent.
    pub fn add_card(&mut self, store: &CardStore, question: &str, answer: &str) -> Result<()> {
        let card = Flashcard::create(question, answer)?;
        self.cards.push(card);

        if let Err(err) = store.save(&self.cards) {
            self.cards.pop();
            return Err(err);
        }

        Ok(())
    }

    /// Grade a completed quiz pass and record the score
    pub fn submit_quiz(&mut self, answers: &AnswerSheet) -> Result<QuizReport> {
        let report = quiz::grade(&self.cards, answers)?;
        self.score = report.score;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_cards() -> Vec<Flashcard> {
        vec![
            Flashcard::new("2+2", "4"),
            Flashcard::new("Capital of France", "Paris"),
        ]
    }

    #[test]
    fn test_session_defaults() {
        let session = SessionState::with_cards(Vec::new());
        assert_eq!(session.screen(), Screen::Home);
        assert_eq!(session.score(), 0);
        assert_eq!(session.quiz_index(), 0);
        assert!(!session.quiz_active());
    }

    #[test]
    fn test_session_loads_from_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = CardStore::with_path(temp_dir.path().join("flashcards.csv"));
        store.save(&sample_cards()).unwrap();

        let session = SessionState::new(&store).unwrap();
        assert_eq!(session.cards(), sample_cards().as_slice());
    }

    #[test]
    fn test_quiz_entry_resets_quiz_state() {
        let mut session = SessionState::with_cards(sample_cards());
        session.score = 5;
        session.quiz_index = 3;

        session.navigate(Screen::Quiz);
        assert_eq!(session.screen(), Screen::Quiz);
        assert_eq!(session.score(), 0);
        assert_eq!(session.quiz_index(), 0);
        assert!(session.quiz_active());

        // Re-entry resets again
        session.score = 2;
        session.navigate(Screen::Home);
        session.navigate(Screen::Quiz);
        assert_eq!(session.score(), 0);
        assert!(session.quiz_active());
    }

    #[test]
    fn test_navigation_independence() {
        let mut session = SessionState::with_cards(sample_cards());
        session.navigate(Screen::Quiz);
        session.submit_quiz(&AnswerSheet::new()).ok();

        let cards_before = session.cards().to_vec();
        let score_before = session.score();

        session.navigate(Screen::View);
        assert_eq!(session.cards(), cards_before.as_slice());
        assert_eq!(session.score(), score_before);
        assert!(session.quiz_active());

        session.navigate(Screen::Add);
        assert_eq!(session.cards(), cards_before.as_slice());
    }

    #[test]
    fn test_every_screen_reaches_every_other() {
        let screens = [Screen::Home, Screen::Add, Screen::View, Screen::Quiz];
        for &from in &screens {
            for &to in &screens {
                let mut session = SessionState::with_cards(Vec::new());
                session.navigate(from);
                session.navigate(to);
                assert_eq!(session.screen(), to);
            }
        }
    }

    #[test]
    fn test_add_card_appends_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let store = CardStore::with_path(temp_dir.path().join("flashcards.csv"));
        let mut session = SessionState::new(&store).unwrap();

        session.add_card(&store, "2+2", "4").unwrap();
        session.add_card(&store, "1+1", "2").unwrap();

        assert_eq!(session.cards().len(), 2);
        assert_eq!(session.cards()[1], Flashcard::new("1+1", "2"));
        // The file reflects exactly the in-memory set
        assert_eq!(store.load().unwrap(), session.cards());
    }

    #[test]
    fn test_add_card_validation_leaves_set_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let store = CardStore::with_path(temp_dir.path().join("flashcards.csv"));
        let mut session = SessionState::with_cards(sample_cards());

        for (question, answer) in [("", "x"), ("x", ""), ("", "")] {
            let err = session.add_card(&store, question, answer).unwrap_err();
            assert!(matches!(err, crate::QuizDeckError::ValidationError(_)));
            assert_eq!(session.cards(), sample_cards().as_slice());
        }
        // No save happened either
        assert!(!store.path().exists());
    }

    #[test]
    fn test_add_card_rolls_back_on_save_failure() {
        let temp_dir = TempDir::new().unwrap();
        // A directory at the target path makes the save fail
        let bad_path = temp_dir.path().join("flashcards.csv");
        std::fs::create_dir(&bad_path).unwrap();
        let store = CardStore::with_path(bad_path);

        let mut session = SessionState::with_cards(sample_cards());
        assert!(session.add_card(&store, "q", "a").is_err());
        assert_eq!(session.cards(), sample_cards().as_slice());
    }

    #[test]
    fn test_submit_quiz_records_score() {
        let mut session = SessionState::with_cards(sample_cards());
        session.navigate(Screen::Quiz);

        let mut answers = AnswerSheet::new();
        answers.insert(0, "4".to_string());
        answers.insert(1, "  paris ".to_string());

        let report = session.submit_quiz(&answers).unwrap();
        assert_eq!(report.score, 2);
        assert_eq!(report.total, 2);
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn test_submit_quiz_on_empty_deck() {
        let mut session = SessionState::with_cards(Vec::new());
        session.navigate(Screen::Quiz);

        let err = session.submit_quiz(&AnswerSheet::new()).unwrap_err();
        assert!(matches!(err, crate::QuizDeckError::EmptyDeck(_)));
        assert_eq!(session.score(), 0);
    }
}
