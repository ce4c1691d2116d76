//! Quiz screen implementation
//!
//! Renders every question at once with one answer field per card. A
//! single submission grades the whole pass, then the screen shows the
//! score and the correct-answer review listing.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table},
    Frame,
};

use crate::models::{Flashcard, QuizReport};
use crate::quiz::AnswerSheet;

/// Quiz screen component
#[derive(Debug)]
pub struct QuizScreen {
    /// One answer buffer per question, parallel to the card set
    answers: Vec<String>,
    selected_index: usize,
    list_state: ListState,
    report: Option<QuizReport>,
}

impl QuizScreen {
    /// Create a quiz screen with no questions loaded
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            answers: Vec::new(),
            selected_index: 0,
            list_state,
            report: None,
        }
    }

    /// Start a fresh quiz pass over the given number of questions.
    ///
    /// Answer buffers are rebuilt from scratch; nothing carries over from
    /// a previous pass.
    pub fn begin(&mut self, question_count: usize) {
        self.answers = vec![String::new(); question_count];
        self.selected_index = 0;
        self.list_state.select(Some(0));
        self.report = None;
    }

    /// Get the grading outcome, if the pass was submitted
    pub fn report(&self) -> Option<&QuizReport> {
        self.report.as_ref()
    }

    /// Record the grading outcome
    pub fn set_report(&mut self, report: QuizReport) {
        self.report = Some(report);
    }

    /// Check whether the selection sits on the last question
    pub fn at_last_question(&self) -> bool {
        self.answers.is_empty() || self.selected_index + 1 == self.answers.len()
    }

    /// Move selection to the previous question
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Move selection to the next question
    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.answers.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Append a character to the selected answer
    pub fn input_char(&mut self, c: char) {
        if let Some(answer) = self.answers.get_mut(self.selected_index) {
            answer.push(c);
        }
    }

    /// Delete the last character of the selected answer
    pub fn backspace(&mut self) {
        if let Some(answer) = self.answers.get_mut(self.selected_index) {
            answer.pop();
        }
    }

    /// Build the answer map for grading, keyed by question position
    pub fn answer_sheet(&self) -> AnswerSheet {
        self.answers
            .iter()
            .enumerate()
            .map(|(idx, answer)| (idx, answer.clone()))
            .collect()
    }

    /// Render the quiz screen
    pub fn render(&mut self, f: &mut Frame, cards: &[Flashcard], show_review: bool) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.render_title(f, chunks[0]);

        if cards.is_empty() {
            self.render_empty_warning(f, chunks[1]);
        } else if self.report.is_some() {
            self.render_results(f, chunks[1], show_review);
        } else {
            self.render_questions(f, chunks[1], cards);
        }

        self.render_help(f, chunks[2], cards.is_empty());
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title = Paragraph::new("Flashcard Quiz")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_empty_warning(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let warning = Paragraph::new("No flashcards to quiz! Add some first.")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(warning, area);
    }

    fn render_questions(&mut self, f: &mut Frame, area: ratatui::layout::Rect, cards: &[Flashcard]) {
        let items: Vec<ListItem> = cards
            .iter()
            .zip(&self.answers)
            .enumerate()
            .map(|(idx, (card, answer))| {
                let question = Line::from(vec![
                    Span::styled(
                        format!("Question {}: ", idx + 1),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(card.question.clone()),
                ]);
                let answer_line = Line::from(vec![
                    Span::styled("  Your Answer: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(answer.clone()),
                    Span::raw(if idx == self.selected_index { "▏" } else { "" }),
                ]);
                ListItem::new(vec![question, answer_line])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Answer all questions, then submit from the last one"),
            )
            .highlight_style(Style::default().fg(Color::Cyan));

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_results(&self, f: &mut Frame, area: ratatui::layout::Rect, show_review: bool) {
        let report = match &self.report {
            Some(report) => report,
            None => return,
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let score = Paragraph::new(report.summary())
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(score, chunks[0]);

        if !show_review {
            return;
        }

        let rows: Vec<Row> = report
            .review
            .iter()
            .map(|entry| {
                Row::new(vec![
                    entry.number.to_string(),
                    entry.question.clone(),
                    entry.answer.clone(),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Percentage(55),
            Constraint::Percentage(40),
        ];

        let review = Table::new(rows, widths)
            .header(
                Row::new(vec!["#", "Question", "Correct Answer"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(Block::default().borders(Borders::ALL).title("Review"));

        f.render_widget(review, chunks[1]);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect, deck_empty: bool) {
        let text = if deck_empty || self.report.is_some() {
            "Enter/Esc: Home"
        } else {
            "↑↓: Move | Enter: Next / Submit on last | Esc: Home"
        };
        let help = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, area);
    }
}

impl Default for QuizScreen {
    fn default() -> Self {
        Self::new()
    }
}
