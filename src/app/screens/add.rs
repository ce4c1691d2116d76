//! Add flashcard screen implementation
//!
//! Two-field entry form with focus switching and an inline status line
//! for validation and save feedback.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::screens::StatusMessage;

/// The two input fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Question,
    Answer,
}

impl AddField {
    fn title(&self) -> &'static str {
        match self {
            Self::Question => "Enter your Question",
            Self::Answer => "Enter the Answer",
        }
    }
}

/// Add screen component
#[derive(Debug)]
pub struct AddScreen {
    question: String,
    answer: String,
    focus: AddField,
    status: Option<StatusMessage>,
}

impl AddScreen {
    /// Create a new add screen
    pub fn new() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            focus: AddField::Question,
            status: None,
        }
    }

    /// Get the question field contents
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Get the answer field contents
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Switch focus between the two fields
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            AddField::Question => AddField::Answer,
            AddField::Answer => AddField::Question,
        };
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        self.focused_buffer().push(c);
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        self.focused_buffer().pop();
    }

    /// Clear both fields and refocus the question, after a successful add
    pub fn clear_inputs(&mut self) {
        self.question.clear();
        self.answer.clear();
        self.focus = AddField::Question;
    }

    /// Set the status line message
    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    /// Clear the status line, used when re-entering the screen
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    fn focused_buffer(&mut self) -> &mut String {
        match self.focus {
            AddField::Question => &mut self.question,
            AddField::Answer => &mut self.answer,
        }
    }

    /// Render the add screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Question field
                Constraint::Length(3), // Answer field
                Constraint::Length(2), // Status line
                Constraint::Min(0),
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_field(f, chunks[1], AddField::Question, &self.question);
        self.render_field(f, chunks[2], AddField::Answer, &self.answer);
        self.render_status(f, chunks[3]);
        self.render_help(f, chunks[5]);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title = Paragraph::new("Add a New Flashcard")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_field(
        &self,
        f: &mut Frame,
        area: ratatui::layout::Rect,
        field: AddField,
        value: &str,
    ) {
        let style = if field == self.focus {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        // Trailing cursor marker on the focused field
        let text = if field == self.focus {
            format!("{}▏", value)
        } else {
            value.to_string()
        };

        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.title())
                .border_style(style),
        );
        f.render_widget(input, area);
    }

    fn render_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        if let Some(status) = &self.status {
            let line = Paragraph::new(status.text.as_str())
                .style(Style::default().fg(status.color()))
                .alignment(Alignment::Center);
            f.render_widget(line, area);
        }
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help = Paragraph::new("Tab: Switch Field | Enter: Add Flashcard | Esc: Home")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, area);
    }
}

impl Default for AddScreen {
    fn default() -> Self {
        Self::new()
    }
}
