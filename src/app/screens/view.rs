//! View flashcards screen implementation
//!
//! Displays the full card set as a numbered table, with an empty-set
//! warning when there is nothing to show.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::Flashcard;

/// View screen component
#[derive(Debug)]
pub struct ViewScreen {
    selected_index: usize,
    table_state: TableState,
}

impl ViewScreen {
    /// Create a new view screen
    pub fn new() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self {
            selected_index: 0,
            table_state,
        }
    }

    /// Reset the scroll position, used when re-entering the screen
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.table_state.select(Some(0));
    }

    /// Move selection up
    pub fn select_previous(&mut self, card_count: usize) {
        if card_count == 0 {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = card_count - 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self, card_count: usize) {
        if card_count == 0 {
            return;
        }
        if self.selected_index < card_count - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.table_state.select(Some(self.selected_index));
    }

    /// Render the view screen
    pub fn render(&mut self, f: &mut Frame, cards: &[Flashcard]) {
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
        } else {
            self.render_table(f, chunks[1], cards);
        }
        self.render_help(f, chunks[2]);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title = Paragraph::new("Your Flashcards")
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
        let warning = Paragraph::new("No flashcards available. Add some first!")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(warning, area);
    }

    fn render_table(&mut self, f: &mut Frame, area: ratatui::layout::Rect, cards: &[Flashcard]) {
        let rows: Vec<Row> = cards
            .iter()
            .enumerate()
            .map(|(idx, card)| {
                Row::new(vec![
                    (idx + 1).to_string(),
                    card.question.clone(),
                    card.answer.clone(),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Percentage(55),
            Constraint::Percentage(40),
        ];

        let table = Table::new(rows, widths)
            .header(
                Row::new(vec!["#", "Question", "Answer"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help = Paragraph::new("↑↓: Scroll | Esc: Home")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, area);
    }
}

impl Default for ViewScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_navigation_wraps() {
        let mut screen = ViewScreen::new();

        screen.select_next(3);
        assert_eq!(screen.selected_index, 1);
        screen.select_next(3);
        screen.select_next(3);
        assert_eq!(screen.selected_index, 0); // wrap
        screen.select_previous(3);
        assert_eq!(screen.selected_index, 2); // wrap
    }

    #[test]
    fn test_scroll_with_no_cards_is_noop() {
        let mut screen = ViewScreen::new();
        screen.select_next(0);
        screen.select_previous(0);
        assert_eq!(screen.selected_index, 0);
    }

    #[test]
    fn test_reset() {
        let mut screen = ViewScreen::new();
        screen.select_next(5);
        screen.select_next(5);
        screen.reset();
        assert_eq!(screen.selected_index, 0);
    }
}
