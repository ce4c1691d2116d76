//! Home screen implementation
//!
//! Menu with Add Flashcards, Take Quiz, and View Flashcards options.
//! Includes navigation highlighting and responsive layout.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Menu actions available from the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    AddCards,
    TakeQuiz,
    ViewCards,
}

impl MenuItem {
    /// Get all menu items in display order
    pub fn all() -> Vec<Self> {
        vec![Self::AddCards, Self::TakeQuiz, Self::ViewCards]
    }

    /// Get display text for the menu item
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::AddCards => "Add Flashcards",
            Self::TakeQuiz => "Take Quiz",
            Self::ViewCards => "View Flashcards",
        }
    }
}

/// Home screen component with the main menu
#[derive(Debug)]
pub struct HomeScreen {
    items: Vec<MenuItem>,
    selected_index: usize,
    list_state: ListState,
}

impl HomeScreen {
    /// Create a new home screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            items: MenuItem::all(),
            selected_index: 0,
            list_state,
        }
    }

    /// Get the currently selected menu item
    pub fn selected_item(&self) -> MenuItem {
        self.items[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.items.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the home screen
    pub fn render(&mut self, f: &mut Frame, card_count: usize) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title and subtitle
                Constraint::Min(7),    // Menu area
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_menu(f, chunks[1], card_count);
        self.render_help(f, chunks[2]);
    }

    /// Render the title section
    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Main title
                Constraint::Length(2), // Subtitle
            ])
            .split(area);

        let title = Paragraph::new("QUIZDECK")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new("Welcome to Flashcard Frenzy Quiz Time!")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    /// Render the main menu
    fn render_menu(&mut self, f: &mut Frame, area: ratatui::layout::Rect, card_count: usize) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(item.display_text()))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Menu ({} cards)", card_count)),
            )
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    /// Render the help text
    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "↑↓",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Navigate  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Select  "),
            Span::styled(
                "Q",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        f.render_widget(help, area);
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_screen_creation() {
        let screen = HomeScreen::new();
        assert_eq!(screen.selected_index, 0);
        assert_eq!(screen.selected_item(), MenuItem::AddCards);
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut screen = HomeScreen::new();

        screen.select_next();
        assert_eq!(screen.selected_item(), MenuItem::TakeQuiz);
        screen.select_next();
        assert_eq!(screen.selected_item(), MenuItem::ViewCards);
        screen.select_next();
        assert_eq!(screen.selected_item(), MenuItem::AddCards); // wrap

        screen.select_previous();
        assert_eq!(screen.selected_item(), MenuItem::ViewCards); // wrap
    }
}
