//! Screen components for the TUI application

pub mod add;
pub mod home;
pub mod quiz;
pub mod view;

pub use add::AddScreen;
pub use home::{HomeScreen, MenuItem};
pub use quiz::QuizScreen;
pub use view::ViewScreen;

use ratatui::style::Color;

/// Severity of a status-line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Warning,
    Error,
}

/// An inline message shown on a screen's status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }

    /// Display color for this severity
    pub fn color(&self) -> Color {
        match self.level {
            StatusLevel::Success => Color::Green,
            StatusLevel::Warning => Color::Yellow,
            StatusLevel::Error => Color::Red,
        }
    }
}
