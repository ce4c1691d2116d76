//! Main application controller
//!
//! Owns the terminal, session state, storage, and screen components, and
//! runs the synchronous draw/handle-events loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    app::{
        screens::{AddScreen, HomeScreen, MenuItem, QuizScreen, StatusMessage, ViewScreen},
        session::{Screen, SessionState},
        tui::Tui,
    },
    config::AppConfig,
    error,
    store::CardStore,
    Result,
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Application config
    config: AppConfig,
    /// Card storage
    store: CardStore,
    /// Session state
    session: SessionState,
    /// Screen components
    home_screen: HomeScreen,
    add_screen: AddScreen,
    view_screen: ViewScreen,
    quiz_screen: QuizScreen,
    should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let config = AppConfig::load()?;
        let store = CardStore::with_path(config.cards_path.clone());
        let session = SessionState::new(&store)?;

        Ok(Self {
            tui: Tui::new()?,
            config,
            store,
            session,
            home_screen: HomeScreen::new(),
            add_screen: AddScreen::new(),
            view_screen: ViewScreen::new(),
            quiz_screen: QuizScreen::new(),
            should_quit: false,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            self.draw()?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        self.tui.draw(|f| match self.session.screen() {
            Screen::Home => self.home_screen.render(f, self.session.cards().len()),
            Screen::Add => self.add_screen.render(f),
            Screen::View => self.view_screen.render(f, self.session.cards()),
            Screen::Quiz => {
                self.quiz_screen
                    .render(f, self.session.cards(), self.config.show_review)
            }
        })?;
        Ok(())
    }

    /// Handle keyboard events and update state
    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self.tui.next_key()? {
            // Ctrl+C quits from any screen, even ones that capture text
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.should_quit = true;
                return Ok(());
            }

            match self.session.screen() {
                Screen::Home => self.handle_home_key(key),
                Screen::Add => self.handle_add_key(key),
                Screen::View => self.handle_view_key(key),
                Screen::Quiz => self.handle_quiz_key(key),
            }
        }
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.home_screen.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.home_screen.select_next(),
            KeyCode::Enter => self.activate_menu_item(),
            _ => {}
        }
    }

    fn activate_menu_item(&mut self) {
        match self.home_screen.selected_item() {
            MenuItem::AddCards => {
                self.add_screen.clear_status();
                self.session.navigate(Screen::Add);
            }
            MenuItem::TakeQuiz => {
                // Entering the quiz resets score and bookkeeping
                self.session.navigate(Screen::Quiz);
                self.quiz_screen.begin(self.session.cards().len());
            }
            MenuItem::ViewCards => {
                self.view_screen.reset();
                self.session.navigate(Screen::View);
            }
        }
    }

    fn handle_add_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.session.navigate(Screen::Home),
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => self.add_screen.toggle_focus(),
            KeyCode::Backspace => self.add_screen.backspace(),
            KeyCode::Enter => self.submit_card(),
            KeyCode::Char(c) => self.add_screen.input_char(c),
            _ => {}
        }
    }

    fn submit_card(&mut self) {
        let question = self.add_screen.question().to_string();
        let answer = self.add_screen.answer().to_string();

        match self.session.add_card(&self.store, &question, &answer) {
            Ok(()) => {
                self.add_screen.clear_inputs();
                self.add_screen
                    .set_status(StatusMessage::success("Flashcard Added!"));
            }
            Err(err) => {
                let message = error::user_friendly_message(&err);
                let status = if error::is_warning(&err) {
                    StatusMessage::warning(message)
                } else {
                    StatusMessage::error(message)
                };
                self.add_screen.set_status(status);
            }
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        let card_count = self.session.cards().len();
        match key.code {
            KeyCode::Esc => self.session.navigate(Screen::Home),
            KeyCode::Up | KeyCode::Char('k') => self.view_screen.select_previous(card_count),
            KeyCode::Down | KeyCode::Char('j') => self.view_screen.select_next(card_count),
            _ => {}
        }
    }

    fn handle_quiz_key(&mut self, key: KeyEvent) {
        // After grading, and on an empty deck, the screen is read-only
        if self.quiz_screen.report().is_some() || self.session.cards().is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.session.navigate(Screen::Home);
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.session.navigate(Screen::Home),
            KeyCode::Up => self.quiz_screen.select_previous(),
            KeyCode::Down | KeyCode::Tab => self.quiz_screen.select_next(),
            KeyCode::Backspace => self.quiz_screen.backspace(),
            KeyCode::Enter => {
                if self.quiz_screen.at_last_question() {
                    self.grade_quiz();
                } else {
                    self.quiz_screen.select_next();
                }
            }
            KeyCode::Char(c) => self.quiz_screen.input_char(c),
            _ => {}
        }
    }

    fn grade_quiz(&mut self) {
        let sheet = self.quiz_screen.answer_sheet();
        // The empty-deck case never reaches here; the screen short-circuits it
        if let Ok(report) = self.session.submit_quiz(&sheet) {
            self.quiz_screen.set_report(report);
        }
    }
}
