//! Application state and key handling.

use crossterm::event::KeyCode;
use timed_tictactoe::{EngineSnapshot, Theme};
use tracing::debug;

use super::input::{digit_to_index, move_cursor};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title screen with the start prompt.
    Menu,
    /// Board, countdown and score.
    Playing,
}

/// What the user asked for. The run loop forwards these to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start the session and its first round.
    StartGame,
    /// Place a mark at the cell index.
    Place(usize),
    /// Start the next round, keeping the score.
    RestartRound,
    /// Stop the session and return to the menu.
    StopGame,
    /// Leave the application.
    Quit,
}

/// Main application state.
pub struct App {
    screen: Screen,
    snapshot: EngineSnapshot,
    cursor: usize,
    theme: Theme,
    status_message: String,
}

impl App {
    /// Creates a new application showing the menu.
    pub fn new(snapshot: EngineSnapshot, theme: Theme) -> Self {
        Self {
            screen: Screen::Menu,
            snapshot,
            cursor: 0,
            theme,
            status_message: "Press 's' to start".to_string(),
        }
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Latest engine state.
    pub fn snapshot(&self) -> &EngineSnapshot {
        &self.snapshot
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Active color scheme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Sets the status line.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// True while the round-result dialog is up.
    pub fn showing_result(&self) -> bool {
        self.screen == Screen::Playing && self.snapshot.round_result().is_some()
    }

    /// Replaces the displayed state with a newer snapshot.
    pub fn update(&mut self, snapshot: EngineSnapshot) {
        self.snapshot = snapshot;
        let cells = self.snapshot.board().len();
        if self.cursor >= cells {
            self.cursor = 0;
        }
    }

    /// Translates a key press into an action, updating local UI state.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Action> {
        debug!(?key, screen = ?self.screen, "Handling key");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Char('t') => {
                self.theme = self.theme.toggled();
                return None;
            }
            _ => {}
        }

        match self.screen {
            Screen::Menu => match key {
                KeyCode::Char('s') | KeyCode::Enter => {
                    self.screen = Screen::Playing;
                    self.cursor = 0;
                    Some(Action::StartGame)
                }
                _ => None,
            },
            Screen::Playing if self.showing_result() => match key {
                KeyCode::Char('r') | KeyCode::Enter => Some(Action::RestartRound),
                KeyCode::Char('x') => self.stop(),
                _ => None,
            },
            Screen::Playing => match key {
                KeyCode::Char('x') => self.stop(),
                KeyCode::Char('r') => Some(Action::RestartRound),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place(self.cursor)),
                KeyCode::Char(c) => {
                    digit_to_index(c, self.snapshot.board().dimension()).map(Action::Place)
                }
                arrow => {
                    self.cursor = move_cursor(self.cursor, arrow, self.snapshot.board().dimension());
                    None
                }
            },
        }
    }

    fn stop(&mut self) -> Option<Action> {
        self.screen = Screen::Menu;
        self.status_message = "Game stopped. Press 's' to start".to_string();
        Some(Action::StopGame)
    }
}
