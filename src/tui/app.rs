//! Application state and logic.

use super::input::{Action, action_for, move_cursor};
use super::view::TerminalView;
use crate::config::AppConfig;
use crate::games::tictactoe::{GameEngine, GameMode, MoveOutcome, Position};
use crossterm::event::KeyCode;
use ratatui::layout::Size;
use tokio::time::Instant;
use tracing::debug;

/// Main application state.
pub struct App {
    engine: GameEngine<TerminalView>,
    cursor: Position,
    computer_due: Option<Instant>,
    should_quit: bool,
}

impl App {
    /// Creates a new application for a terminal of `size` cells.
    pub fn new(config: &AppConfig, size: Size) -> Self {
        Self {
            engine: GameEngine::new(TerminalView::new(size), config),
            cursor: Position::Center,
            computer_due: None,
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine<TerminalView> {
        &self.engine
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// When the pending computer move should be played.
    pub fn computer_due(&self) -> Option<Instant> {
        self.computer_due
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Starts a fresh game in `mode`.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.computer_due = None;
        self.engine.set_mode(mode);
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = action_for(key) else {
            return;
        };
        debug!(?action, "Key action");

        match action {
            Action::Quit => self.should_quit = true,
            Action::SetMode(mode) => self.set_mode(mode),
            Action::Reset => {
                self.computer_due = None;
                self.engine.reset_game();
            }
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::ActivateCursor => self.activate(self.cursor.to_index()),
            Action::Activate(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.activate(index);
            }
        }
    }

    /// Plays the pending computer move.
    pub fn run_computer_move(&mut self) {
        self.computer_due = None;
        self.engine.computer_move();
    }

    /// One animation frame.
    pub fn tick(&mut self, size: Size) {
        self.engine.bridge_mut().resize(size);
        self.engine.tick();
    }

    fn activate(&mut self, index: usize) {
        if let MoveOutcome::ComputerTurn { delay } = self.engine.cell_activated(index) {
            self.computer_due = Some(Instant::now() + delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Player};

    fn app() -> App {
        let config = AppConfig::default().with_seed(Some(11));
        App::new(&config, Size::new(80, 24))
    }

    #[test]
    fn test_keys_drive_a_two_player_game() {
        let mut app = app();
        app.handle_key(KeyCode::Char('p'));
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.engine().status(), GameStatus::Won(Player::X));
        assert_eq!(app.engine().bridge().status(), "X Wins! 🎉");
        assert!(app.engine().bridge().is_highlighted(0));
        assert!(!app.engine().particles().is_idle());
    }

    #[test]
    fn test_vs_computer_schedules_and_plays() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'));
        app.handle_key(KeyCode::Enter);
        assert!(app.computer_due().is_some());
        assert_eq!(app.engine().bridge().status(), "Computer's turn...");

        app.run_computer_move();
        assert!(app.computer_due().is_none());
        assert_eq!(app.engine().move_count(), 2);
        assert_eq!(app.engine().current_player(), Player::X);
    }

    #[test]
    fn test_reset_cancels_pending_computer_move() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'));
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('r'));
        assert!(app.computer_due().is_none());
        assert_eq!(app.engine().move_count(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}
