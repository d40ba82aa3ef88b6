//! Turn sequencing for tic-tac-toe.
//!
//! [`GameEngine`] owns the board, the celebration and the random source. It
//! reports every visible change through a [`RenderBridge`] and never draws
//! anything itself.

use super::computer;
use super::outcome::{MoveOutcome, StatusMessage};
use super::position::Position;
use super::rules::{WinningLine, check_winner, is_draw, is_full, winning_line};
use super::types::{Board, BoardState, GameMode, GameStatus, Player};
use crate::bridge::{DisplaySurface, RenderBridge};
use crate::celebration::ParticleSystem;
use crate::config::AppConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// The mark the computer plays.
const COMPUTER: Player = Player::O;

/// Game state machine plus celebration.
#[derive(Debug)]
pub struct GameEngine<B> {
    state: BoardState,
    particles: ParticleSystem,
    bridge: B,
    rng: StdRng,
    computer_delay: Duration,
}

impl<B: RenderBridge> GameEngine<B> {
    /// Creates an engine with no mode selected.
    #[instrument(skip_all, fields(seed = ?config.game().seed()))]
    pub fn new(bridge: B, config: &AppConfig) -> Self {
        let rng = match config.game().seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        let mut engine = Self {
            state: BoardState::new(),
            particles: ParticleSystem::new(config.celebration().clone()),
            bridge,
            rng,
            computer_delay: config.game().computer_delay(),
        };
        engine.announce(StatusMessage::ChooseMode);
        engine
    }

    /// Starts a fresh game in `mode`.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(%mode, "Mode selected");
        self.state.set_mode(mode);
        self.reset_game();
    }

    /// Clears the board and highlights, keeping the mode.
    ///
    /// A running celebration is left to finish on its own.
    #[instrument(skip(self), fields(mode = %self.state.mode()))]
    pub fn reset_game(&mut self) {
        self.state.clear();
        for index in 0..9 {
            self.bridge.clear_cell(index);
            self.bridge.set_highlight(index, false);
        }
        self.announce(StatusMessage::for_mode(self.state.mode()));
        debug!(status = ?self.status(), "Game reset");
    }

    /// Handles a "cell activated" input event.
    pub fn cell_activated(&mut self, index: usize) -> MoveOutcome {
        self.apply_move(index)
    }

    /// Places the current player's mark at `index`.
    ///
    /// Ignored when the index is out of range, the cell is taken, the game is
    /// not in progress, or a computer move is pending.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let Some(pos) = Position::from_index(index) else {
            debug!("Index out of range");
            return MoveOutcome::Ignored;
        };
        if self.state.awaiting_computer() {
            debug!("Waiting for computer, move ignored");
            return MoveOutcome::Ignored;
        }
        if self.status() != GameStatus::InProgress {
            debug!(status = ?self.status(), "Game not in progress, move ignored");
            return MoveOutcome::Ignored;
        }
        if !self.state.board().is_empty(pos) {
            debug!(%pos, "Square occupied, move ignored");
            return MoveOutcome::Ignored;
        }

        let player = self.state.current_player();
        self.place(pos, player);
        if let Some(outcome) = self.evaluate() {
            return outcome;
        }

        let next = player.opponent();
        self.state.set_current_player(next);

        if self.state.mode().computer() == Some(next) {
            self.state.set_awaiting_computer(true);
            self.announce(StatusMessage::ComputerThinking);
            MoveOutcome::ComputerTurn {
                delay: self.computer_delay,
            }
        } else {
            self.announce(StatusMessage::PlayerTurn(next));
            MoveOutcome::NextTurn(next)
        }
    }

    /// Plays the pending computer move on a random empty square.
    ///
    /// Ignored unless a computer move is pending and the game is in progress.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> MoveOutcome {
        if !self.state.awaiting_computer() {
            debug!("No computer move pending");
            return MoveOutcome::Ignored;
        }
        self.state.set_awaiting_computer(false);

        if self.status() != GameStatus::InProgress {
            return MoveOutcome::Ignored;
        }
        let Some(pos) = computer::choose_move(self.state.board(), &mut self.rng) else {
            return MoveOutcome::Ignored;
        };

        self.place(pos, COMPUTER);
        if let Some(outcome) = self.evaluate() {
            return outcome;
        }

        self.state.set_current_player(Player::X);
        self.announce(StatusMessage::YourTurn);
        MoveOutcome::NextTurn(Player::X)
    }

    /// Advances the celebration one frame.
    pub fn tick(&mut self) {
        let surface = self.bridge.surface_size();
        self.particles.tick(surface);
    }

    /// Paints the celebration onto `surface`.
    pub fn render<S: DisplaySurface + ?Sized>(&self, surface: &mut S) {
        self.particles.render(surface);
    }

    /// Derived from the mode and the board on every call.
    pub fn status(&self) -> GameStatus {
        if !self.state.mode().is_set() {
            return GameStatus::NotStarted;
        }
        let board = self.state.board();
        if let Some(winner) = check_winner(board) {
            GameStatus::Won(winner)
        } else if is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// True when a human move would be accepted on some empty square.
    pub fn is_active(&self) -> bool {
        self.status() == GameStatus::InProgress && !self.state.awaiting_computer()
    }

    /// The highlighted line, if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(self.state.board()).map(|(_, line)| line)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the active mode.
    pub fn mode(&self) -> GameMode {
        self.state.mode()
    }

    /// True while a deferred computer move is pending.
    pub fn awaiting_computer(&self) -> bool {
        self.state.awaiting_computer()
    }

    /// Marks placed since the last reset.
    pub fn move_count(&self) -> usize {
        self.state.board().occupied()
    }

    /// Returns the celebration.
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    /// Returns the render bridge.
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Returns the render bridge mutably, e.g. to report a resize.
    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    fn place(&mut self, pos: Position, player: Player) {
        debug!(%pos, %player, "Placing mark");
        self.state.place(pos, player);
        self.bridge.set_cell_text(pos.to_index(), player);
    }

    /// Win check, then draw check. `None` when play continues.
    fn evaluate(&mut self) -> Option<MoveOutcome> {
        if let Some((winner, line)) = winning_line(self.state.board()) {
            for index in line.indices() {
                self.bridge.set_highlight(index, true);
            }
            let message = if self.state.mode().computer() == Some(winner) {
                StatusMessage::ComputerWon
            } else {
                StatusMessage::Won(winner)
            };
            self.announce(message);
            info!(%winner, line = ?line.indices(), "Game won");
            self.particles.launch(self.bridge.surface_size(), &mut self.rng);
            return Some(MoveOutcome::Won { winner, line });
        }

        if is_full(self.state.board()) {
            info!("Game drawn");
            self.announce(StatusMessage::Draw);
            return Some(MoveOutcome::Draw);
        }

        None
    }

    fn announce(&mut self, message: StatusMessage) {
        self.bridge.set_status_message(&message.to_string());
    }
}
