//! Strictly Confetti - tic-tac-toe with a particle celebration
//!
//! The game core is independent of any display. It talks to the outside
//! through two seams:
//!
//! - [`RenderBridge`] receives cell marks, winning highlights and status
//!   messages, and reports the celebration surface size.
//! - [`DisplaySurface`] receives filled circles from the [`ParticleSystem`].
//!
//! The bundled terminal front end ([`tui`]) implements both.
//!
//! # Example
//!
//! ```no_run
//! use strictly_confetti::{AppConfig, GameEngine, GameMode, MoveOutcome, TerminalView};
//! use ratatui::layout::Size;
//!
//! let config = AppConfig::default();
//! let mut engine = GameEngine::new(TerminalView::new(Size::new(80, 24)), &config);
//! engine.set_mode(GameMode::VsComputer);
//! if let MoveOutcome::ComputerTurn { .. } = engine.apply_move(4) {
//!     engine.computer_move();
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bridge;
mod celebration;
mod config;
mod games;
pub mod tui;

// Crate-level exports - Render seams
pub use bridge::{DisplaySurface, RenderBridge, SurfaceSize};

// Crate-level exports - Celebration
pub use celebration::{Hue, Particle, ParticleSystem};

// Crate-level exports - Configuration
pub use config::{
    AppConfig, CelebrationConfig, ConfigError, DisplayConfig, GameConfig, ParticleProfile,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardState, GameEngine, GameMode, GameStatus, Mark, MoveOutcome, Player, Position,
    Square, StatusMessage, WINNING_LINES, WinningLine, choose_move,
};

// Crate-level exports - Terminal front end
pub use tui::{App, TerminalView};
