mod computer;
mod engine;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use computer::choose_move;
pub use engine::GameEngine;
pub use outcome::{MoveOutcome, StatusMessage};
pub use position::Position;
pub use rules::{WINNING_LINES, WinningLine};
pub use types::{Board, BoardState, GameMode, GameStatus, Player, Square};

/// Alias for clarity at the render boundary.
pub type Mark = Player;
