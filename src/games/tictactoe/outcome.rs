//! What a move attempt produced, and what the status line says about it.

use super::rules::WinningLine;
use super::types::{GameMode, Player};
use derive_more::Display;
use std::time::Duration;

/// Result of a move attempt.
///
/// Rejected moves are routine (a click on a filled cell, a finished board),
/// so they are reported as [`MoveOutcome::Ignored`] rather than as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed.
    Ignored,
    /// The game continues with this player to move.
    NextTurn(Player),
    /// The computer moves next; the host should call
    /// `GameEngine::computer_move` once `delay` has passed.
    ComputerTurn {
        /// How long to wait before the computer answers.
        delay: Duration,
    },
    /// The move completed a line.
    Won {
        /// Who completed it.
        winner: Player,
        /// The first completed line in scan order.
        line: WinningLine,
    },
    /// The move filled the board without completing a line.
    Draw,
}

impl MoveOutcome {
    /// True when the move was placed on the board.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored)
    }
}

/// Status line texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatusMessage {
    /// No mode chosen.
    #[display("Choose a mode to start!")]
    ChooseMode,
    /// Two-player turn prompt.
    #[display("Player {_0}'s turn")]
    PlayerTurn(Player),
    /// Start of a vs-computer game.
    #[display("You are X. Computer is O.")]
    ComputerIntro,
    /// Deferred computer move pending.
    #[display("Computer's turn...")]
    ComputerThinking,
    /// Back to the human after the computer moved.
    #[display("Your turn!")]
    YourTurn,
    /// A human player won.
    #[display("{_0} Wins! 🎉")]
    Won(Player),
    /// The computer won.
    #[display("Computer Wins! 🤖")]
    ComputerWon,
    /// Board full, no line.
    #[display("It's a Draw!")]
    Draw,
}

impl StatusMessage {
    /// Message shown on a fresh board in `mode`.
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::None => StatusMessage::ChooseMode,
            GameMode::TwoPlayer => StatusMessage::PlayerTurn(Player::X),
            GameMode::VsComputer => StatusMessage::ComputerIntro,
        }
    }
}
