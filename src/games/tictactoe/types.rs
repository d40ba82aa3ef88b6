//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, the computer in vs-computer mode).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// How the current game is being played.
///
/// Parses from the two external entry points, `"player"` and `"computer"`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// No mode chosen yet; the board does not accept moves.
    #[default]
    #[strum(serialize = "none")]
    None,
    /// Two humans sharing the board.
    #[strum(serialize = "player")]
    TwoPlayer,
    /// Human plays X against a random computer playing O.
    #[strum(serialize = "computer")]
    VsComputer,
}

impl GameMode {
    /// Returns true once a playable mode has been chosen.
    pub fn is_set(self) -> bool {
        self != GameMode::None
    }

    /// Returns the mark the computer plays in this mode.
    pub fn computer(self) -> Option<Player> {
        match self {
            GameMode::VsComputer => Some(Player::O),
            GameMode::None | GameMode::TwoPlayer => None,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No mode selected.
    NotStarted,
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Draw)
    }
}

/// Mutable game state owned by the engine.
///
/// Status is not stored here; it is derived from the mode and the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    board: Board,
    current_player: Player,
    mode: GameMode,
    awaiting_computer: bool,
}

impl BoardState {
    /// Creates an empty state with no mode selected.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            mode: GameMode::None,
            awaiting_computer: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the active mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// True while a deferred computer move is pending.
    pub fn awaiting_computer(&self) -> bool {
        self.awaiting_computer
    }

    /// Clears the board and hands the first move to X.
    pub(super) fn clear(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.awaiting_computer = false;
    }

    pub(super) fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    pub(super) fn place(&mut self, pos: Position, player: Player) {
        self.board.set(pos, Square::Occupied(player));
    }

    pub(super) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    pub(super) fn set_awaiting_computer(&mut self, awaiting: bool) {
        self.awaiting_computer = awaiting;
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mode_entry_points_parse() {
        assert_eq!(GameMode::from_str("player"), Ok(GameMode::TwoPlayer));
        assert_eq!(GameMode::from_str("computer"), Ok(GameMode::VsComputer));
        assert_eq!(GameMode::from_str("Computer"), Ok(GameMode::VsComputer));
        assert!(GameMode::from_str("network").is_err());
    }

    #[test]
    fn test_only_vs_computer_has_computer_mark() {
        assert_eq!(GameMode::VsComputer.computer(), Some(Player::O));
        assert_eq!(GameMode::TwoPlayer.computer(), None);
        assert_eq!(GameMode::None.computer(), None);
    }

    #[test]
    fn test_board_counts_occupied_squares() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));
        assert_eq!(board.occupied(), 2);
        assert!(!board.is_empty(Position::Center));
    }
}
