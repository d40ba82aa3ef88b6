//! Keyboard mapping.

use crate::games::tictactoe::{GameMode, Position};
use crossterm::event::KeyCode;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Activate the cell at this index.
    Activate(usize),
    /// Activate the cell under the cursor.
    ActivateCursor,
    /// Move the cursor.
    MoveCursor(KeyCode),
    /// Start a new game in this mode.
    SetMode(GameMode),
    /// Clear the board, keeping the mode.
    Reset,
    /// Leave.
    Quit,
}

/// Maps a key to an action, `None` for keys we ignore.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('p') => Some(Action::SetMode(GameMode::TwoPlayer)),
        KeyCode::Char('c') => Some(Action::SetMode(GameMode::VsComputer)),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateCursor),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .map(|d| Action::Activate(d as usize - 1)),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_zero_based_cells() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Activate(0)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Activate(8)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        use Position::*;
        assert_eq!(move_cursor(TopLeft, KeyCode::Up), TopLeft);
        assert_eq!(move_cursor(TopLeft, KeyCode::Left), TopLeft);
        assert_eq!(move_cursor(TopLeft, KeyCode::Right), TopCenter);
        assert_eq!(move_cursor(Center, KeyCode::Down), BottomCenter);
        assert_eq!(move_cursor(BottomRight, KeyCode::Down), BottomRight);
        assert_eq!(move_cursor(MiddleRight, KeyCode::Left), Center);
    }
}
