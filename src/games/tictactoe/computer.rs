//! Random computer opponent.

use super::position::Position;
use super::types::Board;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks one empty square uniformly at random.
///
/// Returns `None` on a full board.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let available = Position::valid_moves(board);
    let choice = available.choose(rng).copied();
    debug!(available = available.len(), ?choice, "Computer chose position");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose_move(&board, &mut rng), None);
    }

    #[test]
    fn test_only_empty_square_is_chosen() {
        let mut board = Board::new();
        for pos in Position::ALL {
            if pos != Position::BottomCenter {
                board.set(pos, Square::Occupied(Player::O));
            }
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose_move(&board, &mut rng), Some(Position::BottomCenter));
    }

    #[test]
    fn test_choices_spread_over_empty_squares() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 9];
        for _ in 0..500 {
            if let Some(pos) = choose_move(&board, &mut rng) {
                seen[pos.to_index()] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
