//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::evaluate;
    use crate::{Outcome, Player, Position};

    fn fill(order: &[usize]) -> Board {
        order.iter().enumerate().fold(Board::new(), |board, (turn, &i)| {
            let pos = Position::from_index(i).expect("test index in range");
            board.with_mark(pos, Player::to_move_after(turn))
        })
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // A B A / A B B / B A A
        let board = fill(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        // A completes the 0-4-8 diagonal on the ninth mark.
        let board = fill(&[0, 1, 2, 5, 4, 6, 3, 7, 8]);
        assert!(is_full(&board));
        assert!(matches!(evaluate(&board), Outcome::Win { player: Player::A, .. }));
    }
}
