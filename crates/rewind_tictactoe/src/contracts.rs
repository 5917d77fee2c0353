//! Contract-based validation for moves.
//!
//! Contracts formalize the Hoare-style reasoning {P} action {Q}: the
//! preconditions decide whether `make_move` accepts a cell, the postcondition
//! checks the history that would result before it is committed.

use super::error::{GameError, InvalidMoveReason};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::{Board, MoveHistory, Position, rules};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a passed precondition resolves the action to.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// Precondition: the board in view is neither won nor drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`GameError::GameOver`] on a terminal board.
    #[instrument(level = "trace", skip(board))]
    pub fn check(board: &Board) -> Result<(), GameError> {
        let outcome = rules::evaluate(board);
        if outcome.is_terminal() {
            Err(GameError::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names one of the nine cells.
pub struct CellInBounds;

impl CellInBounds {
    /// Resolves `index` to a [`Position`].
    #[instrument(level = "trace")]
    pub fn check(index: usize) -> Result<Position, GameError> {
        Position::from_index(index).ok_or(GameError::InvalidMove {
            index,
            reason: InvalidMoveReason::OutOfBounds,
        })
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`InvalidMoveReason::Occupied`] if a mark is already there.
    #[instrument(level = "trace", skip(board))]
    pub fn check(position: Position, board: &Board) -> Result<(), GameError> {
        if board.is_empty(position) {
            Ok(())
        } else {
            Err(GameError::InvalidMove {
                index: position.to_index(),
                reason: InvalidMoveReason::Occupied(position),
            })
        }
    }
}

/// Composite precondition, checked in order: game not over, index in bounds,
/// square empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the target position.
    #[instrument(level = "trace", skip(history))]
    pub fn check(index: usize, history: &MoveHistory) -> Result<Position, GameError> {
        let board = history.current_board();
        GameNotOver::check(board)?;
        let position = CellInBounds::check(index)?;
        SquareIsEmpty::check(position, board)?;
        Ok(position)
    }
}

/// Contract for `make_move` over the move history.
///
/// Preconditions: see [`LegalMove`]. A passed check yields the target
/// [`Position`].
///
/// Postconditions:
/// - every history invariant holds
/// - the cursor advanced by one onto the new last snapshot
pub struct MoveContract;

impl Contract<MoveHistory, usize> for MoveContract {
    type Checked = Position;

    fn pre(history: &MoveHistory, index: &usize) -> Result<Position, GameError> {
        LegalMove::check(*index, history)
    }

    fn post(before: &MoveHistory, after: &MoveHistory) -> Result<(), GameError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let expected = before.move_count() + 1;
        if after.move_count() != expected || after.len() != expected + 1 {
            warn!(
                expected,
                move_count = after.move_count(),
                len = after.len(),
                "Cursor did not land on the new move"
            );
            return Err(GameError::InvariantViolation(format!(
                "Postcondition failed: expected cursor {} on the last of {} snapshots",
                expected,
                expected + 1
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn played(cells: &[usize]) -> MoveHistory {
        let mut history = MoveHistory::new();
        for (turn, &i) in cells.iter().enumerate() {
            let pos = Position::from_index(i).expect("test index in range");
            let next = history
                .current_board()
                .with_mark(pos, Player::to_move_after(turn));
            history.append(next);
        }
        history
    }

    #[test]
    fn test_precondition_empty_square() {
        assert_eq!(
            MoveContract::pre(&MoveHistory::new(), &4),
            Ok(Position::Center)
        );
    }

    #[test]
    fn test_precondition_occupied_square() {
        let history = played(&[4]);
        assert_eq!(
            MoveContract::pre(&history, &4),
            Err(GameError::InvalidMove {
                index: 4,
                reason: InvalidMoveReason::Occupied(Position::Center),
            })
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        assert!(matches!(
            MoveContract::pre(&MoveHistory::new(), &9),
            Err(GameError::InvalidMove {
                reason: InvalidMoveReason::OutOfBounds,
                ..
            })
        ));
    }

    #[test]
    fn test_game_over_checked_before_bounds() {
        let history = played(&[0, 3, 1, 4, 2]);
        assert!(matches!(
            MoveContract::pre(&history, &42),
            Err(GameError::GameOver(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = played(&[4]);
        let mut after = before.clone();
        after.append(before.current_board().with_mark(Position::TopLeft, Player::B));

        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = played(&[4]);
        let mut after = before.clone();
        let corrupted = before
            .current_board()
            .with_mark(Position::TopLeft, Player::A)
            .with_mark(Position::TopCenter, Player::B);
        after.append(corrupted);

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(GameError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_stale_cursor() {
        let before = played(&[4]);
        let mut after = before.clone();
        after.append(before.current_board().with_mark(Position::TopLeft, Player::B));
        after.jump_to(1).expect("move 1 is stored");

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
