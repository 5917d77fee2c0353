//! Alternating turn invariant: marks go A, B, A, B, ...

use super::super::{MoveHistory, Player, Square};
use super::Invariant;

/// Invariant: the snapshot at index `n` holds `ceil(n/2)` A marks and
/// `floor(n/2)` B marks.
///
/// Together with [`super::SingleStepInvariant`] this pins the mover of step
/// `n` to A for odd `n` and B for even `n`, starting from the empty board.
pub struct AlternatingTurnInvariant;

impl Invariant<MoveHistory> for AlternatingTurnInvariant {
    fn holds(history: &MoveHistory) -> bool {
        history.snapshots().iter().enumerate().all(|(n, board)| {
            let count = |player| {
                board
                    .squares()
                    .iter()
                    .filter(|s| **s == Square::Occupied(player))
                    .count()
            };
            count(Player::A) == n.div_ceil(2) && count(Player::B) == n / 2
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (A, B, A, B, ...)"
    }
}
