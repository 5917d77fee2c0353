//! Single-step invariant: each snapshot adds exactly one mark.

use super::super::{Move, MoveHistory};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square, which went
/// from empty to occupied.
///
/// Squares are therefore monotonic along every stored path.
pub struct SingleStepInvariant;

impl Invariant<MoveHistory> for SingleStepInvariant {
    fn holds(history: &MoveHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}
