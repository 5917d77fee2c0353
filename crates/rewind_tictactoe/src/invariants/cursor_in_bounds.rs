//! Cursor invariant: the history is never empty and the cursor points into it.

use super::super::MoveHistory;
use super::Invariant;

/// Invariant: `len >= 1` and `current_move < len`.
pub struct CursorInBoundsInvariant;

impl Invariant<MoveHistory> for CursorInBoundsInvariant {
    fn holds(history: &MoveHistory) -> bool {
        !history.is_empty() && history.move_count() < history.len()
    }

    fn description() -> &'static str {
        "History is non-empty and the cursor points at a stored snapshot"
    }
}
