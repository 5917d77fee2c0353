//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules are kept apart from
//! history storage so the controller and the invariant checks share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board: first completed line wins, then full board draws.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        Outcome::Win { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
