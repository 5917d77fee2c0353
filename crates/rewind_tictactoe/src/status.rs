//! Read model handed to renderers.

use super::{Board, Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs after a call into the game.
///
/// Built fresh by [`crate::Game::status`]; two calls without an intervening
/// mutation compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Status {
    /// Player whose turn it is on the board in view.
    active_player: Player,
    /// Outcome of the board in view.
    outcome: Outcome,
    /// The board in view.
    board: Board,
    /// Marks placed on the board in view.
    move_count: usize,
}

impl Status {
    pub(crate) fn new(board: Board, move_count: usize) -> Self {
        Self {
            active_player: Player::to_move_after(move_count),
            outcome: super::rules::evaluate(&board),
            board,
            move_count,
        }
    }

    /// One-line summary for the status bar.
    pub fn status_line(&self) -> String {
        if let Some(player) = self.outcome.winner() {
            format!("Winner: {}", player)
        } else if self.outcome.is_terminal() {
            "No winner: Restart the game.".to_string()
        } else {
            format!("Player: {}", self.active_player.number())
        }
    }
}
