//! Errors returned by game operations.
//!
//! Every error is recoverable: the game is left exactly as it was before the
//! rejected call.

use super::{Outcome, Position};

/// Why a requested cell cannot take a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveReason {
    /// Index outside `0..9`.
    #[display("index out of bounds (must be 0-8)")]
    OutOfBounds,
    /// The square already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
}

/// Error that can occur when making a move or travelling through history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The target cell cannot take a mark.
    #[display("Invalid move at {}: {}", index, reason)]
    InvalidMove {
        /// Requested cell index.
        index: usize,
        /// Why it was rejected.
        reason: InvalidMoveReason,
    },

    /// The board in view is already won or drawn.
    #[display("Game is already over: {}", _0)]
    GameOver(#[error(not(source))] Outcome),

    /// Requested move number is not in the recorded history.
    #[display("Move {} is out of range (history holds {} snapshots)", requested, len)]
    OutOfRange {
        /// Requested move number.
        requested: usize,
        /// Number of stored snapshots.
        len: usize,
    },

    /// A history invariant failed after a move (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
