//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Player, Position};
use tracing::instrument;

/// All winning lines in evaluation order: rows top to bottom, columns left
/// to right, then the 0-4-8 and 2-4-6 diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the first completed line in [`LINES`] order together with its owner.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let player = board.get(a).player()?;
        let complete = board.get(b) == board.get(a) && board.get(c) == board.get(a);
        complete.then_some((player, line))
    })
}
