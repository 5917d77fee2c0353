//! Derived game outcome.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Three cells forming a row, column or diagonal.
pub type Line = [Position; 3];

/// Outcome of the board currently in view.
///
/// Always computed from a snapshot, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty square.
    InProgress,
    /// A player completed `line`.
    Win {
        /// The winner.
        player: Player,
        /// The completed line, in board order.
        line: Line,
    },
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the cells to highlight, if the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True once no further move is accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, line } => write!(
                f,
                "{} wins on {}-{}-{}",
                player,
                line[0].to_index(),
                line[1].to_index(),
                line[2].to_index()
            ),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
