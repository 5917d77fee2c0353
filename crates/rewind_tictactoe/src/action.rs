//! First-class move records.
//!
//! The history stores snapshots, not moves. A [`Move`] is recovered by diffing
//! two consecutive snapshots, which is also how the single-step invariant is
//! checked.

use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Recovers the move that turns `before` into `after`.
    ///
    /// Returns `None` unless exactly one square changed, and it changed from
    /// empty to occupied.
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let mut changed = Position::iter().filter(|pos| before.get(*pos) != after.get(*pos));
        let position = changed.next()?;
        if changed.next().is_some() {
            return None;
        }
        match (before.get(position), after.get(position)) {
            (Square::Empty, Square::Occupied(player)) => Some(Self::new(player, position)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_recovers_single_mark() {
        let before = Board::new().with_mark(Position::Center, Player::A);
        let after = before.with_mark(Position::TopRight, Player::B);

        assert_eq!(
            Move::between(&before, &after),
            Some(Move::new(Player::B, Position::TopRight))
        );
    }

    #[test]
    fn test_between_rejects_two_changes() {
        let before = Board::new();
        let after = before
            .with_mark(Position::Center, Player::A)
            .with_mark(Position::TopRight, Player::B);
        assert_eq!(Move::between(&before, &after), None);
    }

    #[test]
    fn test_between_rejects_cleared_square() {
        let occupied = Board::new().with_mark(Position::Center, Player::A);
        assert_eq!(Move::between(&occupied, &Board::new()), None);
        assert_eq!(Move::between(&occupied, &occupied), None);
    }
}
