//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player A (moves first).
    #[display("Player 1")]
    A,
    /// Player B (moves second).
    #[display("Player 2")]
    B,
}

impl Player {
    /// Returns the player to move after `moves_made` marks have been placed.
    ///
    /// A moves on even counts, B on odd ones.
    pub fn to_move_after(moves_made: usize) -> Self {
        if moves_made % 2 == 0 {
            Player::A
        } else {
            Player::B
        }
    }

    /// Returns the 1-based player number shown to humans.
    pub fn number(self) -> u8 {
        match self {
            Player::A => 1,
            Player::B => 2,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Immutable 3x3 board snapshot.
///
/// A snapshot is never mutated in place; [`Board::with_mark`] returns a new
/// snapshot with exactly one more occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a new snapshot with `player`'s mark at `pos`.
    ///
    /// The caller checks that the square is empty; this only builds the value.
    #[instrument(level = "trace", skip(self))]
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(player);
        Self { squares }
    }

    /// Formats the board using the given symbols for each player.
    ///
    /// Empty squares show their 0-based index so a player can type it back.
    pub fn render(&self, symbol_a: &str, symbol_b: &str) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(Player::A) => symbol_a.to_string(),
                    Square::Occupied(Player::B) => symbol_b.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render("A", "B"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let empty = Board::new();
        let next = empty.with_mark(Position::Center, Player::A);

        assert_eq!(empty, Board::new());
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::A));
        assert_eq!(next.squares().iter().filter(|s| **s != Square::Empty).count(), 1);
    }

    #[test]
    fn test_to_move_after_alternates() {
        assert_eq!(Player::to_move_after(0), Player::A);
        assert_eq!(Player::to_move_after(1), Player::B);
        assert_eq!(Player::to_move_after(8), Player::A);
    }

    #[test]
    fn test_display_shows_indices_for_empty_squares() {
        let board = Board::new().with_mark(Position::TopLeft, Player::B);
        assert_eq!(board.to_string(), "B|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8");
    }
}
