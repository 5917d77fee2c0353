//! Rewind tic-tac-toe - game core with time travel.
//!
//! Tracks a 3x3 board across a sequence of immutable snapshots, enforces
//! turn order, detects wins and draws, and lets callers jump back to any
//! recorded move. Making a move from an earlier point discards the moves
//! that followed it.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation of one [`Board`] snapshot
//! - **History**: [`MoveHistory`], the snapshots plus a cursor
//! - **Controller**: [`Game`], the only mutating entry point
//! - **Contracts**: preconditions and history invariants behind `make_move`
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Outcome, Player};
//!
//! let mut game = Game::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.make_move(cell)?;
//! }
//! assert_eq!(game.status().outcome().winner(), Some(Player::A));
//!
//! game.jump_to(2)?;
//! game.make_move(8)?;
//! assert_eq!(game.history().len(), 4);
//! assert_eq!(*game.status().outcome(), Outcome::InProgress);
//! # Ok::<(), rewind_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod history;
mod outcome;
mod position;
mod status;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::Move;
pub use error::{GameError, InvalidMoveReason};
pub use game::Game;
pub use history::MoveHistory;
pub use outcome::{Line, Outcome};
pub use position::Position;
pub use status::Status;
pub use types::{Board, Player, Square};
