//! Game controller: turn order, move validation and time travel.

use super::contracts::{Contract, MoveContract};
use super::error::GameError;
use super::{Move, MoveHistory, Player, Position, Status};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game with a rewindable move history.
///
/// All state lives in the owned [`MoveHistory`]; turn, outcome and labels are
/// derived from it on every call.
#[derive(Debug, Clone, Default)]
pub struct Game {
    history: MoveHistory,
}

impl Game {
    /// Creates a new game on the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: MoveHistory::new(),
        }
    }

    /// Returns the underlying history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Places the mark of the player to move at `cell_index` (0-8).
    ///
    /// Making a move while viewing an earlier point discards every recorded
    /// move after that point.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the board in view is won or drawn
    /// - [`GameError::InvalidMove`] if the index is out of range or the square
    ///   is taken
    ///
    /// The game is unchanged on error.
    #[instrument(skip(self), fields(move_count = self.history.move_count()))]
    pub fn make_move(&mut self, cell_index: usize) -> Result<(), GameError> {
        let position = MoveContract::pre(&self.history, &cell_index).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        let player = Player::to_move_after(self.history.move_count());
        let snapshot = self.history.current_board().with_mark(position, player);

        #[cfg(debug_assertions)]
        {
            let mut next = self.history.clone();
            next.append(snapshot);
            MoveContract::post(&self.history, &next)?;
            self.history = next;
        }
        #[cfg(not(debug_assertions))]
        self.history.append(snapshot);

        debug!(?player, %position, snapshots = self.history.len(), "Move accepted");
        Ok(())
    }

    /// Views the board as it was after `move_number` moves.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfRange`] if that move is not recorded.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), GameError> {
        self.history.jump_to(move_number).inspect_err(|e| {
            warn!(error = %e, "Jump rejected");
        })?;
        debug!(move_number, "Jumped");
        Ok(())
    }

    /// Discards all history and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.history.len() - 1, "Resetting game");
        self.history.reset();
    }

    /// Snapshot of everything a renderer needs.
    pub fn status(&self) -> Status {
        Status::new(*self.history.current_board(), self.history.move_count())
    }

    /// Labels for a move list, one per recorded snapshot.
    pub fn history_labels(&self) -> Vec<(usize, String)> {
        self.history.labels()
    }

    /// Moves leading to the board in view, oldest first.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .path()
            .windows(2)
            .filter_map(|pair| Move::between(&pair[0], &pair[1]))
            .collect()
    }

    /// Empty squares of the board in view, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().outcome().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(self.history.current_board())
        }
    }
}
