//! Snapshot history with a travel cursor.
//!
//! `snapshots[0]` is always the empty board and `current_move` always points
//! at a stored snapshot. Jumping only moves the cursor; recorded moves past
//! the cursor survive until the next [`MoveHistory::append`] overwrites them.

use super::Board;
use super::error::GameError;
use serde::Serialize;
use tracing::{debug, instrument};

/// Ordered board snapshots plus the index of the one in view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveHistory {
    snapshots: Vec<Board>,
    current_move: usize,
}

impl MoveHistory {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Drops every snapshot after the cursor, then records `snapshot` as the
    /// new latest move.
    #[instrument(
        skip(self, snapshot),
        fields(current_move = self.current_move, len = self.snapshots.len())
    )]
    pub fn append(&mut self, snapshot: Board) {
        let discarded = self.snapshots.len() - self.current_move - 1;
        if discarded > 0 {
            debug!(discarded, "Truncating abandoned branch");
        }
        self.snapshots.truncate(self.current_move + 1);
        self.snapshots.push(snapshot);
        self.current_move = self.snapshots.len() - 1;
    }

    /// Moves the cursor to `move_number`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if no snapshot is stored at that
    /// index; the cursor is left where it was.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), GameError> {
        if move_number >= self.snapshots.len() {
            return Err(GameError::OutOfRange {
                requested: move_number,
                len: self.snapshots.len(),
            });
        }
        self.current_move = move_number;
        Ok(())
    }

    /// The snapshot under the cursor.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current_move]
    }

    /// Back to a single empty snapshot.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(Board::new());
        self.current_move = 0;
    }

    /// Index of the snapshot in view, which is also the number of marks on it.
    pub fn move_count(&self) -> usize {
        self.current_move
    }

    /// Number of stored snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true for a history built through this API.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All stored snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Snapshots from the start up to and including the cursor.
    pub fn path(&self) -> &[Board] {
        &self.snapshots[..=self.current_move]
    }

    /// One `(move_number, label)` pair per stored snapshot.
    pub fn labels(&self) -> Vec<(usize, String)> {
        (0..self.snapshots.len())
            .map(|n| {
                let label = if n == 0 {
                    "Begin the game".to_string()
                } else {
                    format!("Go to move {}", n)
                };
                (n, label)
            })
            .collect()
    }

    /// Builds a history from raw parts without validation.
    ///
    /// Only invariant tests use this to construct corrupted histories.
    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Board>, current_move: usize) -> Self {
        Self {
            snapshots,
            current_move,
        }
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}
