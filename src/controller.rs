//! Selection and move application.
//!
//! [`MoveController`] owns the one piece of interaction state the
//! engine has: which cell, if any, is currently selected. There is no
//! turn or ownership concept; any occupied cell is selectable at any
//! time. Clicking odd places (empty cells, moves with nothing
//! selected) is normal user behavior, so those paths are silent
//! no-ops, never errors.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::Cell;
use crate::pieces::is_valid_move;

/// Selection state plus validated move application.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MoveController {
    selection: Option<Cell>,
}

impl MoveController {
    /// Create a controller with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected cell, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Cell> {
        self.selection
    }

    /// Select `cell` if it holds a piece; otherwise clear the
    /// selection.
    pub fn select(&mut self, board: &Board, cell: Cell) {
        self.selection = board.piece_at(cell).map(|_| cell);
    }

    /// Unconditionally clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Try to move the selected piece to `dest`.
    ///
    /// Fails (returning `false`) when nothing is selected, when the
    /// selected cell has gone empty since selection (the stale
    /// selection is cleared), or when the move is illegal for the
    /// piece. An illegal move leaves both the board and the selection
    /// untouched, so the presentation layer decides what a failed
    /// click means.
    ///
    /// On success the piece transfers to `dest`, its stored position
    /// updates, the selection clears, and `true` is returned. The
    /// session runs the wave-completion check after every successful
    /// move, before the call returns to the presentation layer.
    pub fn try_move(&mut self, board: &mut Board, dest: Cell) -> bool {
        let Some(from) = self.selection else {
            return false;
        };

        let Some(piece) = board.piece_at(from) else {
            self.selection = None;
            return false;
        };

        if !is_valid_move(piece, dest, board) {
            return false;
        }

        board.apply_move(from, dest);
        self.selection = None;
        true
    }
}
