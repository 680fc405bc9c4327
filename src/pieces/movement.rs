//! Per-kind move legality.
//!
//! [`is_valid_move`] is a pure predicate: no side effects, no board
//! mutation. Two preconditions apply to every kind before geometry is
//! consulted: the destination must be on the board, and it must be
//! empty (there are no captures, so any occupied destination is
//! illegal). No kind ever inspects intermediate cells; the jumping
//! kinds (Stag, Trident) leap over occupied cells freely.

use crate::board::Board;
use crate::core::Cell;

use super::kind::PieceKind;
use super::piece::Piece;

/// Check whether `piece` may legally move to `dest` on `board`.
///
/// The move to the piece's own cell is always illegal: the destination
/// is occupied by the piece itself (and every kind's geometry rejects
/// the zero delta anyway).
#[must_use]
pub fn is_valid_move(piece: &Piece, dest: Cell, board: &Board) -> bool {
    if !dest.in_bounds() {
        return false;
    }
    if !board.is_empty(dest) {
        return false;
    }

    let from = piece.position();
    let d_row = from.row().abs_diff(dest.row());
    let d_col = from.col().abs_diff(dest.col());

    geometry_allows(piece.kind(), d_row, d_col)
}

/// Pure geometry test on absolute deltas. Occupancy and bounds are the
/// caller's concern.
fn geometry_allows(kind: PieceKind, d_row: u8, d_col: u8) -> bool {
    match kind {
        // One step, any of the 8 directions.
        PieceKind::Queen => d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0),
        // One step, purely horizontal or vertical.
        PieceKind::Rook => (d_row == 1 && d_col == 0) || (d_row == 0 && d_col == 1),
        // One step, purely diagonal.
        PieceKind::Bishop => d_row == 1 && d_col == 1,
        // The L-jump.
        PieceKind::Knight => (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2),
        // Same row or column, at least two cells; adjacent steps are
        // exactly what the Stag cannot do.
        PieceKind::Stag => (d_row == 0 && d_col >= 2) || (d_col == 0 && d_row >= 2),
        // Diagonal, at least two cells; the adjacent diagonal is
        // forbidden.
        PieceKind::Trident => d_row == d_col && d_row >= 2,
    }
}
