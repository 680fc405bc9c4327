//! Constrained random board generation.
//!
//! Layout, in strict order:
//! 1. all cells cleared; the center stays empty for the whole game;
//! 2. 2 Tridents on dark squares, excluding the four mid-edge cells;
//! 3. 2 Tridents on light squares;
//! 4. 2 Bishops on dark squares;
//! 5. 2 Bishops on light squares;
//! 6. the remaining 16 cells filled from a shuffled bag of
//!    4 Queens, 4 Knights, 4 Rooks, 4 Stags.
//!
//! Constrained placements go first because their eligible-square sets
//! are tightest; the unconstrained bag fill takes whatever is left.
//!
//! A candidate pool smaller than the number requested, or a bag that
//! does not match the remaining empty cells one-for-one, is a logic
//! defect (the board size and counts are compile-time constants), so
//! generation panics instead of producing a malformed board.

use crate::core::{Cell, GameRng};
use crate::pieces::{Piece, PieceId, PieceKind};

use super::board::Board;

/// Tridents placed per square color.
pub const TRIDENTS_PER_COLOR: usize = 2;
/// Bishops placed per square color.
pub const BISHOPS_PER_COLOR: usize = 2;
/// Copies of each unconstrained kind in the bag fill.
pub const PIECES_PER_BAG_KIND: usize = 4;

/// Kinds filled from the shuffled bag, 4 of each.
const BAG_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Stag,
];

/// Generate a fully populated board.
///
/// All randomness comes from `rng`; the same seed yields the same
/// board. Panics on internal-consistency violations (see module docs).
#[must_use]
pub fn generate(rng: &mut GameRng) -> Board {
    let mut board = Board::empty();
    let mut next_id = 0u32;
    let mut alloc = || {
        let id = PieceId::new(next_id);
        next_id += 1;
        id
    };

    // Dark Tridents avoid the mid-edge cross around the center.
    let spots = empty_cells(&board, |c| c.is_dark() && !c.is_mid_edge());
    for cell in pick_n(rng, spots, TRIDENTS_PER_COLOR, "dark Trident") {
        board.place(Piece::new(alloc(), PieceKind::Trident, cell));
    }

    let spots = empty_cells(&board, |c| !c.is_dark());
    for cell in pick_n(rng, spots, TRIDENTS_PER_COLOR, "light Trident") {
        board.place(Piece::new(alloc(), PieceKind::Trident, cell));
    }

    let spots = empty_cells(&board, |c| c.is_dark());
    for cell in pick_n(rng, spots, BISHOPS_PER_COLOR, "dark Bishop") {
        board.place(Piece::new(alloc(), PieceKind::Bishop, cell));
    }

    let spots = empty_cells(&board, |c| !c.is_dark());
    for cell in pick_n(rng, spots, BISHOPS_PER_COLOR, "light Bishop") {
        board.place(Piece::new(alloc(), PieceKind::Bishop, cell));
    }

    // Bag fill: 4 of each unconstrained kind, zipped one-for-one with
    // the shuffled remaining empties.
    let mut bag = Vec::with_capacity(BAG_KINDS.len() * PIECES_PER_BAG_KIND);
    for kind in BAG_KINDS {
        bag.extend(std::iter::repeat(kind).take(PIECES_PER_BAG_KIND));
    }
    rng.shuffle(&mut bag);

    let mut empties = empty_cells(&board, |_| true);
    rng.shuffle(&mut empties);

    if empties.len() != bag.len() {
        panic!(
            "bag/empty-cell mismatch: {} empties, {} bag pieces",
            empties.len(),
            bag.len()
        );
    }

    for (kind, cell) in bag.into_iter().zip(empties) {
        board.place(Piece::new(alloc(), kind, cell));
    }

    board
}

/// Currently-empty cells matching `filter`, excluding the center.
fn empty_cells(board: &Board, filter: impl Fn(Cell) -> bool) -> Vec<Cell> {
    Cell::all()
        .filter(|&c| !c.is_center())
        .filter(|&c| board.is_empty(c))
        .filter(|&c| filter(c))
        .collect()
}

/// Pick `n` distinct cells uniformly at random, without replacement.
///
/// Panics when the pool is too small: that can only come from a defect
/// in the placement constraints, never from legitimate randomness.
fn pick_n(rng: &mut GameRng, mut candidates: Vec<Cell>, n: usize, what: &str) -> Vec<Cell> {
    if candidates.len() < n {
        panic!(
            "not enough {} candidates: need {}, have {}",
            what,
            n,
            candidates.len()
        );
    }
    rng.shuffle(&mut candidates);
    candidates.truncate(n);
    candidates
}
