//! Piece instances.
//!
//! A [`Piece`] couples a stable identity with a kind and a mutable
//! position. Identity matters because wave targets track a specific
//! piece across moves, not whatever later occupies its cell.

use serde::{Deserialize, Serialize};

use crate::core::Cell;

use super::kind::PieceKind;

/// Stable identifier for a piece, unique within one generated board.
///
/// Allocated sequentially by the board generator. Wave targets store
/// `PieceId`s so a target keeps its identity as the piece moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A piece on the board.
///
/// Owned exclusively by the cell that holds it; ownership transfers on
/// a successful move. The stored position always matches that cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    position: Cell,
    /// Square-color flag fixed at construction from the *initial*
    /// position parity. Deliberately never recomputed when the piece
    /// moves, so it goes stale once the piece changes square color.
    /// Placement constraints only consult it at generation time,
    /// before anything has moved; nothing downstream may rely on it
    /// tracking the current square.
    on_dark_square: bool,
}

impl Piece {
    /// Create a piece at its initial position.
    #[must_use]
    pub fn new(id: PieceId, kind: PieceKind, position: Cell) -> Self {
        Self {
            id,
            kind,
            position,
            on_dark_square: position.is_dark(),
        }
    }

    /// Stable identity.
    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// The piece's kind.
    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Cell {
        self.position
    }

    /// The construction-time square-color flag (see field docs: this
    /// is *not* the color of the current square once the piece moves).
    #[must_use]
    pub fn on_dark_square(&self) -> bool {
        self.on_dark_square
    }

    /// Update the stored position. No validation; callers go through
    /// the movement validator and board mutation first.
    pub(crate) fn move_to(&mut self, position: Cell) {
        self.position = position;
    }
}
