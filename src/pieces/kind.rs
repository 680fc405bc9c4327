//! Piece kinds and their single-character tags.
//!
//! Six movable kinds exist. The tag (`Q R B N S T`) is the only
//! identifier external consumers need for display or serialization;
//! movement geometry lives in [`super::movement`].

use serde::{Deserialize, Serialize};

/// The six movable piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// One step in any of the 8 directions.
    Queen,
    /// One step horizontally or vertically.
    Rook,
    /// One step diagonally.
    Bishop,
    /// The chess knight's L-jump.
    Knight,
    /// Jumps 2+ cells along a row or column; never a single step.
    Stag,
    /// Jumps 2+ cells diagonally; never a single step.
    Trident,
}

impl PieceKind {
    /// All kinds, in declaration order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Stag,
        PieceKind::Trident,
    ];

    /// Single-character tag for display and external serialization.
    ///
    /// ```
    /// use gridwave::pieces::PieceKind;
    ///
    /// assert_eq!(PieceKind::Knight.tag(), 'N');
    /// assert_eq!(PieceKind::Stag.tag(), 'S');
    /// ```
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Stag => 'S',
            PieceKind::Trident => 'T',
        }
    }

    /// Parse a kind from its tag. Returns `None` for unknown tags.
    #[must_use]
    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'Q' => Some(PieceKind::Queen),
            'R' => Some(PieceKind::Rook),
            'B' => Some(PieceKind::Bishop),
            'N' => Some(PieceKind::Knight),
            'S' => Some(PieceKind::Stag),
            'T' => Some(PieceKind::Trident),
            _ => None,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
