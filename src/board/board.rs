//! Live board state.
//!
//! [`Board`] owns the 5x5 grid of piece slots. Reads are public;
//! mutation is `pub(crate)` so only the engine's own controller and
//! generator can change cell contents. The presentation layer observes
//! the board, it never edits it.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, BOARD_SIZE};
use crate::pieces::{Piece, PieceId};

/// The 5x5 grid of optional pieces, stored row-major.
///
/// Each occupied cell owns its piece; a successful move transfers that
/// ownership from source to destination and updates the piece's stored
/// position in the same operation, so position and cell never disagree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Create a board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: (0..BOARD_SIZE * BOARD_SIZE).map(|_| None).collect(),
        }
    }

    /// The piece at `cell`, if any. Out-of-bounds cells read as empty.
    #[must_use]
    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        if !cell.in_bounds() {
            return None;
        }
        self.cells[cell.index()].as_ref()
    }

    /// Whether `cell` is on the board and unoccupied.
    #[must_use]
    pub fn is_empty(&self, cell: Cell) -> bool {
        cell.in_bounds() && self.cells[cell.index()].is_none()
    }

    /// All occupied cells in row-major order.
    #[must_use]
    pub fn occupied_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|&c| self.piece_at(c).is_some()).collect()
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }

    /// Locate a piece by identity. Scans row-major.
    #[must_use]
    pub fn find_piece(&self, id: PieceId) -> Option<Cell> {
        Cell::all().find(|&c| self.piece_at(c).is_some_and(|p| p.id() == id))
    }

    /// Iterate all pieces in row-major cell order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().filter_map(|slot| slot.as_ref())
    }

    /// Kind tags laid out as the grid, `'.'` for empty cells.
    #[must_use]
    pub fn tag_grid(&self) -> [[char; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [['.'; BOARD_SIZE]; BOARD_SIZE];
        for piece in self.pieces() {
            let pos = piece.position();
            grid[pos.row() as usize][pos.col() as usize] = piece.kind().tag();
        }
        grid
    }

    /// Put a piece on the board at its stored position.
    ///
    /// Panics if the cell is off the board or occupied; callers place
    /// only onto cells they have verified empty.
    pub(crate) fn place(&mut self, piece: Piece) {
        let cell = piece.position();
        assert!(cell.in_bounds(), "place out of bounds: {}", cell);
        assert!(
            self.cells[cell.index()].is_none(),
            "place onto occupied cell {}",
            cell
        );
        self.cells[cell.index()] = Some(piece);
    }

    /// Move the piece at `from` to the empty cell `to`, updating its
    /// stored position. Validation happens before this is called.
    pub(crate) fn apply_move(&mut self, from: Cell, to: Cell) {
        assert!(to.in_bounds(), "move destination out of bounds: {}", to);
        assert!(
            self.cells[to.index()].is_none(),
            "move into occupied cell {}",
            to
        );
        let Some(mut piece) = self.cells[from.index()].take() else {
            panic!("no piece to move at {}", from);
        };
        piece.move_to(to);
        self.cells[to.index()] = Some(piece);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.tag_grid() {
            for tag in row {
                write!(f, "{}", tag)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
