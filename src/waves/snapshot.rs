//! Plain-data wave records handed to the presentation layer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Cell;
use crate::pieces::{PieceId, PieceKind};

/// One wave target: a piece that must leave its origin cell.
///
/// The origin is frozen when the wave begins and stays a danger tile
/// for the wave's whole duration, no matter what later occupies it.
/// The piece is tracked by identity, not by cell, so it stays the
/// target wherever it moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// The cell the piece occupied when the wave began.
    pub origin: Cell,
    /// The targeted piece.
    pub piece: PieceId,
    /// The piece's kind, for display.
    pub kind: PieceKind,
}

/// Per-wave target list. Waves carry 2-4 targets, so they fit inline.
pub type TargetList = SmallVec<[Target; 4]>;

/// Observable state of the current wave.
///
/// A value type: cheap to clone, serializable, safe to hand out. The
/// presentation layer reads these and never touches engine internals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveSnapshot {
    /// Wave number, counting from 1.
    pub wave_number: u32,
    /// This wave's targets with their frozen origins.
    pub targets: TargetList,
    /// Seconds left on the countdown.
    pub time_remaining: u32,
    /// The countdown's starting value for this wave.
    pub total_time: u32,
    /// Lives left in the session.
    pub lives_remaining: u32,
}
