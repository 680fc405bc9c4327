//! Core engine types: board geometry and deterministic randomness.
//!
//! These are the leaf building blocks everything else depends on; they
//! know nothing about pieces, waves, or sessions.

pub mod grid;
pub mod rng;

pub use grid::{Cell, BOARD_SIZE, CENTER, MID_EDGE_CELLS};
pub use rng::GameRng;
