//! # gridwave
//!
//! Rule engine for a single-player survival puzzle played on a fixed
//! 5x5 grid. Each wave marks a random handful of pieces as targets
//! that must be moved off their starting cells before a countdown
//! runs out; a failed wave costs a life, and three failures end the
//! game.
//!
//! This crate is the engine only. Rendering, input wiring, assets, and
//! layout live in whatever shell embeds it; the shell calls the
//! [`GameSession`] methods, drives [`GameSession::tick`] once per
//! second, and observes state through snapshots and the registered
//! event callbacks. Nothing here depends on how (or whether) anything
//! is drawn.
//!
//! ## Modules
//!
//! - `core`: board geometry and deterministic RNG
//! - `pieces`: the six piece kinds and the movement validator
//! - `board`: live board state and the constrained random generator
//! - `controller`: selection and move application
//! - `waves`: wave lifecycle, countdown, lives, outbound events
//! - `session`: the facade tying it all together
//!
//! ## Example
//!
//! ```
//! use gridwave::{Cell, GameSession};
//!
//! let mut session = GameSession::new(42);
//! session.start_game();
//! assert_eq!(session.current_wave(), 1);
//!
//! // Click a piece, then click where it should go.
//! let from = session.board().occupied_cells()[0];
//! session.select(from);
//! let _ = session.try_move(Cell::new(2, 2));
//!
//! // The shell's clock drives the countdown.
//! session.tick();
//! ```

pub mod board;
pub mod controller;
pub mod core;
pub mod pieces;
pub mod session;
pub mod waves;

// Re-export commonly used types
pub use crate::core::{Cell, GameRng, BOARD_SIZE, CENTER, MID_EDGE_CELLS};

pub use crate::pieces::{is_valid_move, Piece, PieceId, PieceKind};

pub use crate::board::{generate, Board};

pub use crate::controller::MoveController;

pub use crate::waves::{
    EventDispatcher, Target, TargetList, WaveManager, WaveSnapshot, MAX_TARGETS, MIN_TARGETS,
    STARTING_LIVES, WAVE_TRANSITION_SECS,
};

pub use crate::session::GameSession;
