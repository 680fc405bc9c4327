//! The session facade: the engine's entire inbound surface.
//!
//! [`GameSession`] owns the board, the selection controller, and the
//! wave machine, and wires them together so callers see one object:
//! user intents come in as `select`/`try_move`, the shell's clock
//! comes in as `tick`, and lifecycle events go out through the
//! registered callbacks. Everything runs synchronously on the caller's
//! thread; within one `try_move` the board mutation strictly precedes
//! the wave-completion check, which strictly precedes the return, so
//! observers always see a consistent post-move state.

use crate::board::{generate, Board};
use crate::controller::MoveController;
use crate::core::{Cell, GameRng};
use crate::pieces::PieceId;
use crate::waves::{WaveManager, WaveSnapshot};

/// A complete game session.
///
/// Created with a seed for reproducible sessions, or from OS entropy.
/// `start_game` may be called repeatedly; each call produces a freshly
/// generated board and resets waves and lives.
pub struct GameSession {
    board: Board,
    controller: MoveController,
    waves: WaveManager,
    rng: GameRng,
}

impl GameSession {
    /// Create a session from a seed. The board is generated
    /// immediately so the presentation layer has something to draw
    /// before the first `start_game`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let board = generate(&mut rng);
        let wave_rng = rng.fork();
        Self {
            board,
            controller: MoveController::new(),
            waves: WaveManager::new(wave_rng),
            rng,
        }
    }

    /// Create a session seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy().seed())
    }

    // === Inbound calls ===

    /// Start (or restart) the game: fresh board, cleared selection,
    /// lives and wave counter reset, wave 1 begun.
    pub fn start_game(&mut self) {
        self.board = generate(&mut self.rng);
        self.controller.clear_selection();
        self.waves.start_game(&self.board);
    }

    /// Stop the session. Cancels the countdown and any pending wave
    /// transition. The session can be restarted with `start_game`.
    pub fn stop_game(&mut self) {
        self.waves.stop_game();
    }

    /// Select `cell` if occupied; otherwise clear the selection.
    pub fn select(&mut self, cell: Cell) {
        self.controller.select(&self.board, cell);
    }

    /// Unconditionally clear the selection.
    pub fn clear_selection(&mut self) {
        self.controller.clear_selection();
    }

    /// Try to move the selected piece to `dest`.
    ///
    /// On success the wave-completion check runs before this returns,
    /// so a move that clears the last danger tile ends the wave within
    /// the same call.
    pub fn try_move(&mut self, dest: Cell) -> bool {
        let moved = self.controller.try_move(&mut self.board, dest);
        if moved {
            self.waves.check_completion(&self.board);
        }
        moved
    }

    /// Advance the engine clock by one second.
    pub fn tick(&mut self) {
        self.waves.tick(&self.board);
    }

    // === Event registration (one handler per event; last wins) ===

    /// Register the wave-start handler.
    pub fn on_wave_start(&mut self, handler: impl FnMut(&WaveSnapshot) + 'static) {
        self.waves.events_mut().set_on_wave_start(handler);
    }

    /// Register the wave-end handler.
    pub fn on_wave_end(&mut self, handler: impl FnMut(bool, &WaveSnapshot) + 'static) {
        self.waves.events_mut().set_on_wave_end(handler);
    }

    /// Register the life-lost handler.
    pub fn on_life_lost(&mut self, handler: impl FnMut(u32) + 'static) {
        self.waves.events_mut().set_on_life_lost(handler);
    }

    /// Register the game-over handler.
    pub fn on_game_over(&mut self, handler: impl FnMut(u32) + 'static) {
        self.waves.events_mut().set_on_game_over(handler);
    }

    /// Register the timer-update handler.
    pub fn on_timer_update(&mut self, handler: impl FnMut(u32) + 'static) {
        self.waves.events_mut().set_on_timer_update(handler);
    }

    // === Read surface ===

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The currently selected cell, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Cell> {
        self.controller.selection()
    }

    /// Observable state of the current wave.
    #[must_use]
    pub fn wave(&self) -> WaveSnapshot {
        self.waves.snapshot()
    }

    /// Whether `cell` is a current danger tile.
    #[must_use]
    pub fn is_danger_tile(&self, cell: Cell) -> bool {
        self.waves.is_danger_tile(cell)
    }

    /// Whether `piece` is targeted by the current wave.
    #[must_use]
    pub fn is_target(&self, piece: PieceId) -> bool {
        self.waves.is_target(piece)
    }

    /// Whether the wave system is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.waves.is_active()
    }

    /// Whether the session ended with lives exhausted.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.waves.is_game_over()
    }

    /// Lives left.
    #[must_use]
    pub fn lives_remaining(&self) -> u32 {
        self.waves.lives_remaining()
    }

    /// Current wave number; 0 before the first wave.
    #[must_use]
    pub fn current_wave(&self) -> u32 {
        self.waves.current_wave()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_generated_board() {
        let session = GameSession::new(42);
        assert_eq!(session.board().piece_count(), 24);
        assert!(!session.is_active());
    }

    #[test]
    fn test_same_seed_same_session() {
        let a = GameSession::new(7);
        let b = GameSession::new(7);
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_start_game_regenerates_board() {
        let mut session = GameSession::new(42);
        let initial = session.board().clone();

        session.start_game();
        assert!(session.is_active());
        assert_eq!(session.current_wave(), 1);
        // A fresh draw from the session RNG: a different layout.
        assert_ne!(*session.board(), initial);
    }

    #[test]
    fn test_selection_flows_through() {
        let mut session = GameSession::new(42);
        let occupied = session.board().occupied_cells()[0];

        session.select(occupied);
        assert_eq!(session.selection(), Some(occupied));

        session.clear_selection();
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_try_move_without_selection_is_noop() {
        let mut session = GameSession::new(42);
        assert!(!session.try_move(Cell::new(2, 2)));
    }
}
