//! Outbound engine events.
//!
//! The engine reports lifecycle moments through one registered handler
//! per event kind. Registration replaces any previous handler for that
//! kind (last registration wins); there is no fan-out. This keeps the
//! wave machine decoupled from whatever presentation technology is
//! listening.

use super::snapshot::WaveSnapshot;

/// Single-subscriber callback registry for engine events.
///
/// Handlers are `FnMut` closures owned by the dispatcher. Every emit
/// is synchronous and happens inside the engine call that caused it.
#[derive(Default)]
pub struct EventDispatcher {
    on_wave_start: Option<Box<dyn FnMut(&WaveSnapshot)>>,
    on_wave_end: Option<Box<dyn FnMut(bool, &WaveSnapshot)>>,
    on_life_lost: Option<Box<dyn FnMut(u32)>>,
    on_game_over: Option<Box<dyn FnMut(u32)>>,
    on_timer_update: Option<Box<dyn FnMut(u32)>>,
}

impl EventDispatcher {
    /// Create a dispatcher with no handlers registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the wave-start handler, replacing any previous one.
    /// Fires with the fresh wave's snapshot.
    pub fn set_on_wave_start(&mut self, handler: impl FnMut(&WaveSnapshot) + 'static) {
        self.on_wave_start = Some(Box::new(handler));
    }

    /// Register the wave-end handler, replacing any previous one.
    /// Fires with `success` and the wave's final snapshot.
    pub fn set_on_wave_end(&mut self, handler: impl FnMut(bool, &WaveSnapshot) + 'static) {
        self.on_wave_end = Some(Box::new(handler));
    }

    /// Register the life-lost handler, replacing any previous one.
    /// Fires with the lives remaining after the loss.
    pub fn set_on_life_lost(&mut self, handler: impl FnMut(u32) + 'static) {
        self.on_life_lost = Some(Box::new(handler));
    }

    /// Register the game-over handler, replacing any previous one.
    /// Fires with the final wave number.
    pub fn set_on_game_over(&mut self, handler: impl FnMut(u32) + 'static) {
        self.on_game_over = Some(Box::new(handler));
    }

    /// Register the timer-update handler, replacing any previous one.
    /// Fires once per countdown tick with the seconds remaining.
    pub fn set_on_timer_update(&mut self, handler: impl FnMut(u32) + 'static) {
        self.on_timer_update = Some(Box::new(handler));
    }

    pub(crate) fn emit_wave_start(&mut self, snapshot: &WaveSnapshot) {
        if let Some(handler) = self.on_wave_start.as_mut() {
            handler(snapshot);
        }
    }

    pub(crate) fn emit_wave_end(&mut self, success: bool, snapshot: &WaveSnapshot) {
        if let Some(handler) = self.on_wave_end.as_mut() {
            handler(success, snapshot);
        }
    }

    pub(crate) fn emit_life_lost(&mut self, lives_remaining: u32) {
        if let Some(handler) = self.on_life_lost.as_mut() {
            handler(lives_remaining);
        }
    }

    pub(crate) fn emit_game_over(&mut self, final_wave: u32) {
        if let Some(handler) = self.on_game_over.as_mut() {
            handler(final_wave);
        }
    }

    pub(crate) fn emit_timer_update(&mut self, time_remaining: u32) {
        if let Some(handler) = self.on_timer_update.as_mut() {
            handler(time_remaining);
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("on_wave_start", &self.on_wave_start.is_some())
            .field("on_wave_end", &self.on_wave_end.is_some())
            .field("on_life_lost", &self.on_life_lost.is_some())
            .field("on_game_over", &self.on_game_over.is_some())
            .field("on_timer_update", &self.on_timer_update.is_some())
            .finish()
    }
}
