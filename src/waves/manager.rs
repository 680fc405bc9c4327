//! The wave/survival state machine.
//!
//! Owns the wave counter, target set, countdown, and lives, and drives
//! the `Inactive -> Active -> (Active | GameOver)` lifecycle. While
//! active it alternates between counting down and a short intermission
//! before the next wave.
//!
//! Time is cooperative: the embedding shell calls [`WaveManager::tick`]
//! once per second. Both the countdown and the two-second intermission
//! are ordinary tracked state, so [`WaveManager::stop_game`] cancels
//! them together; there is no timer that can fire after a stop.

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::core::{Cell, GameRng};
use crate::pieces::PieceId;

use super::events::EventDispatcher;
use super::snapshot::{Target, TargetList, WaveSnapshot};

/// Lives at the start of a session. Lives only ever decrease.
pub const STARTING_LIVES: u32 = 3;

/// Fewest targets per wave (when enough pieces exist).
pub const MIN_TARGETS: u32 = 2;

/// Most targets per wave.
pub const MAX_TARGETS: u32 = 4;

/// Seconds between a wave ending and the next one starting.
pub const WAVE_TRANSITION_SECS: u32 = 2;

/// Lifecycle phase. `Counting` and `Intermission` are both "active".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// No session running.
    Inactive,
    /// A wave's countdown is running.
    Counting,
    /// Between waves; the next one starts when the ticks run out.
    Intermission { ticks_remaining: u32 },
    /// Lives exhausted. Terminal until the next `start_game`.
    GameOver,
}

/// Wave lifecycle state machine.
///
/// Reads the board to pick targets and to check completion; never
/// mutates it. All outbound reporting goes through the owned
/// [`EventDispatcher`].
#[derive(Debug)]
pub struct WaveManager {
    phase: Phase,
    wave_number: u32,
    lives: u32,
    targets: TargetList,
    /// The frozen origin cells of this wave's targets. A targeted
    /// piece standing on *any* of these is in danger, not just on its
    /// own origin.
    danger_cells: FxHashSet<Cell>,
    time_remaining: u32,
    total_time: u32,
    rng: GameRng,
    events: EventDispatcher,
}

impl WaveManager {
    /// Create an inactive wave machine drawing randomness from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            phase: Phase::Inactive,
            wave_number: 0,
            lives: STARTING_LIVES,
            targets: TargetList::new(),
            danger_cells: FxHashSet::default(),
            time_remaining: 0,
            total_time: 0,
            rng,
            events: EventDispatcher::new(),
        }
    }

    /// The event registration surface.
    pub fn events_mut(&mut self) -> &mut EventDispatcher {
        &mut self.events
    }

    // === Lifecycle ===

    /// Reset counters and start wave 1. Usable from any phase,
    /// including after a game over.
    pub fn start_game(&mut self, board: &Board) {
        self.wave_number = 0;
        self.lives = STARTING_LIVES;
        self.phase = Phase::Counting;
        self.start_next_wave(board);
    }

    /// Deactivate. Cancels the running countdown and any pending
    /// intermission; nothing fires after this until `start_game`.
    pub fn stop_game(&mut self) {
        self.phase = Phase::Inactive;
    }

    /// Advance the clock by one second.
    ///
    /// While counting: decrement, report, and fail the wave at zero.
    /// During intermission: count down to the next wave start.
    /// Otherwise a no-op.
    pub fn tick(&mut self, board: &Board) {
        match self.phase {
            Phase::Counting => {
                self.time_remaining = self.time_remaining.saturating_sub(1);
                let remaining = self.time_remaining;
                self.events.emit_timer_update(remaining);
                if remaining == 0 {
                    self.end_wave(false);
                }
            }
            Phase::Intermission { ticks_remaining } => {
                if ticks_remaining <= 1 {
                    self.start_next_wave(board);
                } else {
                    self.phase = Phase::Intermission {
                        ticks_remaining: ticks_remaining - 1,
                    };
                }
            }
            Phase::Inactive | Phase::GameOver => {}
        }
    }

    /// Called after every applied move. Succeeds the wave once every
    /// target's piece stands clear of all frozen danger cells.
    ///
    /// A no-op unless a countdown is actually running with targets, so
    /// a wave can end at most once.
    pub fn check_completion(&mut self, board: &Board) {
        if self.phase != Phase::Counting || self.targets.is_empty() {
            return;
        }

        let all_clear = self.targets.iter().all(|target| {
            match board.find_piece(target.piece) {
                Some(cell) => !self.danger_cells.contains(&cell),
                // A targeted piece no longer on the board cannot be in
                // danger. Cannot happen in play (there are no captures).
                None => true,
            }
        });

        if all_clear {
            self.end_wave(true);
        }
    }

    // === Queries ===

    /// Whether a session is running (counting down or between waves).
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Counting | Phase::Intermission { .. })
    }

    /// Whether lives ran out and the session ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Current wave number; 0 before the first wave starts.
    #[must_use]
    pub fn current_wave(&self) -> u32 {
        self.wave_number
    }

    /// Lives left.
    #[must_use]
    pub fn lives_remaining(&self) -> u32 {
        self.lives
    }

    /// The current wave's targets.
    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Whether `cell` is one of the current wave's frozen danger
    /// tiles.
    #[must_use]
    pub fn is_danger_tile(&self, cell: Cell) -> bool {
        self.danger_cells.contains(&cell)
    }

    /// Whether `piece` is targeted by the current wave.
    #[must_use]
    pub fn is_target(&self, piece: PieceId) -> bool {
        self.targets.iter().any(|t| t.piece == piece)
    }

    /// Observable state of the current wave.
    #[must_use]
    pub fn snapshot(&self) -> WaveSnapshot {
        WaveSnapshot {
            wave_number: self.wave_number,
            targets: self.targets.clone(),
            time_remaining: self.time_remaining,
            total_time: self.total_time,
            lives_remaining: self.lives,
        }
    }

    // === Internals ===

    /// Begin the next wave: pick targets, budget time, start counting.
    /// No-op when not active (e.g. stopped during an intermission).
    fn start_next_wave(&mut self, board: &Board) {
        if !self.is_active() {
            return;
        }

        self.wave_number += 1;
        self.select_targets(board);

        let base = base_time(self.targets.len());
        // Waves get tighter over time, but never below 60% of base.
        let discount = self.wave_number / 3;
        self.total_time = base.saturating_sub(discount).max(base * 6 / 10);
        self.time_remaining = self.total_time;

        let snapshot = self.snapshot();
        self.events.emit_wave_start(&snapshot);
        self.phase = Phase::Counting;
    }

    /// Draw 2-4 targets (bounded by piece count) uniformly from the
    /// occupied cells and freeze their origins as danger tiles.
    fn select_targets(&mut self, board: &Board) {
        let mut occupied = board.occupied_cells();
        let available = occupied.len() as u32;

        let min_targets = MIN_TARGETS.min(available);
        let max_targets = MAX_TARGETS.min(available);
        let count = self.rng.gen_range_inclusive(min_targets, max_targets) as usize;

        self.rng.shuffle(&mut occupied);

        self.targets.clear();
        self.danger_cells.clear();
        for &cell in occupied.iter().take(count) {
            // Occupied cells always resolve; the list came from the board.
            if let Some(piece) = board.piece_at(cell) {
                self.targets.push(Target {
                    origin: cell,
                    piece: piece.id(),
                    kind: piece.kind(),
                });
                self.danger_cells.insert(cell);
            }
        }
    }

    /// Close out the current wave and either schedule the next one or
    /// end the game.
    fn end_wave(&mut self, success: bool) {
        let snapshot = self.snapshot();
        self.events.emit_wave_end(success, &snapshot);

        if !success {
            self.lives = self.lives.saturating_sub(1);
            self.events.emit_life_lost(self.lives);

            if self.lives == 0 {
                self.phase = Phase::GameOver;
                self.events.emit_game_over(self.wave_number);
                return;
            }
        }

        self.phase = Phase::Intermission {
            ticks_remaining: WAVE_TRANSITION_SECS,
        };
    }
}

/// Countdown budget by target count. Counts outside 2-4 only occur on
/// nearly empty boards; they get a short fallback budget.
fn base_time(target_count: usize) -> u32 {
    match target_count {
        2 => 25,
        3 => 35,
        4 => 45,
        _ => 15,
    }
}
