//! Wave lifecycle scenarios through the session API.
//!
//! The shell drives the engine exactly as a real embedding would:
//! `start_game`, one `tick` per second, and event handlers observing
//! the lifecycle.

use std::cell::RefCell;
use std::rc::Rc;

use gridwave::{GameSession, STARTING_LIVES, WAVE_TRANSITION_SECS};

/// Event capture shared by the handlers.
#[derive(Default)]
struct Log {
    wave_starts: Vec<u32>,
    wave_ends: Vec<(bool, u32)>,
    lives_lost: Vec<u32>,
    game_overs: Vec<u32>,
    timer_updates: Vec<u32>,
}

fn wire(session: &mut GameSession) -> Rc<RefCell<Log>> {
    let log = Rc::new(RefCell::new(Log::default()));

    let sink = Rc::clone(&log);
    session.on_wave_start(move |snap| sink.borrow_mut().wave_starts.push(snap.wave_number));
    let sink = Rc::clone(&log);
    session.on_wave_end(move |success, snap| {
        sink.borrow_mut().wave_ends.push((success, snap.wave_number));
    });
    let sink = Rc::clone(&log);
    session.on_life_lost(move |lives| sink.borrow_mut().lives_lost.push(lives));
    let sink = Rc::clone(&log);
    session.on_game_over(move |wave| sink.borrow_mut().game_overs.push(wave));
    let sink = Rc::clone(&log);
    session.on_timer_update(move |t| sink.borrow_mut().timer_updates.push(t));

    log
}

/// Tick through the current wave's whole countdown.
fn exhaust_countdown(session: &mut GameSession) {
    let total = session.wave().time_remaining;
    for _ in 0..total {
        session.tick();
    }
}

#[test]
fn start_game_begins_wave_one_with_full_lives() {
    let mut session = GameSession::new(42);
    let log = wire(&mut session);

    session.start_game();

    assert!(session.is_active());
    assert_eq!(session.current_wave(), 1);
    assert_eq!(session.lives_remaining(), STARTING_LIVES);
    assert_eq!(log.borrow().wave_starts, vec![1]);

    let snapshot = session.wave();
    assert_eq!(snapshot.wave_number, 1);
    assert_eq!(snapshot.time_remaining, snapshot.total_time);
    let count = snapshot.targets.len();
    assert!((2..=4).contains(&count));
    // Target count 2/3/4 maps to 25/35/45 seconds; wave 1 has no
    // difficulty discount yet.
    let expected = match count {
        2 => 25,
        3 => 35,
        4 => 45,
        _ => unreachable!(),
    };
    assert_eq!(snapshot.total_time, expected);
}

#[test]
fn countdown_ticks_are_reported_each_second() {
    let mut session = GameSession::new(42);
    let log = wire(&mut session);
    session.start_game();

    let total = session.wave().total_time;
    session.tick();
    session.tick();
    session.tick();

    assert_eq!(session.wave().time_remaining, total - 3);
    assert_eq!(log.borrow().timer_updates, vec![total - 1, total - 2, total - 3]);
}

#[test]
fn three_failed_waves_end_the_game() {
    let mut session = GameSession::new(42);
    let log = wire(&mut session);
    session.start_game();

    // Wave 1 fails; a life goes; wave 2 starts after the delay.
    exhaust_countdown(&mut session);
    assert_eq!(session.lives_remaining(), 2);
    {
        let log = log.borrow();
        assert_eq!(log.wave_ends, vec![(false, 1)]);
        assert_eq!(log.lives_lost, vec![2]);
        assert!(log.game_overs.is_empty());
    }
    assert!(session.is_active());
    for _ in 0..WAVE_TRANSITION_SECS {
        session.tick();
    }
    assert_eq!(session.current_wave(), 2);

    // Wave 2 fails the same way.
    exhaust_countdown(&mut session);
    assert_eq!(session.lives_remaining(), 1);
    for _ in 0..WAVE_TRANSITION_SECS {
        session.tick();
    }
    assert_eq!(session.current_wave(), 3);

    // Wave 3 fails: lives hit zero and the game ends on wave 3.
    exhaust_countdown(&mut session);
    assert_eq!(session.lives_remaining(), 0);
    assert!(session.is_game_over());
    assert!(!session.is_active());
    {
        let log = log.borrow();
        assert_eq!(log.lives_lost, vec![2, 1, 0]);
        assert_eq!(log.game_overs, vec![3]);
        assert_eq!(log.wave_starts, vec![1, 2, 3]);
    }

    // Terminal: no further wave starts no matter how long we wait.
    for _ in 0..30 {
        session.tick();
    }
    assert_eq!(log.borrow().wave_starts, vec![1, 2, 3]);
    assert!(session.is_game_over());
}

#[test]
fn stop_game_mid_countdown_cancels_everything() {
    let mut session = GameSession::new(42);
    let log = wire(&mut session);
    session.start_game();

    session.tick();
    session.stop_game();
    assert!(!session.is_active());

    let ticks_before = log.borrow().timer_updates.len();
    for _ in 0..30 {
        session.tick();
    }
    let log = log.borrow();
    assert_eq!(log.timer_updates.len(), ticks_before);
    assert_eq!(log.wave_starts, vec![1]);
    assert!(log.wave_ends.is_empty());
}

#[test]
fn stop_game_during_intermission_cancels_pending_wave() {
    let mut session = GameSession::new(42);
    let log = wire(&mut session);
    session.start_game();

    // Fail wave 1, then stop during the 2-second gap. The pending
    // transition is tracked state, so it is cancelled outright.
    exhaust_countdown(&mut session);
    assert!(session.is_active());
    session.stop_game();

    for _ in 0..30 {
        session.tick();
    }
    assert_eq!(log.borrow().wave_starts, vec![1]);
    assert_eq!(session.current_wave(), 1);
}

#[test]
fn restart_after_stop_resets_lives_and_waves() {
    let mut session = GameSession::new(42);
    let log = wire(&mut session);
    session.start_game();

    exhaust_countdown(&mut session);
    assert_eq!(session.lives_remaining(), 2);
    session.stop_game();

    session.start_game();
    assert!(session.is_active());
    assert_eq!(session.current_wave(), 1);
    assert_eq!(session.lives_remaining(), STARTING_LIVES);
    assert_eq!(log.borrow().wave_starts, vec![1, 1]);
}

#[test]
fn danger_tiles_match_target_origins() {
    let mut session = GameSession::new(42);
    session.start_game();

    let snapshot = session.wave();
    for target in &snapshot.targets {
        assert!(session.is_danger_tile(target.origin));
        assert!(session.is_target(target.piece));

        // At wave start each target still sits on its origin.
        let piece = session.board().piece_at(target.origin).unwrap();
        assert_eq!(piece.id(), target.piece);
        assert_eq!(piece.kind(), target.kind);
    }
}
