//! End-to-end playback flows over freshly recorded traces.

use std::time::{Duration, Instant};

use stepscope::player::{apply, collect_phases, PlayerAction};
use stepscope::recorder::AlgorithmId;
use stepscope::{Player, PlayerState, Recorder, TickFire};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn autoplay_walks_a_recording_to_the_end_and_pauses() {
    let case = Recorder::default_case(AlgorithmId::BinarySearch);
    let trace = Recorder::record(AlgorithmId::BinarySearch, &case).unwrap();
    let len = trace.len();

    let mut player = Player::new();
    player.bind(trace);
    player.set_speed(100);

    let t0 = Instant::now();
    player.play(t0);
    assert_eq!(player.state(), PlayerState::Playing);

    let advanced = player.tick(t0 + ms(100 * len as u64));
    assert_eq!(advanced, len - 1);
    assert_eq!(player.current_index(), len - 1);
    assert_eq!(player.state(), PlayerState::Paused);
    assert!(player.scheduled_tick().is_none());
}

#[test]
fn switching_cases_resets_and_invalidates_old_ticks() {
    let mut player = Player::new();
    let case = Recorder::default_case(AlgorithmId::BubbleSort);
    player.select_case(AlgorithmId::BubbleSort, &case).unwrap();

    let t0 = Instant::now();
    player.set_speed(50);
    player.play(t0);
    let token = player.scheduled_tick().unwrap();

    let other = Recorder::default_case(AlgorithmId::TwoSum);
    player.select_case(AlgorithmId::TwoSum, &other).unwrap();
    assert_eq!(player.current_index(), 0);
    assert_eq!(player.state(), PlayerState::Paused);

    // The pre-switch token must not advance the fresh session.
    assert_eq!(player.fire_tick(token, t0 + ms(60)), TickFire::Stale);
    assert_eq!(player.current_index(), 0);
}

#[test]
fn phase_jumps_move_between_runs_of_a_real_recording() {
    let case = Recorder::default_case(AlgorithmId::BubbleSort);
    let trace = Recorder::record(AlgorithmId::BubbleSort, &case).unwrap();
    let phases = collect_phases(&trace);
    assert!(
        phases.len() >= 3,
        "bubble sort should produce several phase runs, got {phases:?}"
    );
    assert_eq!(phases[0].label, "init");

    let mut player = Player::new();
    player.bind(trace);

    let now = Instant::now();
    assert!(apply(PlayerAction::NextPhase, &mut player, &phases, now));
    assert_eq!(player.current_index(), phases[1].index);

    assert!(apply(PlayerAction::PrevPhase, &mut player, &phases, now));
    assert_eq!(player.current_index(), phases[0].index);
}

#[test]
fn end_of_trace_navigation_is_idempotent() {
    let case = Recorder::default_case(AlgorithmId::MergeSorted);
    let trace = Recorder::record(AlgorithmId::MergeSorted, &case).unwrap();
    let last = trace.last_index();

    let mut player = Player::new();
    player.bind(trace);

    let now = Instant::now();
    assert!(apply(PlayerAction::JumpToEnd, &mut player, &[], now));
    assert_eq!(player.current_index(), last);
    assert!(apply(PlayerAction::StepForward, &mut player, &[], now));
    assert_eq!(player.current_index(), last);

    assert!(apply(PlayerAction::JumpToStart, &mut player, &[], now));
    assert!(apply(PlayerAction::StepBack, &mut player, &[], now));
    assert_eq!(player.current_index(), 0);
}

#[test]
fn lru_scenario_plays_through_to_the_miss() {
    let trace = Recorder::record_case(AlgorithmId::LruCache, "eviction-then-miss").unwrap();

    let mut player = Player::new();
    player.bind(trace);
    player.set_speed(25);

    let t0 = Instant::now();
    player.play(t0);
    player.tick(t0 + ms(25 * 64));

    assert_eq!(player.state(), PlayerState::Paused);
    let last = player.current_step().unwrap();
    assert_eq!(last.var("result"), Some(&serde_json::json!(-1)));
}
