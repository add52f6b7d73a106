//! Run ownership: overlapping gestures, cancellation, teardown and scheduler failures.

use yew_touch_scroll::{
    ConfigError, FrameError, ManualScheduler, MoveOutcome, Phase, TouchPoint,
    TouchScrollConfig, TouchScrollError, TouchScrollHandler,
};

use crate::helpers::{FakeTouch, harness, harness_with};

#[test]
fn test_move_during_run_does_not_schedule_a_second_frame() {
    let h = harness(true, true, false);
    h.start(200.0, 200.0);
    h.handler.on_touch_move(&FakeTouch::at(100.0, 200.0)).unwrap();
    assert_eq!(h.scheduler.scheduled_total(), 1);
    let first_handle = h.handler.pending_frame();

    let out = h.handler.on_touch_move(&FakeTouch::at(50.0, 200.0)).unwrap();
    assert_eq!(out, MoveOutcome::Pending);
    assert_eq!(h.scheduler.scheduled_total(), 1);
    assert_eq!(h.scheduler.pending(), 1);
    assert_eq!(h.handler.pending_frame(), first_handle);

    h.scheduler.run_frame();
    assert_eq!(h.scheduler.pending(), 1);
    let out = h.handler.on_touch_move(&FakeTouch::at(0.0, 200.0)).unwrap();
    assert_eq!(out, MoveOutcome::Pending);
    assert_eq!(h.scheduler.pending(), 1);
}

#[test]
fn test_in_flight_run_keeps_its_trajectory_across_a_new_gesture() {
    let h = harness(true, true, false);
    h.start(200.0, 300.0);
    h.handler.on_touch_move(&FakeTouch::at(100.0, 300.0)).unwrap();
    for _ in 0..10 {
        h.scheduler.run_frame();
    }

    // second gesture lands while the first run is still delivering
    h.start(500.0, 500.0);
    assert!(h.handler.is_animating());
    let out = h.handler.on_touch_move(&FakeTouch::at(450.0, 500.0)).unwrap();
    assert_eq!(out, MoveOutcome::Pending);
    assert_eq!(h.handler.deltas(), (50.0, 0.0));

    h.scheduler.run_until_idle(100);
    let calls = h.calls();
    assert_eq!(calls.len(), 30);
    // still heading for the first gesture's target
    assert_eq!(calls[29], (200.0, 300.0));
    // the overlapping move's delta is dropped when the run ends
    assert_eq!(h.handler.deltas(), (0.0, 0.0));
    assert_eq!(h.handler.reference_point(), TouchPoint::new(450.0, 500.0));
    assert_eq!(h.scheduler.scheduled_total(), 30);

    // a fresh move after the run starts a new one
    let out = h.handler.on_touch_move(&FakeTouch::at(400.0, 500.0)).unwrap();
    assert_eq!(out, MoveOutcome::Scheduled { frames: 30 });
}

#[test]
fn test_cancel_stops_delivery_and_is_idempotent() {
    let h = harness(true, true, false);
    h.start(0.0, 0.0);
    h.handler.on_touch_move(&FakeTouch::at(0.0, -80.0)).unwrap();
    for _ in 0..5 {
        h.scheduler.run_frame();
    }
    assert_eq!(h.calls().len(), 5);

    h.handler.cancel();
    h.handler.cancel();
    assert_eq!(h.scheduler.pending(), 0);
    assert_eq!(h.handler.phase(), Phase::Idle);
    assert_eq!(h.handler.pending_frame(), None);
    assert_eq!(h.handler.deltas(), (0.0, 0.0));

    h.scheduler.run_until_idle(100);
    assert_eq!(h.calls().len(), 5);
}

#[test]
fn test_dropping_the_handler_releases_its_frame() {
    let h = harness(true, true, false);
    h.start(0.0, 0.0);
    h.handler.on_touch_move(&FakeTouch::at(-60.0, 0.0)).unwrap();
    assert_eq!(h.scheduler.pending(), 1);

    let scheduler = h.scheduler.clone();
    let calls = h.calls.clone();
    drop(h);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.run_until_idle(10), 0);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_touch_end_during_run_settles_in_idle() {
    let h = harness(true, true, false);
    h.start(0.0, 0.0);
    h.handler.on_touch_move(&FakeTouch::at(-40.0, 0.0)).unwrap();
    h.handler.on_touch_end(&FakeTouch::empty());
    assert!(h.handler.is_animating());

    h.scheduler.run_until_idle(100);
    assert_eq!(h.calls().len(), 30);
    assert_eq!(h.handler.phase(), Phase::Idle);
}

#[test]
fn test_failed_first_frame_leaves_state_consistent() {
    let h = harness(true, true, false);
    h.start(0.0, 0.0);
    h.scheduler.set_failing(true);

    let res = h.handler.on_touch_move(&FakeTouch::at(-100.0, 0.0));
    assert!(matches!(
        res,
        Err(TouchScrollError::Frame(FrameError::Request(_)))
    ));
    assert_eq!(h.handler.phase(), Phase::Tracking);
    assert_eq!(h.handler.pending_frame(), None);
    assert_eq!(h.handler.deltas(), (100.0, 0.0));
    assert!(h.calls().is_empty());

    h.scheduler.set_failing(false);
    let out = h.handler.on_touch_move(&FakeTouch::at(-150.0, 0.0)).unwrap();
    assert_eq!(out, MoveOutcome::Scheduled { frames: 30 });
}

#[test]
fn test_failed_frame_mid_run_jumps_to_target() {
    let h = harness(true, true, false);
    h.start(100.0, 100.0);
    h.handler.on_touch_move(&FakeTouch::at(0.0, 100.0)).unwrap();
    for _ in 0..3 {
        h.scheduler.run_frame();
    }
    h.scheduler.set_failing(true);
    h.scheduler.run_frame();

    let calls = h.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[3], (100.0, 100.0));
    assert!(!h.handler.is_animating());
    assert_eq!(h.handler.pending_frame(), None);
    assert_eq!(h.handler.deltas(), (0.0, 0.0));
}

#[test]
fn test_custom_config_changes_threshold_and_span() {
    let cfg = TouchScrollConfig {
        immediate_threshold: 0.0,
        frames: 4,
    };
    let h = harness_with(true, true, false, cfg);
    assert_eq!(h.handler.config(), cfg);
    h.start(10.0, 10.0);

    let out = h.handler.on_touch_move(&FakeTouch::at(9.0, 10.0)).unwrap();
    assert_eq!(out, MoveOutcome::Scheduled { frames: 4 });
    assert_eq!(h.scheduler.run_until_idle(100), 4);
    let calls = h.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[3], (10.0, 10.0));
}

#[test]
fn test_invalid_config_is_rejected() {
    let res = TouchScrollHandler::with_config(
        |_, _| {},
        true,
        true,
        false,
        ManualScheduler::new(),
        TouchScrollConfig {
            frames: 0,
            ..Default::default()
        },
    );
    assert!(matches!(res, Err(ConfigError::ZeroFrames)));
}
