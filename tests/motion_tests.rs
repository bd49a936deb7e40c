// Host-side tests for tilt/pointer mapping and the motion state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod swarm_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod motion {
        include!("../src/core/motion.rs");
    }
}

use glam::Vec2;
use swarm_core::motion::*;

const RECT: CanvasRect = CanvasRect {
    left: 10.0,
    top: 20.0,
    width: 200.0,
    height: 100.0,
};

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < 1e-6
}

fn active_state() -> MotionState {
    let mut m = MotionState::new(TiltCapability::Automatic);
    assert!(m.begin_tilt_request());
    assert_eq!(m.finish_tilt_request(MotionAccess::Granted), TiltPhase::Active);
    m
}

#[test]
fn zero_tilt_delta_maps_to_zero() {
    assert!(approx(map_tilt((12.0, -8.0), 12.0, -8.0), Vec2::ZERO));
}

#[test]
fn tilt_delta_is_clamped() {
    let base = (10.0, 20.0);
    let at_limit = map_tilt(base, 10.0 + 45.0, 20.0 + 45.0);
    let beyond = map_tilt(base, 10.0 + 1000.0, 20.0 + 1000.0);
    assert!(approx(at_limit, beyond));
    assert!(approx(at_limit, Vec2::new(15f32.to_radians(), 25f32.to_radians())));
    let below = map_tilt(base, 10.0 - 1000.0, 20.0 - 1000.0);
    assert!(approx(below, Vec2::new(-15f32.to_radians(), -25f32.to_radians())));
}

#[test]
fn pointer_at_center_is_neutral() {
    let sample = InputSample::pointer(110.0, 70.0, RECT).unwrap();
    let InputSample::Pointer { nx, ny } = sample else {
        panic!("expected pointer sample");
    };
    assert!(approx(map_pointer(nx, ny), Vec2::ZERO));
}

#[test]
fn pointer_at_top_left_corner() {
    let mut m = MotionState::new(TiltCapability::Unavailable);
    assert!(m.push(InputSample::pointer(10.0, 20.0, RECT).unwrap()));
    let target = m.poll();
    // x = pitch, y = yaw
    assert!(approx(target, Vec2::new(0.22, -0.35)), "got {:?}", target);
}

#[test]
fn empty_canvas_rect_yields_no_sample() {
    let rect = CanvasRect {
        width: 0.0,
        ..RECT
    };
    assert!(InputSample::pointer(10.0, 20.0, rect).is_none());
}

#[test]
fn tilt_ignored_until_active() {
    let mut m = MotionState::new(TiltCapability::PermissionGated);
    let reading = InputSample::Tilt {
        beta: Some(30.0),
        gamma: Some(5.0),
    };
    assert!(!m.push(reading));
    assert_eq!(m.baseline(), None);
    assert!(m.begin_tilt_request());
    assert!(!m.push(reading));
    assert_eq!(m.phase(), TiltPhase::Requested);
}

#[test]
fn first_valid_reading_sets_baseline() {
    let mut m = active_state();
    assert!(!m.push(InputSample::Tilt {
        beta: None,
        gamma: Some(3.0)
    }));
    assert_eq!(m.baseline(), None);

    assert!(m.push(InputSample::Tilt {
        beta: Some(30.0),
        gamma: Some(5.0)
    }));
    assert!(m.push(InputSample::Tilt {
        beta: Some(40.0),
        gamma: Some(5.0)
    }));
    assert_eq!(m.baseline(), Some((30.0, 5.0)));
    // Only the latest reading is applied, relative to the first.
    let target = m.poll();
    assert!(approx(target, map_tilt((30.0, 5.0), 40.0, 5.0)));
    assert!(target.x > 0.0);
}

#[test]
fn latest_sample_wins_and_target_persists() {
    let mut m = active_state();
    m.push(InputSample::Tilt {
        beta: Some(0.0),
        gamma: Some(0.0),
    });
    m.push(InputSample::Pointer { nx: 1.0, ny: 0.0 });
    let target = m.poll();
    assert!(approx(target, Vec2::new(0.0, 0.35)));
    // no new input: target is unchanged
    assert!(approx(m.poll(), target));
}

#[test]
fn denied_request_can_be_retried() {
    let mut m = MotionState::new(TiltCapability::PermissionGated);
    assert!(!m.auto_request());
    assert!(m.begin_tilt_request());
    assert!(!m.begin_tilt_request(), "second request while pending");
    assert_eq!(m.finish_tilt_request(MotionAccess::Denied), TiltPhase::Denied);
    assert!(m.begin_tilt_request());
    assert_eq!(m.finish_tilt_request(MotionAccess::Granted), TiltPhase::Active);
    assert!(!m.begin_tilt_request(), "already active");
}

#[test]
fn unsupported_access_counts_as_denied() {
    let mut m = MotionState::new(TiltCapability::Unavailable);
    m.begin_tilt_request();
    assert_eq!(
        m.finish_tilt_request(MotionAccess::Unsupported),
        TiltPhase::Denied
    );
}

#[test]
fn automatic_capability_requests_immediately() {
    assert!(MotionState::new(TiltCapability::Automatic).auto_request());
    assert!(!MotionState::new(TiltCapability::Unavailable).auto_request());
}

#[test]
fn motion_errors_render_their_cause() {
    let e = MotionError::PermissionDenied("denied".to_string());
    assert!(e.to_string().contains("denied"));
    let e = MotionError::PermissionRequest("NotAllowedError".to_string());
    assert!(e.to_string().contains("NotAllowedError"));
}
