// Host-side tests for the animation driver, cloud model and camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod swarm_core {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod cloud {
        include!("../src/core/cloud.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod driver {
        include!("../src/core/driver.rs");
    }
    pub mod motion {
        include!("../src/core/motion.rs");
    }
    pub mod palette {
        include!("../src/core/palette.rs");
    }
    pub mod sampler {
        include!("../src/core/sampler.rs");
    }
}

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;
use swarm_core::camera::Camera;
use swarm_core::cloud::*;
use swarm_core::constants::*;
use swarm_core::driver::*;
use swarm_core::motion::*;
use swarm_core::palette::{hue_tint, Palette};

#[derive(Clone)]
struct FakeClock(Rc<Cell<f64>>);

impl Clock for FakeClock {
    fn elapsed_secs(&self) -> f64 {
        self.0.get()
    }
}

#[derive(Default)]
struct RecordingRenderer {
    ops: Vec<&'static str>,
    viewports: Vec<Viewport>,
    frames: Vec<FrameView>,
    color_uploads: usize,
}

impl SceneRenderer for RecordingRenderer {
    fn configure(&mut self, viewport: Viewport) {
        self.ops.push("configure");
        self.viewports.push(viewport);
    }

    fn update_colors(&mut self, _colors: &[[f32; 3]]) {
        self.ops.push("colors");
        self.color_uploads += 1;
    }

    fn draw(&mut self, frame: &FrameView) -> anyhow::Result<()> {
        self.ops.push("draw");
        self.frames.push(*frame);
        Ok(())
    }
}

const SIZE: CanvasSize = CanvasSize {
    css_width: 800,
    css_height: 400,
    pixel_ratio: 2.0,
};

fn animator(clock: FakeClock, sparkle: f64) -> Animator<FakeClock, StdRng> {
    let mut rng = StdRng::seed_from_u64(99);
    let cloud = PointCloud::generate(&mut rng, 256, SWARM_RADIUS, &Palette::default());
    let camera = Camera::looking_at_origin(6.0, 60.0, 0.1, 100.0);
    Animator::new(cloud, camera, clock, rng).with_sparkle_probability(sparkle)
}

#[test]
fn easing_converges_monotonically() {
    let target = 0.3f32;
    let mut current = -0.5f32;
    let mut dist = (target - current).abs();
    let mut steps = 0;
    while dist > 1e-6 {
        current = ease_toward(current, target, ROTATION_EASE);
        let next = (target - current).abs();
        assert!(next < dist, "distance grew at step {steps}: {next} >= {dist}");
        dist = next;
        steps += 1;
        assert!(steps < 1_000);
    }
}

#[test]
fn yaw_drift_settles_at_fixed_offset() {
    let mut rot = Rotation::default();
    for _ in 0..2_000 {
        rot.step(Vec2::ZERO);
    }
    // y = (y + d) * (1 - k)  =>  y = d * (1 - k) / k
    let expected = YAW_DRIFT_PER_FRAME * (1.0 - ROTATION_EASE) / ROTATION_EASE;
    assert!((rot.current.y - expected).abs() < 1e-5);
    assert!(rot.current.x.abs() < 1e-9);
}

#[test]
fn viewport_tracker_is_idempotent() {
    let mut t = ViewportTracker::default();
    assert_eq!(
        t.sync(SIZE),
        Some(Viewport {
            width: 1600,
            height: 800
        })
    );
    assert_eq!(t.sync(SIZE), None);
    let taller = CanvasSize {
        css_height: 500,
        ..SIZE
    };
    assert!(t.sync(taller).is_some());
    assert_eq!(t.sync(taller), None);
}

#[test]
fn zero_sized_canvas_still_gets_one_pixel() {
    let vp = CanvasSize {
        css_width: 0,
        css_height: 0,
        pixel_ratio: 1.0,
    }
    .viewport();
    assert_eq!(vp, Viewport { width: 1, height: 1 });
}

#[test]
fn tick_runs_steps_in_order() {
    let clock = FakeClock(Rc::new(Cell::new(0.0)));
    let mut anim = animator(clock.clone(), 1.0);
    let mut motion = MotionState::new(TiltCapability::Unavailable);
    let mut r = RecordingRenderer::default();

    let stats = anim.tick(&mut motion, &mut r, SIZE).unwrap();
    assert!(stats.resized);
    assert_eq!(stats.recolored, 256);
    assert_eq!(r.ops, vec!["configure", "colors", "draw"]);
    assert!((anim.camera.aspect - 2.0).abs() < 1e-6);

    r.ops.clear();
    clock.0.set(1.0);
    let stats = anim.tick(&mut motion, &mut r, SIZE).unwrap();
    assert!(!stats.resized);
    assert!((stats.hue_degrees - 10.0).abs() < 1e-9);
    assert_eq!(r.ops, vec!["colors", "draw"]);
}

#[test]
fn no_color_upload_without_sparkle() {
    let clock = FakeClock(Rc::new(Cell::new(0.0)));
    let mut anim = animator(clock, 0.0);
    let mut motion = MotionState::new(TiltCapability::Unavailable);
    let mut r = RecordingRenderer::default();
    for _ in 0..3 {
        anim.tick(&mut motion, &mut r, SIZE).unwrap();
    }
    assert_eq!(r.color_uploads, 0);
    assert_eq!(r.viewports.len(), 1);
    assert_eq!(r.frames.len(), 3);
}

#[test]
fn tick_applies_tint_and_pointer_target() {
    let clock = FakeClock(Rc::new(Cell::new(12.5)));
    let mut anim = animator(clock, 0.0);
    let mut motion = MotionState::new(TiltCapability::Unavailable);
    motion.push(InputSample::Pointer { nx: -1.0, ny: -1.0 });
    let mut r = RecordingRenderer::default();
    anim.tick(&mut motion, &mut r, SIZE).unwrap();

    let frame = r.frames[0];
    assert!((frame.tint - hue_tint(12.5)).abs().max_element() < 1e-6);

    let rot = anim.rotation.current;
    assert!((rot.x - 0.22 * ROTATION_EASE).abs() < 1e-6);
    let expected_y = YAW_DRIFT_PER_FRAME + (-0.35 - YAW_DRIFT_PER_FRAME) * ROTATION_EASE;
    assert!((rot.y - expected_y).abs() < 1e-6);
}

#[test]
fn run_stops_when_told() {
    let mut seen = Vec::new();
    let n = run(|i| seen.push(i), |i| i < 5);
    assert_eq!(n, 5);
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
}

#[test]
fn bounded_run_drives_the_animator() {
    let clock = FakeClock(Rc::new(Cell::new(0.0)));
    let mut anim = animator(clock.clone(), 0.0);
    let mut motion = MotionState::new(TiltCapability::Unavailable);
    let mut r = RecordingRenderer::default();
    let n = run(
        |i| {
            clock.0.set(i as f64 / 60.0);
            anim.tick(&mut motion, &mut r, SIZE).unwrap();
        },
        |i| i < 120,
    );
    assert_eq!(n, 120);
    assert_eq!(r.frames.len(), 120);
    assert!(anim.rotation.current.y > 0.0);
}

#[test]
fn cloud_generation_and_dirty_flag() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut cloud = PointCloud::generate(&mut rng, 500, SWARM_RADIUS, &Palette::default());
    assert_eq!(cloud.len(), 500);
    assert_eq!(cloud.positions().len(), cloud.colors().len());
    assert!(cloud.take_dirty_colors().is_none());
    assert_eq!(cloud.sparkle(&mut rng, 1.0), 500);
    assert!(cloud.take_dirty_colors().is_some());
    assert!(cloud.take_dirty_colors().is_none());
}

#[test]
fn client_class_from_user_agent() {
    let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    let android = "Mozilla/5.0 (Linux; Android 14; Pixel 8) Chrome/120.0 Mobile Safari/537.36";
    let desktop = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";
    assert_eq!(ClientClass::from_user_agent(iphone), ClientClass::Mobile);
    assert_eq!(ClientClass::from_user_agent(android), ClientClass::Mobile);
    assert_eq!(ClientClass::from_user_agent(desktop), ClientClass::Desktop);
    assert_eq!(ClientClass::Mobile.point_count(), 3500);
    assert_eq!(ClientClass::Desktop.point_count(), 7000);
}

#[test]
fn surfaces_differ_only_in_render_parameters() {
    assert!(GLOW_STYLE.size > CORE_STYLE.size);
    assert!(GLOW_STYLE.opacity < CORE_STYLE.opacity);
    assert!(CORE_STYLE.depth_write);
    assert!(!GLOW_STYLE.depth_write);
}

#[test]
fn camera_aspect_guards_zero_height() {
    let mut cam = Camera::looking_at_origin(6.0, 60.0, 0.1, 100.0);
    cam.set_viewport(640, 0);
    assert_eq!(cam.aspect, 640.0);
    cam.set_viewport(640, 480);
    assert!((cam.aspect - 640.0 / 480.0).abs() < 1e-6);
    // origin projects to the center of the screen
    let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((clip.x / clip.w).abs() < 1e-6 && (clip.y / clip.w).abs() < 1e-6);
}
