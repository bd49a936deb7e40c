use super::camera::{rotation_matrix, Camera};
use super::cloud::PointCloud;
use super::constants::{ROTATION_EASE, SPARKLE_PROBABILITY, YAW_DRIFT_PER_FRAME};
use super::motion::MotionState;
use super::palette::{hue_tint, tint_hue_degrees};
use glam::{Mat4, Vec2, Vec3};
use instant::Instant;
use rand::Rng;

/// Source of elapsed time for the animation.
pub trait Clock {
    fn elapsed_secs(&self) -> f64;
}

/// Wall clock starting at construction.
pub struct InstantClock {
    start: Instant,
}

impl InstantClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for InstantClock {
    fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Logical canvas size as laid out by the page, plus the pixel ratio used for
/// the backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub css_width: u32,
    pub css_height: u32,
    pub pixel_ratio: f32,
}

impl CanvasSize {
    pub fn viewport(&self) -> Viewport {
        let scale = |v: u32| ((v as f32 * self.pixel_ratio).round() as u32).max(1);
        Viewport {
            width: scale(self.css_width),
            height: scale(self.css_height),
        }
    }
}

/// Backing-store size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Remembers the last configured canvas size so unchanged sizes are a no-op.
#[derive(Default, Debug)]
pub struct ViewportTracker {
    last: Option<CanvasSize>,
}

impl ViewportTracker {
    /// Returns the new viewport when `size` differs from the last one seen.
    pub fn sync(&mut self, size: CanvasSize) -> Option<Viewport> {
        if self.last == Some(size) {
            return None;
        }
        self.last = Some(size);
        Some(size.viewport())
    }
}

#[inline]
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Cloud orientation in radians (x = pitch, y = yaw).
#[derive(Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub current: Vec2,
}

impl Rotation {
    /// One frame: constant yaw drift, then ease both axes toward `target`.
    pub fn step(&mut self, target: Vec2) {
        self.current.y += YAW_DRIFT_PER_FRAME;
        self.current.x = ease_toward(self.current.x, target.x, ROTATION_EASE);
        self.current.y = ease_toward(self.current.y, target.y, ROTATION_EASE);
    }
}

/// Everything the renderer needs to draw one frame of both surfaces.
#[derive(Clone, Copy, Debug)]
pub struct FrameView {
    pub view_proj: Mat4,
    pub model: Mat4,
    pub tint: Vec3,
}

/// The drawing collaborator. Owns GPU resources; the driver only tells it
/// what changed.
pub trait SceneRenderer {
    fn configure(&mut self, viewport: Viewport);
    fn update_colors(&mut self, colors: &[[f32; 3]]);
    fn draw(&mut self, frame: &FrameView) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    pub elapsed_sec: f64,
    pub hue_degrees: f64,
    pub recolored: usize,
    pub resized: bool,
}

/// Per-refresh animation state: the cloud, camera, rotation and timing.
pub struct Animator<C: Clock, R: Rng> {
    pub cloud: PointCloud,
    pub camera: Camera,
    pub rotation: Rotation,
    viewport: ViewportTracker,
    clock: C,
    rng: R,
    sparkle_probability: f64,
}

impl<C: Clock, R: Rng> Animator<C, R> {
    pub fn new(cloud: PointCloud, camera: Camera, clock: C, rng: R) -> Self {
        Self {
            cloud,
            camera,
            rotation: Rotation::default(),
            viewport: ViewportTracker::default(),
            clock,
            rng,
            sparkle_probability: SPARKLE_PROBABILITY,
        }
    }

    pub fn with_sparkle_probability(mut self, probability: f64) -> Self {
        self.sparkle_probability = probability;
        self
    }

    pub fn tick<S: SceneRenderer + ?Sized>(
        &mut self,
        motion: &mut MotionState,
        renderer: &mut S,
        canvas: CanvasSize,
    ) -> anyhow::Result<FrameStats> {
        let mut stats = FrameStats::default();

        if let Some(vp) = self.viewport.sync(canvas) {
            renderer.configure(vp);
            self.camera.set_viewport(vp.width, vp.height);
            stats.resized = true;
            log::debug!("[resize] {}x{} (aspect {:.3})", vp.width, vp.height, self.camera.aspect);
        }

        stats.elapsed_sec = self.clock.elapsed_secs();
        stats.hue_degrees = tint_hue_degrees(stats.elapsed_sec);
        let tint = hue_tint(stats.elapsed_sec);

        stats.recolored = self.cloud.sparkle(&mut self.rng, self.sparkle_probability);
        if let Some(colors) = self.cloud.take_dirty_colors() {
            renderer.update_colors(colors);
        }

        let target = motion.poll();
        self.rotation.step(target);

        let frame = FrameView {
            view_proj: self.camera.view_projection(),
            model: rotation_matrix(self.rotation.current),
            tint,
        };
        renderer.draw(&frame)?;
        Ok(stats)
    }
}

/// Drive `frame` until `should_continue` returns false. Returns the number of
/// frames run. The browser build schedules frames with requestAnimationFrame
/// instead; this form is for hosts that own their loop and for tests.
pub fn run<F, S>(mut frame: F, mut should_continue: S) -> u64
where
    F: FnMut(u64),
    S: FnMut(u64) -> bool,
{
    let mut n = 0;
    while should_continue(n) {
        frame(n);
        n += 1;
    }
    n
}
