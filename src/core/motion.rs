use super::constants::*;
use glam::Vec2;

/// How the host exposes device orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltCapability {
    /// No orientation events on this platform.
    Unavailable,
    /// Orientation needs an explicit permission request from a user gesture.
    PermissionGated,
    /// Orientation can be listened to right away.
    Automatic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltPhase {
    Inactive,
    Requested,
    Active,
    Denied,
}

/// Outcome of asking the host for orientation access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionAccess {
    Granted,
    Denied,
    Unsupported,
}

#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    #[error("motion permission not granted (state: {0})")]
    PermissionDenied(String),
    #[error("motion permission request failed: {0}")]
    PermissionRequest(String),
}

/// Canvas bounding box in client (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// One reading from an input source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputSample {
    /// Device orientation in degrees; either angle may be missing.
    Tilt {
        beta: Option<f32>,
        gamma: Option<f32>,
    },
    /// Pointer position normalized to `[-1, 1]` on both axes of the canvas.
    Pointer { nx: f32, ny: f32 },
}

impl InputSample {
    /// Build a pointer sample from client coordinates; `None` for an empty rect.
    pub fn pointer(client_x: f32, client_y: f32, rect: CanvasRect) -> Option<Self> {
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return None;
        }
        let nx = (client_x - rect.left) / rect.width * 2.0 - 1.0;
        let ny = (client_y - rect.top) / rect.height * 2.0 - 1.0;
        Some(InputSample::Pointer { nx, ny })
    }
}

#[inline]
fn map_linear(x: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> f32 {
    b1 + (x - a1) * (b2 - b1) / (a2 - a1)
}

/// Target rotation `(x, y)` in radians for a tilt reading relative to `baseline`.
pub fn map_tilt(baseline: (f32, f32), beta: f32, gamma: f32) -> Vec2 {
    let c = TILT_CLAMP_DEG;
    let d_beta = (beta - baseline.0).clamp(-c, c);
    let d_gamma = (gamma - baseline.1).clamp(-c, c);
    let x = map_linear(d_beta, -c, c, -TILT_PITCH_RANGE_DEG, TILT_PITCH_RANGE_DEG);
    let y = map_linear(d_gamma, -c, c, -TILT_YAW_RANGE_DEG, TILT_YAW_RANGE_DEG);
    Vec2::new(x.to_radians(), y.to_radians())
}

/// Target rotation `(x, y)` in radians for a normalized pointer position.
#[inline]
pub fn map_pointer(nx: f32, ny: f32) -> Vec2 {
    Vec2::new(-ny * POINTER_PITCH_GAIN, nx * POINTER_YAW_GAIN)
}

/// Shared input state: written by event handlers, polled once per frame.
///
/// Samples overwrite each other; only the most recent one is applied at the
/// next poll. The tilt baseline is captured on push so it always comes from
/// the first valid reading even if several arrive between frames.
#[derive(Debug)]
pub struct MotionState {
    capability: TiltCapability,
    phase: TiltPhase,
    baseline: Option<(f32, f32)>,
    latest: Option<InputSample>,
    target: Vec2,
}

impl MotionState {
    pub fn new(capability: TiltCapability) -> Self {
        Self {
            capability,
            phase: TiltPhase::Inactive,
            baseline: None,
            latest: None,
            target: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn capability(&self) -> TiltCapability {
        self.capability
    }

    #[inline]
    pub fn phase(&self) -> TiltPhase {
        self.phase
    }

    #[inline]
    pub fn baseline(&self) -> Option<(f32, f32)> {
        self.baseline
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Whether startup should ask for tilt without waiting for a gesture.
    #[inline]
    pub fn auto_request(&self) -> bool {
        self.capability == TiltCapability::Automatic
    }

    /// Enter `Requested`. Returns false when a request is already pending or
    /// tilt is already active.
    pub fn begin_tilt_request(&mut self) -> bool {
        match self.phase {
            TiltPhase::Inactive | TiltPhase::Denied => {
                self.phase = TiltPhase::Requested;
                true
            }
            TiltPhase::Requested | TiltPhase::Active => false,
        }
    }

    pub fn finish_tilt_request(&mut self, access: MotionAccess) -> TiltPhase {
        if self.phase == TiltPhase::Requested {
            self.phase = match access {
                MotionAccess::Granted => TiltPhase::Active,
                MotionAccess::Denied | MotionAccess::Unsupported => TiltPhase::Denied,
            };
        }
        self.phase
    }

    /// Record a sample. Returns false for samples that are dropped: tilt
    /// readings before tilt is active or with a missing angle.
    pub fn push(&mut self, sample: InputSample) -> bool {
        if let InputSample::Tilt { beta, gamma } = sample {
            let (Some(beta), Some(gamma)) = (beta, gamma) else {
                return false;
            };
            if self.phase != TiltPhase::Active {
                return false;
            }
            if self.baseline.is_none() {
                self.baseline = Some((beta, gamma));
            }
        }
        self.latest = Some(sample);
        true
    }

    /// Apply the most recent sample (if any) and return the current target.
    pub fn poll(&mut self) -> Vec2 {
        if let Some(sample) = self.latest.take() {
            self.target = match sample {
                InputSample::Tilt {
                    beta: Some(beta),
                    gamma: Some(gamma),
                } => map_tilt(self.baseline.unwrap_or((beta, gamma)), beta, gamma),
                InputSample::Tilt { .. } => self.target,
                InputSample::Pointer { nx, ny } => map_pointer(nx, ny),
            };
        }
        self.target
    }
}
