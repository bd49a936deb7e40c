/// Swarm generation and motion tuning constants.
///
/// Rates marked "per frame" are applied once per display refresh and are not
/// scaled by elapsed time.
// Point budget per client class
pub const POINT_COUNT_MOBILE: usize = 3500;
pub const POINT_COUNT_DESKTOP: usize = 7000;

// Sampling sphere radius (world units)
pub const SWARM_RADIUS: f32 = 3.0;
// Exponent applied to the radial draw; < 1 packs points toward the center
pub const RADIAL_EXPONENT: f32 = 0.5;

// Two-tone palette endpoints (0xRRGGBB)
pub const PALETTE_LOW_HEX: u32 = 0x7AA2FF;
pub const PALETTE_HIGH_HEX: u32 = 0xFF9EC4;

// Height blend: t = 0.5 + 0.5 * (y / radius) * HEIGHT_WEIGHT + (rand - 0.5) * BLEND_JITTER
pub const HEIGHT_WEIGHT: f32 = 0.8;
pub const BLEND_JITTER: f32 = 0.2;

// Sparkle pass: chance per point per frame of a fresh random hue
pub const SPARKLE_PROBABILITY: f64 = 0.005;
pub const SPARKLE_SATURATION: f32 = 0.8;
pub const SPARKLE_LIGHTNESS: f32 = 0.6;

// Global tint hue cycle
pub const HUE_DEGREES_PER_SEC: f64 = 10.0;
pub const TINT_SATURATION: f32 = 0.8;
pub const TINT_LIGHTNESS: f32 = 0.6;

// Rotation
pub const YAW_DRIFT_PER_FRAME: f32 = 0.0015; // radians
pub const ROTATION_EASE: f32 = 0.08; // fraction of remaining distance per frame

// Tilt mapping (degrees)
pub const TILT_CLAMP_DEG: f32 = 45.0;
pub const TILT_PITCH_RANGE_DEG: f32 = 15.0; // beta -> rotation about X
pub const TILT_YAW_RANGE_DEG: f32 = 25.0; // gamma -> rotation about Y

// Pointer mapping gains (radians at the canvas edge)
pub const POINTER_YAW_GAIN: f32 = 0.35;
pub const POINTER_PITCH_GAIN: f32 = 0.22;

// User-agent fragments that classify a client as mobile (matched case-insensitively)
pub const MOBILE_UA_TOKENS: [&str; 5] = ["mobi", "android", "iphone", "ipad", "ipod"];
