// Page wiring and render settings used by the web frontend.

// DOM element ids
pub const CANVAS_ID: &str = "stage";
pub const MOTION_BUTTON_ID: &str = "motionBtn";
pub const HIDE_CLASS: &str = "hide"; // added to the motion button once tilt is live

// Camera
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Backing store never exceeds 2x CSS pixels
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Linear fog toward the page background color
pub const FOG_COLOR: [f32; 3] = [0.043, 0.055, 0.078]; // #0b0e14
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 18.0;

// Transparent clear so the page CSS gradient shows through
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::TRANSPARENT;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
