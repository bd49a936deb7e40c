pub mod camera;
pub mod cloud;
pub mod constants;
pub mod driver;
pub mod motion;
pub mod palette;
pub mod sampler;

pub use camera::*;
pub use cloud::*;
pub use constants::*;
pub use driver::*;
pub use motion::*;
pub use palette::*;
pub use sampler::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
