mod orientation;
mod pointer;

pub use orientation::{detect_tilt_capability, enable_tilt, wire_motion_button};
pub use pointer::wire_pointermove;
