//! Camera Module
//!
//! Look-direction state for the first-person view. Window-system agnostic:
//! only mouse deltas come in and a unit look vector goes out.

pub mod fps_controller;

pub use fps_controller::{OrientationController, angle_between, camera_right, limit_pitch_angle};
