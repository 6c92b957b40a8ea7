//! Physics module
//!
//! Movement physics for the player: bounding boxes, ground detection against
//! the chunked world, and the Quake-style velocity kernels.
//!
//! # Unit System
//!
//! One world unit is one obstacle-grid unit; velocities are units per second
//! and all frame times are seconds supplied by the frame driver. There is no
//! fixed-timestep sub-stepping, so a very long frame can carry the player
//! through a thin platform.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam, plus [`Aabb`]
//! - [`collision`] - Ground/air classification against the world index
//! - [`pmove`] - Friction, ground acceleration and air acceleration

pub mod collision;
pub mod pmove;
pub mod types;

pub use collision::{GROUND_PROBE_OFFSETS, find_ground, is_grounded, is_grounded_in_chunk};
pub use pmove::{accelerate, air_accelerate, apply_friction, horizontal_speed};
pub use types::{Aabb, Quat, Vec2, Vec3};
