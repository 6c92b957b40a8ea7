//! Player Module
//!
//! The player entity and its per-frame movement integration.
//!
//! # Components
//!
//! - [`Player`] - Position, logical velocity and bounding box, advanced once
//!   per frame by [`Player::step`]
//! - [`wish_dir`] - Key state and look vector to a unit wish direction
//! - [`logical_to_world`] - Velocity layout conversion at the position update

pub mod movement_controller;

pub use movement_controller::{Player, StepResult, logical_to_world, wish_dir};
