//! Movement and look tuning.
//!
//! Quake-style values: friction and acceleration are rates per second,
//! speeds are world units per second.

use serde::{Deserialize, Serialize};

/// Ground friction factor.
pub const FRICTION: f32 = 6.0;
/// Speed floor used as the friction control value for slow movement.
pub const STOP_SPEED: f32 = 1.0;
/// Target ground speed.
pub const MAX_SPEED: f32 = 4.0;
/// Cap on the wish speed used while airborne.
pub const MAX_AIR_SPEED: f32 = 0.5;
/// Ground acceleration factor.
pub const ACCELERATE: f32 = 16.0;
/// Air acceleration factor.
pub const AIR_ACCELERATE: f32 = 48.0;
/// Vertical acceleration applied every airborne frame (negative = down).
pub const GRAVITY: f32 = -16.0;
/// Vertical speed set when jumping from the ground.
pub const JUMP_SPEED: f32 = 6.0;

/// Radians of rotation per unit of mouse movement.
pub const LOOK_SENSITIVITY: f32 = 0.0012;
/// Closest the look vector may get to straight up or down, in radians.
pub const PITCH_EPSILON: f32 = 0.01;

/// Parameters of the movement integrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub friction: f32,
    pub stop_speed: f32,
    pub max_speed: f32,
    pub max_air_speed: f32,
    pub accelerate: f32,
    pub air_accelerate: f32,
    pub gravity: f32,
    pub jump_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            stop_speed: STOP_SPEED,
            max_speed: MAX_SPEED,
            max_air_speed: MAX_AIR_SPEED,
            accelerate: ACCELERATE,
            air_accelerate: AIR_ACCELERATE,
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
        }
    }
}

impl MovementConfig {
    /// Higher-friction tuning that stops the player more abruptly.
    pub fn grippy() -> Self {
        Self {
            friction: 7.0,
            ..Default::default()
        }
    }
}

/// Parameters of the orientation controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    pub sensitivity: f32,
    pub pitch_epsilon: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity: LOOK_SENSITIVITY,
            pitch_epsilon: PITCH_EPSILON,
        }
    }
}
