//! Quake-style velocity kernels
//!
//! Friction, ground acceleration and air acceleration as free functions over
//! a velocity vector. They are axis-agnostic apart from friction, which
//! measures speed on the logical horizontal plane (X/Y of the logical
//! velocity, see [`crate::player::logical_to_world`]) but scales all three
//! components.
//!
//! # Model
//!
//! - Friction: `control = max(speed, stop_speed)`,
//!   `new_speed = max(0, speed - dt * control * friction)`
//! - Acceleration: only adds speed along `wishdir` up to `wish_speed`, with
//!   at most `accel * dt * wish_speed` gained per call
//! - Air acceleration: same, but the target speed along `wishdir` is capped
//!   at `max_air_speed`, which is what allows strafe-jumping

use glam::Vec3;

/// Horizontal speed of a logical velocity (X/Y plane).
#[inline]
pub fn horizontal_speed(velocity: Vec3) -> f32 {
    velocity.truncate().length()
}

/// Applies ground friction in place.
///
/// Speed is measured on the logical horizontal plane only, yet the scale
/// factor is applied to all three components.
///
/// # Arguments
/// * `velocity` - Logical velocity to slow down
/// * `dt` - Frame time in seconds
/// * `friction` - Friction factor
/// * `stop_speed` - Floor for the control speed
pub fn apply_friction(velocity: &mut Vec3, dt: f32, friction: f32, stop_speed: f32) {
    let speed = horizontal_speed(*velocity);
    if speed == 0.0 {
        return;
    }

    let control = speed.max(stop_speed);
    let new_speed = (speed - dt * control * friction).max(0.0);

    *velocity *= new_speed / speed;
}

/// Ground acceleration toward `wishdir`.
///
/// # Arguments
/// * `velocity` - Logical velocity to accelerate
/// * `wishdir` - Unit wish direction (zero means no intent)
/// * `wish_speed` - Target speed along `wishdir`
/// * `accel` - Acceleration factor
/// * `dt` - Frame time in seconds
pub fn accelerate(velocity: &mut Vec3, wishdir: Vec3, wish_speed: f32, accel: f32, dt: f32) {
    let current_speed = velocity.dot(wishdir);
    let add_speed = wish_speed - current_speed;
    if add_speed <= 0.0 {
        return;
    }

    let accel_speed = (accel * dt * wish_speed).min(add_speed);
    *velocity += wishdir * accel_speed;
}

/// Air acceleration toward `wishdir`.
///
/// The magnitude of `wishdir` is read before normalizing and capped at
/// `max_air_speed`; that capped value is the target speed along the wish
/// direction. The per-call gain still scales with `wish_speed`.
///
/// # Arguments
/// * `velocity` - Logical velocity to accelerate
/// * `wishdir` - Wish direction of any length (zero means no intent)
/// * `wish_speed` - Ground target speed, used for the gain
/// * `max_air_speed` - Cap on the airborne target speed
/// * `air_accel` - Air acceleration factor
/// * `dt` - Frame time in seconds
pub fn air_accelerate(
    velocity: &mut Vec3,
    wishdir: Vec3,
    wish_speed: f32,
    max_air_speed: f32,
    air_accel: f32,
    dt: f32,
) {
    let wish_spd = wishdir.length().min(max_air_speed);
    let wishdir = wishdir.normalize_or_zero();

    let current_speed = velocity.dot(wishdir);
    let add_speed = wish_spd - current_speed;
    if add_speed <= 0.0 {
        return;
    }

    let accel_speed = (air_accel * wish_speed * dt).min(add_speed);
    *velocity += wishdir * accel_speed;
}
