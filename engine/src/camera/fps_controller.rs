//! Orientation Controller Module
//!
//! Turns raw mouse deltas into a unit look vector. The look vector itself is
//! the persistent state (no yaw/pitch angles are stored), rotated
//! incrementally every frame.
//!
//! Key features:
//! - Yaw: rotation about world up by `-dx * sensitivity`
//! - Pitch: rotation about the camera right axis by `-dy * sensitivity`,
//!   clamped so the look vector stays at least `pitch_epsilon` radians away
//!   from straight up and straight down
//! - NO smoothing - instant response for precise aiming

use glam::{Quat, Vec3};

use crate::config::{LOOK_SENSITIVITY, LookConfig, PITCH_EPSILON};

/// Angle between two vectors in radians, in `[0, pi]`.
///
/// Uses `atan2(|a x b|, a . b)`, which stays accurate near 0 and pi where an
/// `acos` of the dot product loses precision.
#[inline]
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    a.cross(b).length().atan2(a.dot(b))
}

/// Camera right axis for a look direction, or zero if `look` is parallel to `up`.
#[inline]
pub fn camera_right(look: Vec3, up: Vec3) -> Vec3 {
    look.cross(up).normalize_or_zero()
}

/// Clamps a candidate pitch rotation so the look vector cannot reach `up`
/// or `-up`.
///
/// Positive angles rotate toward `up`. The largest allowed upward rotation
/// is the current angle to `up` minus `epsilon`; the largest allowed
/// downward rotation is the current angle to `-up` minus `epsilon`.
///
/// # Arguments
/// * `angle` - Candidate rotation in radians
/// * `up` - World up axis
/// * `look` - Current look vector
/// * `epsilon` - Minimum angular distance to keep from either pole
pub fn limit_pitch_angle(angle: f32, up: Vec3, look: Vec3, epsilon: f32) -> f32 {
    let max_up = angle_between(up, look) - epsilon;
    let max_down = -angle_between(-up, look) + epsilon;

    let mut angle = angle;
    if angle > max_up {
        angle = max_up;
    }
    if angle < max_down {
        angle = max_down;
    }
    angle
}

/// First-person orientation controller.
///
/// ## Usage
/// ```rust,ignore
/// let mut orientation = OrientationController::new();
///
/// // Once per frame, with the raw mouse delta
/// let look = orientation.apply_mouse_delta(mouse_dx, mouse_dy);
/// ```
#[derive(Clone, Debug)]
pub struct OrientationController {
    /// Unit look vector
    look: Vec3,
    /// World up axis
    up: Vec3,
    /// Radians per mouse unit
    pub sensitivity: f32,
    /// Closest angular distance to either pole
    pub pitch_epsilon: f32,
}

impl Default for OrientationController {
    fn default() -> Self {
        Self {
            look: Vec3::X,
            up: Vec3::Y,
            sensitivity: LOOK_SENSITIVITY,
            pitch_epsilon: PITCH_EPSILON,
        }
    }
}

impl OrientationController {
    /// Controller looking along +X with default sensitivity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller built from config with an initial look direction.
    ///
    /// A zero `look` falls back to +X.
    pub fn from_config(config: &LookConfig, look: Vec3) -> Self {
        Self {
            look: look.try_normalize().unwrap_or(Vec3::X),
            sensitivity: config.sensitivity,
            pitch_epsilon: config.pitch_epsilon,
            ..Default::default()
        }
    }

    /// Current unit look vector.
    #[inline]
    pub fn look(&self) -> Vec3 {
        self.look
    }

    /// World up axis.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Camera right axis.
    #[inline]
    pub fn right(&self) -> Vec3 {
        camera_right(self.look, self.up)
    }

    /// Replaces the look vector. Zero vectors are ignored.
    pub fn set_look(&mut self, look: Vec3) {
        if let Some(look) = look.try_normalize() {
            self.look = look;
        }
    }

    /// Rotates an arbitrary look vector by a mouse delta without touching
    /// the controller's own state.
    ///
    /// # Arguments
    /// * `look` - Look vector to rotate
    /// * `dx` - Mouse movement in X. Positive = move right = turn right
    /// * `dy` - Mouse movement in Y. Positive = move down = look down
    pub fn rotate(&self, look: Vec3, dx: f32, dy: f32) -> Vec3 {
        let yaw = Quat::from_axis_angle(self.up, -dx * self.sensitivity);
        let look = yaw * look;

        // Right axis of the already yawed look, not of last frame's look
        let right = camera_right(look, self.up);
        if right == Vec3::ZERO {
            // Degenerate (look parallel to up): no pitch axis, keep yaw only
            return look.normalize_or_zero();
        }

        let pitch = limit_pitch_angle(-dy * self.sensitivity, self.up, look, self.pitch_epsilon);
        let look = Quat::from_axis_angle(right, pitch) * look;

        look.try_normalize().unwrap_or(look)
    }

    /// Applies a mouse delta to the stored look vector and returns it.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) -> Vec3 {
        self.look = self.rotate(self.look, dx, dy);
        self.look
    }

    /// Angle between the look vector and world up, in radians.
    pub fn angle_from_up(&self) -> f32 {
        angle_between(self.up, self.look)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_default_values() {
        let orientation = OrientationController::new();
        assert_eq!(orientation.look(), Vec3::X);
        assert_eq!(orientation.up(), Vec3::Y);
        assert_eq!(orientation.sensitivity, 0.0012);
        assert_eq!(orientation.pitch_epsilon, 0.01);
    }

    #[test]
    fn test_right_axis_for_default_look() {
        let orientation = OrientationController::new();
        assert_relative_eq!(orientation.right().z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_yaw_mouse_right_turns_right() {
        let mut orientation = OrientationController::new();
        // Turning right from +X means toward the right axis (+Z)
        let look = orientation.apply_mouse_delta(100.0, 0.0);
        assert!(look.z > 0.0);
        assert_relative_eq!(look.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(angle_between(Vec3::X, look), 100.0 * 0.0012, epsilon = 1e-5);
    }

    #[test]
    fn test_pitch_mouse_down_looks_down() {
        let mut orientation = OrientationController::new();
        let look = orientation.apply_mouse_delta(0.0, 100.0);
        assert!(look.y < 0.0);
        assert_relative_eq!(orientation.angle_from_up(), FRAC_PI_2 + 0.12, epsilon = 1e-5);
    }

    #[test]
    fn test_limit_pitch_angle_passthrough() {
        let angle = limit_pitch_angle(0.3, Vec3::Y, Vec3::X, 0.01);
        assert_relative_eq!(angle, 0.3, epsilon = 1e-6);
    }

    #[test]
    fn test_limit_pitch_angle_clamps_both_ways() {
        let up = limit_pitch_angle(10.0, Vec3::Y, Vec3::X, 0.01);
        assert_relative_eq!(up, FRAC_PI_2 - 0.01, epsilon = 1e-5);
        let down = limit_pitch_angle(-10.0, Vec3::Y, Vec3::X, 0.01);
        assert_relative_eq!(down, -(FRAC_PI_2 - 0.01), epsilon = 1e-5);
    }

    #[test]
    fn test_look_stays_unit_length() {
        let mut orientation = OrientationController::new();
        for i in 0..1_000 {
            let dx = (i as f32 * 0.37).sin() * 200.0;
            let dy = (i as f32 * 0.11).cos() * 300.0;
            let look = orientation.apply_mouse_delta(dx, dy);
            assert_relative_eq!(look.length(), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_rotate_is_pure() {
        let orientation = OrientationController::new();
        let rotated = orientation.rotate(Vec3::X, 50.0, 50.0);
        assert_ne!(rotated, Vec3::X);
        assert_eq!(orientation.look(), Vec3::X);
    }

    #[test]
    fn test_from_config_normalizes_look() {
        let orientation =
            OrientationController::from_config(&LookConfig::default(), Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(orientation.look(), Vec3::NEG_Z);

        let fallback = OrientationController::from_config(&LookConfig::default(), Vec3::ZERO);
        assert_eq!(fallback.look(), Vec3::X);
    }

    #[test]
    fn test_angle_between_extremes() {
        assert_relative_eq!(angle_between(Vec3::Y, Vec3::Y), 0.0, epsilon = 1e-6);
        assert_relative_eq!(angle_between(Vec3::Y, Vec3::NEG_Y), PI, epsilon = 1e-6);
    }
}
