//! Player Movement Controller
//!
//! Quake-style movement integrator for the player. Movement direction is
//! relative to the look vector, and the ground/air state decides which
//! velocity kernels run each frame.
//!
//! # Physics Model
//!
//! - Grounded + jump intent: vertical speed set to the jump speed, no friction
//! - Grounded otherwise: vertical speed zeroed, friction, ground acceleration
//! - Airborne: air acceleration, then gravity
//!
//! # Logical velocity
//!
//! The stored velocity uses a logical layout: `x`/`y` are the horizontal
//! plane (world X and world Z) and `z` is vertical. [`logical_to_world`] is
//! the only place the layout is converted, right before the position update.
//!
//! # Usage
//!
//! ```rust,ignore
//! use voxel_strafe_engine::player::Player;
//! use voxel_strafe_engine::input::MovementKeys;
//!
//! let mut player = Player::from_config(&config.player, config.movement);
//!
//! // Each frame:
//! let result = player.step(&world, frame_time, &keys, jump_intent, look);
//! println!("{:?} grounded={}", result.position, result.grounded);
//! ```

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::{Vec2, Vec3};

use crate::config::{MovementConfig, PlayerConfig};
use crate::input::MovementKeys;
use crate::physics::{accelerate, air_accelerate, apply_friction, horizontal_speed, is_grounded};
use crate::world::World;

/// Converts a logical velocity (`z` vertical) into world axes (`y` vertical).
#[inline]
pub fn logical_to_world(velocity: Vec3) -> Vec3 {
    Vec3::new(velocity.x, velocity.z, velocity.y)
}

/// Rotation applied to the projected look vector for a key combination.
///
/// `forward` is W minus S, `right` is D minus A. Returns `None` when no
/// direction is requested.
fn wish_angle(forward: i32, right: i32) -> Option<f32> {
    match (forward, right) {
        (1, 1) => Some(FRAC_PI_4),
        (1, 0) => Some(0.0),
        (1, -1) => Some(-FRAC_PI_4),
        (-1, 1) => Some(3.0 * FRAC_PI_4),
        (-1, 0) => Some(PI),
        (-1, -1) => Some(-3.0 * FRAC_PI_4),
        (0, 1) => Some(FRAC_PI_2),
        (0, -1) => Some(-FRAC_PI_2),
        _ => None,
    }
}

/// Unit wish direction in logical axes, or zero when no key is held or the
/// look vector has no horizontal component.
///
/// # Arguments
/// * `keys` - Held movement keys
/// * `look` - Current look vector in world axes
pub fn wish_dir(keys: &MovementKeys, look: Vec3) -> Vec3 {
    let Some(angle) = wish_angle(keys.forward_axis(), keys.right_axis()) else {
        return Vec3::ZERO;
    };

    let projected = Vec2::new(look.x, look.z);
    let rotated = Vec2::from_angle(angle).rotate(projected);
    rotated.extend(0.0).normalize_or_zero()
}

/// Outcome of one [`Player::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    /// Position after integration (and reset, if requested)
    pub position: Vec3,
    /// Logical velocity after integration
    pub velocity: Vec3,
    /// Ground state evaluated at the start of the frame
    pub grounded: bool,
    /// Wish direction used this frame
    pub wishdir: Vec3,
}

/// Player entity: an axis-aligned box centered on `position`.
#[derive(Debug, Clone)]
pub struct Player {
    position: Vec3,
    /// Logical velocity, `z` is vertical
    velocity: Vec3,
    size: Vec3,
    reset_position: Vec3,
    movement: MovementConfig,
    /// Ground state of the last step, for transition logging
    grounded: bool,
}

impl Player {
    /// Player at `position` with default movement tuning.
    pub fn new(position: Vec3, size: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            size,
            reset_position: position,
            movement: MovementConfig::default(),
            grounded: false,
        }
    }

    pub fn from_config(player: &PlayerConfig, movement: MovementConfig) -> Self {
        Self {
            reset_position: player.reset_position,
            movement,
            ..Self::new(player.spawn_position, player.size)
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Logical velocity (`z` vertical).
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Velocity in world axes (`y` vertical).
    pub fn world_velocity(&self) -> Vec3 {
        logical_to_world(self.velocity)
    }

    pub fn size(&self) -> Vec3 {
        self.size
    }

    pub fn movement(&self) -> &MovementConfig {
        &self.movement
    }

    /// Ground state seen by the most recent step.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Speed on the horizontal plane.
    pub fn horizontal_speed(&self) -> f32 {
        horizontal_speed(self.velocity)
    }

    /// Teleports to the reset point and stops all motion.
    pub fn reset(&mut self) {
        self.position = self.reset_position;
        self.velocity = Vec3::ZERO;
    }

    /// Advances the player by one frame.
    ///
    /// # Arguments
    /// * `world` - Obstacle index used for ground detection
    /// * `dt` - Frame time in seconds
    /// * `keys` - Held movement keys
    /// * `jump_intent` - Space held or wheel moved this frame
    /// * `look` - Look vector after this frame's mouse update
    ///
    /// # Returns
    /// The new position, logical velocity, the ground state evaluated at the
    /// start of the frame, and the frame's wish direction.
    pub fn step(
        &mut self,
        world: &World,
        dt: f32,
        keys: &MovementKeys,
        jump_intent: bool,
        look: Vec3,
    ) -> StepResult {
        let wishdir = wish_dir(keys, look);
        let grounded = is_grounded(world, self.position, self.size);
        self.log_transition(grounded);

        let m = self.movement;
        if grounded {
            if jump_intent {
                self.velocity.z = m.jump_speed;
            } else {
                self.velocity.z = 0.0;
                apply_friction(&mut self.velocity, dt, m.friction, m.stop_speed);
                accelerate(&mut self.velocity, wishdir, m.max_speed, m.accelerate, dt);
            }
        } else {
            air_accelerate(
                &mut self.velocity,
                wishdir,
                m.max_speed,
                m.max_air_speed,
                m.air_accelerate,
                dt,
            );
            self.velocity.z += m.gravity * dt;
        }

        self.position += logical_to_world(self.velocity) * dt;

        if keys.reset {
            self.reset();
        }

        StepResult {
            position: self.position,
            velocity: self.velocity,
            grounded,
            wishdir,
        }
    }

    fn log_transition(&mut self, grounded: bool) {
        if grounded != self.grounded {
            if grounded {
                log::debug!(
                    "Landed at ({:.2}, {:.2}, {:.2}), fall speed {:.2}",
                    self.position.x,
                    self.position.y,
                    self.position.z,
                    self.velocity.z
                );
            } else {
                log::debug!(
                    "Airborne at ({:.2}, {:.2}, {:.2})",
                    self.position.x,
                    self.position.y,
                    self.position.z
                );
            }
        }
        self.grounded = grounded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::ColorTag;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    fn ground_world() -> World {
        let mut world = World::new();
        world.create_obstacle(Vec3::ZERO, Vec3::new(10.0, 1.0, 10.0), ColorTag::GRAY);
        world
    }

    /// Player standing on the ground plane from `ground_world`.
    fn standing_player() -> Player {
        Player::new(Vec3::new(0.0, 1.4, 0.0), Vec3::new(1.0, 2.0, 1.0))
    }

    #[test]
    fn test_logical_to_world_swaps_vertical() {
        assert_eq!(logical_to_world(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 3.0, 2.0));
    }

    #[test]
    fn test_wish_dir_no_keys_is_zero() {
        assert_eq!(wish_dir(&MovementKeys::new(), Vec3::X), Vec3::ZERO);
        assert_eq!(wish_dir(&MovementKeys::with(true, true, true, true), Vec3::X), Vec3::ZERO);
    }

    #[test]
    fn test_wish_dir_cardinals() {
        let forward = wish_dir(&MovementKeys::with(true, false, false, false), Vec3::X);
        assert_relative_eq!(forward.x, 1.0, epsilon = 1e-6);

        let back = wish_dir(&MovementKeys::with(false, true, false, false), Vec3::X);
        assert_relative_eq!(back.x, -1.0, epsilon = 1e-6);

        // D moves along the camera right axis, which is world +Z for a +X look
        let right = wish_dir(&MovementKeys::with(false, false, false, true), Vec3::X);
        assert_relative_eq!(right.y, 1.0, epsilon = 1e-6);

        let left = wish_dir(&MovementKeys::with(false, false, true, false), Vec3::X);
        assert_relative_eq!(left.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_wish_dir_diagonal_is_unit() {
        let look = Vec3::new(0.3, -0.8, 0.5).normalize();
        let dir = wish_dir(&MovementKeys::with(true, false, false, true), look);
        assert_relative_eq!(dir.length(), 1.0, epsilon = 1e-5);
        assert_eq!(dir.z, 0.0);
    }

    #[test]
    fn test_wish_dir_vertical_look_is_zero() {
        let dir = wish_dir(&MovementKeys::with(true, false, false, false), Vec3::Y);
        assert_eq!(dir, Vec3::ZERO);
    }

    #[test]
    fn test_airborne_applies_gravity() {
        let world = World::new();
        let mut player = Player::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 2.0, 1.0));
        let result = player.step(&world, DT, &MovementKeys::new(), false, Vec3::X);

        assert!(!result.grounded);
        assert_relative_eq!(result.velocity.z, -16.0 * DT, epsilon = 1e-6);
        assert!(result.position.y < 5.0);
    }

    #[test]
    fn test_grounded_jump_sets_vertical_speed() {
        let world = ground_world();
        let mut player = standing_player();
        let result = player.step(&world, DT, &MovementKeys::new(), true, Vec3::X);

        assert!(result.grounded);
        assert_eq!(result.velocity.z, 6.0);
        assert_relative_eq!(result.position.y, 1.4 + 6.0 * DT, epsilon = 1e-5);
    }

    #[test]
    fn test_grounded_jump_skips_friction() {
        let world = ground_world();
        let mut player = standing_player();
        player.set_velocity(Vec3::new(3.0, 0.0, 0.0));
        let result = player.step(&world, DT, &MovementKeys::new(), true, Vec3::X);
        assert_eq!(result.velocity.x, 3.0);
    }

    #[test]
    fn test_grounded_friction_slows_down() {
        let world = ground_world();
        let mut player = standing_player();
        player.set_velocity(Vec3::new(3.0, 1.0, -2.0));
        let result = player.step(&world, DT, &MovementKeys::new(), false, Vec3::X);

        assert!(result.grounded);
        assert_eq!(result.velocity.z, 0.0);
        assert!(player.horizontal_speed() < Vec2::new(3.0, 1.0).length());
    }

    #[test]
    fn test_ground_speed_converges_to_max() {
        let world = ground_world();
        let mut player = standing_player();
        let keys = MovementKeys::with(true, false, false, false);
        for _ in 0..600 {
            player.step(&world, DT, &keys, false, Vec3::Z);
            // Keep the player over the ground plane
            let p = player.position();
            player.set_position(Vec3::new(0.0, p.y, 0.0));
        }
        assert!(player.horizontal_speed() <= 4.0 + 1e-4);
        assert!(player.horizontal_speed() > 3.0);
    }

    #[test]
    fn test_reset_key_teleports() {
        let world = World::new();
        let mut player = Player::from_config(&PlayerConfig::default(), MovementConfig::default());
        assert_eq!(player.position(), Vec3::new(0.0, 5.0, 0.0));

        let keys = MovementKeys {
            reset: true,
            ..MovementKeys::with(true, false, false, false)
        };
        let result = player.step(&world, DT, &keys, false, Vec3::X);

        assert_eq!(result.position, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(result.velocity, Vec3::ZERO);
        // Grounded flag and wishdir still describe the frame that ran
        assert!(!result.grounded);
        assert_ne!(result.wishdir, Vec3::ZERO);
    }

    #[test]
    fn test_fall_until_grounded_then_settle() {
        let world = ground_world();
        let mut player = Player::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 2.0, 1.0));
        let keys = MovementKeys::new();

        let mut last_y = player.position().y;
        let mut landed = false;
        for _ in 0..600 {
            let result = player.step(&world, DT, &keys, false, Vec3::X);
            if result.grounded {
                landed = true;
                break;
            }
            assert!(result.position.y < last_y);
            last_y = result.position.y;
        }
        assert!(landed);
        assert!(player.is_grounded());

        for _ in 0..120 {
            let result = player.step(&world, DT, &keys, false, Vec3::X);
            assert!(result.grounded);
        }
        assert_relative_eq!(player.velocity().length(), 0.0, epsilon = 1e-6);
    }
}
