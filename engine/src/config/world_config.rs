//! World generation and player placement settings.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::world::ColorTag;

/// Number of chunks along one edge of the rendered square.
pub const RENDER_DISTANCE: u32 = 13;

/// Player spawn and bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Position at startup
    pub spawn_position: Vec3,
    /// Position the reset key teleports to
    pub reset_position: Vec3,
    /// Full bounding box size; the box is centered on the player position
    pub size: Vec3,
    /// Initial look direction
    pub look: Vec3,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn_position: Vec3::new(0.0, 5.0, 0.0),
            reset_position: Vec3::new(0.0, 3.0, 0.0),
            size: Vec3::new(1.0, 2.0, 1.0),
            look: Vec3::X,
        }
    }
}

/// Settings for the random-walk obstacle generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of walk obstacles, not counting the ground plane
    pub obstacle_count: usize,
    /// Size of every walk obstacle
    pub obstacle_size: Vec3,
    /// Each step adds a uniform offset in `[-step_extent, step_extent)` per axis
    pub step_extent: Vec3,
    /// Center of the ground plane
    pub ground_position: Vec3,
    /// Size of the ground plane
    pub ground_size: Vec3,
    pub ground_color: ColorTag,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            obstacle_count: 500_000,
            obstacle_size: Vec3::new(1.5, 0.2, 1.5),
            step_extent: Vec3::new(5.0, 1.0, 5.0),
            ground_position: Vec3::ZERO,
            ground_size: Vec3::new(10.0, 1.0, 10.0),
            ground_color: ColorTag::GRAY,
        }
    }
}
