//! Ground detection
//!
//! Decides whether an entity's bounding box currently rests on any obstacle.
//! This is a boolean predicate only: no contact normal or penetration depth
//! is computed and nothing is pushed out of geometry.
//!
//! # Grounded Rule
//!
//! An entity is grounded by an obstacle when
//! 1. their boxes overlap on all three axes (touching counts), and
//! 2. the entity's bottom face is at or below the obstacle's top face.
//!
//! Rule 2 does not bound how far below the top the entity may be, so an
//! entity sunk into an obstacle is still grounded by it.
//!
//! # Search Area
//!
//! Only the entity's own chunk and its four orthogonal neighbours are
//! searched ([`GROUND_PROBE_OFFSETS`]). Diagonal neighbours are skipped: an
//! obstacle whose center lies in a diagonal chunk close to the shared corner
//! is invisible to ground detection.
//!
//! # Example
//!
//! ```ignore
//! use voxel_strafe_engine::physics::collision::is_grounded;
//! use voxel_strafe_engine::world::{World, ColorTag};
//! use glam::Vec3;
//!
//! let mut world = World::new();
//! world.create_obstacle(Vec3::ZERO, Vec3::new(10.0, 1.0, 10.0), ColorTag::GRAY);
//!
//! assert!(is_grounded(&world, Vec3::new(0.0, 1.5, 0.0), Vec3::new(1.0, 2.0, 1.0)));
//! ```

use glam::Vec3;

use super::types::Aabb;
use crate::world::{ChunkIndex, Obstacle, World};

/// Chunk offsets searched by ground detection: center, -X, +X, +Z, -Z.
pub const GROUND_PROBE_OFFSETS: [(i32, i32); 5] = [(0, 0), (-1, 0), (1, 0), (0, 1), (0, -1)];

/// Returns true if the entity box rests on `obstacle`.
#[inline]
pub fn rests_on(entity: &Aabb, obstacle: &Obstacle) -> bool {
    entity.overlaps(&obstacle.aabb()) && entity.bottom() <= obstacle.top()
}

/// Ground test against the obstacles of a single chunk.
///
/// An absent chunk is simply not grounding anything.
pub fn is_grounded_in_chunk(world: &World, index: ChunkIndex, position: Vec3, size: Vec3) -> bool {
    let entity = Aabb::from_center_size(position, size);
    world
        .lookup(index)
        .is_some_and(|chunk| chunk.iter().any(|obstacle| rests_on(&entity, obstacle)))
}

/// Returns the first obstacle grounding the entity, if any.
///
/// Chunks are visited in [`GROUND_PROBE_OFFSETS`] order and obstacles in
/// insertion order; the search stops at the first match.
pub fn find_ground<'w>(world: &'w World, position: Vec3, size: Vec3) -> Option<&'w Obstacle> {
    let entity = Aabb::from_center_size(position, size);
    let center = ChunkIndex::of(position);

    GROUND_PROBE_OFFSETS
        .iter()
        .filter_map(|&(dx, dz)| world.lookup(center.offset(dx, dz)))
        .flat_map(|chunk| chunk.iter())
        .find(|obstacle| rests_on(&entity, obstacle))
}

/// Ground/air classification for an entity centered at `position` with full
/// bounding-box `size`.
pub fn is_grounded(world: &World, position: Vec3, size: Vec3) -> bool {
    find_ground(world, position, size).is_some()
}
