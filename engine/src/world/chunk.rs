//! Chunk Module
//!
//! Fixed-size horizontal cells that partition the obstacle world.
//!
//! ## Chunk Grid
//! - Every chunk covers `CHUNK_SIZE x CHUNK_SIZE` world units on the X/Z plane
//!   and is unbounded vertically.
//! - A position belongs to chunk `(floor(x / CHUNK_SIZE), floor(z / CHUNK_SIZE))`.
//! - Chunks are append-only; an obstacle stays in the chunk its center fell
//!   into when it was inserted, even if it extends across the border.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::Aabb;

/// Edge length of a chunk in world units.
pub const CHUNK_SIZE: f32 = 16.0;

/// Integer coordinates of a chunk cell on the X/Z plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ChunkIndex {
    pub x: i32,
    pub z: i32,
}

impl ChunkIndex {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk containing a world position (Y is ignored).
    ///
    /// Uses floor division, so `-0.5` lands in chunk `-1` rather than `0`.
    pub fn of(position: Vec3) -> Self {
        Self {
            x: (position.x / CHUNK_SIZE).floor() as i32,
            z: (position.z / CHUNK_SIZE).floor() as i32,
        }
    }

    /// Index shifted by a whole number of chunks.
    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            z: self.z.wrapping_add(dz),
        }
    }

    /// World-space X/Z of the cell's minimum corner.
    pub fn origin(self) -> (f32, f32) {
        (self.x as f32 * CHUNK_SIZE, self.z as f32 * CHUNK_SIZE)
    }
}

/// Render-only color of an obstacle. Never read by the physics code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorTag {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorTag {
    pub const GRAY: ColorTag = ColorTag::rgba(130, 130, 130, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for ColorTag {
    fn default() -> Self {
        Self::GRAY
    }
}

/// A static solid box placed in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Center of the box in world space
    pub position: Vec3,
    /// Size along X
    pub width: f32,
    /// Size along Y
    pub height: f32,
    /// Size along Z
    pub length: f32,
    pub color: ColorTag,
}

impl Obstacle {
    /// Creates an obstacle from a center and a full size vector.
    pub fn new(position: Vec3, size: Vec3, color: ColorTag) -> Self {
        Self {
            position,
            width: size.x,
            height: size.y,
            length: size.z,
            color,
        }
    }

    /// Full size as a vector `(width, height, length)`.
    #[inline]
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.length)
    }

    /// Bounding box of the obstacle.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size())
    }

    /// Y coordinate of the top face.
    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y + self.height / 2.0
    }
}

/// Append-only list of obstacles whose centers fell inside one cell.
#[derive(Debug, Clone, Default)]
pub struct Chunk {
    obstacles: Vec<Obstacle>,
}

impl Chunk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl<'a> IntoIterator for &'a Chunk {
    type Item = &'a Obstacle;
    type IntoIter = std::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.obstacles.iter()
    }
}
