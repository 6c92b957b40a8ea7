//! Physics type re-exports from glam, plus the axis-aligned box used by
//! every collision test in the engine.

pub use glam::{Quat, Vec2, Vec3};

/// Axis-aligned bounding box described by its min and max corners.
///
/// Boxes are always built from a center and a full size, so `min <= max`
/// holds component-wise as long as the size is non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from explicit corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a box centered at `center` spanning `size` on each axis
    /// (half-extents are `size / 2`).
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full size of the box on each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Separating-axis overlap test.
    ///
    /// Touching faces count as overlapping: two boxes that share a face
    /// are considered colliding.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
            && self.max.z >= other.min.z
            && self.min.z <= other.max.z
    }

    /// Y coordinate of the bottom face.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y
    }

    /// Y coordinate of the top face.
    #[inline]
    pub fn top(&self) -> f32 {
        self.max.y
    }
}
