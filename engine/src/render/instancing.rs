//! Instance Data for Obstacle Rendering
//!
//! GPU-compatible per-cube instance records and the draw-call seam between
//! the world index and whatever backend actually rasterizes cubes. The
//! simulation never depends on a backend; it hands visible obstacles to an
//! [`ObstacleRenderer`].

use crate::world::{ChunkIndex, ColorTag, Obstacle, World};

/// GPU instance data for a single obstacle cube.
///
/// Layout (32 bytes total, 16-byte aligned for GPU compatibility):
/// - position: vec3<f32> (12 bytes) - Box center in world space
/// - _pad0:    u32 (4 bytes) - Padding for alignment
/// - size:     vec3<f32> (12 bytes) - Full box size
/// - color:    u32 (4 bytes) - Packed RGBA color (8 bits per channel)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeInstance {
    /// Box center (x, y, z) - 12 bytes
    pub position: [f32; 3],
    /// Padding to align size to a 16-byte boundary - 4 bytes
    pub _pad0: u32,
    /// Full box size (width, height, length) - 12 bytes
    pub size: [f32; 3],
    /// Packed RGBA color (0xRRGGBBAA format) - 4 bytes
    pub color: u32,
}

static_assertions::assert_eq_size!(CubeInstance, [u8; 32]);

impl Default for CubeInstance {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            _pad0: 0,
            size: [1.0; 3],
            color: 0xFFFFFFFF,
        }
    }
}

impl CubeInstance {
    /// Packs an obstacle for instanced drawing.
    pub fn from_obstacle(obstacle: &Obstacle) -> Self {
        Self {
            position: obstacle.position.to_array(),
            _pad0: 0,
            size: obstacle.size().to_array(),
            color: pack_color(obstacle.color),
        }
    }
}

/// Pack RGBA color components into a single u32 value.
/// Format: 0xRRGGBBAA
#[inline]
pub fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32)
}

#[inline]
pub fn pack_color(color: ColorTag) -> u32 {
    pack_rgba(color.r, color.g, color.b, color.a)
}

/// Backend that can draw one solid cube per obstacle.
pub trait ObstacleRenderer {
    fn draw_cube(&mut self, obstacle: &Obstacle);
}

/// Collects cube instances for a single instanced draw.
#[derive(Debug, Clone, Default)]
pub struct InstanceBatch {
    instances: Vec<CubeInstance>,
}

impl InstanceBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn instances(&self) -> &[CubeInstance] {
        &self.instances
    }

    /// Raw bytes ready for upload into a vertex buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Empties the batch, keeping its allocation for the next frame.
    pub fn clear(&mut self) {
        self.instances.clear();
    }
}

impl ObstacleRenderer for InstanceBatch {
    fn draw_cube(&mut self, obstacle: &Obstacle) {
        self.instances.push(CubeInstance::from_obstacle(obstacle));
    }
}

/// Issues one `draw_cube` per obstacle in every chunk within `radius` of
/// `center`, in the world's row-major chunk order.
///
/// # Returns
/// Number of draw calls issued.
pub fn draw_visible<R: ObstacleRenderer + ?Sized>(
    world: &World,
    center: ChunkIndex,
    radius: u32,
    renderer: &mut R,
) -> usize {
    let mut draws = 0;
    for (_, chunk) in world.query_visible_chunks(center, radius) {
        for obstacle in chunk {
            renderer.draw_cube(obstacle);
            draws += 1;
        }
    }
    draws
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn unpack_rgba(packed: u32) -> (u8, u8, u8, u8) {
        (
            (packed >> 24) as u8,
            (packed >> 16) as u8,
            (packed >> 8) as u8,
            packed as u8,
        )
    }

    #[test]
    fn test_cube_instance_size() {
        assert_eq!(std::mem::size_of::<CubeInstance>(), 32);
    }

    #[test]
    fn test_pack_unpack_rgba() {
        let packed = pack_rgba(255, 128, 64, 200);
        assert_eq!(packed, 0xFF8040C8);
        assert_eq!(unpack_rgba(packed), (255, 128, 64, 200));
    }

    #[test]
    fn test_from_obstacle() {
        let obstacle = Obstacle::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(1.5, 0.2, 1.5),
            ColorTag::rgba(170, 0, 0, 255),
        );
        let instance = CubeInstance::from_obstacle(&obstacle);
        assert_eq!(instance.position, [1.0, 2.0, 3.0]);
        assert_eq!(instance.size, [1.5, 0.2, 1.5]);
        assert_eq!(unpack_rgba(instance.color), (170, 0, 0, 255));
    }

    #[test]
    fn test_draw_visible_counts_only_nearby_chunks() {
        let mut world = World::new();
        let size = Vec3::ONE;
        world.create_obstacle(Vec3::new(1.0, 0.0, 1.0), size, ColorTag::GRAY);
        world.create_obstacle(Vec3::new(2.0, 0.0, 2.0), size, ColorTag::GRAY);
        world.create_obstacle(Vec3::new(17.0, 0.0, 1.0), size, ColorTag::GRAY);
        world.create_obstacle(Vec3::new(200.0, 0.0, 1.0), size, ColorTag::GRAY);

        let mut batch = InstanceBatch::new();
        let draws = draw_visible(&world, ChunkIndex::new(0, 0), 1, &mut batch);

        assert_eq!(draws, 3);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.as_bytes().len(), 3 * 32);
    }

    #[test]
    fn test_batch_clear_keeps_nothing() {
        let mut batch = InstanceBatch::with_capacity(4);
        batch.draw_cube(&Obstacle::new(Vec3::ZERO, Vec3::ONE, ColorTag::GRAY));
        assert!(!batch.is_empty());
        batch.clear();
        assert!(batch.is_empty());
        assert!(batch.instances().is_empty());
    }
}
