//! Spatial World Index
//!
//! Sparse map from [`ChunkIndex`] to [`Chunk`]. Obstacles are bucketed by the
//! chunk their center falls into, which keeps both collision and rendering
//! queries proportional to the neighbourhood being looked at instead of the
//! whole (unbounded) world.
//!
//! # Example
//!
//! ```ignore
//! use voxel_strafe_engine::world::{World, ChunkIndex, ColorTag};
//! use glam::Vec3;
//!
//! let mut world = World::new();
//! world.create_obstacle(Vec3::ZERO, Vec3::new(10.0, 1.0, 10.0), ColorTag::GRAY);
//!
//! for (index, chunk) in world.query_visible_chunks(ChunkIndex::new(0, 0), 6) {
//!     println!("{:?}: {} obstacles", index, chunk.len());
//! }
//! ```

use std::collections::HashMap;

use glam::Vec3;

use super::chunk::{Chunk, ChunkIndex, ColorTag, Obstacle};
use super::generator::ObstaclePlacement;

/// Owned obstacle world, partitioned into chunks.
///
/// Populated once by a generator before simulation starts and only read
/// afterwards. Chunks are created lazily and never removed.
#[derive(Debug, Clone, Default)]
pub struct World {
    chunks: HashMap<ChunkIndex, Chunk>,
    obstacle_count: usize,
}

impl World {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an obstacle into the chunk containing `position`, creating
    /// the chunk if it does not exist yet.
    ///
    /// # Returns
    ///
    /// The index of the chunk the obstacle was stored in
    pub fn create_obstacle(&mut self, position: Vec3, size: Vec3, color: ColorTag) -> ChunkIndex {
        self.insert(Obstacle::new(position, size, color))
    }

    /// Inserts a prebuilt obstacle. See [`World::create_obstacle`].
    pub fn insert(&mut self, obstacle: Obstacle) -> ChunkIndex {
        let index = ChunkIndex::of(obstacle.position);
        self.chunks.entry(index).or_default().push(obstacle);
        self.obstacle_count += 1;
        index
    }

    /// Inserts every placement emitted by a generator, in order.
    ///
    /// # Returns
    ///
    /// Number of obstacles inserted
    pub fn populate<I>(&mut self, placements: I) -> usize
    where
        I: IntoIterator<Item = ObstaclePlacement>,
    {
        let chunks_before = self.chunks.len();
        let mut inserted = 0;
        for placement in placements {
            self.create_obstacle(placement.position, placement.size, placement.color);
            inserted += 1;
        }
        log::debug!(
            "populated {} obstacles, {} new chunks ({} total)",
            inserted,
            self.chunks.len() - chunks_before,
            self.chunks.len()
        );
        inserted
    }

    /// Looks up a chunk. A miss is a normal outcome for sparse worlds.
    pub fn lookup(&self, index: ChunkIndex) -> Option<&Chunk> {
        self.chunks.get(&index)
    }

    /// Chunk containing a world position, if any obstacle was ever placed there.
    pub fn chunk_at(&self, position: Vec3) -> Option<&Chunk> {
        self.lookup(ChunkIndex::of(position))
    }

    /// Every present chunk inside the square of edge `2 * radius + 1`
    /// centered on `center`.
    ///
    /// Iteration is row-major and deterministic: the outer loop walks X
    /// offsets from `-radius` to `radius`, the inner loop walks Z offsets.
    /// Absent chunks are skipped.
    pub fn query_region(
        &self,
        center: ChunkIndex,
        radius: u32,
    ) -> impl Iterator<Item = (ChunkIndex, &Chunk)> + '_ {
        let r = radius.min(i32::MAX as u32 / 2) as i32;
        (-r..=r).flat_map(move |dx| {
            (-r..=r).filter_map(move |dz| {
                let index = center.offset(dx, dz);
                self.lookup(index).map(|chunk| (index, chunk))
            })
        })
    }

    /// Chunks the renderer should draw around the viewer's chunk.
    ///
    /// Same as [`World::query_region`]; kept as the renderer-facing name.
    pub fn query_visible_chunks(
        &self,
        center: ChunkIndex,
        radius: u32,
    ) -> impl Iterator<Item = (ChunkIndex, &Chunk)> + '_ {
        self.query_region(center, radius)
    }

    /// Number of chunks that hold at least one obstacle.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total number of obstacles across all chunks.
    pub fn obstacle_count(&self) -> usize {
        self.obstacle_count
    }

    /// Returns true if no obstacle has been placed.
    pub fn is_empty(&self) -> bool {
        self.obstacle_count == 0
    }

    /// Iterates all chunks in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&ChunkIndex, &Chunk)> {
        self.chunks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_lookup() {
        let mut world = World::new();
        let index = world.create_obstacle(Vec3::new(20.0, 1.0, -3.0), Vec3::ONE, ColorTag::GRAY);
        assert_eq!(index, ChunkIndex::new(1, -1));

        let chunk = world.lookup(index).expect("chunk should exist");
        assert_eq!(chunk.len(), 1);
        assert_eq!(chunk.obstacles()[0].position, Vec3::new(20.0, 1.0, -3.0));
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let world = World::new();
        assert!(world.lookup(ChunkIndex::new(42, -7)).is_none());
        assert!(world.chunk_at(Vec3::new(1000.0, 0.0, 1000.0)).is_none());
    }

    #[test]
    fn test_same_cell_shares_chunk() {
        let mut world = World::new();
        world.create_obstacle(Vec3::new(1.0, 0.0, 1.0), Vec3::ONE, ColorTag::GRAY);
        world.create_obstacle(Vec3::new(15.0, 9.0, 2.0), Vec3::ONE, ColorTag::GRAY);
        assert_eq!(world.chunk_count(), 1);
        assert_eq!(world.obstacle_count(), 2);
    }

    #[test]
    fn test_query_region_row_major_order() {
        let mut world = World::new();
        // Insert out of order; the query must still return X-major order
        for &(x, z) in &[(1, 1), (-1, 0), (0, -1), (1, -1), (-1, -1)] {
            let (ox, oz) = ChunkIndex::new(x, z).origin();
            world.create_obstacle(Vec3::new(ox + 1.0, 0.0, oz + 1.0), Vec3::ONE, ColorTag::GRAY);
        }

        let order: Vec<ChunkIndex> = world
            .query_region(ChunkIndex::new(0, 0), 1)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(
            order,
            vec![
                ChunkIndex::new(-1, -1),
                ChunkIndex::new(-1, 0),
                ChunkIndex::new(0, -1),
                ChunkIndex::new(1, -1),
                ChunkIndex::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_query_region_radius_zero_is_center_only() {
        let mut world = World::new();
        world.create_obstacle(Vec3::new(1.0, 0.0, 1.0), Vec3::ONE, ColorTag::GRAY);
        world.create_obstacle(Vec3::new(17.0, 0.0, 1.0), Vec3::ONE, ColorTag::GRAY);
        assert_eq!(world.query_region(ChunkIndex::new(0, 0), 0).count(), 1);
        assert_eq!(world.query_visible_chunks(ChunkIndex::new(0, 0), 1).count(), 2);
    }
}
