//! World generation.
//!
//! Generators emit a sequence of [`ObstaclePlacement`]s that is fed into
//! [`World::populate`]. The policy is pluggable through [`WorldGenerator`];
//! [`WalkGenerator`] is the stock policy: one ground plane under the spawn
//! point, then a long chain of small platforms laid out by a uniform random
//! incremental walk.
//!
//! Generation is deterministic for a given seed: the same seed and config
//! always produce the same placements in the same order.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::chunk::ColorTag;
use super::index::World;
use super::seed::WorldSeed;
use crate::config::GeneratorConfig;

/// One obstacle to insert into the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstaclePlacement {
    pub position: Vec3,
    pub size: Vec3,
    pub color: ColorTag,
}

/// A source of obstacle geometry.
pub trait WorldGenerator {
    /// Inserts the generated obstacles into `world`.
    ///
    /// # Returns
    ///
    /// Number of obstacles inserted
    fn generate(&mut self, world: &mut World) -> usize;
}

/// Random-walk platform generator.
///
/// Yields the ground plane first, then `obstacle_count` platforms. Platform
/// `i` sits at the previous platform's position (the origin for the first)
/// plus a uniform offset in `[-step_extent, step_extent)` on each axis, and
/// is tinted `RGBA(i % 120 + 50, 0, 0, 255)`.
#[derive(Debug, Clone)]
pub struct WalkGenerator {
    rng: ChaCha8Rng,
    config: GeneratorConfig,
    cursor: Vec3,
    emitted_ground: bool,
    emitted: usize,
}

impl WalkGenerator {
    /// Creates a generator from a validated seed.
    pub fn new(seed: &WorldSeed, config: GeneratorConfig) -> Self {
        Self::from_seed_value(seed.value(), config)
    }

    /// Creates a generator from a raw 64-bit seed.
    pub fn from_seed_value(seed: u64, config: GeneratorConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            cursor: Vec3::ZERO,
            emitted_ground: false,
            emitted: 0,
        }
    }

}

/// Draws one walk step, uniform in `[-extent, extent)` on each axis.
fn walk_step<R: Rng>(rng: &mut R, extent: Vec3) -> Vec3 {
    let unit = Vec3::new(rng.r#gen::<f32>(), rng.r#gen::<f32>(), rng.r#gen::<f32>());
    // Maps [0, 1) to [-extent, extent)
    unit * extent * 2.0 - extent
}

impl Iterator for WalkGenerator {
    type Item = ObstaclePlacement;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.emitted_ground {
            self.emitted_ground = true;
            return Some(ObstaclePlacement {
                position: self.config.ground_position,
                size: self.config.ground_size,
                color: self.config.ground_color,
            });
        }
        if self.emitted >= self.config.obstacle_count {
            return None;
        }

        let i = self.emitted;
        self.emitted += 1;
        self.cursor += walk_step(&mut self.rng, self.config.step_extent);

        Some(ObstaclePlacement {
            position: self.cursor,
            size: self.config.obstacle_size,
            color: ColorTag::rgba((i % 120 + 50) as u8, 0, 0, 255),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.config.obstacle_count.saturating_sub(self.emitted)
            + usize::from(!self.emitted_ground);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WalkGenerator {}

impl WorldGenerator for WalkGenerator {
    fn generate(&mut self, world: &mut World) -> usize {
        world.populate(self.by_ref())
    }
}

/// Builds a world from a seed with the stock generator, logging the seed so
/// the world can be reproduced.
pub fn generate_world(seed: &WorldSeed, config: GeneratorConfig) -> World {
    log::info!("Generating world with seed: {} from user: {}", seed.value(), seed.text());
    let mut world = World::new();
    let count = WalkGenerator::new(seed, config).generate(&mut world);
    log::info!(
        "Generated {} obstacles across {} chunks",
        count,
        world.chunk_count()
    );
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(count: usize) -> GeneratorConfig {
        GeneratorConfig {
            obstacle_count: count,
            ..Default::default()
        }
    }

    #[test]
    fn test_ground_plane_comes_first() {
        let mut generator = WalkGenerator::from_seed_value(1, small_config(3));
        let ground = generator.next().unwrap();
        assert_eq!(ground.position, Vec3::ZERO);
        assert_eq!(ground.size, Vec3::new(10.0, 1.0, 10.0));
        assert_eq!(ground.color, ColorTag::GRAY);
        assert_eq!(generator.len(), 3);
    }

    #[test]
    fn test_emits_exact_count() {
        let placements: Vec<_> = WalkGenerator::from_seed_value(9, small_config(250)).collect();
        assert_eq!(placements.len(), 251);
    }

    #[test]
    fn test_steps_stay_within_extent() {
        let config = small_config(1_000);
        let placements: Vec<_> = WalkGenerator::from_seed_value(3, config).skip(1).collect();
        let mut previous = Vec3::ZERO;
        for placement in &placements {
            let step = placement.position - previous;
            // Accumulated positions lose a little precision, so allow slack
            assert!(step.x.abs() <= 5.0 + 1e-3);
            assert!(step.y.abs() <= 1.0 + 1e-3);
            assert!(step.z.abs() <= 5.0 + 1e-3);
            assert_eq!(placement.size, Vec3::new(1.5, 0.2, 1.5));
            previous = placement.position;
        }
    }

    #[test]
    fn test_color_cycle() {
        let placements: Vec<_> = WalkGenerator::from_seed_value(5, small_config(130)).collect();
        assert_eq!(placements[1].color, ColorTag::rgba(50, 0, 0, 255));
        assert_eq!(placements[120].color, ColorTag::rgba(169, 0, 0, 255));
        assert_eq!(placements[121].color, ColorTag::rgba(50, 0, 0, 255));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let seed = WorldSeed::parse("determinism").unwrap();
        let a: Vec<_> = WalkGenerator::new(&seed, small_config(500)).collect();
        let b: Vec<_> = WalkGenerator::new(&seed, small_config(500)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_sequence() {
        let a: Vec<_> = WalkGenerator::from_seed_value(1, small_config(10)).collect();
        let b: Vec<_> = WalkGenerator::from_seed_value(2, small_config(10)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_platforms_follow_cumulative_walk() {
        let config = small_config(3);
        let placements: Vec<_> = WalkGenerator::from_seed_value(11, config).skip(1).collect();

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut expected = Vec3::ZERO;
        for placement in &placements {
            expected += walk_step(&mut rng, config.step_extent);
            assert_eq!(placement.position, expected);
        }
    }

    #[test]
    fn test_generate_populates_world() {
        let mut world = World::new();
        let count = WalkGenerator::from_seed_value(7, small_config(64)).generate(&mut world);
        assert_eq!(count, 65);
        assert_eq!(world.obstacle_count(), 65);
    }
}
