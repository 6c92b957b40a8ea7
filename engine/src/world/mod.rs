//! World Module
//!
//! Chunked obstacle storage, seeding and generation.
//!
//! ## Default World
//! A 10 x 1 x 10 ground plane at the origin followed by a random walk of
//! half a million thin platforms, bucketed into 16 x 16 chunks.

pub mod chunk;
pub mod generator;
pub mod index;
pub mod seed;

pub use chunk::{CHUNK_SIZE, Chunk, ChunkIndex, ColorTag, Obstacle};
pub use generator::{ObstaclePlacement, WalkGenerator, WorldGenerator, generate_world};
pub use index::World;
pub use seed::{SeedError, WorldSeed, fnv1a_64};
