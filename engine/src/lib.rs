//! Voxel Strafe Engine Library
//!
//! Headless core of a first-person movement sandbox: a chunked spatial index
//! of static boxes, ground/air classification against it, a Quake-style
//! movement integrator, and mouse-look orientation. Rendering and windowing
//! stay outside; a frame driver feeds input in and draws what
//! [`World::query_visible_chunks`] returns.
//!
//! # Modules
//!
//! - [`world`] - Chunked obstacle index, seeds and the random-walk generator
//! - [`physics`] - Bounding boxes, ground detection and velocity kernels
//! - [`player`] - Player entity and the per-frame movement step
//! - [`camera`] - Look-vector orientation with pitch clamping
//! - [`input`] - Platform-agnostic key and mouse state
//! - [`render`] - Cube instances and the obstacle draw seam
//! - [`config`] - Tunables with JSON loading
//! - [`simulation`] - Ties everything together per frame
//!
//! # Example
//!
//! ```ignore
//! use voxel_strafe_engine::{InputState, KeyCode, SimConfig, Simulation, WorldSeed};
//!
//! let config = SimConfig::default();
//! let seed = WorldSeed::parse("strafe")?;
//! let mut sim = Simulation::from_seed(config, &seed);
//!
//! let mut input = InputState::new();
//! input.handle_key(KeyCode::W, true);
//! input.mouse.accumulate_delta(12.0, 0.0);
//!
//! let result = sim.tick(1.0 / 60.0, input.take_frame());
//! println!("pos={:?} grounded={}", result.position, result.grounded);
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;
pub mod render;
pub mod simulation;
pub mod world;

// Re-export the commonly used types at crate level for convenience
pub use camera::OrientationController;
pub use config::{ConfigError, SimConfig};
pub use input::{FrameInput, InputState, KeyCode, MovementKeys};
pub use player::{Player, StepResult};
pub use simulation::Simulation;
pub use world::{ChunkIndex, Obstacle, SeedError, World, WorldSeed};
