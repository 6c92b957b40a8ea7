//! Frame-stepped simulation state.
//!
//! Owns the world index, the player and the orientation controller, and
//! runs them in the per-frame order: look update, movement step, then
//! visibility queries for drawing. Single-threaded; the world is read-only
//! once the simulation is built.

use crate::camera::OrientationController;
use crate::config::SimConfig;
use crate::input::FrameInput;
use crate::player::{Player, StepResult};
use crate::render::{ObstacleRenderer, draw_visible};
use crate::world::{Chunk, ChunkIndex, World, WorldSeed, generate_world};

/// World, player and orientation advanced together one frame at a time.
pub struct Simulation {
    world: World,
    player: Player,
    orientation: OrientationController,
    config: SimConfig,
    frame: u64,
}

impl Simulation {
    /// Builds a simulation over an already populated world.
    pub fn new(config: SimConfig, world: World) -> Self {
        Self {
            world,
            player: Player::from_config(&config.player, config.movement),
            orientation: OrientationController::from_config(&config.look, config.player.look),
            config,
            frame: 0,
        }
    }

    /// Generates the world from `seed` and builds a simulation over it.
    pub fn from_seed(config: SimConfig, seed: &WorldSeed) -> Self {
        let world = generate_world(seed, config.generator);
        Self::new(config, world)
    }

    /// Runs one frame.
    ///
    /// The mouse delta rotates the look vector first, so movement already
    /// uses this frame's orientation.
    pub fn tick(&mut self, dt: f32, input: FrameInput) -> StepResult {
        let look = self
            .orientation
            .apply_mouse_delta(input.mouse.delta_x, input.mouse.delta_y);
        let result = self
            .player
            .step(&self.world, dt, &input.keys, input.jump_intent(), look);
        self.frame += 1;
        result
    }

    /// Chunk the player currently stands in.
    pub fn player_chunk(&self) -> ChunkIndex {
        ChunkIndex::of(self.player.position())
    }

    /// Present chunks within the configured visible radius of the player.
    pub fn visible_chunks(&self) -> impl Iterator<Item = (ChunkIndex, &Chunk)> + '_ {
        self.world
            .query_visible_chunks(self.player_chunk(), self.config.visible_radius())
    }

    /// Draws every visible obstacle and returns the number of draw calls.
    pub fn draw<R: ObstacleRenderer + ?Sized>(&self, renderer: &mut R) -> usize {
        draw_visible(
            &self.world,
            self.player_chunk(),
            self.config.visible_radius(),
            renderer,
        )
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn orientation(&self) -> &OrientationController {
        &self.orientation
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
