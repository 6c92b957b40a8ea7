//! Voxel Strafe - Headless Frame Driver
//!
//! Run with: `cargo run --release --bin voxel_strafe -- --seed hello --frames 600`
//!
//! Generates the obstacle world, then drives the simulation with a scripted
//! input pattern at a fixed frame time and logs a HUD line (position,
//! horizontal speed, ground state) at a steady interval.
//!
//! Scripts:
//! - idle: no input, the player drops onto the ground plane and settles
//! - forward: hold W
//! - strafe-jump: hold W and jump, alternate A/D while sweeping the mouse
//!
//! `--preset grippy` swaps in the higher-friction movement tuning.
//!
//! Logging goes through `RUST_LOG` (default `info`); `RUST_LOG=debug` also
//! shows ground/air transitions.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use voxel_strafe_engine::config::MovementConfig;
use voxel_strafe_engine::render::InstanceBatch;
use voxel_strafe_engine::{FrameInput, InputState, KeyCode, SimConfig, Simulation, WorldSeed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Script {
    Idle,
    Forward,
    StrafeJump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    Classic,
    Grippy,
}

impl Preset {
    fn movement(self) -> MovementConfig {
        match self {
            Preset::Classic => MovementConfig::default(),
            Preset::Grippy => MovementConfig::grippy(),
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed text; a random seed is drawn when omitted or blank
    #[arg(short, long)]
    seed: Option<String>,

    /// JSON file overriding any subset of the default configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Frame time in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frametime: f32,

    /// Movement tuning preset; replaces the movement section of `--config`
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Override the number of generated platforms
    #[arg(long)]
    obstacles: Option<usize>,

    /// Scripted input pattern
    #[arg(long, value_enum, default_value_t = Script::Idle)]
    script: Script,

    /// Log a HUD line every this many frames
    #[arg(long, default_value_t = 60)]
    hud_every: u64,
}

/// Input the script produces for frame `frame`.
///
/// Every frame starts from released keys; the script presses what it needs.
fn scripted_input(script: Script, frame: u64, input: &mut InputState) -> FrameInput {
    input.keys.release_all();
    match script {
        Script::Idle => {}
        Script::Forward => {
            input.handle_key(KeyCode::W, true);
        }
        Script::StrafeJump => {
            // Half-second strafe phases, turning with the strafe
            let right_phase = (frame / 30) % 2 == 0;
            input.handle_key(KeyCode::W, true);
            input.handle_key(KeyCode::Space, true);
            input.handle_key(if right_phase { KeyCode::D } else { KeyCode::A }, true);
            let turn = if right_phase { 8.0 } else { -8.0 };
            input.mouse.accumulate_delta(turn, 0.0);
        }
    }
    input.take_frame()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match SimConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };
    if let Some(preset) = args.preset {
        config.movement = preset.movement();
    }
    if let Some(count) = args.obstacles {
        config.generator.obstacle_count = count;
    }

    if !(args.frametime.is_finite() && args.frametime > 0.0) {
        log::error!("Frame time must be a positive number, got {}", args.frametime);
        return ExitCode::FAILURE;
    }

    let seed = match WorldSeed::from_optional(args.seed.as_deref()) {
        Ok(seed) => seed,
        Err(e) => {
            log::error!("Rejected seed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut sim = Simulation::from_seed(config, &seed);
    log::info!(
        "World ready: {} obstacles in {} chunks",
        sim.world().obstacle_count(),
        sim.world().chunk_count()
    );

    let mut input = InputState::new();
    let mut batch = InstanceBatch::new();
    let hud_every = args.hud_every.max(1);

    for frame in 0..args.frames {
        let frame_input = scripted_input(args.script, frame, &mut input);
        let result = sim.tick(args.frametime, frame_input);

        if frame % hud_every == 0 || frame + 1 == args.frames {
            batch.clear();
            let draws = sim.draw(&mut batch);
            log::info!(
                "frame {:>6} pos=({:.3}, {:.3}, {:.3}) speed={:.3} grounded={} draws={}",
                sim.frame(),
                result.position.x,
                result.position.y,
                result.position.z,
                sim.player().horizontal_speed(),
                result.grounded,
                draws
            );
        }
    }

    ExitCode::SUCCESS
}
