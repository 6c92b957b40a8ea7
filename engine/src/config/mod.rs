//! Config Module
//!
//! Centralized tuning for the simulation. Every value has a default matching
//! the classic movement feel; a JSON file can override any subset of fields.
//!
//! # Example
//!
//! ```ignore
//! use voxel_strafe_engine::config::SimConfig;
//!
//! let config = SimConfig::from_json_str(r#"{ "movement": { "friction": 7.0 } }"#)?;
//! assert_eq!(config.movement.max_speed, 4.0);
//! ```

pub mod movement_config;
pub mod world_config;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use movement_config::{
    ACCELERATE, AIR_ACCELERATE, FRICTION, GRAVITY, JUMP_SPEED, LOOK_SENSITIVITY, LookConfig,
    MAX_AIR_SPEED, MAX_SPEED, MovementConfig, PITCH_EPSILON, STOP_SPEED,
};
pub use world_config::{GeneratorConfig, PlayerConfig, RENDER_DISTANCE};

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A value parsed but is outside its allowed range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub movement: MovementConfig,
    pub look: LookConfig,
    pub player: PlayerConfig,
    pub generator: GeneratorConfig,
    /// Edge of the rendered chunk square; the visibility radius is
    /// `(render_distance - 1) / 2`
    pub render_distance: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            movement: MovementConfig::default(),
            look: LookConfig::default(),
            player: PlayerConfig::default(),
            generator: GeneratorConfig::default(),
            render_distance: RENDER_DISTANCE,
        }
    }
}

impl SimConfig {
    /// Parses and validates a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Visibility radius in chunks around the viewer's chunk.
    pub fn visible_radius(&self) -> u32 {
        self.render_distance.saturating_sub(1) / 2
    }

    /// Checks every value the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        non_negative("movement.friction", m.friction)?;
        positive("movement.stop_speed", m.stop_speed)?;
        positive("movement.max_speed", m.max_speed)?;
        non_negative("movement.max_air_speed", m.max_air_speed)?;
        non_negative("movement.accelerate", m.accelerate)?;
        non_negative("movement.air_accelerate", m.air_accelerate)?;
        finite("movement.gravity", m.gravity)?;
        non_negative("movement.jump_speed", m.jump_speed)?;

        finite("look.sensitivity", self.look.sensitivity)?;
        let eps = self.look.pitch_epsilon;
        if !eps.is_finite() || eps <= 0.0 || eps >= std::f32::consts::FRAC_PI_2 {
            return Err(ConfigError::Invalid {
                field: "look.pitch_epsilon",
                reason: "must lie strictly between 0 and pi/2",
            });
        }

        let p = &self.player;
        finite_vec("player.spawn_position", p.spawn_position)?;
        finite_vec("player.reset_position", p.reset_position)?;
        finite_vec("player.size", p.size)?;
        if p.size.min_element() <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "player.size",
                reason: "every component must be positive",
            });
        }
        finite_vec("player.look", p.look)?;
        if p.look.length_squared() < 1e-6 {
            return Err(ConfigError::Invalid {
                field: "player.look",
                reason: "must not be the zero vector",
            });
        }
        let up_alignment = p.look.normalize().dot(glam::Vec3::Y).abs();
        if up_alignment > eps.cos() {
            return Err(ConfigError::Invalid {
                field: "player.look",
                reason: "must not point straight up or down",
            });
        }

        let g = &self.generator;
        finite_vec("generator.obstacle_size", g.obstacle_size)?;
        finite_vec("generator.step_extent", g.step_extent)?;
        finite_vec("generator.ground_position", g.ground_position)?;
        finite_vec("generator.ground_size", g.ground_size)?;
        if g.obstacle_size.min_element() < 0.0 || g.ground_size.min_element() < 0.0 {
            return Err(ConfigError::Invalid {
                field: "generator",
                reason: "obstacle sizes must be non-negative",
            });
        }
        if g.step_extent.min_element() < 0.0 {
            return Err(ConfigError::Invalid {
                field: "generator.step_extent",
                reason: "must be non-negative",
            });
        }

        if self.render_distance == 0 {
            return Err(ConfigError::Invalid {
                field: "render_distance",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be finite",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: "must not be negative",
        });
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: "must be positive",
        });
    }
    Ok(())
}

fn finite_vec(field: &'static str, value: glam::Vec3) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "every component must be finite",
        })
    }
}
