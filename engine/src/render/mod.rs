//! Render Module
//!
//! Backend-agnostic draw submission. Visible chunks come from the world
//! index; each obstacle becomes one cube draw or one packed instance.

pub mod instancing;

pub use instancing::{
    CubeInstance, InstanceBatch, ObstacleRenderer, draw_visible, pack_color, pack_rgba,
};
