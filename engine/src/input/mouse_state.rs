//! FPS-style Mouse State Tracker
//!
//! Accumulates raw mouse motion and wheel movement between frames so the
//! frame driver can consume them once per tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use voxel_strafe_engine::input::FpsMouseState;
//!
//! let mut mouse = FpsMouseState::new();
//!
//! // In event loop: accumulate raw mouse motion
//! mouse.accumulate_delta(10.0, -5.0);
//! mouse.accumulate_delta(3.0, 2.0);
//! mouse.accumulate_wheel(1.0);
//!
//! // In update loop: consume everything at once
//! let frame = mouse.consume();
//! // frame.delta_x = 13.0, frame.delta_y = -3.0, frame.wheel = 1.0
//! ```

/// Mouse motion gathered over one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseFrame {
    pub delta_x: f32,
    pub delta_y: f32,
    /// Net wheel movement; any non-zero value counts as jump intent
    pub wheel: f32,
}

/// Mouse state tracker with delta accumulation.
#[derive(Debug, Clone, Default)]
pub struct FpsMouseState {
    /// Accumulated horizontal delta since last consume.
    delta_x: f32,
    /// Accumulated vertical delta since last consume.
    delta_y: f32,
    /// Accumulated wheel movement since last consume.
    wheel: f32,
}

impl FpsMouseState {
    /// Create a new mouse state with zero deltas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw mouse motion delta.
    ///
    /// # Arguments
    ///
    /// * `dx` - Horizontal delta in device units (pixels on most systems)
    /// * `dy` - Vertical delta in device units, positive = down
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Accumulate wheel movement (either direction).
    #[inline]
    pub fn accumulate_wheel(&mut self, amount: f32) {
        self.wheel += amount;
    }

    /// Consume everything accumulated since the last call and reset to zero.
    pub fn consume(&mut self) -> MouseFrame {
        let frame = MouseFrame {
            delta_x: self.delta_x,
            delta_y: self.delta_y,
            wheel: self.wheel,
        };
        *self = Self::default();
        frame
    }
}
