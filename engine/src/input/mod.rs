//! Input Module
//!
//! Platform-agnostic input state. The frame driver feeds key and mouse
//! events in, and once per frame takes a [`FrameInput`] snapshot out.
//!
//! # Example
//!
//! ```rust,ignore
//! use voxel_strafe_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//! input.handle_key(KeyCode::W, true);
//! input.mouse.accumulate_delta(4.0, 0.0);
//!
//! let frame = input.take_frame();
//! assert!(frame.keys.forward);
//! ```

pub mod keyboard;
pub mod mouse_state;

pub use keyboard::{KeyCode, MovementKeys};
pub use mouse_state::{FpsMouseState, MouseFrame};

/// Everything the simulation reads from the input devices for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub keys: MovementKeys,
    pub mouse: MouseFrame,
}

impl FrameInput {
    /// Jump is requested by holding space or by any wheel movement.
    pub fn jump_intent(&self) -> bool {
        self.keys.jump || self.mouse.wheel != 0.0
    }
}

/// Combined keyboard and mouse state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keys: MovementKeys,
    pub mouse: FpsMouseState,
}

impl InputState {
    /// Create a new input state with all inputs released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a key event. Returns `true` if the key was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.keys.handle_key(key, pressed)
    }

    /// Snapshot held keys and consume accumulated mouse motion.
    ///
    /// Keys stay held across frames; mouse motion is reset.
    pub fn take_frame(&mut self) -> FrameInput {
        FrameInput {
            keys: self.keys,
            mouse: self.mouse.consume(),
        }
    }
}
