//! Keyboard Input Module
//!
//! Tracks the raw state of the movement keys. Decoupled from any windowing
//! system: the frame driver translates its own key events into [`KeyCode`]s.

/// Generic key codes for the keys the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Space,
    R,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which movement keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W key - move forward
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - strafe left
    pub left: bool,
    /// D key - strafe right
    pub right: bool,
    /// Space - jump when grounded
    pub jump: bool,
    /// R - teleport back to the reset point
    pub reset: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => self.forward = pressed,
            KeyCode::S => self.backward = pressed,
            KeyCode::A => self.left = pressed,
            KeyCode::D => self.right = pressed,
            KeyCode::Space => self.jump = pressed,
            KeyCode::R => self.reset = pressed,
            KeyCode::Unknown => return false,
        }
        true
    }

    /// Reset all keys to released state.
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Builder-style helper used by scripted drivers and tests.
    pub fn with(forward: bool, backward: bool, left: bool, right: bool) -> Self {
        Self {
            forward,
            backward,
            left,
            right,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_key_updates_state() {
        let mut keys = MovementKeys::new();
        assert!(keys.handle_key(KeyCode::W, true));
        assert!(keys.handle_key(KeyCode::D, true));
        assert!(keys.forward && keys.right);
        assert!(keys.handle_key(KeyCode::W, false));
        assert!(!keys.forward);
        assert!(!keys.handle_key(KeyCode::Unknown, true));
    }

    #[test]
    fn test_axes() {
        assert_eq!(MovementKeys::with(true, false, false, false).forward_axis(), 1);
        assert_eq!(MovementKeys::with(false, true, false, false).forward_axis(), -1);
        assert_eq!(MovementKeys::with(true, true, false, false).forward_axis(), 0);
        assert_eq!(MovementKeys::with(false, false, true, false).right_axis(), -1);
        assert_eq!(MovementKeys::with(false, false, false, true).right_axis(), 1);
    }

    #[test]
    fn test_release_all() {
        let mut keys = MovementKeys::with(true, true, true, true);
        keys.jump = true;
        keys.release_all();
        assert_eq!(keys, MovementKeys::default());
        assert_eq!(keys.forward_axis(), 0);
        assert_eq!(keys.right_axis(), 0);
    }
}
