// Two-key movement axis

use super::keyboard::KeySource;
use winit::keyboard::KeyCode;

/// Pair of keys read as a signed vertical intent
///
/// `poll` returns +1 while only `up` is held, -1 while only `down` is held
/// and 0 when neither or both are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputAxis {
    up: KeyCode,
    down: KeyCode,
}

impl InputAxis {
    /// Create an axis from its up and down keys
    pub const fn new(up: KeyCode, down: KeyCode) -> Self {
        Self { up, down }
    }

    /// Key that pushes the axis positive
    pub fn up(&self) -> KeyCode {
        self.up
    }

    /// Key that pushes the axis negative
    pub fn down(&self) -> KeyCode {
        self.down
    }

    /// Read the axis from the current keyboard state
    pub fn poll(&self, keys: &impl KeySource) -> i8 {
        keys.is_down(self.up) as i8 - keys.is_down(self.down) as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::KeyboardState;

    const AXIS: InputAxis = InputAxis::new(KeyCode::KeyW, KeyCode::KeyS);

    #[test]
    fn test_idle_axis_is_zero() {
        let keyboard = KeyboardState::new();
        assert_eq!(AXIS.poll(&keyboard), 0);
    }

    #[test]
    fn test_up_is_positive() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(KeyCode::KeyW);
        assert_eq!(AXIS.poll(&keyboard), 1);
    }

    #[test]
    fn test_down_is_negative() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(KeyCode::KeyS);
        assert_eq!(AXIS.poll(&keyboard), -1);
    }

    #[test]
    fn test_both_keys_cancel_out() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(KeyCode::KeyW);
        keyboard.press(KeyCode::KeyS);
        assert_eq!(AXIS.poll(&keyboard), 0);
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(KeyCode::ArrowUp);
        assert_eq!(AXIS.poll(&keyboard), 0);
    }

    #[test]
    fn test_poll_does_not_consume_input() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(KeyCode::KeyW);
        assert_eq!(AXIS.poll(&keyboard), 1);
        assert_eq!(AXIS.poll(&keyboard), 1);
    }
}
