// Key binding configuration

use super::axis::InputAxis;
use winit::keyboard::KeyCode;

/// Key bindings for both players and the menu controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    /// Left paddle movement
    pub left: InputAxis,
    /// Right paddle movement
    pub right: InputAxis,
    /// Flips between the menu and live play
    pub toggle_menu: KeyCode,
    /// Clears the scores while the menu is open
    pub restart: KeyCode,
}

/// Default bindings: W/S on the left, arrow keys on the right
pub const DEFAULT_BINDINGS: InputConfig = InputConfig {
    left: InputAxis::new(KeyCode::KeyW, KeyCode::KeyS),
    right: InputAxis::new(KeyCode::ArrowUp, KeyCode::ArrowDown),
    toggle_menu: KeyCode::Space,
    restart: KeyCode::KeyR,
};

impl Default for InputConfig {
    fn default() -> Self {
        DEFAULT_BINDINGS
    }
}

/// Short human-readable name for a key, e.g. `R` or `Space`
pub fn key_label(key: KeyCode) -> String {
    let name = format!("{:?}", key);
    ["Key", "Digit"]
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .filter(|rest| !rest.is_empty())
        .map(str::to_string)
        .unwrap_or(name)
}
