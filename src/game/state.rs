// Menu / play state machine

/// Whether the menu overlay is up or the match is live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Paused behind the instructions overlay
    Menu,
    /// Ball and paddles are moving
    Playing,
}

impl Default for GameState {
    fn default() -> Self {
        Self::Menu
    }
}

impl GameState {
    /// The other state
    pub fn toggled(self) -> Self {
        match self {
            Self::Menu => Self::Playing,
            Self::Playing => Self::Menu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_menu() {
        assert_eq!(GameState::default(), GameState::Menu);
    }

    #[test]
    fn test_toggle_flips_state() {
        assert_eq!(GameState::Menu.toggled(), GameState::Playing);
        assert_eq!(GameState::Playing.toggled(), GameState::Menu);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for state in [GameState::Menu, GameState::Playing] {
            assert_eq!(state.toggled().toggled(), state);
        }
    }
}
