// Keyboard state tracking

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Read-only view of the keyboard the game polls each frame
pub trait KeySource {
    /// Check if a key is currently held down
    fn is_down(&self, key: KeyCode) -> bool;

    /// Check if a key went down during the current frame
    fn was_pressed(&self, key: KeyCode) -> bool;
}

/// Keyboard state for the current frame, fed by winit key events
#[derive(Debug, Default)]
pub struct KeyboardState {
    /// Keys currently held down
    down: HashSet<KeyCode>,

    /// Keys that went down this frame (press events)
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create an empty keyboard state
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_event(&mut self, event: &KeyEvent) {
        // Only process physical key codes
        if let PhysicalKey::Code(key_code) = event.physical_key {
            match event.state {
                ElementState::Pressed => {
                    // Key repeats keep the key down but are not new presses
                    if !event.repeat {
                        self.press(key_code);
                    }
                }
                ElementState::Released => self.release(key_code),
            }
        }
    }

    /// Register a key press
    pub fn press(&mut self, key: KeyCode) {
        if self.down.insert(key) {
            self.pressed.insert(key);
        }
    }

    /// Register a key release
    pub fn release(&mut self, key: KeyCode) {
        self.down.remove(&key);
    }

    /// Clear per-frame state
    /// Call this once per frame after the game has read the input
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    /// Forget every key, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.down.clear();
        self.pressed.clear();
    }
}

impl KeySource for KeyboardState {
    fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    fn was_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}
