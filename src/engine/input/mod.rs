// Input handling system
//
// Keyboard-only input for two players sharing one keyboard.
//
// ## Architecture
//
// - `keyboard`: Per-frame key state built from winit events, behind the `KeySource` trait
// - `axis`: Two keys read as a signed up/down intent
// - `config`: Default key bindings
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputConfig, KeyboardState};
//
// let bindings = InputConfig::default();
// let mut keyboard = KeyboardState::new();
//
// // In your event loop, process keyboard events
// keyboard.process_event(&key_event);
//
// // Query input state
// let intent = bindings.left.poll(&keyboard);
//
// // At the end of each frame, clear the per-frame presses
// keyboard.end_frame();
// ```

pub mod axis;
pub mod config;
pub mod keyboard;

// Re-export commonly used types
pub use axis::InputAxis;
pub use config::{key_label, InputConfig};
pub use keyboard::{KeySource, KeyboardState};
