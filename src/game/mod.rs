// Game rules
//
// Everything that makes this Pong rather than a generic engine:
// - Ball and paddle entities
// - Ball vs paddle contact
// - Menu / play state machine
// - Tuning constants
// - The match itself, advanced once per rendered frame

pub mod ball;
pub mod collision;
pub mod config;
pub mod paddle;
pub mod pong;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use pong::Game;
