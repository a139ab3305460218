// Game tuning - every gameplay constant lives here

use glam::Vec2;

/// Gameplay and window tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    // Window
    /// Logical screen size in pixels
    pub screen_size: Vec2,
    /// Frames drawn per second
    pub target_fps: u32,

    // Paddles
    /// Paddle width and height
    pub paddle_size: Vec2,
    /// Gap between a paddle and its side of the screen
    pub paddle_inset: f32,
    /// Paddle movement speed (pixels/second)
    pub paddle_speed: f32,

    // Ball
    /// Ball radius
    pub ball_radius: f32,
    /// Speed along each axis when the ball is served (pixels/second)
    pub ball_start_speed: f32,
    /// Horizontal speed multiplier applied on every paddle hit
    pub bounce_speedup: f32,

    // HUD
    /// Height of HUD and menu text
    pub font_size: f32,
}

/// The standard 1080p table
pub const BASE_CONFIG: GameConfig = GameConfig {
    screen_size: Vec2::new(1920.0, 1080.0),
    target_fps: 60,

    paddle_size: Vec2::new(20.0, 250.0),
    paddle_inset: 50.0,
    paddle_speed: 1000.0,

    ball_radius: 10.0,
    ball_start_speed: 500.0,
    bounce_speedup: 1.1,

    font_size: 40.0,
};

impl Default for GameConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

impl GameConfig {
    /// Top-left corner of the left paddle at kickoff
    pub fn left_paddle_start(&self) -> Vec2 {
        Vec2::new(
            self.paddle_inset,
            self.screen_size.y / 2.0 - self.paddle_size.y / 2.0,
        )
    }

    /// Top-left corner of the right paddle at kickoff
    pub fn right_paddle_start(&self) -> Vec2 {
        Vec2::new(
            self.screen_size.x - self.paddle_size.x - self.paddle_inset,
            self.screen_size.y / 2.0 - self.paddle_size.y / 2.0,
        )
    }

    /// Where the ball is served from
    pub fn ball_start(&self) -> Vec2 {
        self.screen_size / 2.0
    }

    /// Serve velocity
    ///
    /// Always down and to the right; the serve direction is not randomized.
    pub fn ball_start_velocity(&self) -> Vec2 {
        Vec2::splat(self.ball_start_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.screen_size, Vec2::new(1920.0, 1080.0));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.paddle_size, Vec2::new(20.0, 250.0));
        assert_eq!(config.ball_start_speed, 500.0);
        assert_eq!(config.bounce_speedup, 1.1);
    }

    #[test]
    fn test_kickoff_positions() {
        let config = GameConfig::default();
        assert_eq!(config.left_paddle_start(), Vec2::new(50.0, 415.0));
        assert_eq!(config.right_paddle_start(), Vec2::new(1850.0, 415.0));
        assert_eq!(config.ball_start(), Vec2::new(960.0, 540.0));
    }

    #[test]
    fn test_serve_velocity_is_fixed() {
        let config = GameConfig::default();
        assert_eq!(config.ball_start_velocity(), Vec2::new(500.0, 500.0));
    }
}
