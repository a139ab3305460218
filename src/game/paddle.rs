// Player paddles

use glam::Vec2;

use crate::core::{Color, Rect};
use crate::engine::input::{InputAxis, KeySource};
use crate::engine::renderer::Canvas;

/// A player-controlled paddle that only moves vertically
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    position: Vec2,
    size: Vec2,
    input: InputAxis,
    color: Color,
    /// Movement speed (pixels/second)
    speed: f32,
}

impl Paddle {
    /// Create a white paddle
    pub fn new(position: Vec2, size: Vec2, input: InputAxis, speed: f32) -> Self {
        Self {
            position,
            size,
            input,
            color: Color::WHITE,
            speed,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Bounding box used for ball contact
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Move by this frame's input and keep the paddle on screen
    ///
    /// Positive input moves the paddle up the screen (towards y = 0).
    pub fn update(&mut self, keys: &impl KeySource, dt: f32, screen_height: f32) {
        let intent = self.input.poll(keys) as f32;
        self.position.y -= intent * self.speed * dt;

        if self.position.y < 0.0 {
            self.position.y = 0.0;
        }
        if self.rect().bottom() > screen_height {
            self.position.y = screen_height - self.size.y;
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_rect(self.rect(), self.color);
    }
}
