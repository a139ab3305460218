// The ball

use glam::Vec2;

use super::collision::circle_intersects_rect;
use crate::core::{Color, Rect};
use crate::engine::renderer::Canvas;

/// Closest the ball's center gets to the top or bottom of the screen
pub const WALL_MARGIN: f32 = 5.0;

/// Ball bouncing between the top and bottom walls
///
/// The ball has no horizontal bounds; leaving the screen sideways is how
/// the owning game detects a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    position: Vec2,
    velocity: Vec2,
    radius: f32,
    color: Color,
}

impl Ball {
    /// Create a white ball
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            color: Color::WHITE,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Advance by `dt` seconds and reflect off the top and bottom walls
    pub fn update(&mut self, dt: f32, screen_height: f32) {
        self.position += self.velocity * dt;

        if self.position.y < WALL_MARGIN {
            self.position.y = WALL_MARGIN;
            self.velocity.y = -self.velocity.y;
        }
        if self.position.y > screen_height - WALL_MARGIN {
            self.position.y = screen_height - WALL_MARGIN;
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Check whether the ball touches a rectangle
    pub fn touches(&self, rect: &Rect) -> bool {
        circle_intersects_rect(self.position, self.radius, rect)
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_circle(self.position, self.radius, self.color);
    }
}
