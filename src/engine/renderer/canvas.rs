// Immediate-mode drawing interface used by the game

use glam::Vec2;

use crate::core::{Color, Rect};

/// Something the game can draw a frame onto
///
/// The game only ever issues these calls; the GPU backend batches them and
/// tests record them.
pub trait Canvas {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: Color);

    /// Draw a filled axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw a line of text with its top-left corner at `position`
    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, color: Color);
}
