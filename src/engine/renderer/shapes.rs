// CPU-side batch of flat-colored triangles

use glam::Vec2;

use super::canvas::Canvas;
use super::font;
use super::vertex::ShapeVertex;
use crate::core::{Color, Rect};

/// Number of rim vertices used to tessellate a circle
const CIRCLE_SEGMENTS: u32 = 32;

/// One frame's worth of geometry, rebuilt every frame
#[derive(Debug)]
pub struct ShapeBatch {
    vertices: Vec<ShapeVertex>,
    indices: Vec<u32>,
    clear_color: Color,
}

impl ShapeBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            clear_color: Color::BLACK,
        }
    }

    /// Color the frame is cleared to before drawing
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Vertices queued this frame
    pub fn vertices(&self) -> &[ShapeVertex] {
        &self.vertices
    }

    /// Triangle list indices into `vertices`
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Check if nothing has been drawn
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    fn push_quad(&mut self, min: Vec2, max: Vec2, color: Color) {
        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[
            ShapeVertex::new(min, color),
            ShapeVertex::new(Vec2::new(max.x, min.y), color),
            ShapeVertex::new(max, color),
            ShapeVertex::new(Vec2::new(min.x, max.y), color),
        ]);
        self.indices
            .extend_from_slice(&[start, start + 1, start + 2, start, start + 2, start + 3]);
    }
}

impl Default for ShapeBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for ShapeBatch {
    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        self.indices.clear();
        self.clear_color = color;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push_quad(rect.position, rect.position + rect.size, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let start = self.vertices.len() as u32;
        self.vertices.push(ShapeVertex::new(center, color));

        for i in 0..CIRCLE_SEGMENTS {
            let angle = (i as f32 / CIRCLE_SEGMENTS as f32) * std::f32::consts::TAU;
            let rim = center + Vec2::new(angle.cos(), angle.sin()) * radius;
            self.vertices.push(ShapeVertex::new(rim, color));

            let next = (i + 1) % CIRCLE_SEGMENTS;
            self.indices
                .extend_from_slice(&[start, start + 1 + i, start + 1 + next]);
        }
    }

    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, color: Color) {
        let cell = font::cell_size(size);
        let advance = font::ADVANCE_COLUMNS as f32 * cell;

        for (index, c) in text.chars().enumerate() {
            let Some(glyph) = font::glyph(c) else {
                continue;
            };
            let origin = position + Vec2::new(index as f32 * advance, 0.0);

            for (row_index, row) in glyph.iter().enumerate() {
                for (column, length) in font::row_runs(*row) {
                    let min = origin + Vec2::new(column as f32, row_index as f32) * cell;
                    let max = min + Vec2::new(length as f32, 1.0) * cell;
                    self.push_quad(min, max, color);
                }
            }
        }
    }
}
