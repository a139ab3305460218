// Math utilities and helper types

use glam::Vec2;

/// Axis-aligned rectangle in screen space (origin top-left, +Y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub position: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Half of the rectangle's size
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Y coordinate of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }
}

/// RGBA color with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// 200/255 grey, used for HUD and menu text
    pub const LIGHT_GRAY: Color = Color::rgb(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0);

    /// Opaque color from RGB components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Convert to an array for GPU upload
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
