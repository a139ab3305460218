// Screen-space camera for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Orthographic camera over a fixed logical screen
///
/// Logical coordinates have their origin at the top-left corner with +Y
/// pointing down. The whole logical screen is stretched over the surface,
/// so resizing the window never changes gameplay coordinates.
#[derive(Debug, Clone)]
pub struct ScreenCamera {
    /// Logical screen size
    logical_size: Vec2,
    /// View-projection matrix
    view_proj: Mat4,
}

impl ScreenCamera {
    /// Create a camera covering `logical_size`
    pub fn new(logical_size: Vec2) -> Self {
        let mut camera = Self {
            logical_size,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    fn update_view_proj(&mut self) {
        // Top and bottom swapped so +Y points down the screen
        self.view_proj = Mat4::orthographic_rh(
            0.0,
            self.logical_size.x,
            self.logical_size.y,
            0.0,
            -1.0,
            1.0,
        );
    }

    /// Logical screen size
    pub fn logical_size(&self) -> Vec2 {
        self.logical_size
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &ScreenCamera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}
