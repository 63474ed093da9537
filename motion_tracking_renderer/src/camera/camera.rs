/// Camera - view and projection matrices.
///
/// The view matrix only changes when explicitly set. The projection is
/// recomputed from the config and the surface aspect ratio on every resize.

use glam::{Mat4, Vec3};
use crate::config::RendererConfig;
use crate::error::{Error, Result};

/// Eye position of the initial look-at
pub const DEFAULT_EYE: Vec3 = Vec3::new(5.0, 5.0, 5.0);
/// Look-at target
pub const DEFAULT_TARGET: Vec3 = Vec3::ZERO;
/// Up vector
pub const DEFAULT_UP: Vec3 = Vec3::Y;

#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    aspect_ratio: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Identity view and projection
    pub fn new() -> Self {
        Self {
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            aspect_ratio: 1.0,
        }
    }

    /// The fixed look-at from (5,5,5) toward the origin, Y up
    pub fn default_view() -> Mat4 {
        Mat4::look_at_rh(DEFAULT_EYE, DEFAULT_TARGET, DEFAULT_UP)
    }

    /// GL-style perspective projection (clip z in [-1, 1])
    ///
    /// # Arguments
    ///
    /// * `fov_degrees` - Vertical field of view
    /// * `aspect` - width / height
    /// * `near`, `far` - Clipping planes
    pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(fov_degrees.to_radians(), aspect, near, far)
    }

    // ===== GETTERS =====

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// width / height of the last accepted resize
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    // ===== SETTERS =====

    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    /// Apply a new surface size
    ///
    /// Recomputes the aspect ratio and projection. Leaves the view matrix
    /// untouched.
    ///
    /// # Errors
    ///
    /// `Error::InvalidSurfaceSize` if either dimension is zero; the camera
    /// is left unchanged.
    pub fn resize(&mut self, width: u32, height: u32, config: &RendererConfig) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidSurfaceSize { width, height });
        }

        self.aspect_ratio = width as f32 / height as f32;
        self.projection_matrix = Self::perspective(
            config.camera_fov,
            self.aspect_ratio,
            config.camera_near,
            config.camera_far,
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
