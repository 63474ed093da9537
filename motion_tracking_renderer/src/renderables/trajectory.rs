/// Trajectory - polyline through the positions the device has visited.
///
/// Points are appended from the pose thread while holding the shared lock.
/// Only the render thread touches the device: new points are kept on the
/// CPU side and uploaded by the next `draw()`.

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::graphics_device::{BufferUsage, Color, GraphicsDevice, PrimitiveTopology, Vertex};
use super::drawable::{Drawable, LineMesh};

/// Maximum number of points kept (9000 floats of position data)
pub const MAX_TRAJECTORY_POINTS: usize = 3000;

const TRAJECTORY_COLOR: Color = Color::new(0.22, 0.28, 0.67, 1.0);

pub struct Trajectory {
    mesh: LineMesh,
    points: Vec<Vec3>,
    dirty: bool,
    full_reported: bool,
}

impl Trajectory {
    /// Allocate a trajectory able to hold MAX_TRAJECTORY_POINTS
    ///
    /// # Arguments
    ///
    /// * `device` - Render-thread graphics device
    /// * `line_width` - Line width in pixels
    pub fn new(device: &mut dyn GraphicsDevice, line_width: f32) -> Result<Self> {
        let mesh = LineMesh::with_capacity(
            device,
            "trajectory",
            PrimitiveTopology::LineStrip,
            MAX_TRAJECTORY_POINTS,
            BufferUsage::Dynamic,
            line_width,
        )?;
        Ok(Self {
            mesh,
            points: Vec::with_capacity(MAX_TRAJECTORY_POINTS),
            dirty: false,
            full_reported: false,
        })
    }

    /// Append a position (OpenGL frame)
    ///
    /// Returns false, and drops the point, once MAX_TRAJECTORY_POINTS is reached.
    pub fn update_trajectory(&mut self, position: Vec3) -> bool {
        if self.points.len() >= MAX_TRAJECTORY_POINTS {
            if !self.full_reported {
                crate::engine_warn!("mtrack::Trajectory",
                    "Trajectory full ({} points), ignoring new positions", MAX_TRAJECTORY_POINTS);
                self.full_reported = true;
            }
            return false;
        }
        self.points.push(position);
        self.dirty = true;
        true
    }

    /// Forget every point
    pub fn reset_path(&mut self) {
        self.points.clear();
        self.dirty = true;
        self.full_reported = false;
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of vertices currently on the device
    pub fn uploaded_vertex_count(&self) -> u32 {
        self.mesh.vertex_count()
    }

    fn upload_pending(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let vertices: Vec<Vertex> = self
            .points
            .iter()
            .map(|p| Vertex::new(p.to_array(), TRAJECTORY_COLOR))
            .collect();
        self.mesh.upload(&vertices)?;
        self.dirty = false;
        Ok(())
    }
}

impl Drawable for Trajectory {
    fn draw(&mut self, device: &mut dyn GraphicsDevice, view: &Mat4, projection: &Mat4) -> Result<()> {
        self.upload_pending()?;
        self.mesh.draw(device, view, projection);
        Ok(())
    }

    fn model_matrix(&self) -> Mat4 {
        self.mesh.model_matrix()
    }

    fn set_model_matrix(&mut self, matrix: Mat4) {
        self.mesh.set_model_matrix(matrix);
    }
}

#[cfg(test)]
#[path = "trajectory_tests.rs"]
mod tests;
