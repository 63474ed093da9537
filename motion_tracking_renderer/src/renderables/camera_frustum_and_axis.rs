/// CameraFrustumAndAxis - the frustum plus an RGB axis triad at the device origin.
///
/// This is the drawable that follows the tracked pose.

use glam::Mat4;
use crate::error::Result;
use crate::graphics_device::{Color, GraphicsDevice, PrimitiveTopology, Vertex};
use super::camera_frustum::CameraFrustum;
use super::drawable::{Drawable, LineMesh};

const AXIS_LENGTH: f32 = 1.0;

pub struct CameraFrustumAndAxis {
    mesh: LineMesh,
}

impl CameraFrustumAndAxis {
    pub fn new(device: &mut dyn GraphicsDevice) -> Result<Self> {
        let mesh = LineMesh::new(
            device,
            "camera_frustum_and_axis",
            PrimitiveTopology::LineList,
            &Self::vertices(),
            1.0,
        )?;
        Ok(Self { mesh })
    }

    fn vertices() -> Vec<Vertex> {
        let origin = [0.0, 0.0, 0.0];
        let mut vertices = CameraFrustum::vertices();
        vertices.extend_from_slice(&[
            Vertex::new(origin, Color::RED),
            Vertex::new([AXIS_LENGTH, 0.0, 0.0], Color::RED),
            Vertex::new(origin, Color::GREEN),
            Vertex::new([0.0, AXIS_LENGTH, 0.0], Color::GREEN),
            Vertex::new(origin, Color::BLUE),
            Vertex::new([0.0, 0.0, AXIS_LENGTH], Color::BLUE),
        ]);
        vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.mesh.vertex_count()
    }
}

impl Drawable for CameraFrustumAndAxis {
    fn draw(&mut self, device: &mut dyn GraphicsDevice, view: &Mat4, projection: &Mat4) -> Result<()> {
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
