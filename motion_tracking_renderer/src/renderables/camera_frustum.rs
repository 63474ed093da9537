/// CameraFrustum - wireframe pyramid showing the device camera.

use glam::Mat4;
use crate::error::Result;
use crate::graphics_device::{Color, GraphicsDevice, PrimitiveTopology, Vertex};
use super::drawable::{Drawable, LineMesh};

const HALF_WIDTH: f32 = 0.4;
const HALF_HEIGHT: f32 = 0.3;
const DEPTH: f32 = 0.5;
const FRUSTUM_COLOR: Color = Color::new(0.3, 0.3, 0.3, 1.0);

pub struct CameraFrustum {
    mesh: LineMesh,
}

impl CameraFrustum {
    pub fn new(device: &mut dyn GraphicsDevice) -> Result<Self> {
        let mesh = LineMesh::new(
            device,
            "camera_frustum",
            PrimitiveTopology::LineList,
            &Self::vertices(),
            1.0,
        )?;
        Ok(Self { mesh })
    }

    /// Apex at the origin, far rectangle at z = -DEPTH (camera looks down -Z).
    /// 4 apex edges then 4 rectangle edges, two vertices each.
    pub(crate) fn vertices() -> Vec<Vertex> {
        let apex = [0.0, 0.0, 0.0];
        let corners = [
            [-HALF_WIDTH, HALF_HEIGHT, -DEPTH],
            [HALF_WIDTH, HALF_HEIGHT, -DEPTH],
            [HALF_WIDTH, -HALF_HEIGHT, -DEPTH],
            [-HALF_WIDTH, -HALF_HEIGHT, -DEPTH],
        ];

        let mut vertices = Vec::with_capacity(16);
        for corner in corners {
            vertices.push(Vertex::new(apex, FRUSTUM_COLOR));
            vertices.push(Vertex::new(corner, FRUSTUM_COLOR));
        }
        for i in 0..corners.len() {
            vertices.push(Vertex::new(corners[i], FRUSTUM_COLOR));
            vertices.push(Vertex::new(corners[(i + 1) % corners.len()], FRUSTUM_COLOR));
        }
        vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.mesh.vertex_count()
    }
}

impl Drawable for CameraFrustum {
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
