/// Grid - ground plane reference lines.

use glam::Mat4;
use crate::error::Result;
use crate::graphics_device::{Color, GraphicsDevice, PrimitiveTopology, Vertex};
use super::drawable::{Drawable, LineMesh};

/// Half extent of the grid in meters
pub const GRID_RANGE: i32 = 100;
/// Spacing between grid lines in meters
pub const GRID_INTERVAL: i32 = 1;
/// Height of the ground plane below the service origin
pub const GRID_HEIGHT: f32 = -1.3;

const GRID_COLOR: Color = Color::new(0.7, 0.7, 0.7, 1.0);

pub struct Grid {
    mesh: LineMesh,
}

impl Grid {
    pub fn new(device: &mut dyn GraphicsDevice) -> Result<Self> {
        let mesh = LineMesh::new(
            device,
            "grid",
            PrimitiveTopology::LineList,
            &Self::vertices(),
            1.0,
        )?;
        Ok(Self { mesh })
    }

    /// Lines parallel to X then lines parallel to Z, on y = GRID_HEIGHT
    fn vertices() -> Vec<Vertex> {
        let range = GRID_RANGE as f32;
        let steps = (-GRID_RANGE..=GRID_RANGE).step_by(GRID_INTERVAL as usize);

        let mut vertices = Vec::new();
        for i in steps.clone() {
            let z = i as f32;
            vertices.push(Vertex::new([-range, GRID_HEIGHT, z], GRID_COLOR));
            vertices.push(Vertex::new([range, GRID_HEIGHT, z], GRID_COLOR));
        }
        for i in steps {
            let x = i as f32;
            vertices.push(Vertex::new([x, GRID_HEIGHT, -range], GRID_COLOR));
            vertices.push(Vertex::new([x, GRID_HEIGHT, range], GRID_COLOR));
        }
        vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.mesh.vertex_count()
    }
}

impl Drawable for Grid {
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
