/// Drawable trait and the line-mesh helper shared by all drawables.

use std::sync::Arc;
use glam::Mat4;
use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, Buffer, BufferDesc, BufferUsage, DrawDesc, PrimitiveTopology, Vertex,
};

/// Something the renderer can draw with a view and a projection matrix
///
/// `&mut self` because drawables may upload pending CPU-side data on the
/// render thread before drawing.
pub trait Drawable: Send {
    /// Issue the draw call(s) for this drawable
    ///
    /// # Errors
    ///
    /// Returns an error if uploading pending vertex data fails.
    fn draw(&mut self, device: &mut dyn GraphicsDevice, view: &Mat4, projection: &Mat4) -> Result<()>;

    /// Model matrix applied before the view
    fn model_matrix(&self) -> Mat4;

    fn set_model_matrix(&mut self, matrix: Mat4);
}

/// A vertex buffer drawn as lines
pub struct LineMesh {
    label: &'static str,
    buffer: Arc<dyn Buffer>,
    topology: PrimitiveTopology,
    vertex_count: u32,
    line_width: f32,
    model_matrix: Mat4,
}

impl LineMesh {
    /// Allocate a buffer for `vertices` and upload them
    pub fn new(
        device: &mut dyn GraphicsDevice,
        label: &'static str,
        topology: PrimitiveTopology,
        vertices: &[Vertex],
        line_width: f32,
    ) -> Result<Self> {
        let mut mesh = Self::with_capacity(
            device, label, topology, vertices.len(), BufferUsage::Static, line_width,
        )?;
        mesh.upload(vertices)?;
        Ok(mesh)
    }

    /// Allocate a buffer for up to `capacity` vertices, initially empty
    pub fn with_capacity(
        device: &mut dyn GraphicsDevice,
        label: &'static str,
        topology: PrimitiveTopology,
        capacity: usize,
        usage: BufferUsage,
        line_width: f32,
    ) -> Result<Self> {
        let buffer = device.create_buffer(&BufferDesc {
            size: capacity as u64 * Vertex::SIZE,
            usage,
        })?;
        Ok(Self {
            label,
            buffer,
            topology,
            vertex_count: 0,
            line_width,
            model_matrix: Mat4::IDENTITY,
        })
    }

    /// Replace the buffer contents from offset 0
    pub fn upload(&mut self, vertices: &[Vertex]) -> Result<()> {
        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        if bytes.len() as u64 > self.buffer.size() {
            return Err(Error::BackendError(format!(
                "{}: {} vertices exceed buffer capacity", self.label, vertices.len()
            )));
        }
        if !bytes.is_empty() {
            self.buffer.update(0, bytes)?;
        }
        self.vertex_count = vertices.len() as u32;
        Ok(())
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.model_matrix
    }

    pub fn set_model_matrix(&mut self, matrix: Mat4) {
        self.model_matrix = matrix;
    }

    /// Issue the draw call with `projection * view * model`
    pub fn draw(&self, device: &mut dyn GraphicsDevice, view: &Mat4, projection: &Mat4) {
        let mvp = *projection * *view * self.model_matrix;
        device.draw(&DrawDesc {
            label: self.label,
            buffer: &self.buffer,
            topology: self.topology,
            first_vertex: 0,
            vertex_count: self.vertex_count,
            mvp,
            line_width: self.line_width,
        });
    }
}

#[cfg(test)]
#[path = "drawable_tests.rs"]
mod tests;
