/// GraphicsDevice trait - the subset of a GL-style API the renderer drives
///
/// State changes and draws are fire-and-forget, as in GL: failures surface
/// through `poll_error()`, which the renderer checks after every operation.

use std::sync::Arc;
use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use crate::error::{Error, Result};
use super::buffer::{Buffer, BufferDesc};

/// GL error codes reported by `poll_error()`
pub mod error_code {
    pub const NO_ERROR: u32 = 0;
    pub const INVALID_ENUM: u32 = 0x0500;
    pub const INVALID_VALUE: u32 = 0x0501;
    pub const INVALID_OPERATION: u32 = 0x0502;
    pub const OUT_OF_MEMORY: u32 = 0x0505;
}

/// RGBA color, components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Viewport rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Viewport covering a whole surface of the given size
    pub fn full(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }
}

bitflags! {
    /// Buffers cleared by `GraphicsDevice::clear`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        const COLOR = 0b01;
        const DEPTH = 0b10;
    }
}

/// Line primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Independent segments, two vertices each
    LineList,
    /// Connected polyline
    LineStrip,
}

/// Vertex layout shared by all drawables: position + color
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const SIZE: u64 = std::mem::size_of::<Vertex>() as u64;

    pub fn new(position: [f32; 3], color: Color) -> Self {
        Self { position, color: color.to_array() }
    }
}

/// One draw call
#[derive(Clone)]
pub struct DrawDesc<'a> {
    /// Debug label of the drawable issuing the call
    pub label: &'static str,
    pub buffer: &'a Arc<dyn Buffer>,
    pub topology: PrimitiveTopology,
    pub first_vertex: u32,
    pub vertex_count: u32,
    /// projection * view * model
    pub mvp: Mat4,
    pub line_width: f32,
}

/// Graphics device abstraction
///
/// Owned by the render thread. Implementations wrap a real graphics context
/// (GL ES, a VR SDK's context) or record calls for tests.
pub trait GraphicsDevice: Send {
    /// Color used by `clear(ClearFlags::COLOR)`
    fn set_clear_color(&mut self, color: Color);

    /// Enable or disable depth testing
    fn set_depth_test(&mut self, enabled: bool);

    /// Set the viewport
    fn set_viewport(&mut self, viewport: Viewport);

    /// Clear the selected buffers
    fn clear(&mut self, flags: ClearFlags);

    /// Allocate a vertex buffer
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfMemory` or a backend error if allocation fails.
    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<Arc<dyn Buffer>>;

    /// Issue a draw call
    fn draw(&mut self, desc: &DrawDesc<'_>);

    /// Pop the oldest pending error, `None` when the error state is clean
    fn poll_error(&mut self) -> Option<u32>;
}

/// Fail with `Error::GraphicsError` if the device has a pending error
///
/// The first pending error is logged (with file:line) and returned; the
/// caller aborts the current operation.
pub fn check_graphics_error(device: &mut dyn GraphicsDevice, label: &str) -> Result<()> {
    match device.poll_error() {
        None | Some(error_code::NO_ERROR) => Ok(()),
        Some(code) => {
            crate::engine_error!("mtrack::GraphicsDevice", "{}: glError 0x{:04X}", label, code);
            Err(Error::GraphicsError { label: label.to_string(), code })
        }
    }
}
