/// Buffer trait and buffer descriptor

use crate::error::Result;

/// How often the buffer contents are expected to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Written once at creation (frustum, axis, grid)
    Static,
    /// Rewritten while drawing (trajectory)
    Dynamic,
}

/// Descriptor for creating a vertex buffer
#[derive(Debug, Clone)]
pub struct BufferDesc {
    /// Size in bytes
    pub size: u64,
    /// Buffer usage
    pub usage: BufferUsage,
}

/// Buffer resource trait
///
/// Implemented by backend-specific buffer types. The buffer is destroyed
/// when the last handle is dropped, which must happen on the render thread
/// while the graphics context is alive.
pub trait Buffer: Send + Sync {
    /// Update buffer data
    ///
    /// # Arguments
    ///
    /// * `offset` - Offset into the buffer in bytes
    /// * `data` - Data to write
    ///
    /// # Errors
    ///
    /// Returns an error if `offset + data.len()` exceeds the buffer size.
    fn update(&self, offset: u64, data: &[u8]) -> Result<()>;

    /// Size in bytes
    fn size(&self) -> u64;
}
