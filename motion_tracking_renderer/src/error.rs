//! Error types for the motion tracking renderer
//!
//! Every failure the renderer can report is fatal for the current callback:
//! the host decides whether that ends the session or the process.

use std::fmt;

/// Result type for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Renderer errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific error (device lost, poisoned lock, etc.)
    BackendError(String),

    /// Out of GPU memory while allocating a drawable
    OutOfMemory,

    /// Initialization failed (surface creation, drawable setup)
    InitializationFailed(String),

    /// Graphics API reported an error after the labelled operation
    GraphicsError {
        /// Operation after which the error was polled (e.g. "onReadyToDraw")
        label: String,
        /// Raw graphics API error code
        code: u32,
    },

    /// Surface dimensions cannot produce a projection (zero width or height)
    InvalidSurfaceSize {
        width: u32,
        height: u32,
    },

    /// Frame callback received after `on_renderer_shutdown`
    RendererTerminated,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::GraphicsError { label, code } => {
                write!(f, "{}: glError 0x{:04X}", label, code)
            }
            Error::InvalidSurfaceSize { width, height } => {
                write!(f, "Invalid surface size: {}x{}", width, height)
            }
            Error::RendererTerminated => write!(f, "Renderer already shut down"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
