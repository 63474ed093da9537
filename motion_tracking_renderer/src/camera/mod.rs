//! Camera module - view and projection state for the renderer.
//!
//! The renderer owns one Camera. The view is a fixed look-at unless the
//! host explicitly switches the CameraView; the projection follows the
//! surface size.

mod camera;
mod camera_view;

pub use camera::{Camera, DEFAULT_EYE, DEFAULT_TARGET, DEFAULT_UP};
pub use camera_view::CameraView;
