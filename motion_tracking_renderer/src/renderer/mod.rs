/// Renderer module - the motion tracking stereo renderer

pub mod motion_tracking_renderer;

pub use motion_tracking_renderer::*;
