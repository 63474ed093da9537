/// StereoRenderer trait - lifecycle callbacks driven by a stereo display host
///
/// All callbacks run on the host's render thread, in this order:
/// `on_surface_created`, `on_surface_changed`, then per frame
/// `on_new_frame`, `on_draw_eye` (once per eye), `on_finish_frame`, and
/// finally `on_renderer_shutdown`. A surface can be recreated at any time,
/// which restarts the sequence.

use glam::Mat4;
use crate::error::Result;
use crate::graphics_device::Viewport;

/// Which stereo view is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyeType {
    Monocular,
    Left,
    Right,
}

/// One view of a stereo pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eye {
    pub eye_type: EyeType,
    /// Region of the surface this eye renders into
    pub viewport: Viewport,
    /// Transform from head space to this eye
    pub eye_view: Mat4,
}

impl Eye {
    pub fn new(eye_type: EyeType, viewport: Viewport, eye_view: Mat4) -> Self {
        Self { eye_type, viewport, eye_view }
    }
}

/// Head pose snapshot delivered at the start of a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadTransform {
    pub head_view: Mat4,
}

impl Default for HeadTransform {
    fn default() -> Self {
        Self { head_view: Mat4::IDENTITY }
    }
}

/// Callbacks a stereo display host invokes on its renderer
///
/// Every callback returns a Result so the host decides what a fatal error
/// means (end of session, process abort).
pub trait StereoRenderer {
    /// The graphics context was (re)created
    fn on_surface_created(&mut self) -> Result<()>;

    /// The surface was resized (pixels, per eye)
    fn on_surface_changed(&mut self, width: u32, height: u32) -> Result<()>;

    /// A frame is about to be drawn
    fn on_new_frame(&mut self, head_transform: &HeadTransform) -> Result<()>;

    /// Draw one eye of the current frame into `eye.viewport`
    fn on_draw_eye(&mut self, eye: &Eye) -> Result<()>;

    /// The frame is complete
    fn on_finish_frame(&mut self, viewport: &Viewport) -> Result<()>;

    /// The host is tearing the renderer down
    fn on_renderer_shutdown(&mut self);
}
