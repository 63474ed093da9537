/// StereoFrameDriver - runs the callback sequence of a side-by-side stereo host.
///
/// Used by headless hosts and tests. A platform VR SDK binding calls the
/// StereoRenderer hooks itself and does not need this.

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::graphics_device::Viewport;
use super::stereo_renderer::{StereoRenderer, Eye, EyeType, HeadTransform};

/// Inter-pupillary distance in meters
pub const DEFAULT_IPD: f32 = 0.064;

pub struct StereoFrameDriver {
    left: Eye,
    right: Eye,
    surface: Viewport,
    ipd: f32,
    frame_count: u64,
}

impl StereoFrameDriver {
    /// Driver for a surface of `width` x `height` pixels split into two eyes
    pub fn new(width: u32, height: u32) -> Self {
        let mut driver = Self {
            left: Eye::new(EyeType::Left, Viewport::full(0, 0), Mat4::IDENTITY),
            right: Eye::new(EyeType::Right, Viewport::full(0, 0), Mat4::IDENTITY),
            surface: Viewport::full(width, height),
            ipd: DEFAULT_IPD,
            frame_count: 0,
        };
        driver.layout_eyes();
        driver
    }

    pub fn with_ipd(mut self, ipd: f32) -> Self {
        self.ipd = ipd;
        self.layout_eyes();
        self
    }

    fn layout_eyes(&mut self) {
        let eye_width = self.surface.width / 2;
        let half_ipd = self.ipd / 2.0;
        self.left = Eye::new(
            EyeType::Left,
            Viewport { x: 0, y: 0, width: eye_width, height: self.surface.height },
            Mat4::from_translation(Vec3::new(half_ipd, 0.0, 0.0)),
        );
        self.right = Eye::new(
            EyeType::Right,
            Viewport { x: eye_width as i32, y: 0, width: eye_width, height: self.surface.height },
            Mat4::from_translation(Vec3::new(-half_ipd, 0.0, 0.0)),
        );
    }

    pub fn left_eye(&self) -> &Eye {
        &self.left
    }

    pub fn right_eye(&self) -> &Eye {
        &self.right
    }

    /// Number of frames completed without error
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Create the surface and report the per-eye size
    pub fn start<R: StereoRenderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        renderer.on_surface_created()?;
        renderer.on_surface_changed(self.left.viewport.width, self.left.viewport.height)
    }

    /// Resize the whole surface; the renderer receives the per-eye size
    pub fn resize<R: StereoRenderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        width: u32,
        height: u32,
    ) -> Result<()> {
        self.surface = Viewport::full(width, height);
        self.layout_eyes();
        renderer.on_surface_changed(self.left.viewport.width, self.left.viewport.height)
    }

    /// new frame → left eye → right eye → finish frame, stopping at the first error
    pub fn run_frame<R: StereoRenderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        head_transform: &HeadTransform,
    ) -> Result<()> {
        renderer.on_new_frame(head_transform)?;
        renderer.on_draw_eye(&self.left)?;
        renderer.on_draw_eye(&self.right)?;
        renderer.on_finish_frame(&self.surface)?;
        self.frame_count += 1;
        Ok(())
    }

    /// Notify shutdown
    pub fn stop<R: StereoRenderer + ?Sized>(&mut self, renderer: &mut R) {
        renderer.on_renderer_shutdown();
    }
}

#[cfg(test)]
#[path = "frame_driver_tests.rs"]
mod tests;
