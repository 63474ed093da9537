/// CameraView - how the scene is looked at.

use glam::{Mat4, Vec3};
use super::camera::Camera;

/// Height of the top-down eye above the origin
const TOP_DOWN_HEIGHT: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraView {
    /// Looking through the tracked device
    FirstPerson,
    /// Fixed look-at from (5,5,5)
    #[default]
    ThirdPerson,
    /// Straight down onto the ground plane, -Z up on screen
    TopDown,
}

impl CameraView {
    /// View matrix for this mode given the current device model matrix
    pub fn view_matrix(&self, model: &Mat4) -> Mat4 {
        match self {
            CameraView::FirstPerson => model.inverse(),
            CameraView::ThirdPerson => Camera::default_view(),
            CameraView::TopDown => Mat4::look_at_rh(
                Vec3::new(0.0, TOP_DOWN_HEIGHT, 0.0),
                Vec3::ZERO,
                Vec3::NEG_Z,
            ),
        }
    }
}
