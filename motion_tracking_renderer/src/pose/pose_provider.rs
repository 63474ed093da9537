/// PoseProvider - capability "give me the current model matrix".

use glam::Mat4;

/// Source of the tracked device's model matrix
///
/// Called from the render thread; implementations must be cheap and must
/// not block on the tracking pipeline.
pub trait PoseProvider: Send + Sync {
    /// Current model matrix (device pose in world space)
    fn model_matrix(&self) -> Mat4;
}

/// Provider returning a fixed matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticPose(pub Mat4);

impl Default for StaticPose {
    fn default() -> Self {
        Self(Mat4::IDENTITY)
    }
}

impl PoseProvider for StaticPose {
    fn model_matrix(&self) -> Mat4 {
        self.0
    }
}
