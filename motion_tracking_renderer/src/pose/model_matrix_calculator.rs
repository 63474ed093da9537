/// ModelMatrixCalculator - turns tracking-service poses into OpenGL model matrices.
///
/// The tracking service reports poses in a right-handed frame with Z up.
/// The renderer works in the OpenGL convention with Y up, so every pose is
/// pre-multiplied by a fixed change-of-basis matrix.
///
/// Written from the tracking thread, read from the render thread.

use std::sync::RwLock;
use glam::{Mat4, Quat, Vec3, Vec4};
use super::pose_provider::PoseProvider;

/// Change of basis from the service frame (Z up) to OpenGL (Y up):
/// x → x, y → -z, z → y
pub const SERVICE_TO_OPENGL: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, 0.0, 0.0, 0.0),
    Vec4::new(0.0, 0.0, -1.0, 0.0),
    Vec4::new(0.0, 1.0, 0.0, 0.0),
    Vec4::new(0.0, 0.0, 0.0, 1.0),
);

#[derive(Debug)]
pub struct ModelMatrixCalculator {
    model_matrix: RwLock<Mat4>,
}

impl Default for ModelMatrixCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelMatrixCalculator {
    /// Calculator holding the identity pose
    pub fn new() -> Self {
        Self {
            model_matrix: RwLock::new(Mat4::IDENTITY),
        }
    }

    /// Model matrix for a service-frame pose, without storing it
    pub fn compute(translation: Vec3, rotation: Quat) -> Mat4 {
        SERVICE_TO_OPENGL * Mat4::from_rotation_translation(rotation.normalize(), translation)
    }

    /// Store the model matrix for a new service-frame pose
    ///
    /// # Arguments
    ///
    /// * `translation` - Device position in the service frame (meters)
    /// * `rotation` - Device orientation in the service frame
    pub fn update_model_matrix(&self, translation: Vec3, rotation: Quat) -> Mat4 {
        let matrix = Self::compute(translation, rotation);
        // A poisoned lock only means a writer panicked mid-assignment of a Copy value
        match self.model_matrix.write() {
            Ok(mut lock) => *lock = matrix,
            Err(poisoned) => *poisoned.into_inner() = matrix,
        }
        matrix
    }

    /// Device position in the OpenGL frame
    pub fn translation(&self) -> Vec3 {
        self.model_matrix().w_axis.truncate()
    }
}

impl PoseProvider for ModelMatrixCalculator {
    fn model_matrix(&self) -> Mat4 {
        match self.model_matrix.read() {
            Ok(lock) => *lock,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
#[path = "model_matrix_calculator_tests.rs"]
mod tests;
