//! Pose module - where the renderer's model matrix comes from.
//!
//! The renderer never tracks anything itself. It reads a snapshot from an
//! injected PoseProvider.

mod pose_provider;
mod pose_sample;
mod model_matrix_calculator;

pub use pose_provider::{PoseProvider, StaticPose};
pub use pose_sample::{PoseSample, PoseStatus};
pub use model_matrix_calculator::{ModelMatrixCalculator, SERVICE_TO_OPENGL};
