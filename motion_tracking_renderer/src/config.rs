/// Renderer configuration
///
/// Camera constants and the pose-snapshot policy. Clear color and depth
/// testing are fixed and intentionally absent from this struct.

/// Vertical field of view in degrees
pub const CAMERA_FOV: f32 = 45.0;
/// Near clipping plane distance
pub const CAMERA_NEAR: f32 = 0.01;
/// Far clipping plane distance
pub const CAMERA_FAR: f32 = 200.0;
/// Trajectory line width in pixels
pub const TRAJECTORY_LINE_WIDTH: f32 = 3.0;

/// When the frustum+axis drawable picks up the provider's model matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoseSnapshotTiming {
    /// Once during surface creation; later updates come from the pose listener
    #[default]
    OnSurfaceCreated,
    /// Additionally at the start of every frame
    EveryFrame,
}

/// Configuration for `MotionTrackingRenderer`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    /// Vertical field of view in degrees
    pub camera_fov: f32,
    /// Near clipping plane
    pub camera_near: f32,
    /// Far clipping plane
    pub camera_far: f32,
    /// Pose snapshot policy
    pub pose_snapshot_timing: PoseSnapshotTiming,
    /// Trajectory line width in pixels
    pub trajectory_line_width: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            camera_fov: CAMERA_FOV,
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            pose_snapshot_timing: PoseSnapshotTiming::default(),
            trajectory_line_width: TRAJECTORY_LINE_WIDTH,
        }
    }
}

impl RendererConfig {
    pub fn with_camera_fov(mut self, degrees: f32) -> Self {
        self.camera_fov = degrees;
        self
    }

    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.camera_near = near;
        self.camera_far = far;
        self
    }

    pub fn with_pose_snapshot_timing(mut self, timing: PoseSnapshotTiming) -> Self {
        self.pose_snapshot_timing = timing;
        self
    }

    pub fn with_trajectory_line_width(mut self, width: f32) -> Self {
        self.trajectory_line_width = width;
        self
    }
}
