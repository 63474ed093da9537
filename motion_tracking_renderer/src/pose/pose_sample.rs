/// PoseSample - one pose delivered by the tracking service.

use glam::{Quat, Vec3};

/// Tracking status attached to a pose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseStatus {
    Initializing,
    Valid,
    Invalid,
    Unknown,
}

/// Device pose in the tracking service frame (right-handed, Z up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseSample {
    /// Seconds since the service started
    pub timestamp: f64,
    pub translation: Vec3,
    pub rotation: Quat,
    pub status: PoseStatus,
}

impl PoseSample {
    pub fn new(timestamp: f64, translation: Vec3, rotation: Quat, status: PoseStatus) -> Self {
        Self { timestamp, translation, rotation, status }
    }

    /// Valid sample at `translation` with identity rotation
    pub fn valid_at(timestamp: f64, translation: Vec3) -> Self {
        Self::new(timestamp, translation, Quat::IDENTITY, PoseStatus::Valid)
    }

    pub fn is_valid(&self) -> bool {
        self.status == PoseStatus::Valid
    }
}
