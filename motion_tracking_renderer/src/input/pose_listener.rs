/// PoseListener - feeds tracking-service poses into the renderer's drawables.
///
/// Runs on the tracking (or UI) thread. Every mutation of a drawable happens
/// while holding the SharedLock, so it never interleaves with `on_draw_eye`.
/// Drawables are looked up through the renderer's SharedDrawables slot on
/// every call, so a recreated surface is picked up without re-attaching.

use std::sync::Arc;
use crate::error::Result;
use crate::pose::{ModelMatrixCalculator, PoseSample};
use crate::renderables::Drawable;
use crate::renderer::SharedDrawables;
use crate::sync::{SharedLock, lock_drawable};

const SOURCE: &str = "mtrack::PoseListener";

pub struct PoseListener {
    shared_lock: SharedLock,
    calculator: Arc<ModelMatrixCalculator>,
    drawables: Option<SharedDrawables>,
    accepted: u64,
    ignored: u64,
}

impl PoseListener {
    /// Create a listener that is not attached to any renderer yet
    ///
    /// # Arguments
    ///
    /// * `shared_lock` - The lock given to the renderer
    /// * `calculator` - Pose provider read by the renderer
    pub fn new(shared_lock: SharedLock, calculator: Arc<ModelMatrixCalculator>) -> Self {
        Self {
            shared_lock,
            calculator,
            drawables: None,
            accepted: 0,
            ignored: 0,
        }
    }

    /// Follow the drawables published by a renderer
    pub fn attach(&mut self, drawables: SharedDrawables) {
        self.drawables = Some(drawables);
        crate::engine_debug!(SOURCE, "Attached to renderer drawables");
    }

    pub fn detach(&mut self) {
        self.drawables = None;
    }

    pub fn is_attached(&self) -> bool {
        self.drawables.is_some()
    }

    pub fn calculator(&self) -> &Arc<ModelMatrixCalculator> {
        &self.calculator
    }

    /// Number of samples applied to the drawables
    pub fn accepted_count(&self) -> u64 {
        self.accepted
    }

    /// Number of samples dropped (not valid, not attached, or no live surface)
    pub fn ignored_count(&self) -> u64 {
        self.ignored
    }

    /// Apply a new pose
    ///
    /// Samples whose status is not Valid, that arrive before `attach`, or
    /// that arrive while the renderer has no valid surface are dropped.
    /// Returns true if the sample was applied.
    ///
    /// # Errors
    ///
    /// `Error::BackendError` if the shared lock or a drawable lock is poisoned.
    pub fn on_pose_available(&mut self, sample: &PoseSample) -> Result<bool> {
        let applied = sample.is_valid() && self.apply(sample)?;
        if applied {
            self.accepted += 1;
        } else {
            self.ignored += 1;
            crate::engine_trace!(SOURCE, "Ignoring {:?} pose at {:.3}s", sample.status, sample.timestamp);
        }
        Ok(applied)
    }

    fn apply(&self, sample: &PoseSample) -> Result<bool> {
        let Some(slot) = &self.drawables else {
            return Ok(false);
        };
        let _guard = self.shared_lock.lock()?;
        let Some(drawables) = slot.current()? else {
            return Ok(false);
        };

        let model = self.calculator.update_model_matrix(sample.translation, sample.rotation);
        lock_drawable(&drawables.trajectory, "trajectory")?
            .update_trajectory(model.w_axis.truncate());
        lock_drawable(&drawables.camera_frustum_and_axis, "camera_frustum_and_axis")?
            .set_model_matrix(model);
        Ok(true)
    }

    /// Clear the trajectory of the current surface
    pub fn reset_trajectory(&self) -> Result<()> {
        let Some(slot) = &self.drawables else {
            return Ok(());
        };
        let _guard = self.shared_lock.lock()?;
        if let Some(drawables) = slot.current()? {
            lock_drawable(&drawables.trajectory, "trajectory")?.reset_path();
            crate::engine_info!(SOURCE, "Trajectory reset");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "pose_listener_tests.rs"]
mod tests;
