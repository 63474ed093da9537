/// MotionTrackingRenderer - draws the tracked camera, its trajectory and a
/// ground grid for a stereo display host.
///
/// The renderer owns the graphics device and the drawables. Pose data comes
/// from an injected PoseProvider; the trajectory is filled by another
/// component through the SharedDrawables slot, under the SharedLock given
/// at construction.

use std::sync::{Arc, Mutex, RwLock};
use glam::Mat4;
use crate::camera::{Camera, CameraView};
use crate::config::{PoseSnapshotTiming, RendererConfig};
use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, ClearFlags, Color, Viewport, check_graphics_error,
};
use crate::pose::PoseProvider;
use crate::renderables::{CameraFrustum, CameraFrustumAndAxis, Drawable, Grid, Trajectory};
use crate::stereo::{StereoRenderer, Eye, HeadTransform};
use crate::sync::{SharedLock, lock_drawable};

const SOURCE: &str = "mtrack::Renderer";

/// Opaque white background
pub const CLEAR_COLOR: Color = Color::WHITE;

/// Lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    /// No graphics context yet, or the last surface creation failed
    Uninitialized,
    /// Drawables exist; resize and draw calls are accepted
    Ready,
    /// `on_renderer_shutdown` was called; frame callbacks fail with
    /// `Error::RendererTerminated` until the surface is created again
    Terminated,
}

/// Handles given to components that mutate drawables from other threads
///
/// Take the SharedLock before locking any of these.
#[derive(Clone)]
pub struct DrawableHandles {
    pub camera_frustum: Arc<Mutex<CameraFrustum>>,
    pub camera_frustum_and_axis: Arc<Mutex<CameraFrustumAndAxis>>,
    pub trajectory: Arc<Mutex<Trajectory>>,
    pub grid: Arc<Mutex<Grid>>,
}

impl DrawableHandles {
    fn create(device: &mut dyn GraphicsDevice, config: &RendererConfig) -> Result<Self> {
        Ok(Self {
            camera_frustum: Arc::new(Mutex::new(CameraFrustum::new(device)?)),
            grid: Arc::new(Mutex::new(Grid::new(device)?)),
            camera_frustum_and_axis: Arc::new(Mutex::new(CameraFrustumAndAxis::new(device)?)),
            trajectory: Arc::new(Mutex::new(Trajectory::new(device, config.trajectory_line_width)?)),
        })
    }
}

/// Slot holding the drawables of the current surface
///
/// Republished on every surface creation and emptied while a creation is
/// in progress, so holders always reach the live drawables.
#[derive(Clone, Default)]
pub struct SharedDrawables {
    slot: Arc<RwLock<Option<DrawableHandles>>>,
}

impl SharedDrawables {
    /// Drawables of the current surface, `None` if no surface is valid
    pub fn current(&self) -> Result<Option<DrawableHandles>> {
        self.slot
            .read()
            .map(|slot| slot.clone())
            .map_err(|_| Error::BackendError("Drawable slot poisoned".to_string()))
    }

    fn publish(&self, drawables: Option<DrawableHandles>) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| Error::BackendError("Drawable slot poisoned".to_string()))?;
        *slot = drawables;
        Ok(())
    }
}

pub struct MotionTrackingRenderer {
    device: Box<dyn GraphicsDevice>,
    pose_provider: Arc<dyn PoseProvider>,
    shared_lock: SharedLock,
    config: RendererConfig,
    camera: Camera,
    camera_view: CameraView,
    drawables: Option<DrawableHandles>,
    shared_drawables: SharedDrawables,
    is_valid: bool,
    state: RendererState,
}

impl MotionTrackingRenderer {
    /// Create a renderer; nothing touches the device until `on_surface_created`
    ///
    /// # Arguments
    ///
    /// * `device` - Graphics device of the render thread
    /// * `pose_provider` - Source of the tracked model matrix
    /// * `shared_lock` - Lock shared with the component that mutates the trajectory
    /// * `config` - Camera constants and pose snapshot policy
    pub fn new(
        device: Box<dyn GraphicsDevice>,
        pose_provider: Arc<dyn PoseProvider>,
        shared_lock: SharedLock,
        config: RendererConfig,
    ) -> Self {
        Self {
            device,
            pose_provider,
            shared_lock,
            config,
            camera: Camera::new(),
            camera_view: CameraView::default(),
            drawables: None,
            shared_drawables: SharedDrawables::default(),
            is_valid: false,
            state: RendererState::Uninitialized,
        }
    }

    // ===== ACCESSORS =====

    /// True once `on_surface_created` has completed successfully
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn shared_lock(&self) -> &SharedLock {
        &self.shared_lock
    }

    /// All drawable handles, `None` before a successful surface creation
    pub fn drawable_handles(&self) -> Option<DrawableHandles> {
        self.valid_drawables().cloned()
    }

    /// Slot for components that must follow surface recreation
    pub fn shared_drawables(&self) -> SharedDrawables {
        self.shared_drawables.clone()
    }

    pub fn camera_frustum(&self) -> Option<Arc<Mutex<CameraFrustum>>> {
        self.valid_drawables().map(|d| d.camera_frustum.clone())
    }

    pub fn camera_frustum_and_axis(&self) -> Option<Arc<Mutex<CameraFrustumAndAxis>>> {
        self.valid_drawables().map(|d| d.camera_frustum_and_axis.clone())
    }

    pub fn trajectory(&self) -> Option<Arc<Mutex<Trajectory>>> {
        self.valid_drawables().map(|d| d.trajectory.clone())
    }

    pub fn grid(&self) -> Option<Arc<Mutex<Grid>>> {
        self.valid_drawables().map(|d| d.grid.clone())
    }

    pub fn view_matrix(&self) -> Mat4 {
        *self.camera.view_matrix()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        *self.camera.projection_matrix()
    }

    /// width / height of the last accepted surface size
    pub fn aspect_ratio(&self) -> f32 {
        self.camera.aspect_ratio()
    }

    pub fn camera_view(&self) -> CameraView {
        self.camera_view
    }

    /// Switch between first-person, third-person and top-down views
    pub fn set_camera_view(&mut self, view: CameraView) {
        self.camera_view = view;
        self.camera.set_view(view.view_matrix(&self.pose_provider.model_matrix()));
        crate::engine_debug!(SOURCE, "Camera view set to {:?}", view);
    }

    fn valid_drawables(&self) -> Option<&DrawableHandles> {
        if self.is_valid {
            self.drawables.as_ref()
        } else {
            None
        }
    }

    fn ensure_not_terminated(&self) -> Result<()> {
        if self.state == RendererState::Terminated {
            return Err(Self::log_and_return_error(Error::RendererTerminated));
        }
        Ok(())
    }

    fn log_and_return_error(error: Error) -> Error {
        crate::engine_error!(SOURCE, "{}", error);
        error
    }

    fn refresh_model_matrix(&self) -> Result<()> {
        if let Some(drawables) = self.valid_drawables() {
            let model = self.pose_provider.model_matrix();
            lock_drawable(&drawables.camera_frustum_and_axis, "camera_frustum_and_axis")?
                .set_model_matrix(model);
        }
        Ok(())
    }
}

/// Draw one drawable, then fail if the device reported an error
fn draw_checked<D: Drawable>(
    device: &mut dyn GraphicsDevice,
    handle: &Mutex<D>,
    name: &str,
    view: &Mat4,
    projection: &Mat4,
) -> Result<()> {
    lock_drawable(handle, name)?.draw(device, view, projection)?;
    check_graphics_error(device, name)
}

impl StereoRenderer for MotionTrackingRenderer {
    fn on_surface_created(&mut self) -> Result<()> {
        self.is_valid = false;
        self.state = RendererState::Uninitialized;
        self.shared_drawables.publish(None)?;

        self.device.set_clear_color(CLEAR_COLOR);
        self.device.set_depth_test(true);

        let drawables = DrawableHandles::create(self.device.as_mut(), &self.config)
            .map_err(Self::log_and_return_error)?;

        let model = self.pose_provider.model_matrix();
        self.camera.set_view(self.camera_view.view_matrix(&model));
        lock_drawable(&drawables.camera_frustum_and_axis, "camera_frustum_and_axis")?
            .set_model_matrix(model);

        check_graphics_error(self.device.as_mut(), "onSurfaceCreated")?;

        self.shared_drawables.publish(Some(drawables.clone()))?;
        self.drawables = Some(drawables);
        self.is_valid = true;
        self.state = RendererState::Ready;
        crate::engine_info!(SOURCE, "Surface created");
        Ok(())
    }

    fn on_surface_changed(&mut self, width: u32, height: u32) -> Result<()> {
        crate::engine_info!(SOURCE, "onSurfaceChanged: {},{}", width, height);

        self.camera
            .resize(width, height, &self.config)
            .map_err(Self::log_and_return_error)?;
        self.device.set_viewport(Viewport::full(width, height));

        check_graphics_error(self.device.as_mut(), "onSurfaceChanged")
    }

    fn on_new_frame(&mut self, _head_transform: &HeadTransform) -> Result<()> {
        self.ensure_not_terminated()?;
        if self.config.pose_snapshot_timing == PoseSnapshotTiming::EveryFrame {
            self.refresh_model_matrix()?;
        }
        if self.camera_view == CameraView::FirstPerson {
            self.camera
                .set_view(self.camera_view.view_matrix(&self.pose_provider.model_matrix()));
        }
        check_graphics_error(self.device.as_mut(), "onReadyToDraw")
    }

    fn on_draw_eye(&mut self, eye: &Eye) -> Result<()> {
        self.ensure_not_terminated()?;
        let drawables = match self.valid_drawables() {
            Some(drawables) => drawables.clone(),
            None => {
                return Err(Self::log_and_return_error(Error::InitializationFailed(
                    "on_draw_eye called before on_surface_created".to_string(),
                )));
            }
        };

        let _guard = self.shared_lock.lock()?;
        crate::engine_trace!(SOURCE, "Drawing {:?} eye", eye.eye_type);

        let device = self.device.as_mut();
        device.set_viewport(eye.viewport);
        device.clear(ClearFlags::COLOR | ClearFlags::DEPTH);
        check_graphics_error(device, "glClear")?;

        let view = eye.eye_view * *self.camera.view_matrix();
        let projection = *self.camera.projection_matrix();
        draw_checked(device, &drawables.trajectory, "trajectory", &view, &projection)?;
        draw_checked(device, &drawables.grid, "grid", &view, &projection)?;
        draw_checked(
            device,
            &drawables.camera_frustum_and_axis,
            "camera_frustum_and_axis",
            &view,
            &projection,
        )
    }

    fn on_finish_frame(&mut self, _viewport: &Viewport) -> Result<()> {
        Ok(())
    }

    fn on_renderer_shutdown(&mut self) {
        self.state = RendererState::Terminated;
        crate::engine_info!(SOURCE, "onRendererShutdown");
    }
}

#[cfg(test)]
#[path = "motion_tracking_renderer_tests.rs"]
mod tests;
