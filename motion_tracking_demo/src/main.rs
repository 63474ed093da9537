//! Headless motion tracking demo
//!
//! Drives MotionTrackingRenderer through a simulated side-by-side stereo
//! host. A pose thread moves the device on a circle in the tracking frame;
//! draw calls go to a device that only traces them.
//!
//! Run with: RUST_LOG=debug cargo run -p motion_tracking_demo -- 300

use std::f32::consts::FRAC_PI_2;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use motion_tracking_renderer::glam::{Quat, Vec3};
use motion_tracking_renderer::motion_tracking::camera::CameraView;
use motion_tracking_renderer::motion_tracking::device::{
    Buffer, BufferDesc, ClearFlags, Color, DrawDesc, GraphicsDevice, Viewport,
};
use motion_tracking_renderer::motion_tracking::log::{LogEntry, LogSeverity, Logger};
use motion_tracking_renderer::motion_tracking::pose::{ModelMatrixCalculator, PoseSample, PoseStatus};
use motion_tracking_renderer::motion_tracking::stereo::{HeadTransform, StereoFrameDriver};
use motion_tracking_renderer::motion_tracking::{
    Engine, Error, MotionTrackingRenderer, PoseListener, PoseSnapshotTiming, RendererConfig,
    Result, SharedLock,
};

const SURFACE_WIDTH: u32 = 1920;
const SURFACE_HEIGHT: u32 = 1080;
const DEFAULT_FRAMES: u64 = 300;
const FRAME_TIME: Duration = Duration::from_millis(16);
const POSE_PERIOD: Duration = Duration::from_millis(10);
/// Poses reported before this are flagged Initializing
const WARMUP_SECONDS: f64 = 0.2;
const CIRCLE_RADIUS: f32 = 1.5;
/// Radians per second
const ANGULAR_SPEED: f32 = 0.5;

// ============================================================================
// Logging bridge
// ============================================================================

/// Forwards engine log entries to the `log` facade (env_logger here)
struct LogBridge;

impl Logger for LogBridge {
    fn log(&self, entry: &LogEntry) {
        let level = match entry.severity {
            LogSeverity::Trace => log::Level::Trace,
            LogSeverity::Debug => log::Level::Debug,
            LogSeverity::Info => log::Level::Info,
            LogSeverity::Warn => log::Level::Warn,
            LogSeverity::Error => log::Level::Error,
        };
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => {
                log::log!(target: entry.source.as_str(), level, "{} ({}:{})", entry.message, file, line)
            }
            _ => log::log!(target: entry.source.as_str(), level, "{}", entry.message),
        }
    }
}

// ============================================================================
// Tracing device
// ============================================================================

struct TracingBuffer {
    size: u64,
}

impl Buffer for TracingBuffer {
    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        if offset + data.len() as u64 > self.size {
            return Err(Error::BackendError(format!(
                "update of {} bytes at {} exceeds buffer size {}",
                data.len(), offset, self.size
            )));
        }
        log::trace!(target: "demo::device", "buffer update: {} bytes at {}", data.len(), offset);
        Ok(())
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// GraphicsDevice with no graphics context behind it
#[derive(Default)]
struct TracingDevice {
    draw_calls: Arc<AtomicU64>,
}

impl GraphicsDevice for TracingDevice {
    fn set_clear_color(&mut self, color: Color) {
        log::debug!(target: "demo::device", "clear color {:?}", color.to_array());
    }

    fn set_depth_test(&mut self, enabled: bool) {
        log::debug!(target: "demo::device", "depth test {}", enabled);
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        log::debug!(target: "demo::device", "viewport {:?}", viewport);
    }

    fn clear(&mut self, flags: ClearFlags) {
        log::trace!(target: "demo::device", "clear {:?}", flags);
    }

    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<Arc<dyn Buffer>> {
        log::debug!(target: "demo::device", "buffer: {} bytes ({:?})", desc.size, desc.usage);
        Ok(Arc::new(TracingBuffer { size: desc.size }))
    }

    fn draw(&mut self, desc: &DrawDesc<'_>) {
        self.draw_calls.fetch_add(1, Ordering::Relaxed);
        log::trace!(
            target: "demo::device",
            "draw {}: {:?}, {} vertices, line width {}",
            desc.label, desc.topology, desc.vertex_count, desc.line_width
        );
    }

    fn poll_error(&mut self) -> Option<u32> {
        None
    }
}

// ============================================================================
// Simulated tracking
// ============================================================================

/// Device on a horizontal circle, facing along its direction of travel
fn simulated_pose(elapsed: f64) -> PoseSample {
    let angle = elapsed as f32 * ANGULAR_SPEED;
    let translation = Vec3::new(CIRCLE_RADIUS * angle.cos(), CIRCLE_RADIUS * angle.sin(), 0.0);
    let rotation = Quat::from_rotation_z(angle + FRAC_PI_2);
    let status = if elapsed < WARMUP_SECONDS {
        PoseStatus::Initializing
    } else {
        PoseStatus::Valid
    };
    PoseSample::new(elapsed, translation, rotation, status)
}

fn run_pose_thread(mut listener: PoseListener, running: Arc<AtomicBool>) -> PoseListener {
    let start = Instant::now();
    while running.load(Ordering::Acquire) {
        let sample = simulated_pose(start.elapsed().as_secs_f64());
        if let Err(err) = listener.on_pose_available(&sample) {
            log::error!(target: "demo::pose", "stopping pose updates: {}", err);
            break;
        }
        thread::sleep(POSE_PERIOD);
    }
    listener
}

// ============================================================================
// Main
// ============================================================================

fn frame_count_from_args() -> Result<u64> {
    match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .map_err(|_| Error::InitializationFailed(format!("invalid frame count: {}", arg))),
        None => Ok(DEFAULT_FRAMES),
    }
}

fn run_frames(
    driver: &mut StereoFrameDriver,
    renderer: &mut MotionTrackingRenderer,
    frames: u64,
) -> Result<()> {
    for frame in 0..frames {
        let frame_start = Instant::now();
        if frame == frames / 2 {
            renderer.set_camera_view(CameraView::TopDown);
        }
        driver.run_frame(renderer, &HeadTransform::default())?;
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    Engine::set_logger(LogBridge);
    Engine::set_min_severity(LogSeverity::Trace);

    let frames = frame_count_from_args()?;
    let shared_lock = SharedLock::new();
    let calculator = Arc::new(ModelMatrixCalculator::new());
    let device = TracingDevice::default();
    let draw_calls = device.draw_calls.clone();

    let config = RendererConfig::default().with_pose_snapshot_timing(PoseSnapshotTiming::EveryFrame);
    let mut renderer = MotionTrackingRenderer::new(
        Box::new(device),
        calculator.clone(),
        shared_lock.clone(),
        config,
    );
    let mut driver = StereoFrameDriver::new(SURFACE_WIDTH, SURFACE_HEIGHT);
    driver.start(&mut renderer)?;

    let mut listener = PoseListener::new(shared_lock.clone(), calculator);
    listener.attach(renderer.shared_drawables());

    let running = Arc::new(AtomicBool::new(true));
    let pose_thread = {
        let running = running.clone();
        thread::spawn(move || run_pose_thread(listener, running))
    };

    let result = run_frames(&mut driver, &mut renderer, frames);
    running.store(false, Ordering::Release);
    let listener = pose_thread
        .join()
        .map_err(|_| Error::BackendError("pose thread panicked".to_string()))?;
    result?;

    let trajectory_points = match renderer.trajectory() {
        Some(trajectory) => {
            let _guard = shared_lock.lock()?;
            let points = trajectory
                .lock()
                .map_err(|_| Error::BackendError("trajectory lock poisoned".to_string()))?
                .point_count();
            points
        }
        None => 0,
    };
    log::info!(
        "{} frames, {} draw calls, {} poses applied, {} ignored, {} trajectory points",
        driver.frame_count(),
        draw_calls.load(Ordering::Relaxed),
        listener.accepted_count(),
        listener.ignored_count(),
        trajectory_points,
    );

    listener.reset_trajectory()?;
    driver.stop(&mut renderer);
    Ok(())
}
