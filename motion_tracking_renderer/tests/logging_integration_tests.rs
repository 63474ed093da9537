//! Integration tests for Engine logging system
//!
//! These tests verify the logging hub and the messages emitted by the
//! renderer through it.
//! No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests


use device_test_utils::RecordingDevice;
use motion_tracking_renderer::motion_tracking::device::error_code;
use motion_tracking_renderer::motion_tracking::log::{Logger, LogEntry, LogSeverity};
use motion_tracking_renderer::motion_tracking::pose::StaticPose;
use motion_tracking_renderer::motion_tracking::stereo::{HeadTransform, StereoRenderer};
use motion_tracking_renderer::motion_tracking::{
    Engine, MotionTrackingRenderer, RendererConfig, SharedLock,
};
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn new_renderer(device: &RecordingDevice) -> MotionTrackingRenderer {
    MotionTrackingRenderer::new(
        Box::new(device.clone()),
        Arc::new(StaticPose::default()),
        SharedLock::new(),
        RendererConfig::default(),
    )
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Engine::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "Test info message");
    assert_eq!(captured[1].severity, LogSeverity::Warn);
    assert_eq!(captured[1].source, "test::module");
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_renderer_lifecycle_messages() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let device = RecordingDevice::new();
    let mut renderer = new_renderer(&device);
    renderer.on_surface_created().unwrap();
    renderer.on_surface_changed(800, 600).unwrap();
    renderer.on_renderer_shutdown();

    let captured = entries.lock().unwrap();
    let messages: Vec<&str> = captured
        .iter()
        .filter(|e| e.source == "mtrack::Renderer" && e.severity == LogSeverity::Info)
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(messages, vec!["Surface created", "onSurfaceChanged: 800,600", "onRendererShutdown"]);
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_graphics_error_logged_with_location() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let device = RecordingDevice::new();
    let mut renderer = new_renderer(&device);
    renderer.on_surface_created().unwrap();
    device.push_error(error_code::INVALID_ENUM);
    assert!(renderer.on_new_frame(&HeadTransform::default()).is_err());

    let captured = entries.lock().unwrap();
    let errors: Vec<&LogEntry> = captured
        .iter()
        .filter(|e| e.severity == LogSeverity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source, "mtrack::GraphicsDevice");
    assert_eq!(errors[0].message, "onReadyToDraw: glError 0x0500");
    assert!(errors[0].file.is_some());
    assert!(errors[0].line.is_some());
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_min_severity_filters_renderer_chatter() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);
    Engine::set_min_severity(LogSeverity::Warn);

    let device = RecordingDevice::new();
    let mut renderer = new_renderer(&device);
    renderer.on_surface_created().unwrap();
    renderer.on_surface_changed(800, 600).unwrap();
    assert!(renderer.on_surface_changed(0, 600).is_err());

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    drop(captured);

    Engine::reset_logger();
    assert_eq!(Engine::min_severity(), LogSeverity::Debug);
}
