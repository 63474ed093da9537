/// Unit tests for MockGraphicsDevice and check_graphics_error.

use crate::graphics_device::mock_graphics_device::*;
use crate::graphics_device::{
    GraphicsDevice, Buffer, BufferDesc, BufferUsage, Color, ClearFlags, DrawDesc,
    PrimitiveTopology, Viewport, check_graphics_error, error_code,
};
use crate::error::Error;
use glam::Mat4;

fn draw_once(device: &mut MockGraphicsDevice, label: &'static str) {
    let buffer = device
        .create_buffer(&BufferDesc { size: 56, usage: BufferUsage::Static })
        .unwrap();
    device.draw(&DrawDesc {
        label,
        buffer: &buffer,
        topology: PrimitiveTopology::LineList,
        first_vertex: 0,
        vertex_count: 2,
        mvp: Mat4::IDENTITY,
        line_width: 1.0,
    });
}

// ============================================================================
// Command recording
// ============================================================================

#[test]
fn test_state_commands_are_recorded_in_order() {
    let mut device = MockGraphicsDevice::new();
    device.set_clear_color(Color::WHITE);
    device.set_depth_test(true);
    device.set_viewport(Viewport::full(800, 600));
    device.clear(ClearFlags::COLOR | ClearFlags::DEPTH);

    assert_eq!(
        device.commands(),
        vec![
            MockCommand::SetClearColor(Color::WHITE),
            MockCommand::SetDepthTest(true),
            MockCommand::SetViewport(Viewport { x: 0, y: 0, width: 800, height: 600 }),
            MockCommand::Clear(ClearFlags::COLOR | ClearFlags::DEPTH),
        ]
    );
}

#[test]
fn test_clones_share_the_command_log() {
    let device = MockGraphicsDevice::new();
    let mut boxed: Box<dyn GraphicsDevice> = Box::new(device.clone());
    boxed.set_depth_test(false);

    assert_eq!(device.commands(), vec![MockCommand::SetDepthTest(false)]);
}

#[test]
fn test_buffer_update_bounds() {
    let mut device = MockGraphicsDevice::new();
    let buffer = device
        .create_buffer(&BufferDesc { size: 8, usage: BufferUsage::Dynamic })
        .unwrap();

    assert!(buffer.update(0, &[0u8; 8]).is_ok());
    assert!(buffer.update(4, &[0u8; 8]).is_err());
    assert_eq!(buffer.size(), 8);
}

#[test]
fn test_failed_allocation_returns_out_of_memory() {
    let mut device = MockGraphicsDevice::new();
    device.set_fail_buffer_allocation(true);
    let result = device.create_buffer(&BufferDesc { size: 8, usage: BufferUsage::Static });
    assert!(matches!(result, Err(Error::OutOfMemory)));
}

// ============================================================================
// Error injection
// ============================================================================

#[test]
fn test_push_error_is_polled_once() {
    let mut device = MockGraphicsDevice::new();
    device.push_error(error_code::INVALID_ENUM);

    assert_eq!(device.poll_error(), Some(error_code::INVALID_ENUM));
    assert_eq!(device.poll_error(), None);
}

#[test]
fn test_fail_after_draw_fires_on_the_selected_draw() {
    let mut device = MockGraphicsDevice::new();
    device.fail_after_draw(1, error_code::INVALID_OPERATION);

    draw_once(&mut device, "first");
    assert_eq!(device.poll_error(), None);
    draw_once(&mut device, "second");
    assert_eq!(device.poll_error(), Some(error_code::INVALID_OPERATION));
    draw_once(&mut device, "third");
    assert_eq!(device.poll_error(), None);

    assert_eq!(device.draw_labels(), vec!["first", "second", "third"]);
}

#[test]
fn test_check_graphics_error_clean_state() {
    let mut device = MockGraphicsDevice::new();
    assert!(check_graphics_error(&mut device, "noop").is_ok());
}

#[test]
fn test_check_graphics_error_reports_label_and_code() {
    let mut device = MockGraphicsDevice::new();
    device.push_error(error_code::INVALID_VALUE);

    let err = check_graphics_error(&mut device, "onReadyToDraw").unwrap_err();
    assert_eq!(
        err,
        Error::GraphicsError { label: "onReadyToDraw".to_string(), code: error_code::INVALID_VALUE }
    );
}
