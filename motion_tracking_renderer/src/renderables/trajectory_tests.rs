use glam::{Mat4, Vec3};
use crate::graphics_device::mock_graphics_device::{MockCommand, MockGraphicsDevice};
use crate::graphics_device::{BufferUsage, PrimitiveTopology, Vertex};
use super::*;

fn new_trajectory(device: &mut MockGraphicsDevice) -> Trajectory {
    Trajectory::new(device, 3.0).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_allocates_full_capacity_dynamic_buffer() {
    let mut device = MockGraphicsDevice::new();
    let trajectory = new_trajectory(&mut device);

    assert_eq!(trajectory.point_count(), 0);
    assert_eq!(
        device.commands(),
        vec![MockCommand::CreateBuffer {
            size: MAX_TRAJECTORY_POINTS as u64 * Vertex::SIZE,
            usage: BufferUsage::Dynamic,
        }]
    );
}

// ============================================================================
// update_trajectory / reset_path
// ============================================================================

#[test]
fn test_update_appends_points_in_order() {
    let mut device = MockGraphicsDevice::new();
    let mut trajectory = new_trajectory(&mut device);

    assert!(trajectory.update_trajectory(Vec3::new(0.0, 0.0, 0.0)));
    assert!(trajectory.update_trajectory(Vec3::new(1.0, 0.0, 0.0)));

    assert_eq!(trajectory.point_count(), 2);
    assert_eq!(trajectory.points()[1], Vec3::X);
}

#[test]
fn test_update_stops_at_capacity() {
    let mut device = MockGraphicsDevice::new();
    let mut trajectory = new_trajectory(&mut device);

    for i in 0..MAX_TRAJECTORY_POINTS {
        assert!(trajectory.update_trajectory(Vec3::splat(i as f32)));
    }
    assert!(!trajectory.update_trajectory(Vec3::ZERO));
    assert_eq!(trajectory.point_count(), MAX_TRAJECTORY_POINTS);
}

#[test]
fn test_reset_path_clears_points_and_reopens_capacity() {
    let mut device = MockGraphicsDevice::new();
    let mut trajectory = new_trajectory(&mut device);
    for _ in 0..MAX_TRAJECTORY_POINTS {
        trajectory.update_trajectory(Vec3::ONE);
    }

    trajectory.reset_path();
    assert_eq!(trajectory.point_count(), 0);
    assert!(trajectory.update_trajectory(Vec3::ONE));
}

// ============================================================================
// draw
// ============================================================================

#[test]
fn test_draw_uploads_pending_points_once() {
    let mut device = MockGraphicsDevice::new();
    let mut trajectory = new_trajectory(&mut device);
    trajectory.update_trajectory(Vec3::ZERO);
    trajectory.update_trajectory(Vec3::X);
    trajectory.update_trajectory(Vec3::Y);
    device.clear_commands();

    trajectory.draw(&mut device, &Mat4::IDENTITY, &Mat4::IDENTITY).unwrap();
    trajectory.draw(&mut device, &Mat4::IDENTITY, &Mat4::IDENTITY).unwrap();

    let commands = device.commands();
    let uploads = commands
        .iter()
        .filter(|c| matches!(c, MockCommand::UpdateBuffer { .. }))
        .count();
    assert_eq!(uploads, 1);
    assert_eq!(
        commands[0],
        MockCommand::UpdateBuffer { offset: 0, len: 3 * Vertex::SIZE as usize }
    );
    assert_eq!(trajectory.uploaded_vertex_count(), 3);
}

#[test]
fn test_draw_is_a_line_strip_with_configured_width() {
    let mut device = MockGraphicsDevice::new();
    let mut trajectory = new_trajectory(&mut device);
    trajectory.update_trajectory(Vec3::ZERO);
    trajectory.update_trajectory(Vec3::X);

    let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
    let projection = Mat4::perspective_rh_gl(1.0, 1.0, 0.1, 10.0);
    trajectory.draw(&mut device, &view, &projection).unwrap();

    let draw = device
        .commands()
        .into_iter()
        .find(|c| matches!(c, MockCommand::Draw { .. }))
        .unwrap();
    assert_eq!(
        draw,
        MockCommand::Draw {
            label: "trajectory",
            topology: PrimitiveTopology::LineStrip,
            vertex_count: 2,
            mvp: projection * view,
            line_width: 3.0,
        }
    );
}

#[test]
fn test_draw_after_reset_uploads_nothing_and_draws_zero_vertices() {
    let mut device = MockGraphicsDevice::new();
    let mut trajectory = new_trajectory(&mut device);
    trajectory.update_trajectory(Vec3::ZERO);
    trajectory.draw(&mut device, &Mat4::IDENTITY, &Mat4::IDENTITY).unwrap();

    trajectory.reset_path();
    trajectory.draw(&mut device, &Mat4::IDENTITY, &Mat4::IDENTITY).unwrap();

    assert_eq!(trajectory.uploaded_vertex_count(), 0);
}
