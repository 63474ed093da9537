//! Renderables - the line drawables shown by the motion tracking renderer.
//!
//! Each drawable owns a vertex buffer allocated on the render thread and
//! issues one draw call per `draw()`.

mod drawable;
mod camera_frustum;
mod camera_frustum_and_axis;
mod trajectory;
mod grid;

pub use drawable::{Drawable, LineMesh};
pub use camera_frustum::CameraFrustum;
pub use camera_frustum_and_axis::CameraFrustumAndAxis;
pub use trajectory::{Trajectory, MAX_TRAJECTORY_POINTS};
pub use grid::{Grid, GRID_HEIGHT, GRID_RANGE, GRID_INTERVAL};
