/*!
# Motion Tracking Renderer

Rendering callbacks for a motion-tracking demo shown on a stereo display.

The renderer draws the tracked camera as a frustum with its axes, the
trajectory it followed and a ground grid. It does no tracking itself: the
model matrix comes from an injected pose provider, and the trajectory is
filled by a pose listener running on another thread.

## Architecture

- **StereoRenderer**: lifecycle callbacks invoked by the stereo host
- **MotionTrackingRenderer**: the StereoRenderer implementation
- **Drawable**: line geometry drawn with a view and a projection matrix
- **PoseProvider**: source of the tracked model matrix
- **GraphicsDevice**: the graphics-API surface the renderer draws through
- **SharedLock**: serializes drawing against trajectory updates

Hosts provide a GraphicsDevice for their graphics context and drive the
callbacks, either directly or through `StereoFrameDriver`.
*/

// Internal modules
mod error;
mod engine;
mod sync;
pub mod log;
pub mod config;
pub mod graphics_device;
pub mod camera;
pub mod pose;
pub mod renderables;
pub mod stereo;
pub mod renderer;
pub mod input;

// Main motion_tracking namespace module
pub mod motion_tracking {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Shared lock between renderer and pose listener
    pub use crate::sync::{SharedLock, SharedLockGuard};

    // Renderer and its configuration
    pub use crate::renderer::{
        MotionTrackingRenderer, RendererState, DrawableHandles, SharedDrawables, CLEAR_COLOR,
    };
    pub use crate::config::{RendererConfig, PoseSnapshotTiming};
    pub use crate::input::PoseListener;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Graphics device sub-module
    pub mod device {
        pub use crate::graphics_device::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Pose sub-module
    pub mod pose {
        pub use crate::pose::*;
    }

    // Drawables sub-module
    pub mod renderables {
        pub use crate::renderables::*;
    }

    // Stereo host sub-module
    pub mod stereo {
        pub use crate::stereo::*;
    }
}

// Re-export math library at crate root
pub use glam;
