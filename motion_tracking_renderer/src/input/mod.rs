//! Input side of the renderer: components running off the render thread
//! that mutate drawables under the SharedLock.

mod pose_listener;

pub use pose_listener::PoseListener;
