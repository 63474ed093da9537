//! Stereo host contract - the callback shape expected from a VR display
//! framework, and a driver that plays the host's part.

mod stereo_renderer;
mod frame_driver;

pub use stereo_renderer::{StereoRenderer, Eye, EyeType, HeadTransform};
pub use frame_driver::{StereoFrameDriver, DEFAULT_IPD};
