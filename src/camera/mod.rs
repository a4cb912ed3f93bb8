//! Camera placement for rendering a [`FrameTransform`].
//!
//! [`FrameTransform`]: crate::controller::FrameTransform

/// Core camera struct and GPU uniform types.
pub mod core;

pub use self::core::Camera;
#[cfg(feature = "viewer")]
pub use self::core::CameraUniform;
