//! First-person camera: pose, renderable camera, and the navigator that
//! integrates input into both.

/// Renderable perspective camera.
pub mod core;
/// Yaw/pitch look and key-driven walking.
pub mod navigator;
/// Published camera pose and the trait for writing it to a host camera.
pub mod pose;

pub use self::core::Camera;
pub use navigator::{
    FirstPersonNavigator, MovementKeys, NavigatorConfig, YawPitchState,
};
pub use pose::{CameraPose, PoseTarget};
