use serde::{Deserialize, Serialize};

/// Movement actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [movement_keys]
/// forward = "KeyW"
/// strafe_left = "KeyA"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveAction {
    /// Walk along the view direction.
    Forward,
    /// Walk against the view direction.
    Back,
    /// Strafe towards the camera's left.
    StrafeLeft,
    /// Strafe towards the camera's right.
    StrafeRight,
}
