use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Order in which yaw and pitch are composed into the view orientation.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CompositionOrder {
    /// `yaw * pitch`: look around the vertical axis, then tilt.
    #[default]
    YawThenPitch,
    /// `pitch * yaw`: tilt about the world right axis, then turn.
    PitchThenYaw,
}

/// Sign and composition conventions for pointer look.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[schemars(title = "Rotation Convention", inline)]
#[serde(default)]
pub struct RotationConvention {
    /// Quaternion composition order.
    #[schemars(title = "Composition Order")]
    pub order: CompositionOrder,
    /// Moving the pointer right turns the view left.
    #[schemars(title = "Invert Yaw")]
    pub invert_yaw: bool,
    /// Moving the pointer down tilts the view up.
    #[schemars(title = "Invert Pitch")]
    pub invert_pitch: bool,
}

impl RotationConvention {
    /// Sign applied to normalized horizontal pointer motion.
    #[must_use]
    pub fn yaw_sign(self) -> f32 {
        if self.invert_yaw {
            1.0
        } else {
            -1.0
        }
    }

    /// Sign applied to normalized vertical pointer motion.
    #[must_use]
    pub fn pitch_sign(self) -> f32 {
        if self.invert_pitch {
            1.0
        } else {
            -1.0
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// First-person look and movement parameters.
pub struct NavigationOptions {
    /// Radians of yaw per viewport width of horizontal pointer travel.
    #[schemars(title = "Yaw Sensitivity", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub yaw_sensitivity: f32,
    /// Radians of pitch per viewport height of vertical pointer travel.
    #[schemars(title = "Pitch Sensitivity", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub pitch_sensitivity: f32,
    /// Symmetric pitch clamp in radians; pitch stays in `[-limit, limit]`.
    #[schemars(title = "Pitch Limit", range(min = 0.1, max = 1.57), extend("step" = 0.01))]
    pub pitch_limit: f32,
    /// Walking speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub move_speed: f32,
    /// Initial camera position.
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// Sign and order conventions for pointer look.
    pub convention: RotationConvention,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            yaw_sensitivity: 5.0,
            pitch_sensitivity: 5.0,
            pitch_limit: PI / 3.0,
            move_speed: 10.0,
            start_position: [10.0, 2.0, 10.0],
            convention: RotationConvention::default(),
        }
    }
}
