use glam::{Quat, Vec3};

/// Camera orientation and position, published once per integration step.
///
/// The orientation is kept unit-norm by the navigator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Unit orientation quaternion.
    pub orientation: Quat,
    /// World-space position.
    pub position: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            position: Vec3::ZERO,
        }
    }
}

impl CameraPose {
    /// View direction. `-Z` at identity orientation.
    #[inline]
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Camera right vector.
    #[inline]
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Camera up vector.
    #[inline]
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// `true` if both poses give exactly the same view.
    ///
    /// No tolerance: a one-pixel turn is a few milliradians, which is
    /// enough to move the view ray off an edge. `q` and `-q` describe the
    /// same rotation and compare equal.
    #[must_use]
    pub fn same_view(&self, other: &Self) -> bool {
        self.position == other.position
            && (self.orientation == other.orientation
                || self.orientation == -other.orientation)
    }
}

/// Anything the navigator can publish its pose into, typically the host's
/// renderable camera.
pub trait PoseTarget {
    /// Overwrite orientation and position from `pose`.
    fn set_pose(&mut self, pose: &CameraPose);
}

impl PoseTarget for CameraPose {
    fn set_pose(&mut self, pose: &CameraPose) {
        *self = *pose;
    }
}
