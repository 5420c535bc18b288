//! Crate-level error types.

use std::fmt;

use glam::Vec3;

/// Errors produced by the fpnav crate.
///
/// Every variant is local and recoverable by the caller; nothing in the
/// navigation core treats one of these as fatal.
#[derive(Debug)]
pub enum NavError {
    /// A non-positive (or non-finite) timestep was passed to the navigator.
    /// The update is skipped and no state is mutated.
    InvalidTimestep(f32),
    /// Pitch clamp bounds do not form a proper interval (`low >= high`) or
    /// reach past straight up or down.
    DegenerateClampRange {
        /// Lower pitch bound in radians.
        low: f32,
        /// Upper pitch bound in radians.
        high: f32,
    },
    /// A proximity probe direction was zero-length or not unit-norm.
    MalformedRayDirection(Vec3),
    /// A proximity probe origin has a non-finite component.
    MalformedRayOrigin(Vec3),
    /// Viewport dimensions cannot normalize pointer deltas.
    InvalidViewport {
        /// Viewport width in pixels.
        width: f32,
        /// Viewport height in pixels.
        height: f32,
    },
    /// Movement speed is negative or non-finite.
    InvalidSpeed(f32),
    /// Look sensitivity is non-finite.
    InvalidSensitivity(f32),
    /// Proximity ray length cap is negative or NaN.
    InvalidMaxDistance(f32),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimestep(dt) => {
                write!(f, "invalid timestep: dt must be positive, got {dt}")
            }
            Self::DegenerateClampRange { low, high } => write!(
                f,
                "degenerate pitch clamp range: low ({low}) must be below \
                 high ({high})"
            ),
            Self::MalformedRayDirection(dir) => {
                write!(f, "malformed ray direction {dir}: expected unit vector")
            }
            Self::MalformedRayOrigin(origin) => {
                write!(f, "malformed ray origin {origin}: expected finite point")
            }
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport {width}x{height}")
            }
            Self::InvalidSpeed(speed) => {
                write!(f, "invalid movement speed: {speed}")
            }
            Self::InvalidSensitivity(value) => {
                write!(f, "invalid look sensitivity: {value}")
            }
            Self::InvalidMaxDistance(value) => {
                write!(f, "invalid proximity max distance: {value}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
