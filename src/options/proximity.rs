use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::proximity::detector::validate_max_distance;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Proximity", inline)]
#[serde(default)]
/// View-ray proximity check parameters.
pub struct ProximityOptions {
    /// Optional cap on hit distance. `None` probes the full half-line.
    #[schemars(title = "Max Distance")]
    pub max_distance: Option<f32>,
    /// Skip the ray test on ticks where the camera pose did not change.
    #[schemars(title = "Check Only On Motion")]
    pub check_only_on_motion: bool,
}

impl Default for ProximityOptions {
    fn default() -> Self {
        Self {
            max_distance: None,
            check_only_on_motion: true,
        }
    }
}

impl ProximityOptions {
    /// Reject a ray length cap the detector cannot use.
    ///
    /// # Errors
    ///
    /// [`NavError::InvalidMaxDistance`] for a negative or NaN cap.
    pub fn validate(&self) -> Result<(), NavError> {
        validate_max_distance(self.max_distance)
    }
}
