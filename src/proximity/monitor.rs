//! Per-tick proximity tracking.
//!
//! [`ProximityMonitor`] runs the detector at most once per published pose
//! and turns changes in the nearest hit into [`ProximityEvent`] values. The
//! events are returned, never acted on, so a hit can never stall the frame
//! loop.

use super::detector::{ProximityDetector, ProximityHit};
use super::volume::VolumeId;
use crate::camera::CameraPose;
use crate::error::NavError;
use crate::options::ProximityOptions;

/// Change in what the view ray is pointing at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProximityEvent {
    /// The ray started hitting a volume after hitting nothing.
    Entered(ProximityHit),
    /// The nearest volume changed.
    Changed {
        /// Volume hit before.
        from: VolumeId,
        /// New nearest hit.
        to: ProximityHit,
    },
    /// The ray stopped hitting anything.
    Cleared {
        /// Volume hit before.
        previous: VolumeId,
    },
}

/// Outcome of one [`ProximityMonitor::observe`] call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProximityObservation {
    /// Current nearest hit (cached when the probe was skipped).
    pub hit: Option<ProximityHit>,
    /// Transition since the previous observation, if any.
    pub event: Option<ProximityEvent>,
    /// `false` when the ray test was skipped because the pose was unchanged.
    pub probed: bool,
}

/// Tracks the nearest hit across ticks.
#[derive(Debug, Clone, Default)]
pub struct ProximityMonitor {
    options: ProximityOptions,
    last_pose: Option<CameraPose>,
    last_hit: Option<ProximityHit>,
}

impl ProximityMonitor {
    /// Create a monitor with the given options.
    #[must_use]
    pub fn new(options: ProximityOptions) -> Self {
        Self {
            options,
            last_pose: None,
            last_hit: None,
        }
    }

    /// Probe `detector` from `pose` and report transitions.
    ///
    /// # Errors
    ///
    /// Propagates [`NavError::MalformedRayDirection`] from the detector;
    /// tracked state is left as it was.
    pub fn observe(
        &mut self,
        detector: &ProximityDetector,
        pose: &CameraPose,
    ) -> Result<ProximityObservation, NavError> {
        let unchanged = self
            .last_pose
            .as_ref()
            .is_some_and(|last| last.same_view(pose));
        if self.options.check_only_on_motion && unchanged {
            return Ok(ProximityObservation {
                hit: self.last_hit,
                event: None,
                probed: false,
            });
        }

        let hit = detector.check_pose(pose, self.options.max_distance)?;
        let event = transition(self.last_hit.map(|h| h.volume), hit);
        if let Some(event) = &event {
            log::debug!("proximity {event:?}");
        }

        self.last_pose = Some(*pose);
        self.last_hit = hit;
        Ok(ProximityObservation {
            hit,
            event,
            probed: true,
        })
    }

    /// Nearest hit from the last probe.
    #[must_use]
    pub fn last_hit(&self) -> Option<ProximityHit> {
        self.last_hit
    }

    /// Forget the cached pose so the next observation always probes.
    pub fn invalidate(&mut self) {
        self.last_pose = None;
    }
}

fn transition(
    previous: Option<VolumeId>,
    hit: Option<ProximityHit>,
) -> Option<ProximityEvent> {
    match (previous, hit) {
        (None, Some(hit)) => Some(ProximityEvent::Entered(hit)),
        (Some(from), Some(to)) if from != to.volume => {
            Some(ProximityEvent::Changed { from, to })
        }
        (Some(previous), None) => Some(ProximityEvent::Cleared { previous }),
        _ => None,
    }
}
