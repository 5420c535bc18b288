//! Nearest-hit ray queries against registered colliding volumes.
//!
//! The detector only reports. What a hit means (block motion, fire a
//! trigger) is the caller's decision, made outside the frame loop's critical
//! path.

use glam::Vec3;

use super::ray::RayProbe;
use super::volume::{Aabb, CollidingVolume, VolumeId};
use crate::camera::CameraPose;
use crate::error::NavError;

/// Nearest intersection found by a proximity check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityHit {
    /// Identity of the intersected volume.
    pub volume: VolumeId,
    /// Distance along the ray to the entry point.
    pub distance: f32,
    /// World-space entry point.
    pub point: Vec3,
}

/// Nearest volume hit by `probe`, if any, within `max_distance`.
///
/// Equal distances resolve to the earliest volume in `volumes`.
#[must_use]
pub fn nearest_hit(
    probe: &RayProbe,
    volumes: &[CollidingVolume],
    max_distance: Option<f32>,
) -> Option<ProximityHit> {
    let limit = max_distance.unwrap_or(f32::INFINITY);
    let mut best: Option<ProximityHit> = None;
    for volume in volumes {
        let Some(distance) = probe.intersect_aabb(&volume.bounds) else {
            continue;
        };
        if distance > limit {
            continue;
        }
        // Strict comparison keeps the first-registered volume on ties.
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(ProximityHit {
                volume: volume.id,
                distance,
                point: probe.at(distance),
            });
        }
    }
    best
}

/// Stateless ray tester over a static list of volumes.
#[derive(Debug, Clone, Default)]
pub struct ProximityDetector {
    volumes: Vec<CollidingVolume>,
}

impl ProximityDetector {
    /// Create a detector with no volumes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an unnamed volume; ids follow registration order.
    pub fn register(&mut self, bounds: Aabb) -> VolumeId {
        self.push(None, bounds)
    }

    /// Register a named volume.
    pub fn register_labeled(
        &mut self,
        label: impl Into<String>,
        bounds: Aabb,
    ) -> VolumeId {
        self.push(Some(label.into()), bounds)
    }

    fn push(&mut self, label: Option<String>, bounds: Aabb) -> VolumeId {
        let id = VolumeId(self.volumes.len() as u32);
        log::debug!(
            "registered volume {id:?} ({}) centred at {:?}",
            label.as_deref().unwrap_or("unnamed"),
            bounds.center()
        );
        self.volumes.push(CollidingVolume { id, label, bounds });
        id
    }

    /// Registered volumes in registration order.
    #[must_use]
    pub fn volumes(&self) -> &[CollidingVolume] {
        &self.volumes
    }

    /// Look up a volume by id.
    #[must_use]
    pub fn volume(&self, id: VolumeId) -> Option<&CollidingVolume> {
        self.volumes.get(id.0 as usize)
    }

    /// Nearest volume hit by the ray from `origin` along `direction`.
    ///
    /// # Errors
    ///
    /// [`NavError::MalformedRayDirection`] if `direction` is not a unit
    /// vector. The check is skipped; callers should treat this as no hit.
    pub fn check(
        &self,
        origin: Vec3,
        direction: Vec3,
    ) -> Result<Option<ProximityHit>, NavError> {
        self.check_within(origin, direction, None)
    }

    /// Like [`check`](Self::check), ignoring hits beyond `max_distance`.
    ///
    /// # Errors
    ///
    /// See [`check`](Self::check), plus [`NavError::InvalidMaxDistance`]
    /// for a negative or NaN cap.
    pub fn check_within(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: Option<f32>,
    ) -> Result<Option<ProximityHit>, NavError> {
        self.check_ray(RayProbe::new(origin, direction), max_distance)
    }

    /// Probe along a camera pose's view direction.
    ///
    /// # Errors
    ///
    /// See [`check_within`](Self::check_within).
    pub fn check_pose(
        &self,
        pose: &CameraPose,
        max_distance: Option<f32>,
    ) -> Result<Option<ProximityHit>, NavError> {
        self.check_ray(RayProbe::from_pose(pose), max_distance)
    }

    fn check_ray(
        &self,
        probe: Result<RayProbe, NavError>,
        max_distance: Option<f32>,
    ) -> Result<Option<ProximityHit>, NavError> {
        let probe = probe
            .and_then(|probe| {
                validate_max_distance(max_distance)?;
                Ok(probe)
            })
            .inspect_err(|e| log::warn!("proximity check skipped: {e}"))?;
        Ok(nearest_hit(&probe, &self.volumes, max_distance))
    }
}

/// Reject a ray length cap that cannot bound a distance.
///
/// # Errors
///
/// [`NavError::InvalidMaxDistance`] for a negative or NaN cap. Infinity is
/// the same as no cap.
pub fn validate_max_distance(max_distance: Option<f32>) -> Result<(), NavError> {
    match max_distance {
        Some(limit) if limit.is_nan() || limit < 0.0 => {
            Err(NavError::InvalidMaxDistance(limit))
        }
        _ => Ok(()),
    }
}
