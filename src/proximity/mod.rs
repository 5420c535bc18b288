//! View-ray proximity detection against static colliding volumes.
//!
//! A proximity check is a single ray-vs-volumes nearest-hit query. It never
//! mutates anything; policy on what a hit means belongs to the caller.

/// Nearest-hit queries.
pub mod detector;
/// Cross-tick hit tracking and transition events.
pub mod monitor;
/// Ray probe and slab intersection.
pub mod ray;
/// Bounding boxes and registered volumes.
pub mod volume;

pub use detector::{nearest_hit, ProximityDetector, ProximityHit};
pub use monitor::{ProximityEvent, ProximityMonitor, ProximityObservation};
pub use ray::RayProbe;
pub use volume::{Aabb, CollidingVolume, VolumeId};
