use glam::Vec3;

use super::volume::Aabb;
use crate::camera::CameraPose;
use crate::error::NavError;

/// Allowed deviation of a probe direction's length from 1.
const UNIT_TOLERANCE: f32 = 1e-3;

/// Direction components below this are treated as parallel to a slab.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Half-line from the camera along its view direction. Built fresh for
/// every check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayProbe {
    /// Ray origin.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl RayProbe {
    /// Validate and build a probe.
    ///
    /// # Errors
    ///
    /// [`NavError::MalformedRayDirection`] if `direction` is zero-length,
    /// non-finite, or not unit-norm. [`NavError::MalformedRayOrigin`] if
    /// `origin` is not finite.
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self, NavError> {
        if !origin.is_finite() {
            return Err(NavError::MalformedRayOrigin(origin));
        }
        let len = direction.length();
        if !len.is_finite() || (len - 1.0).abs() > UNIT_TOLERANCE {
            return Err(NavError::MalformedRayDirection(direction));
        }
        Ok(Self { origin, direction })
    }

    /// Probe from a camera pose along its forward vector.
    ///
    /// # Errors
    ///
    /// See [`RayProbe::new`]; a unit orientation always yields a valid probe.
    pub fn from_pose(pose: &CameraPose) -> Result<Self, NavError> {
        Self::new(pose.position, pose.forward())
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Entry distance into `aabb` using the slab method, or `None` if the
    /// ray misses. An origin inside the box hits at distance 0.
    #[must_use]
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        if aabb.contains(self.origin) {
            return Some(0.0);
        }

        let mut t_near = 0.0_f32;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let dir = self.direction[axis];
            let (lo, hi) = (aabb.min[axis], aabb.max[axis]);

            if dir.abs() < PARALLEL_EPSILON {
                if !(lo..=hi).contains(&origin) {
                    return None;
                }
                continue;
            }

            let inv = dir.recip();
            let t0 = (lo - origin) * inv;
            let t1 = (hi - origin) * inv;
            t_near = t_near.max(t0.min(t1));
            t_far = t_far.min(t0.max(t1));
            if t_near > t_far {
                return None;
            }
        }

        Some(t_near)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slab() -> Aabb {
        Aabb::new(Vec3::new(-1.0, -1.0, -5.0), Vec3::new(1.0, 1.0, -3.0))
    }

    #[test]
    fn rejects_non_unit_directions() {
        for dir in [Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0), Vec3::NAN] {
            assert!(matches!(
                RayProbe::new(Vec3::ZERO, dir),
                Err(NavError::MalformedRayDirection(_))
            ));
        }
        assert!(RayProbe::new(Vec3::ZERO, Vec3::new(0.6, 0.8, 0.0)).is_ok());
    }

    #[test]
    fn rejects_non_finite_origins() {
        for origin in [Vec3::new(f32::NAN, 0.0, 0.0), Vec3::splat(f32::INFINITY)] {
            assert!(matches!(
                RayProbe::new(origin, Vec3::NEG_Z),
                Err(NavError::MalformedRayOrigin(_))
            ));
        }
    }

    #[test]
    fn nan_bounds_on_a_parallel_axis_miss() {
        let aabb = Aabb {
            min: Vec3::new(f32::NAN, -1.0, -5.0),
            max: Vec3::new(f32::NAN, 1.0, -3.0),
        };
        let ray = RayProbe::new(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        assert_eq!(ray.intersect_aabb(&aabb), None);
    }

    #[test]
    fn ray_from_pose_follows_view_direction() {
        let pose = CameraPose {
            orientation: glam::Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            position: Vec3::new(0.0, 2.0, 0.0),
        };
        let ray = RayProbe::from_pose(&pose).unwrap();
        assert_eq!(ray.origin, pose.position);
        assert!(ray.direction.abs_diff_eq(Vec3::NEG_X, 1e-6));
    }

    #[test]
    fn hits_box_ahead() {
        let ray = RayProbe::new(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        let t = ray.intersect_aabb(&slab()).unwrap();
        assert!((t - 3.0).abs() < 1e-6);
        assert!(ray.at(t).abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), 1e-6));
    }

    #[test]
    fn misses_box_to_the_side_and_behind() {
        let sideways = RayProbe::new(Vec3::ZERO, Vec3::X).unwrap();
        assert!(sideways.intersect_aabb(&slab()).is_none());

        let backwards = RayProbe::new(Vec3::ZERO, Vec3::Z).unwrap();
        assert!(backwards.intersect_aabb(&slab()).is_none());
    }

    #[test]
    fn origin_inside_hits_at_zero() {
        let ray = RayProbe::new(Vec3::new(0.0, 0.0, -4.0), Vec3::Y).unwrap();
        assert_eq!(ray.intersect_aabb(&slab()), Some(0.0));
    }

    #[test]
    fn diagonal_ray_enters_through_corner_region() {
        let aabb = Aabb::new(Vec3::splat(1.0), Vec3::splat(2.0));
        let ray = RayProbe::new(Vec3::ZERO, Vec3::ONE.normalize()).unwrap();
        let t = ray.intersect_aabb(&aabb).unwrap();
        assert!((t - 3.0_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn grazing_the_face_plane_counts_as_hit() {
        let ray = RayProbe::new(Vec3::new(1.0, 0.0, 0.0), Vec3::NEG_Z).unwrap();
        let t = ray.intersect_aabb(&slab()).unwrap();
        assert!((t - 3.0).abs() < 1e-6);
    }
}
