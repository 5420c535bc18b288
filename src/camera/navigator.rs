//! First-person camera integration.
//!
//! [`FirstPersonNavigator`] is a continuous integrator over
//! `(phi, theta, position)`: each [`update`](FirstPersonNavigator::update)
//! turns the aggregated pointer delta into yaw/pitch, the held movement keys
//! into a yaw-relative velocity, and publishes the resulting [`CameraPose`].

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};

use super::pose::{CameraPose, PoseTarget};
use crate::error::NavError;
use crate::input::{InputAggregator, MoveAction};
use crate::options::{CompositionOrder, MovementKeyOptions, RotationConvention};

/// Key strings for the four movement actions. An empty string is never
/// pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementKeys {
    /// Walk forward.
    pub forward: String,
    /// Walk backward.
    pub back: String,
    /// Strafe left.
    pub strafe_left: String,
    /// Strafe right.
    pub strafe_right: String,
}

impl Default for MovementKeys {
    fn default() -> Self {
        Self::from_options(&MovementKeyOptions::default())
    }
}

impl MovementKeys {
    /// Resolve bindings from options; unbound actions get an empty key.
    #[must_use]
    pub fn from_options(options: &MovementKeyOptions) -> Self {
        let key = |action| options.key_for(action).unwrap_or_default().to_owned();
        Self {
            forward: key(MoveAction::Forward),
            back: key(MoveAction::Back),
            strafe_left: key(MoveAction::StrafeLeft),
            strafe_right: key(MoveAction::StrafeRight),
        }
    }

    /// `(forward, strafe)` velocities in `{-1, 0, 1}` from held keys.
    #[must_use]
    pub fn velocities(&self, input: &InputAggregator) -> (f32, f32) {
        let held = |key: &str| {
            if !key.is_empty() && input.query(key) {
                1.0
            } else {
                0.0
            }
        };
        let forward = held(&self.forward) - held(&self.back);
        let strafe = held(&self.strafe_left) - held(&self.strafe_right);
        (forward, strafe)
    }
}

/// Navigator configuration, validated once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorConfig {
    /// Radians of yaw per viewport width of pointer travel.
    pub yaw_sensitivity: f32,
    /// Radians of pitch per viewport height of pointer travel.
    pub pitch_sensitivity: f32,
    /// Lower pitch bound in radians.
    pub pitch_min: f32,
    /// Upper pitch bound in radians.
    pub pitch_max: f32,
    /// Walking speed in world units per second.
    pub move_speed: f32,
    /// Movement key bindings.
    pub keys: MovementKeys,
    /// Viewport size used to normalize pointer deltas.
    pub viewport: Vec2,
    /// Sign and composition conventions.
    pub convention: RotationConvention,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        let limit = std::f32::consts::PI / 3.0;
        Self {
            yaw_sensitivity: 5.0,
            pitch_sensitivity: 5.0,
            pitch_min: -limit,
            pitch_max: limit,
            move_speed: 10.0,
            keys: MovementKeys::default(),
            viewport: Vec2::new(1920.0, 1080.0),
            convention: RotationConvention::default(),
        }
    }
}

impl NavigatorConfig {
    /// Reject configurations the integrator cannot run with.
    ///
    /// # Errors
    ///
    /// - [`NavError::DegenerateClampRange`] unless
    ///   `-PI/2 <= pitch_min < pitch_max <= PI/2`
    /// - [`NavError::InvalidSensitivity`] for non-finite sensitivities
    /// - [`NavError::InvalidViewport`] for non-positive viewport dimensions
    /// - [`NavError::InvalidSpeed`] for negative or non-finite speed
    pub fn validate(&self) -> Result<(), NavError> {
        // NaN bounds fail every comparison.
        let ordered = self.pitch_min >= -FRAC_PI_2
            && self.pitch_max <= FRAC_PI_2
            && self.pitch_min < self.pitch_max;
        if !ordered {
            return Err(NavError::DegenerateClampRange {
                low: self.pitch_min,
                high: self.pitch_max,
            });
        }
        for sensitivity in [self.yaw_sensitivity, self.pitch_sensitivity] {
            if !sensitivity.is_finite() {
                return Err(NavError::InvalidSensitivity(sensitivity));
            }
        }
        validate_viewport(self.viewport)?;
        if !self.move_speed.is_finite() || self.move_speed < 0.0 {
            return Err(NavError::InvalidSpeed(self.move_speed));
        }
        Ok(())
    }
}

fn validate_viewport(viewport: Vec2) -> Result<(), NavError> {
    if viewport.is_finite() && viewport.x > 0.0 && viewport.y > 0.0 {
        Ok(())
    } else {
        Err(NavError::InvalidViewport {
            width: viewport.x,
            height: viewport.y,
        })
    }
}

/// Accumulated yaw (`phi`) and pitch (`theta`) in radians.
///
/// Yaw is unbounded; quaternion construction is periodic so it never needs
/// wrapping. Pitch is kept inside the configured clamp range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct YawPitchState {
    /// Rotation about the world up axis.
    pub phi: f32,
    /// Rotation about the camera's local right axis.
    pub theta: f32,
}

impl YawPitchState {
    /// Yaw-only rotation about world `+Y`.
    #[must_use]
    pub fn yaw_quat(&self) -> Quat {
        Quat::from_rotation_y(self.phi)
    }

    /// Pitch-only rotation about `+X`.
    #[must_use]
    pub fn pitch_quat(&self) -> Quat {
        Quat::from_rotation_x(self.theta)
    }

    /// Compose yaw and pitch in the given order into a unit orientation.
    #[must_use]
    pub fn orientation(&self, order: CompositionOrder) -> Quat {
        let q = match order {
            CompositionOrder::YawThenPitch => {
                self.yaw_quat() * self.pitch_quat()
            }
            CompositionOrder::PitchThenYaw => {
                self.pitch_quat() * self.yaw_quat()
            }
        };
        q.normalize()
    }
}

/// First-person camera: pointer look plus WASD-style walking.
#[derive(Debug, Clone)]
pub struct FirstPersonNavigator {
    config: NavigatorConfig,
    angles: YawPitchState,
    position: Vec3,
    pose: CameraPose,
}

impl FirstPersonNavigator {
    /// Create a navigator at the origin, looking down `-Z`.
    ///
    /// # Errors
    ///
    /// Fails fast with the error from [`NavigatorConfig::validate`].
    pub fn new(config: NavigatorConfig) -> Result<Self, NavError> {
        config.validate()?;
        Ok(Self {
            config,
            angles: YawPitchState::default(),
            position: Vec3::ZERO,
            pose: CameraPose::default(),
        })
    }

    /// Start from `position` instead of the origin.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.teleport(position);
        self
    }

    /// Advance one integration step of `dt` seconds.
    ///
    /// Reads the pointer delta and movement keys from `input`, integrates
    /// orientation and position, then ends the input frame so deltas do not
    /// leak into the next step.
    ///
    /// # Errors
    ///
    /// [`NavError::InvalidTimestep`] for `dt <= 0` or non-finite `dt`. The
    /// step is skipped: neither the navigator nor `input` is mutated.
    pub fn update(
        &mut self,
        dt: f32,
        input: &mut InputAggregator,
    ) -> Result<CameraPose, NavError> {
        if dt.is_nan() || dt <= 0.0 || dt.is_infinite() {
            log::warn!("skipping navigator update with dt = {dt}");
            return Err(NavError::InvalidTimestep(dt));
        }

        self.rotation_step(input.pointer_delta());
        self.translation_step(dt, input);
        self.refresh_pose();

        let _ = input.end_frame();
        Ok(self.pose)
    }

    /// Turn a pointer delta (pixels) into yaw/pitch changes.
    fn rotation_step(&mut self, delta: Vec2) {
        let cfg = &self.config;
        let normalized = delta / cfg.viewport;
        self.angles.phi +=
            cfg.convention.yaw_sign() * normalized.x * cfg.yaw_sensitivity;
        let theta = self.angles.theta
            + cfg.convention.pitch_sign() * normalized.y * cfg.pitch_sensitivity;
        self.angles.theta = theta.clamp(cfg.pitch_min, cfg.pitch_max);
    }

    /// Walk along the yaw-only basis so looking up or down never climbs.
    fn translation_step(&mut self, dt: f32, input: &InputAggregator) {
        let (forward_velocity, strafe_velocity) =
            self.config.keys.velocities(input);
        if forward_velocity == 0.0 && strafe_velocity == 0.0 {
            return;
        }

        let yaw = self.angles.yaw_quat();
        let step = dt * self.config.move_speed;
        let forward = yaw * Vec3::NEG_Z * (forward_velocity * step);
        let left = yaw * Vec3::NEG_X * (strafe_velocity * step);
        self.position += forward + left;
    }

    fn refresh_pose(&mut self) {
        self.pose = CameraPose {
            orientation: self.angles.orientation(self.config.convention.order),
            position: self.position,
        };
    }

    /// Write the current pose into an external camera.
    pub fn apply_to(&self, target: &mut impl PoseTarget) {
        target.set_pose(&self.pose);
    }

    /// Move the camera without integrating.
    pub fn teleport(&mut self, position: Vec3) {
        self.position = position;
        self.refresh_pose();
    }

    /// Set yaw and pitch directly; pitch is clamped.
    pub fn look(&mut self, phi: f32, theta: f32) {
        self.angles.phi = phi;
        self.angles.theta =
            theta.clamp(self.config.pitch_min, self.config.pitch_max);
        self.refresh_pose();
    }

    /// Update the pointer normalization divisor after a resize.
    ///
    /// # Errors
    ///
    /// [`NavError::InvalidViewport`] for non-positive dimensions; the old
    /// viewport is kept.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> Result<(), NavError> {
        let viewport = Vec2::new(width, height);
        validate_viewport(viewport)?;
        log::debug!("navigator viewport {width}x{height}");
        self.config.viewport = viewport;
        Ok(())
    }

    /// Most recently published pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Current yaw/pitch.
    #[must_use]
    pub fn yaw_pitch(&self) -> YawPitchState {
        self.angles
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPS: f32 = 1e-5;

    fn navigator() -> FirstPersonNavigator {
        FirstPersonNavigator::new(NavigatorConfig {
            viewport: Vec2::new(800.0, 600.0),
            ..NavigatorConfig::default()
        })
        .unwrap()
    }

    fn seeded_input() -> InputAggregator {
        let mut input = InputAggregator::new();
        input.on_pointer_position(400.0, 300.0);
        input
    }

    #[test]
    fn degenerate_clamp_range_fails_fast() {
        let config = NavigatorConfig {
            pitch_min: 0.5,
            pitch_max: 0.5,
            ..NavigatorConfig::default()
        };
        assert!(matches!(
            FirstPersonNavigator::new(config),
            Err(NavError::DegenerateClampRange { .. })
        ));
    }

    #[test]
    fn pitch_bounds_past_vertical_are_rejected() {
        for (pitch_min, pitch_max) in
            [(-3.0, 3.0), (-FRAC_PI_2 - 0.01, 0.5), (f32::NAN, 0.5)]
        {
            let config = NavigatorConfig {
                pitch_min,
                pitch_max,
                ..NavigatorConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(NavError::DegenerateClampRange { .. })
            ));
        }

        let config = NavigatorConfig {
            pitch_min: -FRAC_PI_2,
            pitch_max: FRAC_PI_2,
            ..NavigatorConfig::default()
        };
        let mut nav = FirstPersonNavigator::new(config).unwrap();
        nav.look(0.0, 2.5);
        assert!(nav.pose().up().y >= -EPS);
    }

    #[test]
    fn non_finite_sensitivity_is_rejected() {
        for value in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let yaw = NavigatorConfig {
                yaw_sensitivity: value,
                ..NavigatorConfig::default()
            };
            assert!(matches!(
                yaw.validate(),
                Err(NavError::InvalidSensitivity(_))
            ));

            let pitch = NavigatorConfig {
                pitch_sensitivity: value,
                ..NavigatorConfig::default()
            };
            assert!(matches!(
                pitch.validate(),
                Err(NavError::InvalidSensitivity(_))
            ));
        }
    }

    #[test]
    fn invalid_viewport_and_speed_are_rejected() {
        let config = NavigatorConfig {
            viewport: Vec2::new(0.0, 600.0),
            ..NavigatorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(NavError::InvalidViewport { .. })
        ));

        let config = NavigatorConfig {
            move_speed: -1.0,
            ..NavigatorConfig::default()
        };
        assert!(matches!(config.validate(), Err(NavError::InvalidSpeed(_))));
    }

    #[test]
    fn non_positive_dt_is_rejected_without_mutation() {
        let mut nav = navigator();
        let mut input = seeded_input();
        input.on_pointer_position(500.0, 300.0);
        input.on_key_change("KeyW", true);

        for dt in [0.0, -0.016, f32::NAN] {
            assert!(matches!(
                nav.update(dt, &mut input),
                Err(NavError::InvalidTimestep(_))
            ));
        }
        assert_eq!(nav.yaw_pitch(), YawPitchState::default());
        assert_eq!(nav.position(), Vec3::ZERO);
        // Delta was not consumed.
        assert_eq!(input.pointer_delta(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn forward_key_walks_down_negative_z() {
        let mut nav = navigator();
        let mut input = InputAggregator::new();
        input.on_key_change("KeyW", true);

        let pose = nav.update(0.1, &mut input).unwrap();
        assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPS));
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut nav = navigator();
        let mut input = InputAggregator::new();
        for key in ["KeyW", "KeyS", "KeyA", "KeyD"] {
            input.on_key_change(key, true);
        }
        let _ = nav.update(0.1, &mut input).unwrap();
        assert_eq!(nav.position(), Vec3::ZERO);
    }

    #[test]
    fn strafe_left_moves_along_negative_x() {
        let mut nav = navigator();
        let mut input = InputAggregator::new();
        input.on_key_change("KeyA", true);
        let _ = nav.update(0.5, &mut input).unwrap();
        assert!(nav.position().abs_diff_eq(Vec3::new(-5.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn translation_ignores_pitch() {
        let mut nav = navigator();
        nav.look(FRAC_PI_2, 0.9);
        let mut input = InputAggregator::new();
        input.on_key_change("KeyW", true);
        let _ = nav.update(0.1, &mut input).unwrap();
        // Yaw of +90° turns forward to -X; pitch adds no vertical motion.
        assert!(nav.position().abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn released_key_stops_motion() {
        let mut nav = navigator();
        let mut input = InputAggregator::new();
        input.on_key_change("KeyW", true);
        let _ = nav.update(0.1, &mut input).unwrap();
        input.on_key_change("KeyW", false);
        assert!(!input.query("KeyW"));
        let before = nav.position();
        let _ = nav.update(0.1, &mut input).unwrap();
        assert_eq!(nav.position(), before);
    }

    #[test]
    fn pointer_right_turns_view_right() {
        let mut nav = navigator();
        let mut input = seeded_input();
        input.on_pointer_position(440.0, 300.0);
        let pose = nav.update(0.016, &mut input).unwrap();
        assert!(nav.yaw_pitch().phi < 0.0);
        assert!(pose.forward().x > 0.0);
    }

    #[test]
    fn pointer_down_tilts_view_down() {
        let mut nav = navigator();
        let mut input = seeded_input();
        input.on_pointer_position(400.0, 330.0);
        let pose = nav.update(0.016, &mut input).unwrap();
        assert!(nav.yaw_pitch().theta < 0.0);
        assert!(pose.forward().y < 0.0);
    }

    #[test]
    fn large_pitch_delta_saturates_at_the_bound() {
        let mut nav = navigator();
        let limit = PI / 3.0;

        let mut input = seeded_input();
        input.on_pointer_position(400.0, -1.0e6);
        let _ = nav.update(0.016, &mut input).unwrap();
        assert!((nav.yaw_pitch().theta - limit).abs() < EPS);

        input.on_pointer_position(400.0, 1.0e7);
        let _ = nav.update(0.016, &mut input).unwrap();
        assert!((nav.yaw_pitch().theta + limit).abs() < EPS);
    }

    #[test]
    fn orientation_stays_unit_norm() {
        let mut nav = navigator();
        let mut input = seeded_input();
        let mut x = 400.0;
        let mut y = 300.0;
        for i in 0..500 {
            x += ((i * 37) % 91) as f32 - 45.0;
            y += ((i * 53) % 67) as f32 - 33.0;
            input.on_pointer_position(x, y);
            input.on_key_change("KeyW", i % 3 == 0);
            input.on_key_change("KeyA", i % 5 == 0);
            let pose = nav.update(0.016, &mut input).unwrap();
            assert!((pose.orientation.length() - 1.0).abs() < 1e-4);
            let theta = nav.yaw_pitch().theta;
            assert!((-PI / 3.0..=PI / 3.0).contains(&theta));
        }
    }

    #[test]
    fn idle_updates_are_idempotent() {
        let mut nav = navigator();
        let mut input = seeded_input();
        input.on_pointer_position(460.0, 280.0);

        let first = nav.update(0.016, &mut input).unwrap();
        let angles = nav.yaw_pitch();
        for _ in 0..10 {
            let pose = nav.update(0.016, &mut input).unwrap();
            assert_eq!(pose, first);
            assert_eq!(nav.yaw_pitch(), angles);
        }
    }

    #[test]
    fn pitch_then_yaw_order_is_configurable() {
        let config = NavigatorConfig {
            convention: RotationConvention {
                order: CompositionOrder::PitchThenYaw,
                ..RotationConvention::default()
            },
            ..NavigatorConfig::default()
        };
        let mut nav = FirstPersonNavigator::new(config).unwrap();
        nav.look(FRAC_PI_2, 0.5);
        let expected =
            Quat::from_rotation_x(0.5) * Quat::from_rotation_y(FRAC_PI_2);
        assert!(nav.pose().orientation.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn inverted_yaw_flips_turn_direction() {
        let config = NavigatorConfig {
            viewport: Vec2::new(800.0, 600.0),
            convention: RotationConvention {
                invert_yaw: true,
                ..RotationConvention::default()
            },
            ..NavigatorConfig::default()
        };
        let mut nav = FirstPersonNavigator::new(config).unwrap();
        let mut input = seeded_input();
        input.on_pointer_position(480.0, 300.0);
        let _ = nav.update(0.016, &mut input).unwrap();
        assert!((nav.yaw_pitch().phi - 0.5).abs() < EPS);
    }

    #[test]
    fn viewport_normalizes_pointer_delta() {
        let mut nav = navigator();
        let mut input = seeded_input();
        // A full viewport width of travel yields `yaw_sensitivity` radians.
        input.on_pointer_position(1200.0, 300.0);
        let _ = nav.update(0.016, &mut input).unwrap();
        assert!((nav.yaw_pitch().phi + 5.0).abs() < EPS);

        assert!(nav.set_viewport(0.0, 10.0).is_err());
        assert_eq!(nav.config().viewport, Vec2::new(800.0, 600.0));
        nav.set_viewport(1600.0, 1200.0).unwrap();
        input.on_pointer_position(2000.0, 300.0);
        let _ = nav.update(0.016, &mut input).unwrap();
        assert!((nav.yaw_pitch().phi + 7.5).abs() < EPS);
    }

    #[test]
    fn apply_to_publishes_pose() {
        let mut nav = navigator().with_position(Vec3::new(10.0, 2.0, 10.0));
        let mut input = InputAggregator::new();
        let _ = nav.update(0.016, &mut input).unwrap();

        let mut published = CameraPose::default();
        nav.apply_to(&mut published);
        assert_eq!(published.position, Vec3::new(10.0, 2.0, 10.0));
        assert_eq!(published, nav.pose());
    }
}
