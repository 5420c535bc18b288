//! Owned application context wiring input, navigation and proximity.
//!
//! A [`NavigationSession`] replaces any global app object: the host owns it,
//! forwards input events into it, and calls [`NavigationSession::tick`] once
//! per frame. Within a tick the order is fixed: drain queued input,
//! integrate the navigator, publish the pose, run the proximity check.

use glam::Vec2;

use crate::camera::{CameraPose, FirstPersonNavigator, PoseTarget};
use crate::error::NavError;
use crate::input::{
    mailbox, InputAggregator, InputEvent, InputInbox, InputMailbox,
    PointerCapture,
};
use crate::options::Options;
use crate::proximity::{
    Aabb, ProximityDetector, ProximityEvent, ProximityHit, ProximityMonitor,
};

/// What one tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Pose published this tick.
    pub pose: CameraPose,
    /// Nearest volume on the view ray, if any.
    pub hit: Option<ProximityHit>,
    /// Change in the nearest volume since the previous tick.
    pub event: Option<ProximityEvent>,
}

/// Navigation core for one viewer: aggregator, navigator, detector.
#[derive(Debug)]
pub struct NavigationSession {
    input: InputAggregator,
    navigator: FirstPersonNavigator,
    detector: ProximityDetector,
    monitor: ProximityMonitor,
    mailbox: InputMailbox,
    inbox: InputInbox,
}

impl NavigationSession {
    /// Build a session from options, the host viewport, and the scene's
    /// colliding volumes (registered in the given order).
    ///
    /// # Errors
    ///
    /// Configuration errors from [`Options::navigator_config`] and
    /// [`ProximityOptions::validate`](crate::options::ProximityOptions::validate).
    pub fn new(
        options: &Options,
        viewport: Vec2,
        volumes: impl IntoIterator<Item = (Option<String>, Aabb)>,
    ) -> Result<Self, NavError> {
        let config = options.navigator_config(viewport)?;
        options.proximity.validate()?;
        let navigator = FirstPersonNavigator::new(config)?
            .with_position(options.start_position());

        let mut detector = ProximityDetector::new();
        for (label, bounds) in volumes {
            let _ = match label {
                Some(label) => detector.register_labeled(label, bounds),
                None => detector.register(bounds),
            };
        }

        let (mailbox, inbox) = mailbox::channel();
        log::info!(
            "navigation session ready: {} volumes, viewport {}x{}",
            detector.volumes().len(),
            viewport.x,
            viewport.y
        );

        Ok(Self {
            input: InputAggregator::new(),
            navigator,
            detector,
            monitor: ProximityMonitor::new(options.proximity.clone()),
            mailbox,
            inbox,
        })
    }

    /// Apply an input event on the tick thread.
    pub fn handle_input(&mut self, event: &InputEvent) {
        self.input.handle_event(event);
    }

    /// Sender for hosts that deliver input from another thread. Queued
    /// events are applied at the start of the next tick.
    #[must_use]
    pub fn mailbox(&self) -> InputMailbox {
        self.mailbox.clone()
    }

    /// Host toggled pointer lock.
    pub fn set_pointer_capture(&mut self, capture: PointerCapture) {
        self.input.set_pointer_capture(capture);
    }

    /// Host viewport resized.
    ///
    /// # Errors
    ///
    /// [`NavError::InvalidViewport`] for non-positive dimensions.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), NavError> {
        self.navigator.set_viewport(width, height)
    }

    /// Run one frame and publish the pose into `camera`.
    ///
    /// # Errors
    ///
    /// [`NavError::InvalidTimestep`] for `dt <= 0`: nothing is integrated or
    /// published, though queued mailbox events are still applied. A
    /// malformed probe direction is logged and reported as no hit.
    pub fn tick(
        &mut self,
        dt: f32,
        camera: &mut impl PoseTarget,
    ) -> Result<TickReport, NavError> {
        let _ = self.inbox.drain_into(&mut self.input);

        let pose = self.navigator.update(dt, &mut self.input)?;
        self.navigator.apply_to(camera);

        let observation = self
            .monitor
            .observe(&self.detector, &pose)
            .unwrap_or_default();

        Ok(TickReport {
            pose,
            hit: observation.hit,
            event: observation.event,
        })
    }

    /// Input state.
    #[must_use]
    pub fn input(&self) -> &InputAggregator {
        &self.input
    }

    /// Navigator state.
    #[must_use]
    pub fn navigator(&self) -> &FirstPersonNavigator {
        &self.navigator
    }

    /// Mutable navigator, for teleports and scripted looks.
    pub fn navigator_mut(&mut self) -> &mut FirstPersonNavigator {
        &mut self.navigator
    }

    /// Registered volumes.
    #[must_use]
    pub fn detector(&self) -> &ProximityDetector {
        &self.detector
    }
}
