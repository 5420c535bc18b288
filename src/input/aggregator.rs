//! Frame-to-frame input aggregation.
//!
//! The aggregator owns one `current` snapshot mutated in place by incoming
//! events, and a `previous` copy taken once per integration step in
//! [`InputAggregator::end_frame`]. Pointer deltas are always derived as
//! `current - previous` at the instant they are read.

use glam::Vec2;
use rustc_hash::FxHashMap;

use super::event::{InputEvent, MouseButton, PointerCapture};
use super::snapshot::InputSnapshot;

/// Authoritative record of what input has happened since the last frame.
///
/// All operations are total. Input callbacks and [`end_frame`] are expected
/// to run on the same update loop; use an
/// [`InputMailbox`](super::InputMailbox) when the host delivers input from
/// another thread.
///
/// [`end_frame`]: InputAggregator::end_frame
#[derive(Debug, Clone, Default)]
pub struct InputAggregator {
    current: InputSnapshot,
    /// Pointer baseline. `None` until the first pointer sample seeds it.
    previous: Option<InputSnapshot>,
    /// Key latches as of the last `end_frame`, for edge detection.
    previous_keys: FxHashMap<String, bool>,
    capture: PointerCapture,
}

impl InputAggregator {
    /// Create an aggregator with no observed input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a platform-agnostic event to the matching handler.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.on_pointer_position(*x, *y);
            }
            InputEvent::PointerDelta { dx, dy } => {
                self.on_pointer_move(*dx, *dy);
            }
            InputEvent::MouseButton { button, pressed } => {
                self.on_button_change(*button, *pressed);
            }
            InputEvent::Key { code, pressed } => {
                self.on_key_change(code, *pressed);
            }
            InputEvent::FocusLost => self.release_all(),
        }
    }

    /// Accumulate relative pointer motion.
    pub fn on_pointer_move(&mut self, dx: f32, dy: f32) {
        self.current.pointer += Vec2::new(dx, dy);
        self.seed_previous();
    }

    /// Record an absolute pointer sample.
    pub fn on_pointer_position(&mut self, x: f32, y: f32) {
        self.current.pointer = Vec2::new(x, y);
        self.seed_previous();
    }

    /// The first pointer sample becomes its own baseline, so a session never
    /// starts with a large spurious delta.
    fn seed_previous(&mut self) {
        if self.previous.is_none() {
            self.previous = Some(self.current.clone());
        }
    }

    /// Update a mouse button latch. Only left and right are tracked.
    pub fn on_button_change(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.current.left_button_down = pressed,
            MouseButton::Right => self.current.right_button_down = pressed,
            MouseButton::Middle | MouseButton::Other => {}
        }
    }

    /// Update a key latch. Release clears the flag.
    pub fn on_key_change(&mut self, key: &str, pressed: bool) {
        if let Some(latch) = self.current.key_down.get_mut(key) {
            *latch = pressed;
        } else {
            let _ = self.current.key_down.insert(key.to_owned(), pressed);
        }
    }

    /// Current pressed state of `key`, `false` if never observed.
    #[must_use]
    pub fn query(&self, key: &str) -> bool {
        self.current.key(key)
    }

    /// `true` if `key` went down since the last [`end_frame`](Self::end_frame).
    #[must_use]
    pub fn key_just_pressed(&self, key: &str) -> bool {
        self.query(key) && !self.previous_key(key)
    }

    /// `true` if `key` went up since the last [`end_frame`](Self::end_frame).
    #[must_use]
    pub fn key_just_released(&self, key: &str) -> bool {
        !self.query(key) && self.previous_key(key)
    }

    fn previous_key(&self, key: &str) -> bool {
        self.previous_keys.get(key).copied().unwrap_or(false)
    }

    /// Primary button latch.
    #[must_use]
    pub fn left_button_down(&self) -> bool {
        self.current.left_button_down
    }

    /// Secondary button latch.
    #[must_use]
    pub fn right_button_down(&self) -> bool {
        self.current.right_button_down
    }

    /// Release every key and button latch (window focus lost).
    pub fn release_all(&mut self) {
        let held = self.current.held_key_count();
        for latch in self.current.key_down.values_mut() {
            *latch = false;
        }
        self.current.left_button_down = false;
        self.current.right_button_down = false;
        log::debug!("input latches released ({held} keys were held)");
    }

    /// Pointer displacement since the last frame; zero before the first
    /// pointer sample.
    #[must_use]
    pub fn pointer_delta(&self) -> Vec2 {
        self.previous
            .as_ref()
            .map_or(Vec2::ZERO, |prev| self.current.pointer - prev.pointer)
    }

    /// Value copy of the current state with the derived delta filled in.
    #[must_use]
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            pointer_delta: self.pointer_delta(),
            ..self.current.clone()
        }
    }

    /// Close the frame: record the frame's delta and make the current state
    /// the new baseline. Returns the delta that was consumed.
    ///
    /// Must run exactly once per integration step, after every consumer of
    /// that step has read its deltas.
    pub fn end_frame(&mut self) -> Vec2 {
        let delta = self.pointer_delta();
        self.current.pointer_delta = delta;
        if self.previous.is_some() {
            self.previous = Some(self.current.clone());
        }
        self.previous_keys.clone_from(&self.current.key_down);
        delta
    }

    /// Current pointer capture mode.
    #[must_use]
    pub fn pointer_capture(&self) -> PointerCapture {
        self.capture
    }

    /// Switch pointer capture mode.
    ///
    /// Absolute and relative samples live in different coordinate spaces, so
    /// a mode change drops the baseline and the next sample re-seeds it.
    pub fn set_pointer_capture(&mut self, capture: PointerCapture) {
        if capture != self.capture {
            log::debug!("pointer capture {:?} -> {capture:?}", self.capture);
            self.capture = capture;
            self.previous = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_delta_is_zero_regardless_of_first_sample() {
        let mut input = InputAggregator::new();
        assert_eq!(input.pointer_delta(), Vec2::ZERO);

        input.on_pointer_position(812.0, -417.0);
        assert_eq!(input.pointer_delta(), Vec2::ZERO);
        assert_eq!(input.end_frame(), Vec2::ZERO);
    }

    #[test]
    fn relative_first_sample_also_seeds() {
        let mut input = InputAggregator::new();
        input.on_pointer_move(40.0, 12.0);
        assert_eq!(input.pointer_delta(), Vec2::ZERO);

        input.on_pointer_move(3.0, -2.0);
        assert_eq!(input.pointer_delta(), Vec2::new(3.0, -2.0));
    }

    #[test]
    fn zero_net_motion_gives_zero_delta() {
        let mut input = InputAggregator::new();
        input.on_pointer_position(100.0, 100.0);
        let _ = input.end_frame();

        input.on_pointer_move(15.0, -7.0);
        input.on_pointer_move(-20.0, 3.0);
        input.on_pointer_move(5.0, 4.0);
        assert_eq!(input.pointer_delta(), Vec2::ZERO);
        assert_eq!(input.end_frame(), Vec2::ZERO);
    }

    #[test]
    fn end_frame_resets_baseline() {
        let mut input = InputAggregator::new();
        input.on_pointer_position(0.0, 0.0);
        input.on_pointer_position(10.0, 5.0);
        assert_eq!(input.end_frame(), Vec2::new(10.0, 5.0));
        assert_eq!(input.pointer_delta(), Vec2::ZERO);
        assert_eq!(input.snapshot().pointer, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn end_frame_before_any_pointer_sample_keeps_seeding() {
        let mut input = InputAggregator::new();
        let _ = input.end_frame();
        input.on_pointer_position(640.0, 360.0);
        assert_eq!(input.pointer_delta(), Vec2::ZERO);
    }

    #[test]
    fn key_release_is_observable() {
        let mut input = InputAggregator::new();
        assert!(!input.query("KeyW"));

        input.on_key_change("KeyW", true);
        assert!(input.query("KeyW"));

        input.on_key_change("KeyW", false);
        assert!(!input.query("KeyW"));
    }

    #[test]
    fn key_edges_are_relative_to_last_frame() {
        let mut input = InputAggregator::new();
        input.on_key_change("Space", true);
        assert!(input.key_just_pressed("Space"));
        let _ = input.end_frame();
        assert!(!input.key_just_pressed("Space"));

        input.on_key_change("Space", false);
        assert!(input.key_just_released("Space"));
        let _ = input.end_frame();
        assert!(!input.key_just_released("Space"));
    }

    #[test]
    fn buttons_latch_and_release() {
        let mut input = InputAggregator::new();
        input.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert!(input.right_button_down());
        assert!(!input.left_button_down());

        input.on_button_change(MouseButton::Right, false);
        assert!(!input.right_button_down());

        input.on_button_change(MouseButton::Middle, true);
        input.on_button_change(MouseButton::Other, true);
        assert!(!input.left_button_down());
        assert!(!input.right_button_down());
    }

    #[test]
    fn focus_lost_releases_everything() {
        let mut input = InputAggregator::new();
        input.on_key_change("KeyA", true);
        input.on_key_change("KeyD", true);
        input.on_button_change(MouseButton::Left, true);

        input.handle_event(&InputEvent::FocusLost);
        assert!(!input.query("KeyA"));
        assert!(!input.query("KeyD"));
        assert!(!input.left_button_down());
        assert_eq!(input.snapshot().held_key_count(), 0);
    }

    #[test]
    fn capture_toggle_does_not_produce_a_jump() {
        let mut input = InputAggregator::new();
        input.on_pointer_position(900.0, 500.0);
        let _ = input.end_frame();

        input.set_pointer_capture(PointerCapture::Locked);
        input.on_pointer_move(4.0, 0.0);
        assert_eq!(input.pointer_delta(), Vec2::ZERO);

        input.on_pointer_move(2.0, 1.0);
        assert_eq!(input.pointer_delta(), Vec2::new(2.0, 1.0));
        assert_eq!(input.pointer_capture(), PointerCapture::Locked);
    }

    #[test]
    fn snapshot_reports_live_delta() {
        let mut input = InputAggregator::new();
        input.on_pointer_position(1.0, 1.0);
        input.on_pointer_position(4.0, -1.0);
        let snap = input.snapshot();
        assert_eq!(snap.pointer_delta, Vec2::new(3.0, -2.0));
    }
}
