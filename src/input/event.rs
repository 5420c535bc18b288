/// Platform-agnostic input events.
///
/// These are fed into an [`InputAggregator`](super::InputAggregator), either
/// directly or through an [`InputMailbox`](super::InputMailbox) when the host
/// delivers input on another thread.
///
/// # Example
///
/// ```
/// use fpnav::input::{InputAggregator, InputEvent};
///
/// let mut input = InputAggregator::new();
/// input.handle_event(&InputEvent::Key {
///     code: "KeyW".into(),
///     pressed: true,
/// });
/// assert!(input.query("KeyW"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to an absolute position (uncaptured pointer).
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Relative pointer motion (captured / locked pointer).
    PointerDelta {
        /// Horizontal displacement in physical pixels.
        dx: f32,
        /// Vertical displacement in physical pixels.
        dy: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Keyboard key pressed or released.
    Key {
        /// Physical key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"Space"`, ...).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Host window lost focus; every latch is released.
    FocusLost,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Back, forward and any other extra button.
    Other,
}

/// Pointer capture mode, toggled by the host.
///
/// The navigation core consumes the same pointer deltas in either mode;
/// capture only decides whether the host sends absolute positions or
/// relative motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerCapture {
    /// Pointer is free; host sends [`InputEvent::PointerMoved`].
    #[default]
    Free,
    /// Pointer is locked; host sends [`InputEvent::PointerDelta`].
    Locked,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back
            | winit::event::MouseButton::Forward
            | winit::event::MouseButton::Other(_) => Self::Other,
        }
    }
}

/// Key string for a winit physical key code, matching the format used by
/// [`MovementKeyOptions`](crate::options::MovementKeyOptions).
#[cfg(feature = "viewer")]
#[must_use]
pub fn key_code_name(code: winit::keyboard::KeyCode) -> String {
    format!("{code:?}")
}
