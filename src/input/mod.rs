//! Input handling: event types, the per-frame aggregator, and cross-thread
//! delivery.

/// Frame-to-frame aggregation of pointer, button and key state.
pub mod aggregator;
/// Platform-agnostic input events.
pub mod event;
/// Bindable movement actions.
pub mod keyboard;
/// Cross-thread event queue.
pub mod mailbox;
/// Fixed-schema input state snapshot.
pub mod snapshot;

pub use aggregator::InputAggregator;
#[cfg(feature = "viewer")]
pub use event::key_code_name;
pub use event::{InputEvent, MouseButton, PointerCapture};
pub use keyboard::MoveAction;
pub use mailbox::{InputInbox, InputMailbox};
pub use snapshot::InputSnapshot;
