//! Cross-thread input delivery.
//!
//! Hosts that dispatch input on a different thread than the tick loop send
//! events through an [`InputMailbox`]; the loop drains them into the
//! aggregator in one batch before integrating, so `end_frame` always runs
//! strictly after the last applied event.

use std::sync::mpsc;

use super::aggregator::InputAggregator;
use super::event::InputEvent;

/// Cloneable sending half of the input queue.
#[derive(Debug, Clone)]
pub struct InputMailbox {
    tx: mpsc::Sender<InputEvent>,
}

/// Receiving half, owned by the tick loop.
#[derive(Debug)]
pub struct InputInbox {
    rx: mpsc::Receiver<InputEvent>,
}

/// Create a connected mailbox/inbox pair.
#[must_use]
pub fn channel() -> (InputMailbox, InputInbox) {
    let (tx, rx) = mpsc::channel();
    (InputMailbox { tx }, InputInbox { rx })
}

impl InputMailbox {
    /// Queue an event (non-blocking). Returns `false` once the inbox is gone.
    pub fn send(&self, event: InputEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

impl InputInbox {
    /// Apply every queued event to `input`, returning how many were applied.
    pub fn drain_into(&self, input: &mut InputAggregator) -> usize {
        let mut applied = 0;
        for event in self.rx.try_iter() {
            input.handle_event(&event);
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_from_another_thread_are_applied_in_order() {
        let (mailbox, inbox) = channel();
        let sender = mailbox.clone();
        let handle = std::thread::spawn(move || {
            let _ = sender.send(InputEvent::Key {
                code: "KeyW".into(),
                pressed: true,
            });
            let _ = sender.send(InputEvent::Key {
                code: "KeyW".into(),
                pressed: false,
            });
            let _ = sender.send(InputEvent::Key {
                code: "KeyS".into(),
                pressed: true,
            });
        });
        handle.join().unwrap();

        let mut input = InputAggregator::new();
        assert_eq!(inbox.drain_into(&mut input), 3);
        assert!(!input.query("KeyW"));
        assert!(input.query("KeyS"));
        assert_eq!(inbox.drain_into(&mut input), 0);
    }

    #[test]
    fn send_reports_closed_inbox() {
        let (mailbox, inbox) = channel();
        drop(inbox);
        assert!(!mailbox.send(InputEvent::FocusLost));
    }
}
