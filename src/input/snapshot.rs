use glam::Vec2;
use rustc_hash::FxHashMap;

/// Input state at one sampled instant.
///
/// The pointer position accumulates without bound and is never reset on
/// frame boundaries. `pointer_delta` is derived by the aggregator and is
/// only meaningful on snapshots it hands out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Cumulative pointer position.
    pub pointer: Vec2,
    /// Displacement since the previous snapshot.
    pub pointer_delta: Vec2,
    /// Primary button latch.
    pub left_button_down: bool,
    /// Secondary button latch.
    pub right_button_down: bool,
    /// Key string → pressed latch. Keys never observed are absent.
    pub key_down: FxHashMap<String, bool>,
}

impl InputSnapshot {
    /// Pressed state of `key`, `false` if never observed.
    #[must_use]
    pub fn key(&self, key: &str) -> bool {
        self.key_down.get(key).copied().unwrap_or(false)
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn held_key_count(&self) -> usize {
        self.key_down.values().filter(|down| **down).count()
    }
}
