use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::MoveAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Keyboard bindings for the four movement actions.
pub struct MovementKeyOptions {
    /// Maps action → key string (e.g. `Forward` → `"KeyW"`).
    pub bindings: HashMap<MoveAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, MoveAction>,
}

impl Default for MovementKeyOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (MoveAction::Forward, "KeyW".into()),
            (MoveAction::Back, "KeyS".into()),
            (MoveAction::StrafeLeft, "KeyA".into()),
            (MoveAction::StrafeRight, "KeyD".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl MovementKeyOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MoveAction> {
        self.key_to_action.get(key).copied()
    }

    /// Key string bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: MoveAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }

    /// Rebind `action` to `key`.
    pub fn bind(&mut self, action: MoveAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }
}
