//! Keyboard and pointer input tracking
//!
//! Hosts forward raw key codes; the tracker remembers what is held and turns
//! fresh presses into `Action`s. Key-repeat never produces a second action.

use std::collections::HashSet;

use crate::sim::{Action, TickInput};

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Jump,
    Duck,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` style identifier
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Space" | "ArrowUp" => Some(Key::Jump),
            "ArrowDown" => Some(Key::Duck),
            _ => None,
        }
    }
}

/// Set of currently held keys
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: HashSet<Key>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns an action only on the transition from
    /// released to held.
    pub fn key_down(&mut self, key: Key) -> Option<Action> {
        if !self.held.insert(key) {
            return None;
        }
        Some(match key {
            Key::Jump => Action::Activate,
            Key::Duck => Action::Duck,
        })
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Click or touch start always activates
    pub fn pointer_start(&mut self) -> Action {
        Action::Activate
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Level-triggered input for the next tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            duck_held: self.is_held(Key::Duck),
        }
    }

    /// Forget everything held, e.g. when the page loses focus
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
