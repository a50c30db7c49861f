//! Held/pressed button tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a button counts as held until either its release event arrives or no press
//! or repeat event has been seen for it within the timeout.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::map::map_key;
use crate::types::{Button, ButtonSet, InputSnapshot};

// Long enough to bridge the gap between OS key-repeat events, short enough that
// a single tap does not keep the player walking.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Folds key events into per-frame [`InputSnapshot`]s.
#[derive(Debug, Clone)]
pub struct InputTracker {
    held: ButtonSet,
    /// Edges recorded since the last snapshot.
    pressed: ButtonSet,
    last_seen: [Option<Instant>; Button::ALL.len()],
    key_release_timeout_ms: u32,
}

impl InputTracker {
    pub fn new() -> Self {
        Self {
            held: ButtonSet::empty(),
            pressed: ButtonSet::empty(),
            last_seen: [None; Button::ALL.len()],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Record a press or repeat. Returns the button when this was a fresh press.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Button> {
        let button = map_key(code)?;
        self.last_seen[button as usize] = Some(Instant::now());
        if self.held.contains(button) {
            return None;
        }
        self.held.insert(button);
        self.pressed.insert(button);
        Some(button)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(button) = map_key(code) {
            self.held.remove(button);
            self.last_seen[button as usize] = None;
        }
    }

    /// Input for the next frame. Clears the recorded edges.
    pub fn snapshot(&mut self) -> InputSnapshot {
        self.release_stale(Instant::now());
        let snapshot = InputSnapshot::new(self.held, self.pressed);
        self.pressed = ButtonSet::empty();
        snapshot
    }

    pub fn held(&self) -> ButtonSet {
        self.held
    }

    pub fn reset(&mut self) {
        self.held = ButtonSet::empty();
        self.pressed = ButtonSet::empty();
        self.last_seen = [None; Button::ALL.len()];
    }

    /// Auto-release when the terminal does not emit release events.
    fn release_stale(&mut self, now: Instant) {
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        for button in Button::ALL {
            let slot = &mut self.last_seen[button as usize];
            if let Some(seen) = *slot {
                if now.saturating_duration_since(seen) > timeout {
                    *slot = None;
                    self.held.remove(button);
                }
            }
        }
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}
