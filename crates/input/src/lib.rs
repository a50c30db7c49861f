//! Terminal input module (engine-facing).
//!
//! This module is independent of any drawing code. It maps `crossterm` key
//! events onto [`crate::types::Button`]s and folds them into the held/pressed
//! [`crate::types::InputSnapshot`] the simulation consumes each frame
//! (including terminals without key-release events).

pub mod map;
pub mod tracker;

pub use tui_raycaster_types as types;

pub use map::{handle_key_event, map_key, should_quit};
pub use tracker::InputTracker;
