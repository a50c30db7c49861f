//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the world model and every rule that changes it.
//! It has **zero dependencies** on terminals, input devices or drawing, making it:
//!
//! - **Deterministic**: the same inputs always produce the same frames
//! - **Testable**: each rule is exercised by unit tests next to it
//! - **Portable**: any frame driver can own a [`GameState`]
//! - **Bounded**: a cast takes at most `MAX_DEPTH / RAY_STEP` samples and never allocates
//!
//! # Module Structure
//!
//! - [`map`]: rectangular tile grid, the single bounds check, ASCII parsing
//! - [`level`]: map plus player start and enemy roster
//! - [`raycast`]: ray march against walls, analytic ray-vs-disc test for enemies
//! - [`actors`]: enemy roster with stable indices and idempotent kills
//! - [`player`]: heading/position integration with all-or-nothing collision
//! - [`weapon`]: cooldown and flash timers, hit resolution
//! - [`game_state`]: the aggregate the frame driver owns
//!
//! # Frame Order
//!
//! [`GameState::update`] runs, in order: turn, walk (collision-checked), weapon
//! timers, trigger. Rendering happens afterwards against the updated state.
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{GameState, Level};
//! use tui_raycaster_types::{Button, InputSnapshot, Scene};
//!
//! let mut game = GameState::new(Level::default_level(), Scene::Armed);
//!
//! // The first enemy stands straight ahead of the start position.
//! let ray = game.cast_from_player(game.heading());
//! assert_eq!(ray.enemy_in_front().map(|e| e.index), Some(0));
//!
//! game.update(&InputSnapshot::pressing(&[Button::Fire]));
//! assert_eq!(game.actors().alive_count(), 3);
//! ```

pub mod actors;
pub mod game_state;
pub mod level;
pub mod map;
pub mod player;
pub mod raycast;
pub mod weapon;

pub use glam::Vec2;
pub use tui_raycaster_types as types;

// Re-export commonly used types for convenience
pub use actors::{Actor, ActorRegistry};
pub use game_state::{FrameReport, GameState};
pub use level::{Level, Spawn};
pub use map::{MapError, Tile, WorldMap};
pub use player::{Motion, Player, Step};
pub use raycast::{EnemyHit, RayResult, Raycaster, WallHit};
pub use weapon::{Shot, Weapon, WeaponSpec};
