//! Frame rendering module.
//!
//! Turns a [`core::GameState`] into draw calls against a [`Surface`]. Nothing
//! here touches a terminal or any other device; the surface decides what a
//! rectangle or a line of text becomes.
//!
//! Goals:
//! - One ray per screen column, walls shaded by distance and face orientation
//! - Enemy sprites composited against walls per column
//! - Weapon overlay, minimap and HUD drawn on top in a fixed order

pub mod frame;
pub mod minimap;
pub mod overlay;
pub mod palette;
pub mod surface;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use frame::{ColumnPlan, FrameRenderer, Screen, SpriteStrip, WallStrip};
pub use minimap::Minimap;
pub use overlay::{draw_hud, draw_weapon};
pub use surface::Surface;
