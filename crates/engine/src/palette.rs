//! Colors used by the frame renderer.

use crate::types::{Rgb, Rgba};

pub const CEILING: Rgb = Rgb::new(30, 30, 50);
pub const FLOOR: Rgb = Rgb::new(50, 50, 50);

/// Faces running north-south.
pub const WALL_LIGHT: Rgb = Rgb::new(150, 150, 150);
/// Faces running east-west.
pub const WALL_DARK: Rgb = Rgb::new(100, 100, 100);

pub const ENEMY_BODY: Rgb = Rgb::new(190, 40, 40);
pub const ENEMY_EYES: Rgb = Rgb::new(255, 230, 90);

pub const GUN_BODY: Rgb = Rgb::new(50, 50, 60);
pub const GUN_BARREL: Rgb = Rgb::new(75, 75, 85);
pub const GUN_SIGHT: Rgb = Rgb::new(130, 130, 140);
pub const CROSSHAIR: Rgba = Rgba::new(255, 255, 255, 160);

/// Muzzle flash rings, outermost first.
pub const FLASH_RINGS: [Rgb; 3] = [
    Rgb::new(255, 120, 0),
    Rgb::new(255, 200, 60),
    Rgb::new(255, 255, 210),
];

pub const MINIMAP_WALL: Rgb = Rgb::new(200, 200, 200);
pub const MINIMAP_EMPTY: Rgb = Rgb::new(50, 50, 50);
pub const MINIMAP_PLAYER: Rgb = Rgb::new(255, 0, 0);
pub const MINIMAP_ENEMY: Rgb = Rgb::new(255, 170, 0);
pub const MINIMAP_SIGHT: Rgba = Rgba::new(255, 255, 0, 110);

pub const HUD_TEXT: Rgba = Rgba::new(255, 255, 255, 200);
