//! Top-down minimap in the top-left corner.
//!
//! Every position drawn here goes through [`Minimap::point`], so the cells,
//! the player marker and the enemy markers always agree.

use tui_raycaster_core::{GameState, Vec2};

use crate::palette;
use crate::surface::Surface;
use crate::types::{MINIMAP_OFFSET, MINIMAP_TILE_PX};

/// Radius of the player and enemy dots, in pixels.
const DOT_RADIUS: i32 = 1;
/// Length of the heading tick, in pixels.
const HEADING_LEN: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimap {
    /// Pixels per map cell
    pub tile_px: i32,
    /// Distance from the top-left corner of the screen
    pub offset: i32,
}

impl Minimap {
    pub fn new(tile_px: i32, offset: i32) -> Self {
        Self {
            tile_px: tile_px.max(1),
            offset,
        }
    }

    /// World coordinates to screen pixels.
    pub fn point(&self, pos: Vec2) -> (i32, i32) {
        let scale = self.tile_px as f32;
        (
            self.offset + (pos.x * scale).floor() as i32,
            self.offset + (pos.y * scale).floor() as i32,
        )
    }

    /// Pixel extent of the whole map.
    pub fn size(&self, state: &GameState) -> (i32, i32) {
        (
            state.map().width() as i32 * self.tile_px,
            state.map().height() as i32 * self.tile_px,
        )
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, state: &GameState) {
        // One-pixel gap between cells.
        let cell = (self.tile_px - 1).max(1);
        for (col, row, tile) in state.map().cells() {
            let color = if tile.is_wall() {
                palette::MINIMAP_WALL
            } else {
                palette::MINIMAP_EMPTY
            };
            surface.fill_rect(
                self.offset + col * self.tile_px,
                self.offset + row * self.tile_px,
                cell,
                cell,
                color.into(),
            );
        }

        let pos = state.player_pos();
        let (px, py) = self.point(pos);

        // Sight line: stops at the wall, or at an enemy standing in front of it.
        let ray = state.cast_from_player(state.heading());
        let reach = ray.enemy_in_front().map_or(ray.distance, |e| e.distance);
        let (sx, sy) = self.point(pos + state.player().facing() * reach);
        surface.line(px, py, sx, sy, palette::MINIMAP_SIGHT);

        surface.fill_circle(px, py, DOT_RADIUS, palette::MINIMAP_PLAYER.into());
        let tip = state.player().facing() * HEADING_LEN;
        let (hx, hy) = (px + tip.x as i32, py + tip.y as i32);
        surface.line(px, py, hx, hy, palette::MINIMAP_PLAYER.into());

        for (_, actor) in state.actors().alive() {
            let (ex, ey) = self.point(actor.pos);
            surface.fill_circle(ex, ey, DOT_RADIUS, palette::MINIMAP_ENEMY.into());
        }
    }
}

impl Default for Minimap {
    fn default() -> Self {
        Self::new(MINIMAP_TILE_PX, MINIMAP_OFFSET)
    }
}
