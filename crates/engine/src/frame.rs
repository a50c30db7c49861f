//! FrameRenderer: maps a `GameState` onto a [`Surface`].
//!
//! Rendering happens in two passes:
//!
//! 1. **Plan** – one ray per screen column, fisheye-corrected, turned into a
//!    wall strip and (when an enemy stands in front of the wall) a sprite strip.
//!    The plan lives in a buffer owned by the renderer, so steady-state frames
//!    do not allocate.
//! 2. **Draw** – background, every wall strip, then every deferred sprite strip,
//!    then the weapon overlay, minimap and HUD. Sprites are drawn after all
//!    walls so they cover the wall behind them; columns where the wall is nearer
//!    never get a sprite at all.

use tui_raycaster_core::{GameState, RayResult, Vec2};

use crate::minimap::Minimap;
use crate::overlay;
use crate::palette;
use crate::surface::Surface;
use crate::types::{
    Rgb, FOV_DEGREES, MAX_DEPTH, MIN_BRIGHTNESS, NUM_RAYS, SCREEN_HEIGHT, SCREEN_WIDTH, WALL_SCALE,
};

/// Enemy sprite height relative to a wall at the same distance.
const SPRITE_SCALE: f32 = 0.7;

/// Output resolution and ray count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: u16,
    pub height: u16,
    /// Rays cast per frame (one per strip)
    pub columns: u16,
}

impl Screen {
    pub fn new(width: u16, height: u16, columns: u16) -> Self {
        Self {
            width,
            height,
            columns: columns.clamp(1, width.max(1)),
        }
    }

    /// 160x120 with 80 two-pixel strips.
    pub fn badge() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT, NUM_RAYS)
    }

    /// Two pixels per strip at an arbitrary resolution.
    pub fn fit(width: u16, height: u16) -> Self {
        Self::new(width, height, (width / 2).max(1))
    }

    /// Left edge of strip `i`; strips tile the full width exactly.
    pub fn column_x(&self, i: u16) -> i32 {
        (i as i32 * self.width as i32) / self.columns as i32
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::badge()
    }
}

/// Vertical span of a wall slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallStrip {
    pub top: i32,
    pub height: i32,
    pub color: Rgb,
    /// Fisheye-corrected distance
    pub distance: f32,
}

/// Vertical span of an enemy slice drawn over the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteStrip {
    pub index: usize,
    pub top: i32,
    pub height: i32,
    pub color: Rgb,
    /// Fisheye-corrected distance
    pub distance: f32,
}

/// Everything drawn for one screen column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnPlan {
    pub x: i32,
    pub width: i32,
    pub angle: f32,
    pub ray: RayResult,
    pub wall: WallStrip,
    pub sprite: Option<SpriteStrip>,
}

/// Per-frame renderer with a reusable column buffer.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    screen: Screen,
    fov: f32,
    wall_scale: f32,
    minimap: Minimap,
    plan: Vec<ColumnPlan>,
}

impl FrameRenderer {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            fov: FOV_DEGREES.to_radians(),
            wall_scale: WALL_SCALE,
            minimap: Minimap::default(),
            plan: Vec::with_capacity(screen.columns as usize),
        }
    }

    pub fn with_fov_degrees(mut self, degrees: f32) -> Self {
        self.fov = degrees.to_radians();
        self
    }

    pub fn with_minimap(mut self, minimap: Minimap) -> Self {
        self.minimap = minimap;
        self
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn minimap(&self) -> &Minimap {
        &self.minimap
    }

    /// Change output resolution. Only reallocates when the column count grows.
    pub fn resize(&mut self, screen: Screen) {
        self.screen = screen;
        self.plan.clear();
        self.plan.reserve(screen.columns as usize);
    }

    /// Angle of the ray for column `i`; rays span `[heading - fov/2, heading + fov/2)`.
    pub fn ray_angle(&self, heading: f32, i: u16) -> f32 {
        let step = self.fov / self.screen.columns as f32;
        heading - self.fov / 2.0 + i as f32 * step
    }

    /// Cast every column and compute its strips.
    pub fn plan(&mut self, state: &GameState) -> &[ColumnPlan] {
        self.plan.clear();
        let heading = state.heading();

        for i in 0..self.screen.columns {
            let x = self.screen.column_x(i);
            let width = (self.screen.column_x(i + 1) - x).max(1);
            let angle = self.ray_angle(heading, i);
            let ray = state.cast_from_player(angle);
            let fisheye = (angle - heading).cos();

            let wall = self.wall_strip(&ray, fisheye);
            let sprite = ray.enemy_in_front().map(|enemy| {
                let distance = enemy.distance * fisheye;
                let full = self.strip_height(distance);
                let height = (full as f32 * SPRITE_SCALE) as i32;
                // Feet on the floor line of a wall at the same distance.
                let bottom = (self.screen.height as i32 + full) / 2;
                SpriteStrip {
                    index: enemy.index,
                    top: bottom - height,
                    height,
                    color: palette::ENEMY_BODY.scale(self.brightness(distance)),
                    distance,
                }
            });

            self.plan.push(ColumnPlan {
                x,
                width,
                angle,
                ray,
                wall,
                sprite,
            });
        }

        &self.plan
    }

    /// Plan and draw a complete frame.
    pub fn render<S: Surface + ?Sized>(&mut self, state: &GameState, surface: &mut S) {
        self.plan(state);
        let (w, h) = (self.screen.width as i32, self.screen.height as i32);

        surface.fill_rect(0, 0, w, h / 2, palette::CEILING.into());
        surface.fill_rect(0, h / 2, w, h - h / 2, palette::FLOOR.into());

        for col in &self.plan {
            surface.fill_rect(col.x, col.wall.top, col.width, col.wall.height, col.wall.color.into());
        }

        // Deferred until every wall is down.
        for col in &self.plan {
            if let Some(sprite) = col.sprite {
                surface.fill_rect(col.x, sprite.top, col.width, sprite.height, sprite.color.into());
                let eye_y = sprite.top + sprite.height / 5;
                let eye_h = (sprite.height / 10).max(1);
                if is_eye_column(col, state) {
                    surface.fill_rect(col.x, eye_y, col.width, eye_h, palette::ENEMY_EYES.into());
                }
            }
        }

        if state.scene().has_weapon() {
            overlay::draw_weapon(surface, self.screen, state.weapon());
        }
        self.minimap.draw(surface, state);
        overlay::draw_hud(surface, self.screen, state);
    }

    fn wall_strip(&self, ray: &RayResult, fisheye: f32) -> WallStrip {
        let distance = ray.distance * fisheye;
        let height = self.strip_height(distance);
        let base = if ray.vertical {
            palette::WALL_LIGHT
        } else {
            palette::WALL_DARK
        };
        WallStrip {
            top: (self.screen.height as i32 - height) / 2,
            height,
            color: base.scale(self.brightness(distance)),
            distance,
        }
    }

    /// On-screen height of something at corrected `distance`, clamped to the screen.
    fn strip_height(&self, distance: f32) -> i32 {
        let screen_h = self.screen.height as f32;
        if distance <= 0.0 {
            return self.screen.height as i32;
        }
        (screen_h * self.wall_scale / distance).min(screen_h) as i32
    }

    /// Linear fade with distance down to a floor brightness.
    fn brightness(&self, distance: f32) -> f32 {
        (1.0 - (distance / MAX_DEPTH) * 0.7).max(MIN_BRIGHTNESS)
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(Screen::default())
    }
}

/// Eyes sit on the two bands either side of the enemy's centre line.
fn is_eye_column(col: &ColumnPlan, state: &GameState) -> bool {
    let Some(sprite) = col.sprite else {
        return false;
    };
    let Some(actor) = state.actors().get(sprite.index) else {
        return false;
    };
    let to_actor = actor.pos - state.player_pos();
    let dir = Vec2::from_angle(col.angle);
    // Signed lateral offset of the ray from the centre, in units of the radius.
    let lateral = dir.perp_dot(to_actor) / actor.radius;
    (0.25..0.6).contains(&lateral.abs())
}
