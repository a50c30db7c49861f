//! Weapon overlay and HUD text.

use std::fmt::Write as _;

use arrayvec::ArrayString;
use tui_raycaster_core::{GameState, Weapon};

use crate::frame::Screen;
use crate::palette;
use crate::surface::Surface;

/// Flash ring radii at the reference height, outermost first.
const FLASH_RADII: [f32; 3] = [10.0, 7.0, 4.0];
/// Directions of the flash rays drawn while the flash is fresh.
const FLASH_RAYS: [(f32, f32); 8] = [
    (1.0, 0.0),
    (0.7, -0.7),
    (0.0, -1.0),
    (-0.7, -0.7),
    (-1.0, 0.0),
    (-0.7, 0.7),
    (0.0, 1.0),
    (0.7, 0.7),
];
const FLASH_RAY_LEN: f32 = 16.0;

/// Shapes are laid out for a 120-pixel-high screen and scaled from there.
fn scale(screen: Screen) -> f32 {
    screen.height as f32 / 120.0
}

fn px(v: f32, k: f32) -> i32 {
    ((v * k).round() as i32).max(1)
}

/// Muzzle position: the tip of the barrel.
pub fn muzzle(screen: Screen) -> (i32, i32) {
    let k = scale(screen);
    let cx = screen.width as i32 / 2;
    let barrel_h = px(14.0, k);
    let body_h = px(18.0, k);
    (cx, screen.height as i32 - body_h - barrel_h)
}

/// Gun, crosshair and (while the flash lasts) the muzzle flash.
pub fn draw_weapon<S: Surface + ?Sized>(surface: &mut S, screen: Screen, weapon: &Weapon) {
    let k = scale(screen);
    let (w, h) = (screen.width as i32, screen.height as i32);
    let cx = w / 2;

    // Body sits on the bottom edge, barrel on top of it.
    let body_w = px(28.0, k);
    let body_h = px(18.0, k);
    surface.fill_rect(cx - body_w / 2, h - body_h, body_w, body_h, palette::GUN_BODY.into());

    let barrel_w = px(8.0, k);
    let barrel_h = px(14.0, k);
    let (mx, my) = muzzle(screen);
    surface.fill_rect(cx - barrel_w / 2, my, barrel_w, barrel_h, palette::GUN_BARREL.into());

    let sight = px(2.0, k);
    surface.fill_rect(cx - sight / 2, my - sight, sight, sight, palette::GUN_SIGHT.into());

    let arm = px(4.0, k);
    let (chx, chy) = (cx, h / 2);
    surface.line(chx - arm, chy, chx + arm, chy, palette::CROSSHAIR);
    surface.line(chx, chy - arm, chx, chy + arm, palette::CROSSHAIR);

    if weapon.flash() == 0 {
        return;
    }
    let level = weapon.flash_level();
    for (ring, radius) in palette::FLASH_RINGS.iter().zip(FLASH_RADII) {
        surface.fill_circle(mx, my, px(radius, k), ring.scale(level).into());
    }
    if weapon.flash_is_fresh() {
        let color = palette::FLASH_RINGS[1].scale(level);
        let len = FLASH_RAY_LEN * k;
        for (dx, dy) in FLASH_RAYS {
            let x1 = mx + (dx * len) as i32;
            let y1 = my + (dy * len) as i32;
            surface.line(mx, my, x1, y1, color.into());
        }
    }
}

/// Control hints in the bottom-left corner and the enemy counter top-right.
pub fn draw_hud<S: Surface + ?Sized>(surface: &mut S, screen: Screen, state: &GameState) {
    let h = screen.height as i32;
    surface.text(5, h - 25, "UP/DOWN:Move", palette::HUD_TEXT);
    surface.text(5, h - 15, "A/C:Turn", palette::HUD_TEXT);

    if !state.scene().has_weapon() {
        return;
    }
    surface.text(5, h - 35, "B:Fire", palette::HUD_TEXT);

    let mut counter = ArrayString::<32>::new();
    // Capacity covers "ENEMIES " plus any usize.
    if write!(counter, "ENEMIES {}", state.actors().alive_count()).is_ok() {
        let x = screen.width as i32 - 5 - surface.text_width(&counter);
        surface.text(x.max(0), 5, &counter, palette::HUD_TEXT);
    }
}
