//! Frame renderer draw order and compositing, recorded through a `Surface`.

use tui_raycaster::core::{GameState, Level};
use tui_raycaster::engine::{FrameRenderer, Screen, Surface};
use tui_raycaster::types::{Rgba, Scene};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Rect(i32, i32, i32, i32, Rgba),
    Circle,
    Line,
    Text(String),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Surface for Recorder {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        self.ops.push(Op::Rect(x, y, w, h, color));
    }

    fn fill_circle(&mut self, _: i32, _: i32, _: i32, _: Rgba) {
        self.ops.push(Op::Circle);
    }

    fn line(&mut self, _: i32, _: i32, _: i32, _: i32, _: Rgba) {
        self.ops.push(Op::Line);
    }

    fn text(&mut self, _: i32, _: i32, text: &str, _: Rgba) {
        self.ops.push(Op::Text(text.to_string()));
    }
}

fn record(gs: &GameState) -> (FrameRenderer, Recorder) {
    let mut renderer = FrameRenderer::new(Screen::badge());
    let mut rec = Recorder::default();
    renderer.render(gs, &mut rec);
    (renderer, rec)
}

#[test]
fn test_center_column_draws_enemy_not_wall() {
    let gs = GameState::default();
    let mut renderer = FrameRenderer::new(Screen::badge());
    let plan = renderer.plan(&gs);
    assert_eq!(plan.len(), 80);

    let center = plan[40];
    let sprite = center.sprite.expect("enemy visible in the centre column");
    assert_eq!(sprite.index, 0);
    assert!(sprite.distance < center.wall.distance);
    // Nearer things are taller.
    assert!(sprite.height as f32 / 0.7 > center.wall.height as f32);
}

#[test]
fn test_sprites_are_drawn_after_every_wall() {
    let gs = GameState::default();
    let (mut renderer, rec) = record(&gs);
    let plan = renderer.plan(&gs).to_vec();

    // Ceiling and floor, then one rect per wall column.
    let walls: Vec<&Op> = rec.ops[2..2 + plan.len()].iter().collect();
    for (op, col) in walls.iter().zip(&plan) {
        assert_eq!(
            **op,
            Op::Rect(col.x, col.wall.top, col.width, col.wall.height, col.wall.color.into())
        );
    }

    let first_sprite = plan
        .iter()
        .find_map(|c| c.sprite.map(|s| (c, s)))
        .expect("at least one sprite column");
    let (col, sprite) = first_sprite;
    assert_eq!(
        rec.ops[2 + plan.len()],
        Op::Rect(col.x, sprite.top, col.width, sprite.height, sprite.color.into())
    );
}

#[test]
fn test_occluded_enemy_gets_no_sprite() {
    let level = Level::parse("#######\n#P.#E.#\n#######").unwrap();
    let gs = GameState::new(level, Scene::Armed);
    let mut renderer = FrameRenderer::new(Screen::badge());
    assert!(renderer.plan(&gs).iter().all(|c| c.sprite.is_none()));
}

#[test]
fn test_killed_enemy_disappears_from_frame() {
    let mut gs = GameState::default();
    gs.kill(0);
    let mut renderer = FrameRenderer::new(Screen::badge());
    assert!(renderer.plan(&gs)[40].sprite.is_none());
}

#[test]
fn test_wall_shading_fades_with_distance() {
    let gs = GameState::new(Level::default_level(), Scene::Basic);
    let mut renderer = FrameRenderer::new(Screen::badge());
    let plan = renderer.plan(&gs);

    let near = plan
        .iter()
        .min_by(|a, b| a.wall.distance.total_cmp(&b.wall.distance))
        .unwrap();
    let far = plan
        .iter()
        .max_by(|a, b| a.wall.distance.total_cmp(&b.wall.distance))
        .unwrap();
    assert!(near.wall.height >= far.wall.height);
    assert!(near.ray.vertical != far.ray.vertical || near.wall.color.r >= far.wall.color.r);
}

#[test]
fn test_wall_heights_are_clamped_to_screen() {
    let level = Level::parse("###\n#P#\n###").unwrap();
    let gs = GameState::new(level, Scene::Basic);
    let mut renderer = FrameRenderer::new(Screen::badge());
    for col in renderer.plan(&gs) {
        assert!(col.wall.height <= 120);
        assert!(col.wall.top >= 0);
    }
}

#[test]
fn test_armed_scene_overlays_weapon_and_counter() {
    let (_, rec) = record(&GameState::default());
    assert!(rec.ops.contains(&Op::Text("ENEMIES 4".to_string())));
    assert!(rec.ops.iter().any(|op| matches!(op, Op::Line)));
    assert!(rec.ops.iter().any(|op| matches!(op, Op::Circle)));
}

#[test]
fn test_basic_scene_has_no_weapon_overlay() {
    let gs = GameState::new(Level::default_level(), Scene::Basic);
    let (_, rec) = record(&gs);
    let texts: Vec<&Op> = rec.ops.iter().filter(|op| matches!(op, Op::Text(_))).collect();
    assert_eq!(
        texts,
        vec![
            &Op::Text("UP/DOWN:Move".to_string()),
            &Op::Text("A/C:Turn".to_string())
        ]
    );
}
