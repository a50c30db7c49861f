//! Movement and collision against real levels.

use tui_raycaster::core::{GameState, Level, Motion, Player, Step, Vec2, WorldMap};
use tui_raycaster::types::{Button, InputSnapshot, OpposingInput, Scene};

fn basic(text: &str) -> GameState {
    GameState::new(Level::parse(text).unwrap(), Scene::Basic)
}

#[test]
fn test_walking_into_wall_never_enters_it() {
    let mut gs = basic("#####\n#P..#\n#####");
    let forward = InputSnapshot::holding(&[Button::Forward]);

    let mut blocked = 0;
    for _ in 0..500 {
        let before = gs.player_pos();
        let report = gs.update(&forward);
        let (col, row) = WorldMap::cell_of(gs.player_pos());
        assert!(!gs.map().is_wall(col, row));
        if report.step == Step::Blocked {
            blocked += 1;
            assert_eq!(gs.player_pos(), before);
        }
    }
    assert!(blocked > 0, "expected to reach the east wall");
    assert!(gs.player_pos().x < 4.0);
}

#[test]
fn test_blocked_step_discards_both_axes() {
    // Diagonal into the north wall: no sliding along x.
    let mut gs = basic("#####\n#P..#\n#####");
    gs.set_player(Player::new(Vec2::new(2.5, 1.01), -std::f32::consts::FRAC_PI_4));

    let before = gs.player_pos();
    let report = gs.update(&InputSnapshot::holding(&[Button::Forward]));
    assert_eq!(report.step, Step::Blocked);
    assert_eq!(gs.player_pos(), before);
}

#[test]
fn test_backward_walks_against_heading() {
    let mut gs = basic("#####\n#.P.#\n#####");
    let start = gs.player_pos();
    gs.update(&InputSnapshot::holding(&[Button::Backward]));
    assert!(gs.player_pos().x < start.x);
}

#[test]
fn test_opposing_policy() {
    let both = InputSnapshot::holding(&[Button::Forward, Button::Backward]);

    let mut later = basic("#####\n#.P.#\n#####");
    let start = later.player_pos();
    later.update(&both);
    assert!(later.player_pos().x < start.x);

    let mut cancel = basic("#####\n#.P.#\n#####").with_motion(Motion {
        opposing: OpposingInput::Cancel,
        ..Motion::default()
    });
    let report = cancel.update(&both);
    assert_eq!(report.step, Step::Idle);
    assert_eq!(cancel.player_pos(), start);
}

#[test]
fn test_negative_coordinates_are_outside_the_map() {
    // Open west edge: walking off the map is blocked like a wall.
    let mut gs = basic("P..\n...");
    gs.set_player(Player::new(Vec2::new(0.02, 0.5), std::f32::consts::PI));
    let report = gs.update(&InputSnapshot::holding(&[Button::Forward]));
    assert_eq!(report.step, Step::Blocked);
    assert!((gs.player_pos().x - 0.02).abs() < 1e-6);
}
