//! Game state module - the per-session aggregate
//!
//! `GameState` owns everything that changes during play (player, enemy roster,
//! weapon timers) next to the things that do not (map, ray parameters). The
//! frame driver owns one instance and calls [`GameState::update`] exactly once
//! per tick; renderers only ever borrow it immutably.

use glam::Vec2;

use crate::actors::ActorRegistry;
use crate::level::Level;
use crate::map::WorldMap;
use crate::player::{Motion, Player, Step};
use crate::raycast::{RayResult, Raycaster};
use crate::types::{Button, InputSnapshot, Scene};
use crate::weapon::{Shot, Weapon, WeaponSpec};

/// What happened during one update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub step: Step,
    /// `None` when the trigger was not pressed this frame (or the scene is unarmed)
    pub shot: Option<Shot>,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    map: WorldMap,
    player: Player,
    actors: ActorRegistry,
    weapon: Weapon,
    caster: Raycaster,
    motion: Motion,
    scene: Scene,
    /// Frames simulated since the scene started.
    frame: u64,
}

impl GameState {
    /// Start a scene on the given level.
    pub fn new(level: Level, scene: Scene) -> Self {
        let level = level.for_scene(scene);
        tracing::info!(
            scene = scene.as_str(),
            width = level.map.width(),
            height = level.map.height(),
            enemies = level.spawns.len(),
            "scene started"
        );

        Self {
            player: Player::new(level.player_start, level.player_heading),
            actors: ActorRegistry::from_spawns(&level.spawns),
            map: level.map,
            weapon: Weapon::default(),
            caster: Raycaster::default(),
            motion: Motion::default(),
            scene,
            frame: 0,
        }
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_weapon(mut self, spec: WeaponSpec) -> Self {
        self.weapon = Weapon::new(spec);
        self
    }

    pub fn with_caster(mut self, caster: Raycaster) -> Self {
        self.caster = caster;
        self
    }

    /// Advance one frame.
    ///
    /// Order: heading and position first, then weapon timers, then the trigger.
    /// A shot therefore always travels along this frame's heading.
    pub fn update(&mut self, input: &InputSnapshot) -> FrameReport {
        self.frame += 1;

        let step = self.player.update(input, &self.map, &self.motion);

        let mut shot = None;
        if self.scene.has_weapon() {
            self.weapon.tick();
            if input.was_pressed(Button::Fire) {
                shot = Some(self.weapon.fire(
                    self.player.pos,
                    self.player.heading,
                    &self.map,
                    &mut self.actors,
                    &self.caster,
                ));
            }
        }

        FrameReport { step, shot }
    }

    /// Cast a ray from the player's position.
    pub fn cast_from_player(&self, angle: f32) -> RayResult {
        self.caster
            .cast(&self.map, self.player.pos, angle, &self.actors)
    }

    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_pos(&self) -> Vec2 {
        self.player.pos
    }

    pub fn heading(&self) -> f32 {
        self.player.heading
    }

    pub fn actors(&self) -> &ActorRegistry {
        &self.actors
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn caster(&self) -> &Raycaster {
        &self.caster
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Place the player directly (tests and demos).
    pub fn set_player(&mut self, player: Player) {
        self.player = player;
    }

    /// Kill an enemy outside of the weapon path; same no-op rules as the registry.
    pub fn kill(&mut self, index: usize) -> bool {
        self.actors.kill(index)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Level::default_level(), Scene::default())
    }
}
