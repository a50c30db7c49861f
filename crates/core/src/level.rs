//! Level module - a map plus its starting roster
//!
//! A level bundles the static [`WorldMap`] with where the player starts and where
//! enemies stand. Levels are either the built-in one or parsed from ASCII text:
//!
//! ```text
//! #####
//! #P.E#
//! #####
//! ```
//!
//! `P` marks the player start and `E` an enemy; both are placed at the centre
//! of their cell and count as floor.

use glam::Vec2;

use crate::map::{grid_lines, MapError, WorldMap};
use crate::types::{Scene, ENEMY_RADIUS};

/// Rows of the built-in map (`1` = wall).
const DEFAULT_MAP: [[u8; 10]; 10] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 1, 1, 1, 0, 0, 0, 1],
    [1, 0, 0, 1, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 1, 0, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Enemy positions of the built-in level.
const DEFAULT_ROSTER: [(f32, f32); 4] = [(7.5, 2.5), (5.5, 6.5), (2.5, 7.5), (8.5, 8.5)];

/// Where an enemy stands when the scene starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawn {
    pub pos: Vec2,
    pub radius: f32,
}

impl Spawn {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius: ENEMY_RADIUS,
        }
    }
}

/// A playable level.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub map: WorldMap,
    pub player_start: Vec2,
    pub player_heading: f32,
    pub spawns: Vec<Spawn>,
}

impl Level {
    /// The 10x10 bordered map with the player at (2.5, 2.5) facing east.
    pub fn default_level() -> Self {
        let map = match WorldMap::from_bits(&DEFAULT_MAP) {
            Ok(map) => map,
            Err(e) => unreachable!("built-in map is rectangular: {e}"),
        };
        Self {
            map,
            player_start: Vec2::new(2.5, 2.5),
            player_heading: 0.0,
            spawns: DEFAULT_ROSTER
                .iter()
                .map(|&(x, y)| Spawn::new(x, y))
                .collect(),
        }
    }

    /// Parse a level from ASCII text.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let map = WorldMap::parse(text)?;

        let mut player_start = None;
        let mut spawns = Vec::new();
        for (row, line) in grid_lines(text).enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let centre = Vec2::new(col as f32 + 0.5, row as f32 + 0.5);
                match ch {
                    'P' => {
                        if player_start.replace(centre).is_some() {
                            return Err(MapError::MultiplePlayerStarts { row, col });
                        }
                    }
                    'E' => spawns.push(Spawn::new(centre.x, centre.y)),
                    _ => {}
                }
            }
        }

        let player_start = player_start.ok_or(MapError::MissingPlayerStart)?;
        tracing::debug!(
            width = map.width(),
            height = map.height(),
            enemies = spawns.len(),
            "parsed level"
        );

        Ok(Self {
            map,
            player_start,
            player_heading: 0.0,
            spawns,
        })
    }

    /// Adjust the level for a scene variant: the basic scene has no enemies.
    pub fn for_scene(mut self, scene: Scene) -> Self {
        if !scene.has_enemies() {
            self.spawns.clear();
        }
        self
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::default_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_matches_builtin_map() {
        let level = Level::default_level();
        assert_eq!(level.map.width(), 10);
        assert_eq!(level.map.height(), 10);
        assert!(level.map.is_wall(3, 3));
        assert!(level.map.is_wall(7, 5));
        assert!(!level.map.is_wall(2, 2));
        assert_eq!(level.player_start, Vec2::new(2.5, 2.5));
        assert_eq!(level.spawns.len(), 4);
    }

    #[test]
    fn test_default_spawns_stand_on_floor() {
        let level = Level::default_level();
        for spawn in &level.spawns {
            assert!(!level.map.blocks(spawn.pos), "{:?} is inside a wall", spawn);
        }
        assert!(!level.map.blocks(level.player_start));
    }

    #[test]
    fn test_parse_places_markers_at_cell_centres() {
        let level = Level::parse("#####\n#P.E#\n#####").unwrap();
        assert_eq!(level.player_start, Vec2::new(1.5, 1.5));
        assert_eq!(level.spawns, vec![Spawn::new(3.5, 1.5)]);
        assert!(!level.map.is_wall(1, 1));
        assert!(!level.map.is_wall(3, 1));
    }

    #[test]
    fn test_parse_requires_exactly_one_player() {
        assert_eq!(
            Level::parse("###\n#.#\n###").unwrap_err(),
            MapError::MissingPlayerStart
        );
        assert_eq!(
            Level::parse("####\n#PP#\n####").unwrap_err(),
            MapError::MultiplePlayerStarts { row: 1, col: 2 }
        );
    }

    #[test]
    fn test_basic_scene_drops_roster() {
        let level = Level::default_level().for_scene(Scene::Basic);
        assert!(level.spawns.is_empty());
        let level = Level::default_level().for_scene(Scene::Armed);
        assert_eq!(level.spawns.len(), 4);
    }
}
