//! Raycaster - one ray through the tile map and the enemy roster
//!
//! Walls are found by marching along the ray in fixed increments
//! ([`RAY_STEP`], 1/20 of a tile) until a sample lands in a wall cell or leaves
//! the map. Samples are computed as `origin + dir * (k * step)` so error does
//! not accumulate along long rays.
//!
//! Enemies are tested analytically and independently of the march: every alive
//! enemy is projected onto the ray and kept if the ray passes through its disc.
//! Deciding whether that enemy is visible in front of the wall is left to the
//! caller ([`RayResult::enemy_in_front`]).
//!
//! Casting is a pure function of its inputs and never allocates, so the renderer
//! may call it once per screen column every frame.

use glam::Vec2;

use crate::actors::ActorRegistry;
use crate::map::WorldMap;
use crate::types::{FACE_EPSILON, MAX_DEPTH, RAY_STEP};

/// The nearest alive enemy a ray passes through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyHit {
    /// Stable roster index
    pub index: usize,
    /// Euclidean distance from the ray origin to the enemy centre
    pub distance: f32,
}

/// Outcome of a single cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayResult {
    /// Distance to the wall, or `max_depth` when none was found
    pub distance: f32,
    /// Whether the wall face runs north-south (used for shading only)
    pub vertical: bool,
    /// Cell of the wall that stopped the ray
    pub wall: Option<(i32, i32)>,
    /// Nearest alive enemy on the ray, regardless of walls
    pub enemy: Option<EnemyHit>,
}

impl RayResult {
    pub fn hit_wall(&self) -> bool {
        self.wall.is_some()
    }

    /// The enemy, but only if it stands strictly nearer than the wall.
    pub fn enemy_in_front(&self) -> Option<EnemyHit> {
        self.enemy.filter(|e| e.distance < self.distance)
    }
}

/// Where the march stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    pub distance: f32,
    pub vertical: bool,
    pub cell: Option<(i32, i32)>,
}

/// Ray marching parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raycaster {
    pub step: f32,
    pub max_depth: f32,
    pub face_epsilon: f32,
}

impl Default for Raycaster {
    fn default() -> Self {
        Self {
            step: RAY_STEP,
            max_depth: MAX_DEPTH,
            face_epsilon: FACE_EPSILON,
        }
    }
}

impl Raycaster {
    /// Upper bound on samples taken by one cast.
    pub fn max_steps(&self) -> u32 {
        (self.max_depth / self.step).ceil() as u32
    }

    /// Cast a ray from `origin` at `angle` radians.
    pub fn cast(&self, map: &WorldMap, origin: Vec2, angle: f32, actors: &ActorRegistry) -> RayResult {
        let dir = Vec2::from_angle(angle);
        let wall = self.march(map, origin, dir);
        let enemy = self.nearest_enemy(origin, dir, actors);

        RayResult {
            distance: wall.distance,
            vertical: wall.vertical,
            wall: wall.cell,
            enemy,
        }
    }

    /// Step along `dir` (unit length) until a wall is hit or the ray leaves the map.
    pub fn march(&self, map: &WorldMap, origin: Vec2, dir: Vec2) -> WallHit {
        let miss = WallHit {
            distance: self.max_depth,
            vertical: false,
            cell: None,
        };

        for k in 1..=self.max_steps() {
            let travelled = k as f32 * self.step;
            if travelled > self.max_depth {
                break;
            }

            let sample = origin + dir * travelled;
            let (col, row) = WorldMap::cell_of(sample);
            if !map.contains(col, row) {
                return miss;
            }
            if map.is_wall(col, row) {
                let frac_x = sample.x - col as f32;
                let vertical =
                    frac_x < self.face_epsilon || (frac_x - 1.0).abs() < self.face_epsilon;
                return WallHit {
                    distance: sample.distance(origin),
                    vertical,
                    cell: Some((col, row)),
                };
            }
        }

        miss
    }

    /// Nearest alive enemy whose disc the ray passes through.
    ///
    /// Enemies behind the origin are ignored, and so are enemies beyond
    /// `max_depth`. Ties keep the lowest index.
    pub fn nearest_enemy(&self, origin: Vec2, dir: Vec2, actors: &ActorRegistry) -> Option<EnemyHit> {
        let mut best: Option<EnemyHit> = None;

        for (index, actor) in actors.alive() {
            let to_actor = actor.pos - origin;
            let along = to_actor.dot(dir);
            if along < 0.0 {
                continue;
            }

            let perp_sq = to_actor.length_squared() - along * along;
            if perp_sq >= actor.radius * actor.radius {
                continue;
            }

            let distance = to_actor.length();
            if distance > self.max_depth {
                continue;
            }

            if best.map_or(true, |b| distance < b.distance) {
                best = Some(EnemyHit { index, distance });
            }
        }

        best
    }
}
