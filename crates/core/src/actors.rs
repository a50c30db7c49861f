//! Actor registry - the fixed roster of enemies
//!
//! Enemies are created once when the scene starts and are identified by their
//! index for the rest of the session. The only mutation is alive -> dead;
//! nothing is ever moved, added or resurrected.

use glam::Vec2;

use crate::level::Spawn;

/// A single enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub pos: Vec2,
    pub radius: f32,
    alive: bool,
}

impl Actor {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

impl From<Spawn> for Actor {
    fn from(spawn: Spawn) -> Self {
        Actor::new(spawn.pos, spawn.radius)
    }
}

/// Stable-index list of enemies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorRegistry {
    actors: Vec<Actor>,
}

impl ActorRegistry {
    pub fn new(actors: Vec<Actor>) -> Self {
        Self { actors }
    }

    pub fn from_spawns(spawns: &[Spawn]) -> Self {
        Self::new(spawns.iter().copied().map(Actor::from).collect())
    }

    /// Mark an enemy dead.
    ///
    /// Returns `true` only when this call changed something; killing a dead
    /// enemy or an index outside the roster is a no-op.
    pub fn kill(&mut self, index: usize) -> bool {
        match self.actors.get_mut(index) {
            Some(actor) if actor.alive => {
                actor.alive = false;
                tracing::debug!(index, x = actor.pos.x, y = actor.pos.y, "enemy killed");
                true
            }
            _ => false,
        }
    }

    /// Alive enemies with their stable index, in roster order.
    pub fn alive(&self) -> impl Iterator<Item = (usize, &Actor)> + '_ {
        self.actors.iter().enumerate().filter(|(_, a)| a.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.actors.iter().filter(|a| a.alive).count()
    }

    pub fn get(&self, index: usize) -> Option<&Actor> {
        self.actors.get(index)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
