//! Weapon system - cooldown, muzzle flash and hit resolution
//!
//! Both timers count frames and only ever decrement towards zero. A shot is
//! accepted only when the cooldown has run out; it then restarts both timers
//! and casts a ray along the player's heading. The nearest enemy on that ray
//! dies if it is within range and not hidden behind a wall.

use glam::Vec2;

use crate::actors::ActorRegistry;
use crate::map::WorldMap;
use crate::raycast::Raycaster;
use crate::types::{COOLDOWN_FRAMES, FLASH_FRAMES, WEAPON_RANGE};

/// Weapon tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponSpec {
    pub cooldown_frames: u32,
    pub flash_frames: u32,
    pub range: f32,
}

impl Default for WeaponSpec {
    fn default() -> Self {
        Self {
            cooldown_frames: COOLDOWN_FRAMES,
            flash_frames: FLASH_FRAMES,
            range: WEAPON_RANGE,
        }
    }
}

/// Result of pulling the trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shot {
    /// Trigger ignored; the weapon is still cooling down
    CoolingDown,
    /// Fired, but nothing in range was hit
    Miss,
    /// Fired and killed the enemy at `index`
    Hit { index: usize, distance: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weapon {
    spec: WeaponSpec,
    cooldown: u32,
    flash: u32,
}

impl Weapon {
    pub fn new(spec: WeaponSpec) -> Self {
        Self {
            spec,
            cooldown: 0,
            flash: 0,
        }
    }

    pub fn spec(&self) -> &WeaponSpec {
        &self.spec
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn flash(&self) -> u32 {
        self.flash
    }

    pub fn ready(&self) -> bool {
        self.cooldown == 0
    }

    /// Muzzle flash intensity in `[0, 1]`; 0 once the flash has faded.
    pub fn flash_level(&self) -> f32 {
        if self.spec.flash_frames == 0 {
            return 0.0;
        }
        self.flash as f32 / self.spec.flash_frames as f32
    }

    /// Whether the flash is still in its first half (rays are drawn then).
    pub fn flash_is_fresh(&self) -> bool {
        self.flash * 2 > self.spec.flash_frames
    }

    /// Advance both timers by one frame.
    pub fn tick(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
        self.flash = self.flash.saturating_sub(1);
    }

    /// Pull the trigger from `origin` towards `heading`.
    pub fn fire(
        &mut self,
        origin: Vec2,
        heading: f32,
        map: &WorldMap,
        actors: &mut ActorRegistry,
        caster: &Raycaster,
    ) -> Shot {
        if !self.ready() {
            return Shot::CoolingDown;
        }
        self.cooldown = self.spec.cooldown_frames;
        self.flash = self.spec.flash_frames;

        let ray = caster.cast(map, origin, heading, actors);
        let shot = match ray.enemy_in_front() {
            Some(hit) if hit.distance < self.spec.range => {
                actors.kill(hit.index);
                Shot::Hit {
                    index: hit.index,
                    distance: hit.distance,
                }
            }
            _ => Shot::Miss,
        };
        tracing::debug!(?shot, x = origin.x, y = origin.y, heading, "weapon fired");
        shot
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::new(WeaponSpec::default())
    }
}
