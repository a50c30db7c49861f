//! Player controller - heading and position integration
//!
//! Each frame the held turn buttons rotate the heading, then the held walk
//! buttons produce a candidate displacement along the new heading. The
//! candidate is committed as a whole or not at all: if its cell is a wall or
//! outside the map the player stays exactly where they were (no sliding).

use glam::Vec2;

use crate::map::WorldMap;
use crate::types::{Button, InputSnapshot, OpposingInput, MOVE_SPEED, ROTATE_SPEED};

/// Movement tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub move_speed: f32,
    pub rotate_speed: f32,
    pub opposing: OpposingInput,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            rotate_speed: ROTATE_SPEED,
            opposing: OpposingInput::default(),
        }
    }
}

/// What the position update did this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// No walk input (turning alone still counts as idle)
    Idle,
    Moved,
    /// The candidate cell was not traversable; position unchanged
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    /// Radians; not wrapped
    pub heading: f32,
}

impl Player {
    pub fn new(pos: Vec2, heading: f32) -> Self {
        Self { pos, heading }
    }

    /// Unit vector along the heading.
    pub fn facing(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    /// Apply one frame of input.
    pub fn update(&mut self, input: &InputSnapshot, map: &WorldMap, motion: &Motion) -> Step {
        // Both turn buttons may be held; their effects add up.
        if input.is_held(Button::TurnLeft) {
            self.heading -= motion.rotate_speed;
        }
        if input.is_held(Button::TurnRight) {
            self.heading += motion.rotate_speed;
        }

        let displacement = match self.walk_direction(input, motion.opposing) {
            Some(sign) => self.facing() * (sign * motion.move_speed),
            None => return Step::Idle,
        };

        let candidate = self.pos + displacement;
        if map.blocks(candidate) {
            return Step::Blocked;
        }
        self.pos = candidate;
        Step::Moved
    }

    /// +1 forward, -1 backward, `None` when standing still.
    fn walk_direction(&self, input: &InputSnapshot, opposing: OpposingInput) -> Option<f32> {
        let forward = input.is_held(Button::Forward);
        let backward = input.is_held(Button::Backward);
        match (forward, backward, opposing) {
            (true, true, OpposingInput::Cancel) => None,
            (_, true, _) => Some(-1.0),
            (true, false, _) => Some(1.0),
            (false, false, _) => None,
        }
    }
}
