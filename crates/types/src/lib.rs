//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, frame rendering, terminal shim).
//!
//! # Units
//!
//! Every tuning value is expressed "per call": the frame driver may tick at any
//! cadence and movement/timers simply advance once per `update`.
//!
//! - Distances are in map units (one tile = 1.0)
//! - Angles are in radians unless the name says otherwise
//! - Timers are in frames
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MOVE_SPEED` | 0.03 | Forward/backward displacement per frame |
//! | `ROTATE_SPEED` | 0.05 | Heading change per frame |
//! | `FOV_DEGREES` | 60 | Horizontal field of view |
//! | `MAX_DEPTH` | 10.0 | Ray length sentinel |
//! | `RAY_STEP` | 0.05 | Ray march increment (1/20 of a tile) |
//! | `WALL_SCALE` | 0.6 | Apparent wall height at distance 1 (fraction of screen) |
//! | `COOLDOWN_FRAMES` | 20 | Frames between two shots |
//! | `FLASH_FRAMES` | 8 | Muzzle flash duration |
//! | `WEAPON_RANGE` | 8.0 | Maximum distance a shot can kill at |
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{Button, ButtonSet, InputSnapshot};
//!
//! let mut held = ButtonSet::empty();
//! held.insert(Button::Forward);
//!
//! let input = InputSnapshot::new(held, ButtonSet::empty());
//! assert!(input.is_held(Button::Forward));
//! assert!(!input.was_pressed(Button::Fire));
//!
//! assert_eq!(Button::from_str("turnLeft"), Some(Button::TurnLeft));
//! ```

/// Forward/backward displacement applied per frame (map units).
pub const MOVE_SPEED: f32 = 0.03;

/// Heading change applied per frame while a turn button is held (radians).
pub const ROTATE_SPEED: f32 = 0.05;

/// Horizontal field of view in degrees.
pub const FOV_DEGREES: f32 = 60.0;

/// Maximum ray length; also the distance reported when a ray finds no wall.
pub const MAX_DEPTH: f32 = 10.0;

/// Ray march increment. Must stay well below half a tile so no wall is skipped.
pub const RAY_STEP: f32 = 0.05;

/// Fractional distance from a tile edge that classifies a hit as a vertical face.
pub const FACE_EPSILON: f32 = 0.1;

/// Wall height at distance 1.0, as a fraction of screen height.
pub const WALL_SCALE: f32 = 0.6;

/// Darkest brightness a wall can fade to with distance.
pub const MIN_BRIGHTNESS: f32 = 0.3;

/// Collision radius of every enemy.
pub const ENEMY_RADIUS: f32 = 0.3;

/// Frames that must elapse between shots.
pub const COOLDOWN_FRAMES: u32 = 20;

/// Frames the muzzle flash stays visible after a shot.
pub const FLASH_FRAMES: u32 = 8;

/// A shot only kills enemies nearer than this.
pub const WEAPON_RANGE: f32 = 8.0;

/// Reference screen width in pixels (badge resolution).
pub const SCREEN_WIDTH: u16 = 160;

/// Reference screen height in pixels (badge resolution).
pub const SCREEN_HEIGHT: u16 = 120;

/// Rays cast per frame at the reference resolution (two pixels per column).
pub const NUM_RAYS: u16 = 80;

/// Minimap pixels per map tile.
pub const MINIMAP_TILE_PX: i32 = 3;

/// Minimap distance from the top-left corner of the screen.
pub const MINIMAP_OFFSET: i32 = 5;

/// Default frame interval of the terminal runner in milliseconds.
pub const TICK_MS: u32 = 16;


/// Abstract buttons the simulation understands.
///
/// The platform shim decides which physical keys map to each button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Rotate heading counter-clockwise (towards negative angles)
    TurnLeft,
    /// Rotate heading clockwise (towards positive angles)
    TurnRight,
    /// Walk along the heading
    Forward,
    /// Walk against the heading
    Backward,
    /// Pull the trigger (edge-triggered)
    Fire,
}

impl Button {
    /// All buttons in bit order.
    pub const ALL: [Button; 5] = [
        Button::TurnLeft,
        Button::TurnRight,
        Button::Forward,
        Button::Backward,
        Button::Fire,
    ];

    /// Parse a button from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raycaster_types::Button;
    ///
    /// assert_eq!(Button::from_str("forward"), Some(Button::Forward));
    /// assert_eq!(Button::from_str("TURNRIGHT"), Some(Button::TurnRight));
    /// assert_eq!(Button::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "turnleft" => Some(Button::TurnLeft),
            "turnright" => Some(Button::TurnRight),
            "forward" => Some(Button::Forward),
            "backward" => Some(Button::Backward),
            "fire" => Some(Button::Fire),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Button::TurnLeft => "turnLeft",
            Button::TurnRight => "turnRight",
            Button::Forward => "forward",
            Button::Backward => "backward",
            Button::Fire => "fire",
        }
    }

    #[inline(always)]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of buttons stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ButtonSet(u8);

impl ButtonSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    pub fn remove(&mut self, button: Button) {
        self.0 &= !button.bit();
    }

    pub fn contains(&self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate members in `Button::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL.into_iter().filter(|b| self.contains(*b))
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut set = ButtonSet::empty();
        for button in iter {
            set.insert(button);
        }
        set
    }
}

/// Input state for a single frame.
///
/// `held` is level-triggered (applies every frame the button is down),
/// `pressed` is edge-triggered (contains a button only on the frame it went down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub held: ButtonSet,
    pub pressed: ButtonSet,
}

impl InputSnapshot {
    pub const fn new(held: ButtonSet, pressed: ButtonSet) -> Self {
        Self { held, pressed }
    }

    /// Snapshot with the given buttons held and nothing freshly pressed.
    pub fn holding(buttons: &[Button]) -> Self {
        Self::new(buttons.iter().copied().collect(), ButtonSet::empty())
    }

    /// Snapshot where the given buttons went down this frame.
    pub fn pressing(buttons: &[Button]) -> Self {
        let set: ButtonSet = buttons.iter().copied().collect();
        Self::new(set, set)
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(button)
    }

    pub fn was_pressed(&self, button: Button) -> bool {
        self.pressed.contains(button)
    }
}

/// Which scene variant is running.
///
/// Both variants share one simulation; `Basic` simply has no enemies and no weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scene {
    Basic,
    #[default]
    Armed,
}

impl Scene {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "basic" => Some(Scene::Basic),
            "armed" => Some(Scene::Armed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scene::Basic => "basic",
            Scene::Armed => "armed",
        }
    }

    pub fn has_enemies(&self) -> bool {
        matches!(self, Scene::Armed)
    }

    pub fn has_weapon(&self) -> bool {
        matches!(self, Scene::Armed)
    }
}

/// How forward and backward resolve when both are held in the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpposingInput {
    /// Backward is evaluated after forward and replaces it.
    #[default]
    LaterWins,
    /// The two cancel and the player stands still.
    Cancel,
}

impl OpposingInput {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "later" | "laterwins" => Some(OpposingInput::LaterWins),
            "cancel" => Some(OpposingInput::Cancel),
            _ => None,
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `brightness` (clamped to `[0, 1]`).
    pub fn scale(self, brightness: f32) -> Self {
        let k = brightness.clamp(0.0, 1.0);
        let ch = |v: u8| (v as f32 * k) as u8;
        Self::new(ch(self.r), ch(self.g), ch(self.b))
    }

    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// RGB color with straight alpha (255 = opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Self {
        c.with_alpha(255)
    }
}
