//! Runtime configuration from environment variables.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::{GameState, Level, Motion};
use crate::types::{OpposingInput, Scene, TICK_MS};

/// Runner configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub scene: Scene,
    /// ASCII level file; the built-in level when unset
    pub map_path: Option<PathBuf>,
    pub tick_ms: u32,
    pub opposing: OpposingInput,
    /// Log file; logging is disabled when unset
    pub log_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scene: Scene::default(),
            map_path: None,
            tick_ms: TICK_MS,
            opposing: OpposingInput::default(),
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup. Invalid values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let scene = get("RAYCASTER_SCENE")
            .and_then(|s| Scene::from_str(&s))
            .unwrap_or(defaults.scene);

        let tick_ms = get("RAYCASTER_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let opposing = get("RAYCASTER_OPPOSING")
            .and_then(|s| OpposingInput::from_str(&s))
            .unwrap_or(defaults.opposing);

        Self {
            scene,
            map_path: get("RAYCASTER_MAP").map(PathBuf::from),
            tick_ms,
            opposing,
            log_path: get("RAYCASTER_LOG").map(PathBuf::from),
            log_level: get("RAYCASTER_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// The configured level file, or the built-in level.
    pub fn load_level(&self) -> Result<Level> {
        let Some(path) = &self.map_path else {
            return Ok(Level::default_level());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read map file {}", path.display()))?;
        Level::parse(&text).with_context(|| format!("invalid map file {}", path.display()))
    }

    /// A fresh game for this configuration.
    pub fn new_game(&self) -> Result<GameState> {
        let level = self.load_level()?;
        let motion = Motion {
            opposing: self.opposing,
            ..Motion::default()
        };
        Ok(GameState::new(level, self.scene).with_motion(motion))
    }
}
