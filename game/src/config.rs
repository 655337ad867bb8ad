use std::path::Path;

use engine::EngineConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Gameplay tuning. Defaults reproduce the stock game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Cat speed, units per second.
    pub player_speed: f32,
    /// Movement stops once the cat is past this distance from the origin.
    pub bound: f32,
    /// Half extent of the square hit box around cat and mice.
    pub radius: f32,
    /// Mice respawn at integer coordinates in `[-spawn_extent, spawn_extent]`.
    pub spawn_extent: i32,
    pub respawn_delay_min: u32,
    pub respawn_delay_max: u32,
    /// Seconds before the first mouse appears.
    pub initial_respawn_delay: f32,
    /// Depth the plane is raised to once the game is over.
    pub game_over_plane_depth: f32,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            player_speed: 10.0,
            bound: 10.0,
            radius: 0.5,
            spawn_extent: 8,
            respawn_delay_min: 1,
            respawn_delay_max: 5,
            initial_respawn_delay: 1.0,
            game_over_plane_depth: 2.0,
        }
    }
}

impl PlayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "player_speed must be positive, got {}",
                self.player_speed
            )));
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if self.spawn_extent < 0 {
            return Err(ConfigError::Invalid(format!(
                "spawn_extent must not be negative, got {}",
                self.spawn_extent
            )));
        }
        if self.respawn_delay_min > self.respawn_delay_max {
            return Err(ConfigError::Invalid(format!(
                "respawn delay range {}..={} is empty",
                self.respawn_delay_min, self.respawn_delay_max
            )));
        }
        Ok(())
    }
}

/// Contents of `cat_chase.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub engine: EngineConfig,
    pub play: PlayConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig {
                title: "Cat Chase".to_string(),
                ..EngineConfig::default()
            },
            play: PlayConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.play.validate()?;
        Ok(config)
    }

    /// Reads `path`, or returns the defaults if it does not exist. Runs
    /// before logging is installed, so callers report which one happened.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
