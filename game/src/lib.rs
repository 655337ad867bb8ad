//! Cat chases mice: a single play mode on top of the `engine` crate.

pub mod assets;
pub mod collision;
pub mod config;
pub mod controls;
pub mod hud;
pub mod play_mode;
pub mod session;
pub mod spawn;

pub use config::{ConfigError, GameConfig, PlayConfig};
pub use play_mode::{PlayMode, PlayModeError, MOUSE_COUNT};
pub use session::{MouseId, RespawnCheck, Session};
pub use spawn::{RandomSpawner, SpawnSource};
