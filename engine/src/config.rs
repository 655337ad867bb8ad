use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable that overrides where [`data_path`] looks.
pub const DATA_DIR_ENV: &str = "ENGINE_DATA_DIR";

/// Window and host-loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Upper bound on the elapsed time handed to a single update, in seconds.
    pub max_elapsed: f32,
    /// Default `env_logger` filter, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "engine".to_string(),
            width: 1280,
            height: 720,
            max_elapsed: 0.1,
            log_filter: "info".to_string(),
        }
    }
}

/// Resolves an asset name against `ENGINE_DATA_DIR`, falling back to the
/// directory holding the executable.
pub fn data_path(name: impl AsRef<Path>) -> PathBuf {
    let base = std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
        })
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_yields_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let config: EngineConfig = toml::from_str("title = \"cats\"\nmax_elapsed = 0.05").unwrap();
        assert_eq!(config.title, "cats");
        assert_eq!(config.max_elapsed, 0.05);
        assert_eq!(config.width, 1280);
        assert_eq!(config.log_filter, "info");
    }
}
