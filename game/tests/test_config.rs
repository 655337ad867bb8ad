use std::path::Path;

use cat_chase::{ConfigError, GameConfig, PlayConfig};

#[test]
fn shipped_config_matches_defaults() {
    let text = include_str!("../assets/cat_chase.toml");
    let config = GameConfig::from_toml_str(text).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn missing_sections_use_defaults() {
    let config = GameConfig::from_toml_str("[play]\nplayer_speed = 4.0\n").unwrap();
    assert_eq!(config.play.player_speed, 4.0);
    assert_eq!(config.play.spawn_extent, 8);
    assert_eq!(config.engine.title, "Cat Chase");
}

#[test]
fn empty_delay_range_is_rejected() {
    let text = "[play]\nrespawn_delay_min = 6\nrespawn_delay_max = 5\n";
    assert!(matches!(GameConfig::from_toml_str(text), Err(ConfigError::Invalid(_))));
}

#[test]
fn non_positive_speed_is_rejected() {
    let config = PlayConfig {
        player_speed: 0.0,
        ..PlayConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    assert!(matches!(GameConfig::from_toml_str("[play"), Err(ConfigError::Parse(_))));
}

#[test]
fn absent_file_falls_back_to_defaults() {
    let config = GameConfig::load_or_default(Path::new("/nonexistent/cat_chase.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn existing_file_is_read_and_validated() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/cat_chase.toml");
    let config = GameConfig::load_or_default(&path).unwrap();
    assert_eq!(config.engine.title, "Cat Chase");
}
