use anyhow::Context;
use cat_chase::assets::{self, CONFIG_FILE};
use cat_chase::{GameConfig, PlayMode, RandomSpawner};
use engine::{EngineContext, LogPresenter};

fn main() -> anyhow::Result<()> {
    let config_path = assets::asset_path(CONFIG_FILE);
    let config = GameConfig::load_or_default(&config_path).context("loading game config")?;
    engine::init_logging(&config.engine.log_filter);
    if config_path.exists() {
        log::info!("loaded config from {}", config_path.display());
    } else {
        log::info!("no config at {}, using defaults", config_path.display());
    }

    let meshes = assets::load_meshes().context("loading meshes")?;
    let scene = assets::load_scene(&meshes).context("loading scene")?;

    let spawner = RandomSpawner::from_entropy(&config.play);
    let mode = PlayMode::new(scene, config.play, spawner).context("starting play mode")?;

    // ---- Create engine context (game owns this) ----
    let ctx = EngineContext::new(config.engine)?;
    ctx.run(Box::new(mode), Box::new(LogPresenter::default()))?;
    Ok(())
}
