use anyhow::Context;
use labyrinth::{GameApp, GameConfig, GameController};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::from_env();
    let level_path = config.level_path.clone();
    let controller = GameController::load(config)
        .with_context(|| format!("Failed to load level {}", level_path.display()))?;

    log::info!(
        "Level ready: {} chests, portal {}",
        controller.level.chests.len(),
        if controller.level.portal.is_some() { "present" } else { "missing" }
    );

    GameApp::new(controller)?.run()
}
