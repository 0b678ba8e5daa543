//! Tilerpg - Entry Point
//!
//! Sets up logging and configuration, then hands over to the graphical main loop.

use macroquad::prelude::*;

use tilerpg::config::GameConfig;
use tilerpg::graphical;

/// Window settings are read before logging is up, so config problems are
/// reported again by the load in `main`.
fn window_conf() -> Conf {
    graphical::window_conf(&GameConfig::load())
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    log::info!("Starting tilerpg v{}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::load();
    if let Err(e) = graphical::run_graphical(config).await {
        log::error!("Game exited with error: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    log::info!("Tilerpg shut down cleanly");
}
