//! Main graphical application
//!
//! Window setup and the main loop for the graphical frontend.

use std::time::Instant;

use anyhow::{Context, Result};
use macroquad::prelude::*;

use crate::audio::AudioManager;
use crate::config::GameConfig;
use crate::game::{FrameLimiter, Game};
use crate::render::SpriteSheet;
use super::input;
use super::renderer::Renderer;

/// Window settings for macroquad
pub fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width,
        window_height: config.window.height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Run the game until the window is closed
pub async fn run_graphical(config: GameConfig) -> Result<()> {
    let sheet = SpriteSheet::from_file(&config.spritesheet)
        .with_context(|| format!("cannot start without spritesheet {}", config.spritesheet.display()))?;
    let renderer = Renderer::new(&sheet);
    let mut audio = AudioManager::new(&config.audio);

    let mut game = Game::new(&config, (screen_width(), screen_height()));
    let mut limiter = FrameLimiter::new(config.target_fps);

    // Let the loop exit on its own so resources are released in order
    prevent_quit();
    log::info!("Entering main loop at {} fps", config.target_fps);

    loop {
        let frame_start = Instant::now();

        if input::quit_requested() {
            log::info!("Quit requested");
            break;
        }

        game.camera_mut().set_viewport(screen_width(), screen_height());
        let intent = input::read_frame_intent();
        let events = game.update(&intent);
        audio.play_events(&events);

        renderer.draw(&game);
        next_frame().await;

        limiter.wait(frame_start.elapsed());
    }

    log::info!("Left main loop after {} frames", game.frame());
    drop(audio);
    Ok(())
}
