//! Game state
//!
//! Everything one run of the game owns: both grids, the four entities,
//! the camera, the rng and the message log.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::entities::{dormant_chest, spawn_enemy, spawn_gate, spawn_player, Entity};
use crate::world::{generate_dungeon, generate_overworld, TileGrid, Zone};
use super::camera::Camera;
use super::event::GameEvent;
use super::intent::FrameIntent;
use super::message::{MessageCategory, MessageLog};
use super::steps::{FrameContext, StepOutcome, PIPELINE};

/// The main game struct that holds all game data
pub struct Game {
    pub(super) overworld: TileGrid,
    pub(super) dungeon: TileGrid,
    pub(super) player: Entity,
    pub(super) enemy: Entity,
    pub(super) gate: Entity,
    pub(super) chest: Entity,
    pub(super) camera: Camera,
    /// Drives world generation and every combat/loot roll
    pub(super) rng: StdRng,
    pub(super) messages: MessageLog,
    /// Updates run so far
    frame: u64,
}

impl Game {
    /// Create a new game for a window of the given size
    pub fn new(config: &GameConfig, viewport: (f32, f32)) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                log::info!("Using fixed world seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        let camera = Camera::new(viewport.0, viewport.1, &config.camera);
        Self::with_rng(rng, camera)
    }

    /// Create a game with default settings and a fixed seed
    pub fn seeded(seed: u64) -> Self {
        let config = GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        };
        let viewport = (config.window.width as f32, config.window.height as f32);
        Self::new(&config, viewport)
    }

    fn with_rng(mut rng: StdRng, mut camera: Camera) -> Self {
        let overworld = generate_overworld(&mut rng);
        let dungeon = generate_dungeon();
        let player = spawn_player();
        let enemy = spawn_enemy(&mut rng);
        camera.follow(player.position);

        let mut messages = MessageLog::new();
        messages.push("Find the gate. Something waits below.", MessageCategory::System);

        Self {
            overworld,
            dungeon,
            player,
            enemy,
            gate: spawn_gate(),
            chest: dormant_chest(),
            camera,
            rng,
            messages,
            frame: 0,
        }
    }

    /// Advance one frame: zoom, run every resolver step, then re-center the camera
    pub fn update(&mut self, intent: &FrameIntent) -> Vec<GameEvent> {
        self.frame += 1;
        self.camera.apply_wheel(intent.wheel);

        let mut ctx = FrameContext::new(self, intent);
        for (name, step) in PIPELINE {
            if step(self, intent, &mut ctx) == StepOutcome::Consumed {
                log::trace!("Frame {}: {} consumed the action", self.frame, name);
                ctx.action_consumed = true;
            }
        }

        self.camera.follow(self.player.position);
        ctx.events
    }

    /// Zone the player is currently in
    pub fn active_zone(&self) -> Zone {
        self.player.zone
    }

    /// Grid backing a zone
    pub fn grid(&self, zone: Zone) -> &TileGrid {
        match zone {
            Zone::Dungeon => &self.dungeon,
            Zone::Overworld | Zone::All => &self.overworld,
        }
    }

    /// Grid of the player's zone
    pub fn active_grid(&self) -> &TileGrid {
        self.grid(self.player.zone)
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn enemy(&self) -> &Entity {
        &self.enemy
    }

    pub fn gate(&self) -> &Entity {
        &self.gate
    }

    pub fn chest(&self) -> &Entity {
        &self.chest
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Get mutable access to the camera (viewport resizes)
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Number of updates run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
