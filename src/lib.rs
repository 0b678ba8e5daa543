//! Tilerpg - a small 2D tile RPG
//!
//! Walk the overworld, take the gate down into the dungeon, beat the
//! enemy waiting there and loot what it drops.

pub mod config;
pub mod world;
pub mod entities;
pub mod combat;
pub mod game;
pub mod render;
pub mod audio;
pub mod graphical;

// Re-export commonly used types
pub use config::GameConfig;
pub use game::{Game, FrameIntent, GameEvent};
pub use world::{TileGrid, Zone};
