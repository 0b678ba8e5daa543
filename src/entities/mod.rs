//! Entity definitions
//!
//! Constructors for the player, the enemy, the dungeon gate and the chest.

pub mod entity;
pub mod player;
pub mod enemies;
pub mod gate;
pub mod chests;

pub use entity::{Entity, Position};
pub use player::spawn_player;
pub use enemies::spawn_enemy;
pub use gate::spawn_gate;
pub use chests::{dormant_chest, drop_chest};
