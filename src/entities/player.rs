//! Player entity creation

use crate::world::Zone;
use super::Entity;

/// Starting grid cell
pub const PLAYER_START: (i32, i32) = (3, 3);
pub const PLAYER_START_HEALTH: i32 = 100;
pub const PLAYER_START_MONEY: i32 = 1000;

/// Spawn the player in the overworld
pub fn spawn_player() -> Entity {
    Entity {
        health: PLAYER_START_HEALTH,
        money: PLAYER_START_MONEY,
        ..Entity::at_tile(PLAYER_START.0, PLAYER_START.1, Zone::Overworld)
    }
}
