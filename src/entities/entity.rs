//! Entity records
//!
//! Plain position + stats records shared by the player, the enemy, the gate and the chest.

use serde::{Deserialize, Serialize};

use crate::world::{Zone, TILE_SIZE};

/// Position in world pixels, always a multiple of the tile size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel position of the top-left corner of a grid cell
    pub fn from_tile(tile_x: i32, tile_y: i32) -> Self {
        Self::new(tile_x * TILE_SIZE, tile_y * TILE_SIZE)
    }

    /// Grid cell this position sits on
    pub fn tile(&self) -> (i32, i32) {
        (self.x / TILE_SIZE, self.y / TILE_SIZE)
    }

    /// Position moved by whole tiles
    pub fn offset_tiles(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx * TILE_SIZE, self.y + dy * TILE_SIZE)
    }

    /// Whether the position lies on the tile lattice
    pub fn is_grid_aligned(&self) -> bool {
        self.x % TILE_SIZE == 0 && self.y % TILE_SIZE == 0
    }
}

/// One game entity. Not every field means something for every entity:
/// the gate only uses `position` and `zone`, the chest carries `money`,
/// the enemy carries `health` and the `xp` it awards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub position: Position,
    pub zone: Zone,
    pub health: i32,
    /// Damage of the last hit this entity dealt
    pub damage: i32,
    pub alive: bool,
    pub money: i32,
    pub xp: i32,
}

impl Entity {
    /// A live entity at a grid cell with all stats zeroed
    pub fn at_tile(tile_x: i32, tile_y: i32, zone: Zone) -> Self {
        Self {
            position: Position::from_tile(tile_x, tile_y),
            zone,
            health: 0,
            damage: 0,
            alive: true,
            money: 0,
            xp: 0,
        }
    }

    /// Whether this entity shares a cell with `pos`
    pub fn is_at(&self, pos: Position) -> bool {
        self.position == pos
    }

    /// Whether the entity should be drawn and interacted with while the player is in `zone`
    pub fn is_active_in(&self, zone: Zone) -> bool {
        self.alive && self.zone.is_visible_in(zone)
    }
}
