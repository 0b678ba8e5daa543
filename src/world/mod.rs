//! World module
//!
//! Tile grids, terrain types, zones and world generation.

pub mod grid;
pub mod tile;
pub mod zone;
pub mod generation;

pub use grid::{TileGrid, WORLD_WIDTH, WORLD_HEIGHT};
pub use tile::{Tile, TileType, TILE_SIZE};
pub use zone::Zone;
pub use generation::{generate_overworld, generate_dungeon};
