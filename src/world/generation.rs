//! World generation
//!
//! The overworld gets a uniformly random terrain type per cell; the dungeon is bare dirt.

use rand::Rng;

use super::grid::{TileGrid, WORLD_HEIGHT, WORLD_WIDTH};
use super::tile::TileType;

/// Generate the overworld: every cell drawn uniformly from Dirt, Grass and Tree
pub fn generate_overworld(rng: &mut impl Rng) -> TileGrid {
    let grid = TileGrid::with_size(WORLD_WIDTH, WORLD_HEIGHT, |_, _| {
        TileType::OVERWORLD[rng.gen_range(0..TileType::OVERWORLD.len())]
    });
    log::debug!("Generated {}x{} overworld", grid.width, grid.height);
    grid
}

/// Generate the dungeon floor
pub fn generate_dungeon() -> TileGrid {
    TileGrid::filled(TileType::Dirt)
}
