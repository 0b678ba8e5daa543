//! Tile definitions
//!
//! Terrain types and the grid cell that carries them.

use serde::{Deserialize, Serialize};

/// Pixel width and height of one tile (and of one spritesheet cell)
pub const TILE_SIZE: i32 = 8;

/// A single cell of a tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Grid column
    pub x: i32,
    /// Grid row
    pub y: i32,
    pub tile_type: TileType,
}

impl Tile {
    pub fn new(x: i32, y: i32, tile_type: TileType) -> Self {
        Self { x, y, tile_type }
    }

    /// Top-left corner of this tile in world pixels
    pub fn pixel_origin(&self) -> (i32, i32) {
        (self.x * TILE_SIZE, self.y * TILE_SIZE)
    }
}

/// Terrain types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Dirt,
    Grass,
    Tree,
    Stone,
}

impl TileType {
    /// Terrain the overworld generator draws from, uniformly
    pub const OVERWORLD: [TileType; 3] = [TileType::Dirt, TileType::Grass, TileType::Tree];

    /// Get the display name for this tile type
    pub fn name(&self) -> &'static str {
        match self {
            TileType::Dirt => "Dirt",
            TileType::Grass => "Grass",
            TileType::Tree => "Tree",
            TileType::Stone => "Stone",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_origin() {
        assert_eq!(Tile::new(0, 0, TileType::Dirt).pixel_origin(), (0, 0));
        assert_eq!(Tile::new(3, 7, TileType::Tree).pixel_origin(), (24, 56));
    }

    #[test]
    fn test_overworld_excludes_stone() {
        assert!(!TileType::OVERWORLD.contains(&TileType::Stone));
    }
}
