//! Tile grid
//!
//! The fixed-size 2D array of tiles backing one zone.

use super::tile::{Tile, TileType, TILE_SIZE};

/// Grid width in tiles
pub const WORLD_WIDTH: i32 = 20;
/// Grid height in tiles
pub const WORLD_HEIGHT: i32 = 20;

/// A zone's terrain
#[derive(Debug, Clone)]
pub struct TileGrid {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid of the standard world size filled with one tile type
    pub fn filled(tile_type: TileType) -> Self {
        Self::with_size(WORLD_WIDTH, WORLD_HEIGHT, |_, _| tile_type)
    }

    /// Create a grid, asking `tile_at` for the type of every cell
    ///
    /// `tile_at` is called column by column, so a seeded generator always
    /// lays out the same world. Storage stays row-major.
    pub fn with_size(width: i32, height: i32, mut tile_at: impl FnMut(i32, i32) -> TileType) -> Self {
        let mut columns = Vec::with_capacity((width * height) as usize);
        for x in 0..width {
            for y in 0..height {
                columns.push(tile_at(x, y));
            }
        }

        let tiles = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| Tile::new(x, y, columns[(x * height + y) as usize]))
            .collect();

        Self { width, height, tiles }
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Check if a pixel position lies on a tile of this grid
    pub fn contains_pixel(&self, px: i32, py: i32) -> bool {
        px >= 0
            && py >= 0
            && px <= (self.width - 1) * TILE_SIZE
            && py <= (self.height - 1) * TILE_SIZE
    }

    /// Get tile at grid position
    pub fn get_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.in_bounds(x, y) {
            Some(&self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Iterate over every tile, row by row
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Width and height in pixels
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.width * TILE_SIZE, self.height * TILE_SIZE)
    }
}
