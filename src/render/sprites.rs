//! Spritesheet and sprite cell mapping
//!
//! All art comes from one packed sheet of 8x8 cells. Tiles and entities are
//! addressed by (column, row) in that sheet.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, RgbaImage};
use thiserror::Error;

use crate::world::{TileType, TILE_SIZE};

/// Errors raised while loading the spritesheet
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load spritesheet {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("spritesheet {path} is {width}x{height}, needs at least {needed_width}x{needed_height}")]
    TooSmall {
        path: PathBuf,
        width: u32,
        height: u32,
        needed_width: u32,
        needed_height: u32,
    },
}

/// A cell of the spritesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteCell {
    pub col: i32,
    pub row: i32,
}

impl SpriteCell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    // Terrain
    pub const DIRT: SpriteCell = SpriteCell::new(4, 4);
    pub const GRASS: SpriteCell = SpriteCell::new(5, 4);
    pub const TREE: SpriteCell = SpriteCell::new(5, 5);
    pub const STONE: SpriteCell = SpriteCell::new(6, 4);

    // Entities
    pub const PLAYER: SpriteCell = SpriteCell::new(4, 0);
    pub const DUNGEON_GATE: SpriteCell = SpriteCell::new(8, 9);
    pub const ENEMY: SpriteCell = SpriteCell::new(10, 6);
    pub const CHEST: SpriteCell = SpriteCell::new(8, 6);

    /// Every cell the game draws
    pub const ALL: [SpriteCell; 8] = [
        SpriteCell::DIRT,
        SpriteCell::GRASS,
        SpriteCell::TREE,
        SpriteCell::STONE,
        SpriteCell::PLAYER,
        SpriteCell::DUNGEON_GATE,
        SpriteCell::ENEMY,
        SpriteCell::CHEST,
    ];

    /// Source rectangle (x, y, w, h) of this cell in sheet pixels
    pub fn source_rect(&self) -> (f32, f32, f32, f32) {
        (
            (self.col * TILE_SIZE) as f32,
            (self.row * TILE_SIZE) as f32,
            TILE_SIZE as f32,
            TILE_SIZE as f32,
        )
    }
}

/// Sheet cell drawn for a terrain type
pub fn tile_sprite(tile_type: TileType) -> SpriteCell {
    match tile_type {
        TileType::Dirt => SpriteCell::DIRT,
        TileType::Grass => SpriteCell::GRASS,
        TileType::Tree => SpriteCell::TREE,
        TileType::Stone => SpriteCell::STONE,
    }
}

/// The decoded spritesheet image
pub struct SpriteSheet {
    image: RgbaImage,
}

impl SpriteSheet {
    /// Load and check a sprite sheet from an image file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| AssetError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_image(path, img)
    }

    /// Wrap an already-loaded image, making sure every used cell fits inside it
    pub fn from_image<P: AsRef<Path>>(path: P, image: DynamicImage) -> Result<Self, AssetError> {
        let path = path.as_ref().to_path_buf();
        let (width, height) = image.dimensions();
        let (needed_width, needed_height) = Self::required_size();

        if width < needed_width || height < needed_height {
            return Err(AssetError::TooSmall {
                path,
                width,
                height,
                needed_width,
                needed_height,
            });
        }

        log::info!(
            "Loaded spritesheet {} ({}x{}, {}x{} cells)",
            path.display(),
            width,
            height,
            width / TILE_SIZE as u32,
            height / TILE_SIZE as u32
        );

        Ok(Self {
            image: image.to_rgba8(),
        })
    }

    /// Smallest sheet that contains every cell in `SpriteCell::ALL`
    pub fn required_size() -> (u32, u32) {
        let max_col = SpriteCell::ALL.iter().map(|c| c.col).max().unwrap_or(0);
        let max_row = SpriteCell::ALL.iter().map(|c| c.row).max().unwrap_or(0);
        (((max_col + 1) * TILE_SIZE) as u32, ((max_row + 1) * TILE_SIZE) as u32)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw RGBA8 pixels, row by row
    pub fn rgba_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_cells() {
        assert_eq!(tile_sprite(TileType::Dirt), SpriteCell::new(4, 4));
        assert_eq!(tile_sprite(TileType::Grass), SpriteCell::new(5, 4));
        assert_eq!(tile_sprite(TileType::Tree), SpriteCell::new(5, 5));
    }

    #[test]
    fn test_stone_has_its_own_cell() {
        let stone = tile_sprite(TileType::Stone);
        for other in [TileType::Dirt, TileType::Grass, TileType::Tree] {
            assert_ne!(stone, tile_sprite(other));
        }
    }

    #[test]
    fn test_source_rect() {
        assert_eq!(SpriteCell::DUNGEON_GATE.source_rect(), (64.0, 72.0, 8.0, 8.0));
        assert_eq!(SpriteCell::PLAYER.source_rect(), (32.0, 0.0, 8.0, 8.0));
    }

    #[test]
    fn test_required_size_covers_gate() {
        let (w, h) = SpriteSheet::required_size();
        assert!(w >= 9 * 8);
        assert_eq!(h, 10 * 8);
    }

    #[test]
    fn test_small_sheet_rejected() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(16, 16));
        let err = SpriteSheet::from_image("tiny.png", img).err().unwrap();
        assert!(matches!(err, AssetError::TooSmall { width: 16, .. }));
    }

    #[test]
    fn test_sheet_keeps_pixels() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(128, 80));
        let sheet = SpriteSheet::from_image("sheet.png", img).unwrap();
        assert_eq!((sheet.width(), sheet.height()), (128, 80));
        assert_eq!(sheet.rgba_bytes().len(), 128 * 80 * 4);
    }

    #[test]
    fn test_shipped_sheet_loads() {
        let sheet = SpriteSheet::from_file("resources/colored_tilemap_packed.png").unwrap();
        let (w, h) = SpriteSheet::required_size();
        assert!(sheet.width() >= w && sheet.height() >= h);
    }

    #[test]
    fn test_missing_file() {
        let err = SpriteSheet::from_file("no/such/sheet.png").err().unwrap();
        assert!(matches!(err, AssetError::Image { .. }));
    }
}
