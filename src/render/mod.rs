//! Rendering data
//!
//! Framework-independent pieces of the renderer: the spritesheet, the
//! tile-to-sprite mapping and the HUD contents.

pub mod sprites;
pub mod hud;

pub use sprites::{AssetError, SpriteCell, SpriteSheet, tile_sprite};
pub use hud::hud_lines;
