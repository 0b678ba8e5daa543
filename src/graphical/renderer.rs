//! Rendering for the graphical frontend
//!
//! Blits the active grid and the entities from the spritesheet, then the HUD.

use macroquad::prelude::*;

use crate::game::{Camera, Game};
use crate::render::hud::{self, HUD_FONT_SIZE, HUD_PANEL, HUD_TEXT_X};
use crate::render::{tile_sprite, SpriteCell, SpriteSheet};
use crate::world::TILE_SIZE;
use super::colors;

/// Draws game state with the spritesheet texture
pub struct Renderer {
    texture: Texture2D,
}

impl Renderer {
    /// Upload the spritesheet to the GPU
    pub fn new(sheet: &SpriteSheet) -> Self {
        let texture = Texture2D::from_rgba8(sheet.width() as u16, sheet.height() as u16, sheet.rgba_bytes());
        texture.set_filter(FilterMode::Nearest);
        Self { texture }
    }

    /// Draw one full frame
    pub fn draw(&self, game: &Game) {
        clear_background(colors::BACKGROUND);
        self.draw_world(game);
        draw_hud(game);
    }

    fn draw_world(&self, game: &Game) {
        let camera = game.camera();
        let zone = game.active_zone();

        for tile in game.active_grid().iter() {
            let (x, y) = tile.pixel_origin();
            self.draw_cell(camera, x as f32, y as f32, tile_sprite(tile.tile_type));
        }

        let gate = game.gate();
        self.draw_cell(camera, gate.position.x as f32, gate.position.y as f32, SpriteCell::DUNGEON_GATE);

        let enemy = game.enemy();
        if enemy.is_active_in(zone) {
            self.draw_cell(camera, enemy.position.x as f32, enemy.position.y as f32, SpriteCell::ENEMY);
        }

        let chest = game.chest();
        if chest.is_active_in(zone) {
            self.draw_cell(camera, chest.position.x as f32, chest.position.y as f32, SpriteCell::CHEST);
        }

        // The player is always where the camera looks
        self.draw_cell(camera, camera.target.0, camera.target.1, SpriteCell::PLAYER);
    }

    /// Draw one sheet cell at a world position
    fn draw_cell(&self, camera: &Camera, world_x: f32, world_y: f32, cell: SpriteCell) {
        let (screen_x, screen_y) = camera.world_to_screen(world_x, world_y);
        let size = TILE_SIZE as f32 * camera.zoom;

        if screen_x + size < 0.0 || screen_x > screen_width()
            || screen_y + size < 0.0 || screen_y > screen_height()
        {
            return;
        }

        let (sx, sy, sw, sh) = cell.source_rect();
        draw_texture_ex(
            &self.texture,
            screen_x,
            screen_y,
            WHITE,
            DrawTextureParams {
                source: Some(Rect::new(sx, sy, sw, sh)),
                dest_size: Some(vec2(size, size)),
                ..Default::default()
            },
        );
    }
}

/// Draw the translucent HUD panel and its text
fn draw_hud(game: &Game) {
    let (x, y, w, h) = HUD_PANEL;
    draw_rectangle(x, y, w, h, colors::HUD_PANEL);
    draw_rectangle_lines(x, y, w, h, 1.0, colors::HUD_BORDER);

    for (i, line) in hud::hud_lines(game).iter().enumerate() {
        // draw_text positions the baseline, not the top
        draw_text(line, HUD_TEXT_X, hud::line_y(i) + HUD_FONT_SIZE, HUD_FONT_SIZE, colors::HUD_TEXT);
    }
}
