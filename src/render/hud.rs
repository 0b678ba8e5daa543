//! HUD text
//!
//! The overlay panel layout and the lines it shows.

use crate::game::Game;

/// HUD panel rectangle (x, y, w, h) in screen pixels
pub const HUD_PANEL: (f32, f32, f32, f32) = (5.0, 5.0, 330.0, 120.0);
/// Left edge of HUD text
pub const HUD_TEXT_X: f32 = 15.0;
/// Top of the first HUD line
pub const HUD_TEXT_TOP: f32 = 10.0;
pub const HUD_LINE_HEIGHT: f32 = 20.0;
pub const HUD_FONT_SIZE: f32 = 14.0;

/// Build the HUD lines for the current state, top to bottom
pub fn hud_lines(game: &Game) -> Vec<String> {
    let camera = game.camera();
    let player = game.player();
    let enemy = game.enemy();
    let (tile_x, tile_y) = player.position.tile();
    let terrain = game
        .active_grid()
        .get_tile(tile_x, tile_y)
        .map_or("?", |tile| tile.tile_type.name());

    let mut lines = vec![
        format!("Camera Target: ({:06.2}, {:06.2})", camera.target.0, camera.target.1),
        format!("Camera Zoom: {:06.2}", camera.zoom),
        format!(
            "Player: ({}, {}) in {} on {}",
            player.position.x,
            player.position.y,
            player.zone.name(),
            terrain
        ),
        format!("Money: {}  XP: {}", player.money, player.xp),
    ];

    if enemy.alive {
        lines.push(format!("Enemy Health: {}", enemy.health));
    }

    if let Some(message) = game.messages().latest() {
        lines.push(message.text.clone());
    }

    lines
}

/// Top y coordinate of HUD line `index`
pub fn line_y(index: usize) -> f32 {
    HUD_TEXT_TOP + index as f32 * HUD_LINE_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, FrameIntent};

    #[test]
    fn test_initial_hud() {
        let game = Game::seeded(1);
        let lines = hud_lines(&game);
        assert_eq!(lines[0], "Camera Target: (024.00, 024.00)");
        assert_eq!(lines[1], "Camera Zoom: 003.00");
        let terrain = game.active_grid().get_tile(3, 3).unwrap().tile_type.name();
        assert_eq!(lines[2], format!("Player: (24, 24) in Overworld on {}", terrain));
        assert_eq!(lines[3], "Money: 1000  XP: 0");
        assert_eq!(lines[4], "Enemy Health: 100");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_hud_tracks_camera() {
        let mut game = Game::seeded(1);
        game.update(&FrameIntent::step(Direction::Right));
        game.update(&FrameIntent::scroll(2.0));
        let lines = hud_lines(&game);
        assert_eq!(lines[0], "Camera Target: (032.00, 024.00)");
        assert_eq!(lines[1], "Camera Zoom: 003.25");
    }

    #[test]
    fn test_hud_names_dungeon_floor() {
        let mut game = Game::seeded(1);
        game.update(&FrameIntent::step(Direction::Right));
        let gate = game.gate().position;
        while game.player().position != gate {
            let dir = if game.player().position.x < gate.x { Direction::Right } else { Direction::Down };
            game.update(&FrameIntent::step(dir));
        }
        game.update(&FrameIntent::interact());
        assert_eq!(hud_lines(&game)[2], "Player: (80, 80) in Dungeon on Dirt");
    }

    #[test]
    fn test_lines_fit_panel() {
        let (_, y, _, h) = HUD_PANEL;
        assert!(line_y(5) + HUD_FONT_SIZE <= y + h);
    }
}
