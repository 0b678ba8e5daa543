//! Color definitions for the graphical frontend

use macroquad::prelude::*;

/// Clear color behind the world
pub const BACKGROUND: Color = GRAY;

// HUD
pub const HUD_PANEL: Color = Color { a: 0.5, ..SKYBLUE };
pub const HUD_BORDER: Color = BLUE;
pub const HUD_TEXT: Color = YELLOW;
