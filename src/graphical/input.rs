//! Input handling for the graphical frontend
//!
//! Samples the keyboard and mouse once per frame into a `FrameIntent`.

use macroquad::prelude::*;

use crate::game::{Direction, FrameIntent};

/// Keys that move in a direction (arrows and WASD)
pub fn direction_keys(direction: Direction) -> [KeyCode; 2] {
    match direction {
        Direction::Left => [KeyCode::Left, KeyCode::A],
        Direction::Right => [KeyCode::Right, KeyCode::D],
        Direction::Up => [KeyCode::Up, KeyCode::W],
        Direction::Down => [KeyCode::Down, KeyCode::S],
    }
}

/// Interact with the dungeon gate
pub const KEY_INTERACT: KeyCode = KeyCode::E;
/// Pick up loot
pub const KEY_PICKUP: KeyCode = KeyCode::G;

/// Read this frame's input
pub fn read_frame_intent() -> FrameIntent {
    let movement = Direction::first_pressed(|dir| {
        direction_keys(dir).iter().any(|&key| is_key_pressed(key))
    });
    let (_, wheel_y) = mouse_wheel();

    FrameIntent {
        movement,
        interact: is_key_pressed(KEY_INTERACT),
        pickup: is_key_pressed(KEY_PICKUP),
        wheel: wheel_notches(wheel_y),
    }
}

/// Collapse a raw wheel reading to at most one notch. Backends disagree on
/// the scale of a notch, so only the sign is kept.
pub fn wheel_notches(raw: f32) -> f32 {
    if raw > 0.0 {
        1.0
    } else if raw < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Window close button or Escape
pub fn quit_requested() -> bool {
    is_quit_requested() || is_key_pressed(KeyCode::Escape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_notches() {
        assert_eq!(wheel_notches(0.0), 0.0);
        assert_eq!(wheel_notches(120.0), 1.0);
        assert_eq!(wheel_notches(0.25), 1.0);
        assert_eq!(wheel_notches(-3.0), -1.0);
    }

    #[test]
    fn test_every_direction_has_arrow_and_wasd() {
        let mut seen = Vec::new();
        for dir in Direction::PRIORITY {
            for key in direction_keys(dir) {
                assert!(!seen.contains(&key), "{:?} bound twice", key);
                seen.push(key);
            }
        }
        assert_eq!(seen.len(), 8);
    }
}
