//! Frame intent
//!
//! One immutable snapshot of what the player asked for this frame.

/// Cardinal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// When several directions are pressed in the same frame, the first one
    /// in this list wins and the others are ignored.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Tile offset of one step in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Pick the highest priority direction for which `is_pressed` holds
    pub fn first_pressed(mut is_pressed: impl FnMut(Direction) -> bool) -> Option<Direction> {
        Self::PRIORITY.into_iter().find(|&dir| is_pressed(dir))
    }
}

/// Everything the update step reads from input in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameIntent {
    /// Requested one-tile step
    pub movement: Option<Direction>,
    /// Interact key pressed (toggles zone at the gate)
    pub interact: bool,
    /// Pickup key pressed (loots the chest)
    pub pickup: bool,
    /// Mouse wheel notches, positive zooms in
    pub wheel: f32,
}

impl FrameIntent {
    /// A frame with no input
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn step(direction: Direction) -> Self {
        Self {
            movement: Some(direction),
            ..Self::default()
        }
    }

    pub fn interact() -> Self {
        Self {
            interact: true,
            ..Self::default()
        }
    }

    pub fn pickup() -> Self {
        Self {
            pickup: true,
            ..Self::default()
        }
    }

    pub fn scroll(notches: f32) -> Self {
        Self {
            wheel: notches,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_left_beats_everything() {
        let pressed = [Direction::Down, Direction::Up, Direction::Left];
        assert_eq!(Direction::first_pressed(|d| pressed.contains(&d)), Some(Direction::Left));
    }

    #[test]
    fn test_priority_right_beats_vertical() {
        let pressed = [Direction::Down, Direction::Right];
        assert_eq!(Direction::first_pressed(|d| pressed.contains(&d)), Some(Direction::Right));
        assert_eq!(Direction::first_pressed(|d| d == Direction::Down), Some(Direction::Down));
        assert_eq!(Direction::first_pressed(|_| false), None);
    }

    #[test]
    fn test_deltas_are_single_steps() {
        for dir in Direction::PRIORITY {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
