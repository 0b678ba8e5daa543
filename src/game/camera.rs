//! Camera
//!
//! The 2D view transform, recomputed from the player every frame.

use crate::config::CameraConfig;
use crate::entities::Position;

/// View transform: world point `target` is drawn at screen point `offset`, scaled by `zoom`
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub target: (f32, f32),
    /// Screen point the target maps to (half the viewport)
    pub offset: (f32, f32),
    pub zoom: f32,
    /// Always 0
    pub rotation: f32,
    zoom_min: f32,
    zoom_max: f32,
    zoom_step: f32,
}

impl Camera {
    /// Create a camera centered on a viewport of the given size
    pub fn new(viewport_width: f32, viewport_height: f32, settings: &CameraConfig) -> Self {
        Self {
            target: (0.0, 0.0),
            offset: (viewport_width / 2.0, viewport_height / 2.0),
            zoom: settings.zoom_initial.clamp(settings.zoom_min, settings.zoom_max),
            rotation: 0.0,
            zoom_min: settings.zoom_min,
            zoom_max: settings.zoom_max,
            zoom_step: settings.zoom_step,
        }
    }

    /// Keep the target centered after the window is resized
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.offset = (width / 2.0, height / 2.0);
    }

    /// Zoom by wheel notches, clamped to the configured range
    pub fn apply_wheel(&mut self, notches: f32) {
        if notches != 0.0 {
            self.zoom = (self.zoom + notches * self.zoom_step).clamp(self.zoom_min, self.zoom_max);
        }
    }

    /// Point the camera at a world position
    pub fn follow(&mut self, pos: Position) {
        self.target = (pos.x as f32, pos.y as f32);
    }

    /// Map a world point to screen pixels
    pub fn world_to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (
            (x - self.target.0) * self.zoom + self.offset.0,
            (y - self.target.1) * self.zoom + self.offset.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(800.0, 600.0, &CameraConfig::default())
    }

    #[test]
    fn test_offset_is_half_viewport() {
        let cam = camera();
        assert_eq!(cam.offset, (400.0, 300.0));
        assert_eq!(cam.zoom, 3.0);
        assert_eq!(cam.rotation, 0.0);
    }

    #[test]
    fn test_wheel_steps_and_clamps() {
        let mut cam = camera();
        cam.apply_wheel(1.0);
        assert_eq!(cam.zoom, 3.125);
        cam.apply_wheel(-5.0);
        assert_eq!(cam.zoom, 3.0);
        for _ in 0..100 {
            cam.apply_wheel(1.0);
        }
        assert_eq!(cam.zoom, 8.0);
    }

    #[test]
    fn test_zoom_stays_in_range_for_any_sequence() {
        let mut cam = camera();
        let wheel = [1.0, -1.0, 3.0, 40.0, -0.5, -80.0, 2.0, 1.0, 1.0, -1.0];
        for notches in wheel.iter().cycle().take(200) {
            cam.apply_wheel(*notches);
            assert!((3.0..=8.0).contains(&cam.zoom));
        }
    }

    #[test]
    fn test_target_maps_to_offset() {
        let mut cam = camera();
        cam.follow(Position::new(24, 24));
        assert_eq!(cam.world_to_screen(24.0, 24.0), (400.0, 300.0));
        assert_eq!(cam.world_to_screen(32.0, 24.0), (424.0, 300.0));
    }
}
