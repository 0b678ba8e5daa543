//! Frame timing
//!
//! Holds the loop to its target frame rate.

use std::time::Duration;

/// Paces the main loop to a fixed number of frames per second
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame_time: Duration,
    /// Total frames paced
    frames: u64,
}

impl FrameLimiter {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_time: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            frames: 0,
        }
    }

    /// Length of one frame
    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// How long to sleep after a frame that took `elapsed`; `None` if it ran over
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.frame_time.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Sleep out the rest of the frame
    pub fn wait(&mut self, elapsed: Duration) {
        self.frames += 1;
        match self.remaining(elapsed) {
            Some(rest) => std::thread::sleep(rest),
            None => log::trace!("Frame {} ran over by {:?}", self.frames, elapsed - self.frame_time),
        }
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_hz_frame() {
        let limiter = FrameLimiter::default();
        let ms = limiter.frame_time().as_secs_f64() * 1000.0;
        assert!((ms - 16.666).abs() < 0.01);
    }

    #[test]
    fn test_remaining() {
        let limiter = FrameLimiter::new(50);
        assert_eq!(limiter.remaining(Duration::from_millis(5)), Some(Duration::from_millis(15)));
        assert_eq!(limiter.remaining(Duration::from_millis(20)), None);
        assert_eq!(limiter.remaining(Duration::from_millis(35)), None);
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        assert_eq!(FrameLimiter::new(0).frame_time(), Duration::from_secs(1));
    }
}
