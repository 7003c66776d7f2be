use std::time::Instant;

use super::traits::FrameTime;

/// Monotonic frame clock, read once per rendered frame
#[derive(Debug, Clone)]
pub struct Clock {
    start: Instant,
    last: f32,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last: 0.0,
        }
    }

    /// Seconds since the clock started
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Read the clock for a new frame
    pub fn tick(&mut self) -> FrameTime {
        let now = self.elapsed().max(self.last);
        let delta = now - self.last;
        self.last = now;
        FrameTime::new(now, delta)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
