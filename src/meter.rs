use instant::Instant;
use std::time::Duration;

/// Counts frames and reports the average rate once per interval.
pub struct FrameMeter {
    interval: Duration,
    window_start: Instant,
    frames: u32,
}

impl FrameMeter {
    pub fn new(interval_sec: f32) -> Self {
        Self::starting_at(interval_sec, Instant::now())
    }

    pub fn starting_at(interval_sec: f32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs_f32(interval_sec.max(0.001)),
            window_start: now,
            frames: 0,
        }
    }

    #[inline]
    pub fn tick(&mut self) -> Option<f32> {
        self.tick_at(Instant::now())
    }

    /// Count one frame at `now`; returns frames/sec when an interval has elapsed.
    pub fn tick_at(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = if now > self.window_start {
            now - self.window_start
        } else {
            Duration::ZERO
        };
        if elapsed < self.interval {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.window_start = now;
        self.frames = 0;
        Some(fps)
    }
}
