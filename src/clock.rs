use std::time::{Duration, Instant};

/// Measures frame durations, keeps a once-per-second FPS readout and tells the
/// event loop when the next frame is due.
#[derive(Clone, Debug)]
pub struct FrameClock {
    frame_interval: Duration,
    last_frame: Instant,
    frame_count: u32,
    last_fps_instant: Instant,
    fps: u32,
}

impl FrameClock {
    pub fn new(target_fps: u32, now: Instant) -> Self {
        Self {
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1))),
            last_frame: now,
            frame_count: 0,
            last_fps_instant: now,
            fps: 0,
        }
    }

    /// Marks the start of a frame and returns the seconds since the previous one.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let frame_time = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
        frame_time
    }

    /// Recomputes the FPS readout once at least a second has passed since the
    /// previous sample, returning the new readout when one was taken.
    pub fn fps_sample(&mut self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.last_fps_instant).as_secs_f32();
        if elapsed < 1.0 {
            return None;
        }
        self.fps = (self.frame_count as f32 / elapsed).round() as u32;
        self.frame_count = 0;
        self.last_fps_instant = now;
        Some(self.fps)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn next_frame(&self) -> Instant {
        self.last_frame + self.frame_interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame()
    }
}
