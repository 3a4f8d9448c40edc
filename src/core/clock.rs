use std::time::Instant;

/// Seconds between FPS log lines
pub const FPS_REPORT_INTERVAL: f32 = 1.0;

/// Frame clock - tracks delta time and reports frames per second
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FrameClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.record(delta);
        delta
    }

    /// Account one frame of `delta` seconds
    ///
    /// Returns the new FPS figure when a reporting interval completes.
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed < FPS_REPORT_INTERVAL {
            return None;
        }

        self.fps = self.frames as f32 / self.elapsed;
        log::info!("FPS: {:.1}", self.fps);
        self.frames = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    /// Last reported frames per second
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
        self.frames = 0;
        self.elapsed = 0.0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
