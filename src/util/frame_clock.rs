use web_time::{Duration, Instant};

/// Upper bound on a single reported timestep. A stalled host (debugger,
/// suspended tab) would otherwise teleport the camera on resume.
const MAX_STEP: Duration = Duration::from_millis(250);

/// Derives per-frame `dt` for tick drivers, with a smoothed FPS readout.
pub struct FrameClock {
    /// Last tick timestamp
    last_tick: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start the clock now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Seconds since the previous tick, capped at 250 ms.
    ///
    /// Can return `0.0` when called twice within the timer's resolution;
    /// the navigator rejects that step.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.record(elapsed)
    }

    /// Fold an externally measured frame duration into the FPS estimate and
    /// return it in seconds, capped at 250 ms.
    pub fn record(&mut self, elapsed: Duration) -> f32 {
        let frame_time = elapsed.min(MAX_STEP).as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
