use std::time::Duration;

/// Frames-per-second averaged over a fixed sampling window.
///
/// Feed it every frame's delta; once the accumulated time reaches the window,
/// `record` yields the average rate over that window and starts a new one.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: Duration,
    accumulated: Duration,
    frames: u32,
    last: Option<f32>,
}

impl FpsCounter {
    pub fn new(window: Duration) -> Self {
        debug_assert!(!window.is_zero());
        Self {
            window,
            accumulated: Duration::ZERO,
            frames: 0,
            last: None,
        }
    }

    /// Records one frame that took `dt` seconds.
    ///
    /// Returns the smoothed rate when a sampling window completes.
    pub fn record(&mut self, dt: f32) -> Option<f32> {
        self.accumulated += Duration::try_from_secs_f32(dt).unwrap_or(Duration::ZERO);
        self.frames += 1;

        if self.accumulated < self.window {
            return None;
        }

        let fps = self.frames as f32 / self.accumulated.as_secs_f32();
        self.accumulated = Duration::ZERO;
        self.frames = 0;
        self.last = Some(fps);
        Some(fps)
    }

    /// Rate from the most recently completed window.
    pub fn fps(&self) -> Option<f32> {
        self.last
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
