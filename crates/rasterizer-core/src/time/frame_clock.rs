use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds (clamped).
    pub dt: f32,

    /// Same interval without clamping; use it for rate measurements.
    pub raw_dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,

    /// Unclamped time since the clock was created or last reset.
    pub elapsed: Duration,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so a stall (debugger, minimized window, slow present)
/// does not hand the renderer a pathological step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a clock with default clamps (0.1 ms .. 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the baseline and the frame counter.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last = now;
        self.frame_index = 0;
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let raw = now.saturating_duration_since(self.last);
        let dt = raw.clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            raw_dt: raw.as_secs_f32(),
            now,
            frame_index: self.frame_index,
            elapsed: now.saturating_duration_since(self.start),
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_ticks() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn dt_respects_clamps() {
        let min = Duration::from_millis(5);
        let max = Duration::from_millis(10);
        let mut clock = FrameClock::with_clamps(min, max);

        // Back-to-back ticks are far below the minimum.
        let ft = clock.tick();
        assert!(ft.dt >= min.as_secs_f32() - f32::EPSILON);
        assert!(ft.dt <= max.as_secs_f32() + f32::EPSILON);
    }

    #[test]
    fn raw_dt_is_not_clamped() {
        let mut clock = FrameClock::with_clamps(Duration::from_micros(1), Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(20));

        let ft = clock.tick();
        assert!(ft.dt <= 0.001 + f32::EPSILON);
        assert!(ft.raw_dt >= 0.020);
    }

    #[test]
    fn reset_restarts_counter() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.tick();
        clock.reset();
        assert_eq!(clock.tick().frame_index, 0);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick().elapsed;
        let b = clock.tick().elapsed;
        assert!(b >= a);
    }
}
