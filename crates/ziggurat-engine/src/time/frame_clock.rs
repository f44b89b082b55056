/// Frame timing snapshot handed to every layer's update.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// The host scheduler's monotonic timestamp for this tick, in
    /// milliseconds, passed through untouched.
    pub timestamp: f64,

    /// Time elapsed since the previous tick, in seconds, clamped.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots from host timestamps.
///
/// The scheduler is an external capability here, so the clock does not read
/// time itself; it remembers the previous timestamp it was handed and
/// derives the delta.
///
/// Delta time is clamped to avoid pathological values when the host is
/// paused by the debugger, minimized, or stalls. The clamp doubles as the
/// guard against non-monotonic timestamps: a backwards step yields the
/// minimum delta, never a negative one.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    frame_index: u64,
    dt_min: f32,
    dt_max: f32,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    ///
    /// Clamp rationale:
    /// - minimum prevents zero-dt behavior when ticks arrive back to back
    /// - maximum prevents simulation explosions after long stalls
    pub fn new() -> Self {
        Self {
            last: None,
            frame_index: 0,
            dt_min: 0.0001, // 0.1 ms
            dt_max: 0.25,   // 250 ms
        }
    }

    /// Creates a clock with custom delta-time clamps, in seconds.
    pub fn with_clamps(dt_min: f32, dt_max: f32) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: None,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the clock baseline.
    ///
    /// The next tick yields the minimum delta, as if it were the first.
    /// Useful when resuming after a suspension the host did not tick
    /// through.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Folds one scheduler timestamp (milliseconds) into a `FrameTime`.
    pub fn tick(&mut self, timestamp: f64) -> FrameTime {
        let dt = match self.last {
            None => self.dt_min,
            Some(prev) => {
                let raw = ((timestamp - prev) / 1000.0) as f32;
                raw.clamp(self.dt_min, self.dt_max)
            }
        };

        self.last = Some(timestamp);

        let ft = FrameTime {
            timestamp,
            dt,
            frame_index: self.frame_index,
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
