//! Cancellable fixed-interval clock for the typewriter reveal.
//!
//! The page ticker calls `update()` with `performance.now()` at whatever rate
//! the browser delivers. RevealClock converts that into a whole number of
//! reveal ticks, so reveal speed does not depend on timer jitter and tests can
//! drive it with plain timestamps.

/// Milliseconds between revealed characters.
pub const DEFAULT_REVEAL_INTERVAL_MS: u32 = 50;

/// Largest frame delta honoured. A backgrounded tab resumes gently instead of
/// dumping the whole line at once.
pub const MAX_FRAME_DELTA_MS: f64 = 500.0;

#[derive(Debug, Clone)]
pub struct RevealClock {
    ms_per_tick: f64,
    /// Milliseconds not yet consumed as ticks
    accumulator: f64,
    /// Timestamp of the last update (ms), or of `start`
    last_timestamp: f64,
    running: bool,
}

impl RevealClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            ms_per_tick: interval_ms.max(1) as f64,
            accumulator: 0.0,
            last_timestamp: 0.0,
            running: false,
        }
    }

    /// Begin a fresh run at `now_ms`. The first tick is due one interval later.
    pub fn start(&mut self, now_ms: f64) {
        self.accumulator = 0.0;
        self.last_timestamp = now_ms;
        self.running = true;
    }

    /// Stop producing ticks. Pending time is discarded.
    pub fn cancel(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    /// Feed a wall-clock timestamp. Returns how many ticks are due.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        if !self.running {
            return 0;
        }
        let delta = (now_ms - self.last_timestamp).clamp(0.0, MAX_FRAME_DELTA_MS);
        self.last_timestamp = now_ms;

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        ticks
    }
}

impl Default for RevealClock {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_INTERVAL_MS)
    }
}
