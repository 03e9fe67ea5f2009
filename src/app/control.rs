use std::time::{Duration, Instant};

/// Fixed-rate game clock, caps the number of ticks per second
/// without blocking the event loop
pub struct Clock {
    tick_rate: u32,
    tick_duration: Duration,
    /// None before the first tick
    last_tick: Option<Instant>,
    ticks: u64,
}

impl Clock {
    pub fn new(tick_rate: u32) -> Self {
        assert!(tick_rate > 0, "tick rate must be positive");
        Self {
            tick_rate,
            tick_duration: Duration::from_nanos(1_000_000_000 / tick_rate as u64),
            last_tick: None,
            ticks: 0,
        }
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Number of ticks since the clock was created
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// How long until the next tick is due at `now`
    fn remaining(&self, now: Instant) -> Duration {
        match self.last_tick {
            None => Duration::ZERO,
            Some(last) => self.tick_duration.saturating_sub(now.saturating_duration_since(last)),
        }
    }

    /// Whether a tick is due at `now`, starts it if so. Called
    /// once per frame, the first call is always due. At most one
    /// tick per call, a clock that fell more than a full interval
    /// behind skips the missed ticks instead of catching up
    pub fn tick_due(&mut self, now: Instant) -> bool {
        if !self.remaining(now).is_zero() {
            return false;
        }

        self.last_tick = match self.last_tick {
            Some(last) if now.saturating_duration_since(last) < 2 * self.tick_duration => {
                Some(last + self.tick_duration)
            }
            _ => Some(now),
        };
        self.ticks += 1;
        true
    }
}
