use std::thread;
use std::time::{Duration, Instant};

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(10);

/// Fixed-period tick source. A late tick does not cause a burst of catch-up
/// ticks; the schedule restarts from the moment it was noticed.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    #[must_use]
    pub fn starting_at(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next: start + period,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left before the next tick is due at `now`.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Marks the tick due at `now` as consumed and schedules the next one.
    pub fn advance(&mut self, now: Instant) {
        self.next = if now > self.next + self.period {
            now + self.period
        } else {
            self.next + self.period
        };
    }

    /// Blocks until the next tick is due.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}
