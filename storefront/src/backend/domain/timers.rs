//! Host-driven timers.
//!
//! Nothing here sleeps or spawns. The page host reports elapsed time through
//! tick events and each timer says whether it fired.

use std::time::Duration;

/// Repeating timer, e.g. testimonial auto-advance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Advance by `dt` and return how many periods completed.
    /// The leftover carries into the next call.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        if self.period.is_zero() {
            return 0;
        }

        let total = self.elapsed.saturating_add(dt);
        if total < self.period {
            self.elapsed = total;
            return 0;
        }

        let period_nanos = self.period.as_nanos();
        let total_nanos = total.as_nanos();
        // The remainder is shorter than the period, so it fits a Duration.
        self.elapsed = u64::try_from(total_nanos % period_nanos)
            .map(Duration::from_nanos)
            .unwrap_or(Duration::ZERO);
        u64::try_from(total_nanos / period_nanos).unwrap_or(u64::MAX)
    }
}

/// One-shot timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeout {
    remaining: Duration,
    fired: bool,
}

impl Timeout {
    pub fn new(after: Duration) -> Self {
        Self {
            remaining: after,
            fired: false,
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.fired
    }

    /// Advance by `dt`; returns true exactly once, on the tick it expires
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.fired {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(dt);
        if self.remaining.is_zero() {
            self.fired = true;
            return true;
        }
        false
    }
}
