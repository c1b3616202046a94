// SPDX-License-Identifier: MPL-2.0
//! Cancelable timer handles on an explicit `Instant` timeline.
//!
//! A handle is armed with the current instant and polled with later instants.
//! Dropping or replacing a handle cancels it; nothing fires behind the owner's
//! back.

use std::time::{Duration, Instant};

/// Fires once, at a fixed deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    deadline: Instant,
}

impl OneShot {
    /// Arms a timer that is due `delay` after `now`.
    #[must_use]
    pub fn arm(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Whether the deadline has been reached at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Fires repeatedly, every `period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next: Instant,
}

impl Interval {
    /// Arms a repeating timer whose first firing is `period` after `start`.
    #[must_use]
    pub fn arm(start: Instant, period: Duration) -> Self {
        Self {
            period,
            next: start + period,
        }
    }

    /// Instant of the next pending firing.
    #[cfg(test)]
    #[must_use]
    pub fn next_due(&self) -> Instant {
        self.next
    }

    /// Consumes one pending firing, if one is due at `now`.
    ///
    /// Returns the instant the firing was scheduled for. Call repeatedly to
    /// catch up on firings missed by a coarse poll.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        if now < self.next {
            return None;
        }
        let fired = self.next;
        self.next += self.period;
        Some(fired)
    }
}
