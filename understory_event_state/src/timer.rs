// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-clocked timers.
//!
//! Neither type schedules anything. The host calls `poll` from whatever timer
//! or frame callback it already has and acts when it returns `true`. All
//! timestamps are milliseconds on a monotonic clock chosen by the caller.

/// Quiet window applied to resize bursts before layout is recomputed.
pub const RESIZE_DEBOUNCE_MS: u64 = 250;

/// Fires once after triggers stop arriving for `delay` milliseconds.
///
/// Each [`Debouncer::trigger`] replaces the pending deadline, so only the last
/// trigger of a burst leads to a firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    delay: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet window.
    pub const fn new(delay: u64) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Quiet window in milliseconds.
    pub const fn delay(&self) -> u64 {
        self.delay
    }

    /// Arm (or re-arm) the debouncer, cancelling any earlier pending deadline.
    pub fn trigger(&mut self, now: u64) {
        self.deadline = Some(now.saturating_add(self.delay));
    }

    /// Returns `true` exactly once when the deadline has been reached.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending deadline. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Returns `true` while a deadline is pending.
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }
}

/// A pausable periodic tick.
///
/// Polling late never replays missed periods: one poll yields at most one
/// tick, and the next tick is scheduled on the period grid after `now`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    period: u64,
    next_due: Option<u64>,
}

impl Interval {
    /// Create a stopped interval. A zero period is treated as one millisecond.
    pub const fn new(period: u64) -> Self {
        Self {
            period: if period == 0 { 1 } else { period },
            next_due: None,
        }
    }

    /// Period in milliseconds.
    pub const fn period(&self) -> u64 {
        self.period
    }

    /// Start ticking one period from `now`. Has no effect when already running.
    pub fn start(&mut self, now: u64) {
        if self.next_due.is_none() {
            self.next_due = Some(now.saturating_add(self.period));
        }
    }

    /// Stop ticking.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Start a fresh period from `now`, whether or not the interval was running.
    pub fn restart(&mut self, now: u64) {
        self.next_due = Some(now.saturating_add(self.period));
    }

    /// Returns `true` while running.
    pub const fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Time of the next tick, if running.
    pub const fn next_due(&self) -> Option<u64> {
        self.next_due
    }

    /// Returns `true` if a tick is due at `now`.
    pub fn poll(&mut self, now: u64) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let missed = (now - due) / self.period;
        self.next_due = Some(due.saturating_add((missed + 1).saturating_mul(self.period)));
        true
    }
}
