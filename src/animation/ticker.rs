// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fixed-cadence tick scheduling on top of the frame clock.

use std::time::Duration;

/// Decides when a fixed-interval tick is due.
///
/// Times are seconds on a monotonic clock, such as egui's `InputState::time`.
/// The first poll after a reset is due immediately. At most one tick is
/// reported per poll, so a slow frame delays the animation instead of
/// making it jump.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<f64>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Change the cadence. Takes effect from the next tick.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Make the next poll due immediately.
    pub fn reset(&mut self) {
        self.next_due = None;
    }

    /// Report whether a tick is due at `now`, and if so schedule the next.
    ///
    /// The next tick is due one interval after this one was due, so frame
    /// lateness does not stretch the cadence. After a stall of a whole
    /// interval or more the schedule restarts from `now`.
    pub fn poll(&mut self, now: f64) -> bool {
        let interval = self.interval.as_secs_f64();
        match self.next_due {
            Some(due) if now < due => false,
            Some(due) if now - due < interval => {
                self.next_due = Some(due + interval);
                true
            }
            _ => {
                self.next_due = Some(now + interval);
                true
            }
        }
    }

    /// Time left until the next tick is due.
    pub fn remaining(&self, now: f64) -> Duration {
        match self.next_due {
            Some(due) if due > now => Duration::from_secs_f64(due - now),
            _ => Duration::ZERO,
        }
    }
}
