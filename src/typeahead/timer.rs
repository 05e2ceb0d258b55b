//! Owned, cancellable one-shot timer
//!
//! The event loop never sleeps on a timer directly. It asks for the next
//! deadline, polls input until then, and calls `fire(now)`. A timer fires at
//! most once per `arm`, and never after `cancel`.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Timer {
    /// How long after `arm` the timer becomes due
    delay: Duration,
    /// When the timer is due, if armed
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm the timer relative to `now`, replacing any earlier deadline
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Time left until the deadline (zero when due), `None` when disarmed
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns `true` exactly once when `now` has reached the deadline.
    /// Firing disarms the timer.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
