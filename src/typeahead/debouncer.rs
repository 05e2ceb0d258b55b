use std::time::{Duration, Instant};

use super::timer::Timer;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// What the caller has to do after a keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDisposition {
    /// A lookup is scheduled for when the quiet period ends
    Scheduled,
    /// Input is empty: clear results now, no lookup will happen
    Cleared,
}

/// Coalesces keystrokes into a single delayed lookup trigger
#[derive(Debug)]
pub struct DebounceScheduler {
    /// The single pending debounce timer
    timer: Timer,
    /// Latest text seen, handed out when the timer fires
    pending_text: Option<String>,
}

impl Default for DebounceScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl DebounceScheduler {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            timer: Timer::new(quiet_period),
            pending_text: None,
        }
    }

    /// Record a keystroke. Every call replaces the pending timer; empty
    /// text cancels it outright.
    pub fn on_input_changed(&mut self, text: &str, now: Instant) -> InputDisposition {
        if text.is_empty() {
            self.cancel();
            return InputDisposition::Cleared;
        }

        self.pending_text = Some(text.to_string());
        self.timer.arm(now);
        InputDisposition::Scheduled
    }

    /// Text to look up, returned once when the quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.timer.fire(now) {
            self.pending_text.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.pending_text = None;
    }

    pub fn has_pending(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn quiet_period(&self) -> Duration {
        self.timer.delay()
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
