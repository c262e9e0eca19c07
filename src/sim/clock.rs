//! Time sources
//!
//! The simulation reads wall-clock time only for invincibility expiry and
//! the session timer. Everything goes through `Clock` so tests and headless
//! runs can control it.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source, measured from an arbitrary epoch
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Real time since construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new(start: Duration) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Clock advanced by a fixed step per simulated frame
#[derive(Debug)]
pub struct FixedStepClock {
    now: Cell<Duration>,
    step: Duration,
}

impl FixedStepClock {
    pub fn new(step: Duration) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            step,
        }
    }

    /// Step length for `hz` frames per second
    pub fn from_hz(hz: u32) -> Self {
        Self::new(Duration::from_secs(1) / hz.max(1))
    }

    pub fn step(&self) {
        self.now.set(self.now.get() + self.step);
    }
}

impl Clock for FixedStepClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Format a duration as `MM:SS` (minutes wrap at an hour)
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", (secs / 60) % 60, secs % 60)
}
