//! Time sources.
//!
//! All listgrab time values are offsets from a clock origin. The origin is
//! arbitrary; only differences are meaningful.

use std::cell::Cell;
use std::rc::Rc;
use web_time::{Duration, Instant};

/// Monotonic time since the clock origin.
pub trait TimeSource {
    fn now(&self) -> Duration;
}

/// Wall clock backed by `web_time::Instant`.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Settable clock shared between clones.
///
/// Used for deterministic replays and tests, where the host decides when time
/// moves.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock to `time`. Moving backwards is ignored.
    pub fn set(&self, time: Duration) {
        if time >= self.now.get() {
            self.now.set(time);
        } else {
            log::warn!(
                "ManualClock: ignoring backwards move from {:?} to {:?}",
                self.now.get(),
                time
            );
        }
    }

    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
