//! Time sources.
//!
//! Timestamps recorded at ingest and the `now` used by classification must
//! come from the same monotonically non-decreasing clock, in seconds.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// A monotonic clock reporting fractional seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock: seconds elapsed since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for tests and replaying recorded input.
///
/// Clones share the same time, so a caller can keep a handle and advance
/// the clock owned by a pipeline.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    time: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            time: Rc::new(Cell::new(start)),
        }
    }

    /// Move the clock to `time`. Earlier values are ignored.
    pub fn set(&self, time: f64) {
        if time > self.time.get() {
            self.time.set(time);
        }
    }

    pub fn advance(&self, secs: f64) {
        self.set(self.time.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.time.get()
    }
}
