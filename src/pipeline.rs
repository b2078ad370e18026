//! Input pipeline - the single owner of the event classifier, its clock and
//! the event log.
//!
//! # Per-tick flow
//!
//! ```text
//! input callbacks ──ingest()──▶ pending ─┐
//!   (0..n per tick)                      │ classify(now)   once per tick
//!                                        ▼
//!                                   classified ──drain_one()──▶ EventLog
//!                                                 once per tick
//! ```
//!
//! Everything runs on one thread in that order. Nothing blocks; the only
//! error is an out-of-range buffer read, which is surfaced from `tick`.

use log::debug;

use crate::classifier::{Classification, EventClassifier};
use crate::clock::{Clock, MonotonicClock};
use crate::config::PipelineConfig;
use crate::error::BufferError;
use crate::event_log::EventLog;
use crate::types::{Action, Modifiers, RawInputEvent};

pub struct InputPipeline<K: Clock = MonotonicClock> {
    classifier: EventClassifier,
    clock: K,
    log: EventLog,
    ticks: u64,
}

impl InputPipeline<MonotonicClock> {
    /// Pipeline on the wall clock, starting at zero now.
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<K: Clock> InputPipeline<K> {
    pub fn with_clock(config: PipelineConfig, clock: K) -> Self {
        debug!(
            "input pipeline: click window {:?}, key window {:?}",
            config.click_window, config.key_window
        );
        Self {
            classifier: EventClassifier::new(config),
            clock,
            log: EventLog::default(),
            ticks: 0,
        }
    }

    /// Replace the event log (e.g. one with a different history size).
    pub fn with_event_log(mut self, log: EventLog) -> Self {
        self.log = log;
        self
    }

    // -------------------------------------------------------------------------
    // Input side
    // -------------------------------------------------------------------------

    /// Queue an already timestamped raw event.
    pub fn ingest(&mut self, event: RawInputEvent) {
        self.classifier.ingest(event);
    }

    /// Queue a key event stamped with the pipeline clock.
    pub fn record_key(&mut self, code: u32, modifiers: Modifiers, action: Action) {
        let now = self.clock.now();
        self.ingest(RawInputEvent::key(code, modifiers, action, now));
    }

    /// Queue a pointer button event stamped with the pipeline clock.
    pub fn record_button(&mut self, button: u8, modifiers: Modifiers, action: Action) {
        let now = self.clock.now();
        self.ingest(RawInputEvent::button(button, modifiers, action, now));
    }

    /// Queue a pointer move stamped with the pipeline clock.
    pub fn record_move(&mut self, x: f64, y: f64) {
        let now = self.clock.now();
        self.ingest(RawInputEvent::move_to(x, y, now));
    }

    // -------------------------------------------------------------------------
    // Tick
    // -------------------------------------------------------------------------

    /// Classify once, then hand at most one classified event to the log.
    pub fn tick(&mut self) -> Result<Option<RawInputEvent>, BufferError> {
        self.ticks += 1;

        let now = self.clock.now();
        if let Classification::Merged = self.classifier.classify(now)? {
            debug!("tick {}: merged pair at {:.3}s", self.ticks, now);
        }

        let event = self.classifier.drain_one();
        if let Some(event) = &event {
            self.log.record(event);
        }
        Ok(event)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn classifier(&self) -> &EventClassifier {
        &self.classifier
    }

    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Drop all queued events. The log is left alone.
    pub fn reset(&mut self) {
        self.classifier.reset();
    }
}

// =============================================================================
// TESTS
// =============================================================================
