//! Event classifier - raw presses/releases → clicks and key presses.
//!
//! Raw events are queued in a low-level `pending` ring buffer. Once per tick,
//! [`EventClassifier::classify`] looks at most two entries from the front of
//! that queue and moves them into the high-level `classified` buffer:
//!
//! ```text
//! pending size │ action this tick
//! ─────────────┼──────────────────────────────────────────────────────────
//!      0       │ nothing
//!      1       │ waited longer than its window? → move unchanged
//!              │ otherwise leave it for a possible partner
//!     ≥2       │ e1 Press + e2 Release, same key/button, within window?
//!              │   yes → one merged event (e2 with Action::Click)
//!              │   no  → e1 then e2, unchanged
//!              │ both are removed from pending either way
//! ```
//!
//! A third pending entry is only looked at on a later tick. Both buffers
//! overwrite their oldest entry when full; ingest never blocks or fails.

use log::{debug, trace};

use crate::buffer::RingBuffer;
use crate::config::PipelineConfig;
use crate::error::BufferError;
use crate::types::{Action, EventSource, RawInputEvent};

// =============================================================================
// CLASSIFICATION RESULT
// =============================================================================

/// What a single `classify` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Nothing pending.
    Idle,
    /// One event pending, still inside its window.
    Waiting,
    /// One event pending, window elapsed; moved through unchanged.
    Expired,
    /// Press/release pair merged into one click or key press.
    Merged,
    /// Two pending events emitted independently.
    Split,
}

// =============================================================================
// EVENT CLASSIFIER
// =============================================================================

/// Owns the low-level and high-level event buffers and moves data between
/// them.
pub struct EventClassifier {
    pending: RingBuffer<RawInputEvent>,
    classified: RingBuffer<RawInputEvent>,
    config: PipelineConfig,
}

impl EventClassifier {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            pending: RingBuffer::new(),
            classified: RingBuffer::new(),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Number of raw events waiting to be classified.
    pub fn pending_len(&self) -> usize {
        self.pending.size()
    }

    /// Number of classified events waiting to be drained.
    pub fn classified_len(&self) -> usize {
        self.classified.size()
    }

    /// Queue a raw event. Drops the oldest pending event when full.
    pub fn ingest(&mut self, event: RawInputEvent) {
        if self.pending.is_full() {
            trace!("pending buffer full, dropping oldest raw event");
        }
        self.pending.insert(event);
    }

    /// Run one classification step at time `now` (seconds).
    pub fn classify(&mut self, now: f64) -> Result<Classification, BufferError> {
        match self.pending.size() {
            0 => Ok(Classification::Idle),
            1 => {
                let event = *self.pending.elem(0)?;
                let wait = now - event.timestamp();
                if wait > self.window_for(&event) {
                    self.pending.remove_first();
                    self.emit(event);
                    Ok(Classification::Expired)
                } else {
                    Ok(Classification::Waiting)
                }
            }
            _ => {
                let first = *self.pending.elem(0)?;
                let second = *self.pending.elem(1)?;
                self.pending.remove_first();
                self.pending.remove_first();

                if self.pairs(&first, &second) {
                    debug!("merged {:?} press/release into one event", first.pair_key());
                    self.emit(second.with_action(Action::Click));
                    Ok(Classification::Merged)
                } else {
                    self.emit(first);
                    self.emit(second);
                    Ok(Classification::Split)
                }
            }
        }
    }

    /// Remove and return the oldest classified event.
    pub fn drain_one(&mut self) -> Option<RawInputEvent> {
        let event = self.classified.first().copied()?;
        self.classified.remove_first();
        Some(event)
    }

    /// Drop everything queued in both buffers.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.classified.clear();
    }

    /// Window (seconds) that applies to `event`. Pointer moves use the click
    /// window.
    fn window_for(&self, event: &RawInputEvent) -> f64 {
        match event.source() {
            EventSource::Keyboard => self.config.key_secs(),
            EventSource::Pointer => self.config.click_secs(),
        }
    }

    fn pairs(&self, first: &RawInputEvent, second: &RawInputEvent) -> bool {
        let same_target = match (first.pair_key(), second.pair_key()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };

        same_target
            && first.action() == Some(Action::Press)
            && second.action() == Some(Action::Release)
            && second.timestamp() - first.timestamp() <= self.window_for(first)
    }

    fn emit(&mut self, event: RawInputEvent) {
        if self.classified.is_full() {
            trace!("classified buffer full, dropping oldest event");
        }
        self.classified.insert(event);
    }
}

impl Default for EventClassifier {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================
