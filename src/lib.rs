//! # spark-input
//!
//! Bounded input-event pipeline for terminal and windowed applications.
//!
//! Raw keyboard and pointer events are queued in a fixed-capacity ring buffer
//! and classified once per frame: a press followed closely by the matching
//! release becomes a single click (pointer) or key press (keyboard); anything
//! else is passed through unchanged, in arrival order.
//!
//! ## Architecture
//!
//! ```text
//! input source ─▶ pending RingBuffer ─▶ EventClassifier ─▶ classified RingBuffer ─▶ EventLog
//!   (ingest)         (overwrite-on-full)    (classify, ≤2/tick)                  (drain_one)
//! ```
//!
//! [`InputPipeline`] owns all of it and is driven from a single thread.
//!
//! ## Modules
//!
//! - [`buffer`] - Fixed-capacity ring buffer
//! - [`types`] - Event types (RawInputEvent, Action, Modifiers)
//! - [`classifier`] - Press/release pairing and timeouts
//! - [`pipeline`] - Per-tick driver owning classifier, clock and log
//! - [`event_log`] - Consumer that formats and records classified events
//! - [`input`] - crossterm event conversion
//! - [`clock`] - Monotonic and manual time sources
//! - [`config`] - Capacity and timing windows

pub mod buffer;
pub mod classifier;
pub mod clock;
pub mod config;
pub mod error;
pub mod event_log;
pub mod input;
pub mod logger;
pub mod pipeline;
pub mod terminal;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use buffer::RingBuffer;
pub use classifier::{Classification, EventClassifier};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{PipelineConfig, CLICK_WINDOW, KEY_WINDOW, RING_CAPACITY};
pub use error::BufferError;
pub use event_log::EventLog;
pub use pipeline::InputPipeline;
