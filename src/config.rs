//! Pipeline configuration.
//!
//! Capacity is a compile-time constant; the timing windows are fixed at
//! construction and never change afterwards.

use std::time::Duration;

/// Slots in each ring buffer.
pub const RING_CAPACITY: usize = 64;

/// Maximum pointer press→release gap that still counts as a click.
pub const CLICK_WINDOW: Duration = Duration::from_millis(300);

/// Maximum key press→release gap that still counts as a key press.
pub const KEY_WINDOW: Duration = Duration::from_millis(400);

/// Timing thresholds for the event classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Pointer press→release window. Also bounds how long an isolated
    /// pointer event (button or move) waits for a partner.
    ///
    /// Default: 300ms
    pub click_window: Duration,

    /// Keyboard press→release window.
    ///
    /// Default: 400ms
    pub key_window: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            click_window: CLICK_WINDOW,
            key_window: KEY_WINDOW,
        }
    }
}

impl PipelineConfig {
    pub fn with_click_window(mut self, window: Duration) -> Self {
        self.click_window = window;
        self
    }

    pub fn with_key_window(mut self, window: Duration) -> Self {
        self.key_window = window;
        self
    }

    /// Click window in seconds, the unit of event timestamps.
    pub fn click_secs(&self) -> f64 {
        self.click_window.as_secs_f64()
    }

    /// Key window in seconds.
    pub fn key_secs(&self) -> f64 {
        self.key_window.as_secs_f64()
    }
}
