//! Error types.
//!
//! Buffer overflow, empty buffers and unpaired inputs are normal control
//! flow. The only failure is reading past the live end of a ring buffer.

use thiserror::Error;

/// Errors raised by [`RingBuffer`](crate::buffer::RingBuffer) access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Indexed read at or beyond the current logical size.
    #[error("ring buffer index {index} is out of range (size {size})")]
    OutOfRange { index: usize, size: usize },
}
