//! Fixed-capacity ring buffer with overwrite-on-full semantics.
//!
//! All `C` slots are allocated when the buffer is built, so the producer side
//! (input callbacks) never allocates or blocks. Logical element `i` lives in
//! physical slot `(head + i) % C`.
//!
//! # API
//!
//! - `capacity()` - Fixed slot count `C`
//! - `size()` - Live element count, `0..=C`
//! - `elem(i)` - Logical element `i`, or `OutOfRange`
//! - `insert(v)` - Append; overwrites the oldest element when full
//! - `remove_first()` - Drop the oldest element (no-op when empty)
//! - `clear()` - Reset to empty in O(1)
//!
//! # Example
//!
//! ```
//! use spark_input::RingBuffer;
//!
//! let mut rb: RingBuffer<u32, 2> = RingBuffer::new();
//! rb.insert(1);
//! rb.insert(2);
//! rb.insert(3); // overwrites 1
//!
//! assert_eq!(rb.size(), 2);
//! assert_eq!(*rb.elem(0).unwrap(), 2);
//! ```

use crate::config::RING_CAPACITY;
use crate::error::BufferError;

// =============================================================================
// RING BUFFER
// =============================================================================

/// Bounded FIFO that silently drops its oldest element when full.
pub struct RingBuffer<T, const C: usize = RING_CAPACITY> {
    slots: [Option<T>; C],
    head: usize,
    count: usize,
}

impl<T, const C: usize> RingBuffer<T, C> {
    /// Create an empty buffer with all `C` slots pre-allocated.
    pub fn new() -> Self {
        const { assert!(C > 0, "ring buffer capacity must be non-zero") };
        Self {
            slots: std::array::from_fn(|_| None),
            head: 0,
            count: 0,
        }
    }

    /// Fixed capacity, constant for the buffer's lifetime.
    pub const fn capacity(&self) -> usize {
        C
    }

    /// Current number of live elements.
    pub fn size(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == C
    }

    /// Read logical element `index` (0 is the oldest).
    pub fn elem(&self, index: usize) -> Result<&T, BufferError> {
        let out_of_range = BufferError::OutOfRange {
            index,
            size: self.count,
        };
        if index >= self.count {
            return Err(out_of_range);
        }
        self.slots[(self.head + index) % C]
            .as_ref()
            .ok_or(out_of_range)
    }

    /// The oldest element, if any.
    pub fn first(&self) -> Option<&T> {
        self.elem(0).ok()
    }

    /// Append `value`. When full, the oldest element is overwritten and the
    /// head advances by one.
    pub fn insert(&mut self, value: T) {
        if self.count < C {
            self.slots[(self.head + self.count) % C] = Some(value);
            self.count += 1;
        } else {
            self.slots[self.head] = Some(value);
            self.head = (self.head + 1) % C;
        }
    }

    /// Drop the oldest element. Does nothing when empty.
    pub fn remove_first(&mut self) {
        if self.count > 0 {
            self.head = (self.head + 1) % C;
            self.count -= 1;
        }
    }

    /// Forget all elements. Slot contents are left in place.
    pub fn clear(&mut self) {
        self.head = 0;
        self.count = 0;
    }
}

impl<T, const C: usize> Default for RingBuffer<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let rb: RingBuffer<u32, 4> = RingBuffer::new();
        assert_eq!(rb.capacity(), 4);
        assert_eq!(rb.size(), 0);
        assert!(rb.is_empty());
        assert!(!rb.is_full());
        assert!(rb.first().is_none());
    }

    #[test]
    fn test_default_capacity() {
        let rb: RingBuffer<u8> = RingBuffer::default();
        assert_eq!(rb.capacity(), 64);
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut rb: RingBuffer<u32, 4> = RingBuffer::new();
        rb.insert(10);
        rb.insert(20);
        rb.insert(30);

        assert_eq!(rb.size(), 3);
        assert_eq!(*rb.elem(0).unwrap(), 10);
        assert_eq!(*rb.elem(1).unwrap(), 20);
        assert_eq!(*rb.elem(2).unwrap(), 30);
    }

    #[test]
    fn test_overwrite_keeps_newest_c() {
        let mut rb: RingBuffer<u32, 4> = RingBuffer::new();
        for v in 0..11 {
            rb.insert(v);
        }

        // 11 inserts into 4 slots: 7, 8, 9, 10 survive
        assert!(rb.is_full());
        assert_eq!(rb.size(), 4);
        for i in 0..4 {
            assert_eq!(*rb.elem(i).unwrap(), 7 + i as u32);
        }
    }

    #[test]
    fn test_overwrite_after_head_moved() {
        let mut rb: RingBuffer<u32, 3> = RingBuffer::new();
        rb.insert(1);
        rb.insert(2);
        rb.remove_first();
        rb.insert(3);
        rb.insert(4);
        assert!(rb.is_full());

        rb.insert(5);
        assert_eq!(rb.size(), 3);
        assert_eq!(*rb.elem(0).unwrap(), 3);
        assert_eq!(*rb.elem(1).unwrap(), 4);
        assert_eq!(*rb.elem(2).unwrap(), 5);
    }

    #[test]
    fn test_remove_first_on_empty_is_noop() {
        let mut rb: RingBuffer<u32, 2> = RingBuffer::new();
        rb.remove_first();
        assert_eq!(rb.size(), 0);

        rb.insert(7);
        assert_eq!(*rb.elem(0).unwrap(), 7);
    }

    #[test]
    fn test_remove_first_advances() {
        let mut rb: RingBuffer<u32, 2> = RingBuffer::new();
        rb.insert(1);
        rb.insert(2);
        rb.remove_first();

        assert_eq!(rb.size(), 1);
        assert_eq!(*rb.elem(0).unwrap(), 2);

        // Wraps around the end of the backing array
        rb.insert(3);
        assert_eq!(*rb.elem(0).unwrap(), 2);
        assert_eq!(*rb.elem(1).unwrap(), 3);
    }

    #[test]
    fn test_elem_out_of_range() {
        let mut rb: RingBuffer<u32, 3> = RingBuffer::new();
        assert_eq!(rb.elem(0), Err(BufferError::OutOfRange { index: 0, size: 0 }));

        rb.insert(1);
        assert!(rb.elem(0).is_ok());
        assert_eq!(rb.elem(1), Err(BufferError::OutOfRange { index: 1, size: 1 }));
        assert_eq!(rb.elem(99), Err(BufferError::OutOfRange { index: 99, size: 1 }));

        for v in 0..10 {
            rb.insert(v);
        }
        assert_eq!(rb.elem(3), Err(BufferError::OutOfRange { index: 3, size: 3 }));
    }

    #[test]
    fn test_clear_resets() {
        let mut rb: RingBuffer<u32, 3> = RingBuffer::new();
        rb.insert(1);
        rb.insert(2);
        rb.remove_first();
        rb.clear();

        assert!(rb.is_empty());
        assert!(rb.elem(0).is_err());

        rb.insert(9);
        assert_eq!(*rb.elem(0).unwrap(), 9);
    }
}
