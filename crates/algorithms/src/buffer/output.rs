//! Two-slot skid buffer between a sampler and its consumer

use polysample_api::OutputItem;
use polysample_params::OUTPUT_BUFFER_CAPACITY;

use super::ring::Ring;

/// Elastic buffer of pending `(coefficient, is_last)` items
///
/// The sampler checks [`free_slots`](Self::free_slots) before committing to
/// a step, so a push is only refused when that contract was broken.
#[derive(Clone, Debug, Default)]
pub struct OutputBuffer {
    ring: Ring<OutputItem, OUTPUT_BUFFER_CAPACITY>,
}

impl OutputBuffer {
    /// An empty buffer
    pub fn new() -> Self {
        Self { ring: Ring::new() }
    }

    /// Pending items
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Whether the consumer has drained everything
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Free slots
    pub fn free_slots(&self) -> usize {
        self.ring.free()
    }

    /// Queue an item; a full buffer hands it back
    pub fn push(&mut self, item: OutputItem) -> Result<(), OutputItem> {
        self.ring.push(item)
    }

    /// Remove the oldest item
    pub fn pop(&mut self) -> Option<OutputItem> {
        self.ring.pop()
    }

    /// Oldest item, left in place
    pub fn front(&self) -> Option<OutputItem> {
        self.ring.peek(0)
    }

    /// Drop all pending items
    pub fn clear(&mut self) {
        self.ring.clear();
    }
}
