//! Arena-backed FIFO ring with a compile-time capacity

use zeroize::Zeroize;

/// Fixed-capacity FIFO over `[T; CAP]`
///
/// `read` and `write` are slot indices modulo `CAP`; `count` disambiguates
/// the full and empty cases when they coincide.
#[derive(Clone, Debug)]
pub struct Ring<T, const CAP: usize> {
    slots: [T; CAP],
    read: usize,
    write: usize,
    count: usize,
}

impl<T: Copy + Default, const CAP: usize> Ring<T, CAP> {
    /// An empty ring
    pub fn new() -> Self {
        Self {
            slots: [T::default(); CAP],
            read: 0,
            write: 0,
            count: 0,
        }
    }

    /// Capacity in items
    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Buffered items
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether nothing is buffered
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether no slot is free
    pub fn is_full(&self) -> bool {
        self.count == CAP
    }

    /// Free slots
    pub fn free(&self) -> usize {
        CAP - self.count
    }

    /// Slot the next pop reads from
    pub fn read_cursor(&self) -> usize {
        self.read
    }

    /// Slot the next push writes to
    pub fn write_cursor(&self) -> usize {
        self.write
    }

    /// Append `item`, handing it back when full
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.slots[self.write] = item;
        self.write = (self.write + 1) % CAP;
        self.count += 1;
        Ok(())
    }

    /// Remove the oldest item
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.read];
        self.read = (self.read + 1) % CAP;
        self.count -= 1;
        Some(item)
    }

    /// Item `offset` positions behind the read cursor, without removing it
    pub fn peek(&self, offset: usize) -> Option<T> {
        if offset >= self.count {
            return None;
        }
        Some(self.slots[(self.read + offset) % CAP])
    }

    /// Discard `n` items from the front; `n` must not exceed `len`
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.count);
        let n = n.min(self.count);
        self.read = (self.read + n) % CAP;
        self.count -= n;
    }

    /// Empty the ring and rewind both cursors
    pub fn clear(&mut self) {
        self.read = 0;
        self.write = 0;
        self.count = 0;
    }
}

impl<T: Copy + Default, const CAP: usize> Default for Ring<T, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Zeroize, const CAP: usize> Zeroize for Ring<T, CAP> {
    fn zeroize(&mut self) {
        self.slots.iter_mut().for_each(Zeroize::zeroize);
        self.read = 0;
        self.write = 0;
        self.count = 0;
    }
}
