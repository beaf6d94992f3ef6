//! Bounded byte FIFO between the XOF producer and the rejection decoder

use polysample_params::{BYTE_QUEUE_CAPACITY, CHUNK_BYTES};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::ring::Ring;

/// FIFO of squeezed bytes pending decode, capacity [`BYTE_QUEUE_CAPACITY`]
///
/// Reads happen a whole chunk at a time: fewer than three buffered bytes is
/// the only condition that stalls the decoder on the input side.
#[derive(Clone, Debug, Default, Zeroize, ZeroizeOnDrop)]
pub struct ByteQueue {
    ring: Ring<u8, BYTE_QUEUE_CAPACITY>,
}

impl ByteQueue {
    /// An empty queue
    pub fn new() -> Self {
        Self { ring: Ring::new() }
    }

    /// Buffered bytes
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Whether nothing is buffered
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Whether a push would be refused
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Free byte slots
    pub fn free(&self) -> usize {
        self.ring.free()
    }

    /// Read cursor, modulo capacity
    pub fn read_cursor(&self) -> usize {
        self.ring.read_cursor()
    }

    /// Write cursor, modulo capacity
    pub fn write_cursor(&self) -> usize {
        self.ring.write_cursor()
    }

    /// Append one byte; a full queue hands it back
    pub fn push(&mut self, byte: u8) -> Result<(), u8> {
        self.ring.push(byte)
    }

    /// Append all of `bytes` or none of them
    ///
    /// Returns `false` without touching the queue when there is not room for
    /// the whole slice.
    pub fn push_slice(&mut self, bytes: &[u8]) -> bool {
        if bytes.len() > self.free() {
            return false;
        }
        for &byte in bytes {
            // Room was checked above
            let _ = self.ring.push(byte);
        }
        true
    }

    /// Whether a whole chunk is buffered
    pub fn has_chunk(&self) -> bool {
        self.len() >= CHUNK_BYTES
    }

    /// The next chunk, left in place
    pub fn peek3(&self) -> Option<[u8; CHUNK_BYTES]> {
        Some([self.ring.peek(0)?, self.ring.peek(1)?, self.ring.peek(2)?])
    }

    /// Remove and return the next chunk
    pub fn pop3(&mut self) -> Option<[u8; CHUNK_BYTES]> {
        let chunk = self.peek3()?;
        self.ring.advance(CHUNK_BYTES);
        Some(chunk)
    }

    /// Drop every buffered byte
    pub fn clear(&mut self) {
        self.ring.zeroize();
    }
}
