//! Bit-level view over a byte buffer
//!
//! Bit `k` lives in byte `k / 8` at position `k % 8`, least-significant bit
//! first, which is the order CBD consumes seed bits in.

use polysample_api::{Error, Result};

/// Read-only, indexable bit sequence borrowed from a byte slice
#[derive(Clone, Copy, Debug)]
pub struct BitView<'a> {
    bytes: &'a [u8],
}

impl<'a> BitView<'a> {
    /// View `bytes` as `8 * bytes.len()` bits
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Number of addressable bits
    pub fn len_bits(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Bit `k`, or `None` past the end
    #[inline]
    pub fn get(&self, k: usize) -> Option<u8> {
        self.bytes.get(k / 8).map(|byte| (byte >> (k % 8)) & 1)
    }

    /// Bit `k`; out-of-range access is an error
    #[inline]
    pub fn bit(&self, k: usize) -> Result<u8> {
        self.get(k).ok_or(Error::InvalidParameter {
            context: "BitView::bit",
            message: "bit index out of range",
        })
    }

    /// Population count of the `count` bits starting at `start`
    pub fn sum(&self, start: usize, count: usize) -> Result<u16> {
        (start..start + count).try_fold(0u16, |acc, k| Ok(acc + self.bit(k)? as u16))
    }
}
