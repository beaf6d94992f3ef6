//! Value types that cross the sampler boundaries
//!
//! Coefficients and output items flow to the consumer, beats flow between a
//! sampler and its XOF producer, and ticks report what one call to
//! [`CoefficientSampler::step`](crate::CoefficientSampler::step) achieved.

use core::fmt;
use polysample_params::BEAT_BYTES;
use zeroize::Zeroize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{validate, Result};

/// An accepted value in `[0, Q)` paired with its output index
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coefficient {
    /// Position in the output polynomial, `0 <= index < N`
    pub index: u16,
    /// Value in `[0, Q)`
    pub value: u16,
}

impl Coefficient {
    /// Pair a value with its index
    pub const fn new(index: u16, value: u16) -> Self {
        Self { index, value }
    }
}

/// One slot of the output skid buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutputItem {
    /// The emitted coefficient
    pub coefficient: Coefficient,
    /// Set exactly on the item carrying index `N - 1`
    pub is_last: bool,
}

/// A single bus transfer of up to [`BEAT_BYTES`] bytes
///
/// Absorb beats carry seed bytes, so the payload is zeroized on request.
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct Beat {
    bytes: [u8; BEAT_BYTES],
    len: u8,
    last: bool,
}

impl Beat {
    /// Build a beat from at most `BEAT_BYTES` bytes
    pub fn new(data: &[u8], last: bool) -> Result<Self> {
        validate::max_length("Beat::new", data.len(), BEAT_BYTES)?;
        validate::protocol(!data.is_empty(), "Beat::new", "beats carry at least one byte")?;

        let mut bytes = [0u8; BEAT_BYTES];
        bytes[..data.len()].copy_from_slice(data);
        Ok(Self {
            bytes,
            len: data.len() as u8,
            last,
        })
    }

    /// A full-width beat
    pub const fn full(bytes: [u8; BEAT_BYTES], last: bool) -> Self {
        Self {
            bytes,
            len: BEAT_BYTES as u8,
            last,
        }
    }

    /// A zero-length beat flagged last
    ///
    /// Lets a finite producer end a stream that has no bytes left to carry.
    pub const fn terminator() -> Self {
        Self {
            bytes: [0u8; BEAT_BYTES],
            len: 0,
            last: true,
        }
    }

    /// Payload bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of payload bytes
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True only for [`Beat::terminator`]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether this is the final beat of its direction
    pub fn is_last(&self) -> bool {
        self.last
    }
}

impl fmt::Debug for Beat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Beat")
            .field("len", &self.len)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

/// Why a tick made no progress
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stall {
    /// Fewer than three bytes buffered and the producer had nothing to give
    InputUnderrun,
    /// The producer did not acknowledge an absorb beat
    ProducerBusy,
    /// The output buffer cannot take the candidates of the next step
    OutputFull,
}

/// Outcome of one call to `step`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tick {
    /// No run is alive
    Idle,
    /// State advanced this tick
    Progress,
    /// Nothing could advance; call again on a later tick
    Stalled(Stall),
    /// The run finished; `done` was asserted for this tick only
    Done,
}

impl Tick {
    /// Whether the tick ended the run
    pub fn is_done(&self) -> bool {
        matches!(self, Tick::Done)
    }
}

/// Control-surface flags of a sampler
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Status {
    /// A run is alive
    pub busy: bool,
    /// The run is in its final, one-step `done` state
    pub done: bool,
}
