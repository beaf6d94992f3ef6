//! Uniform rejection sampling over 3-byte chunks
//!
//! Every chunk `(b0, b1, b2)` yields two 12-bit candidates
//!
//! ```text
//! d1 = b0 + 256 * (b1 & 0x0F)
//! d2 = (b1 >> 4) + 16 * b2
//! ```
//!
//! and a candidate is accepted iff it is below `Q` and fewer than `N`
//! coefficients have been accepted so far, `d2` being judged after `d1`.
//! A chunk is always consumed as a whole, whatever it yields.

use polysample_api::{Coefficient, OutputItem};
use polysample_params::{CANDIDATE_MASK, CHUNK_BYTES, N, Q};

use crate::buffer::{ByteQueue, OutputBuffer};

/// Split a chunk into its two 12-bit candidates `(d1, d2)`
#[inline]
pub fn decode_chunk(chunk: [u8; CHUNK_BYTES]) -> (u16, u16) {
    let [b0, b1, b2] = chunk.map(u16::from);
    let d1 = (b0 | (b1 << 8)) & CANDIDATE_MASK;
    let d2 = (b1 >> 4) | (b2 << 4);
    (d1, d2)
}

/// A decoded value and its verdict
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// 12-bit decoded value
    pub value: u16,
    /// Passed the `< Q` test with room left in the run
    pub accepted: bool,
}

/// Verdicts for both candidates of one chunk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkDecision {
    /// `d1` then `d2`
    pub candidates: [Candidate; 2],
}

impl ChunkDecision {
    /// How many of the two candidates were accepted
    pub fn accepted(&self) -> usize {
        self.candidates.iter().filter(|c| c.accepted).count()
    }

    /// Accepted values in emission order
    pub fn accepted_values(&self) -> impl Iterator<Item = u16> {
        self.candidates
            .into_iter()
            .filter(|c| c.accepted)
            .map(|c| c.value)
    }
}

/// Judge a chunk given the number of coefficients already accepted
pub fn evaluate_chunk(chunk: [u8; CHUNK_BYTES], accepted_so_far: usize) -> ChunkDecision {
    let (d1, d2) = decode_chunk(chunk);
    let mut count = accepted_so_far;

    let first = d1 < Q && count < N;
    if first {
        count += 1;
    }
    let second = d2 < Q && count < N;

    ChunkDecision {
        candidates: [
            Candidate {
                value: d1,
                accepted: first,
            },
            Candidate {
                value: d2,
                accepted: second,
            },
        ],
    }
}

/// What one decode attempt did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeStep {
    /// A chunk was consumed and its accepted candidates buffered
    Committed {
        /// Candidates accepted from the chunk (0, 1 or 2)
        accepted: usize,
    },
    /// Fewer than three bytes buffered
    NeedBytes,
    /// The output buffer lacks room for the chunk's accepted candidates
    OutputFull,
    /// `N` coefficients were already accepted
    Finished,
}

/// Running acceptance count of one rejection-sampling run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RejectionDecoder {
    accepted: usize,
}

impl RejectionDecoder {
    /// A decoder at the start of a run
    pub fn new() -> Self {
        Self::default()
    }

    /// Coefficients accepted so far; also the index of the next one
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Whether all `N` coefficients were accepted
    pub fn is_finished(&self) -> bool {
        self.accepted >= N
    }

    /// Rewind to the start of a run
    pub fn reset(&mut self) {
        self.accepted = 0;
    }

    /// Decode the next chunk if, and only if, all of it can be committed
    ///
    /// The chunk is peeked, judged, and checked against the free output slots
    /// before any byte leaves the queue. On `NeedBytes` and `OutputFull` the
    /// queue and output buffer are untouched.
    pub fn try_commit(&mut self, queue: &mut ByteQueue, output: &mut OutputBuffer) -> DecodeStep {
        if self.is_finished() {
            return DecodeStep::Finished;
        }
        let Some(chunk) = queue.peek3() else {
            return DecodeStep::NeedBytes;
        };

        let decision = evaluate_chunk(chunk, self.accepted);
        if decision.accepted() > output.free_slots() {
            return DecodeStep::OutputFull;
        }

        queue.pop3();
        for value in decision.accepted_values() {
            let index = self.accepted;
            let pushed = output.push(OutputItem {
                coefficient: Coefficient::new(index as u16, value),
                is_last: index == N - 1,
            });
            debug_assert!(pushed.is_ok());
            self.accepted += 1;
        }

        DecodeStep::Committed {
            accepted: decision.accepted(),
        }
    }
}

/// Request/response decoding of a caller-supplied block
///
/// Fills `coeffs[count..]` from the complete chunks of `bytes` and returns the
/// new count with the number of bytes consumed. Decoding stops as soon as `N`
/// coefficients are held; a trailing partial chunk is never consumed, so the
/// caller prepends it to the next block.
pub fn fill_uniform(coeffs: &mut [u16; N], count: usize, bytes: &[u8]) -> (usize, usize) {
    let mut count = count;
    let mut consumed = 0;

    for chunk in bytes.chunks_exact(CHUNK_BYTES) {
        if count >= N {
            break;
        }
        let decision = evaluate_chunk([chunk[0], chunk[1], chunk[2]], count);
        for value in decision.accepted_values() {
            coeffs[count] = value;
            count += 1;
        }
        consumed += CHUNK_BYTES;
    }

    (count, consumed)
}
