//! Finite, replayable producer over a byte slice

use polysample_api::{validate, Beat, Error, Result, XofProducer};
use polysample_params::{BEAT_BYTES, UNIFORM_INPUT_BYTES};
use zeroize::Zeroize;

/// Replays a fixed byte stream through the squeeze side of the handshake
///
/// Absorbed bytes are recorded, not hashed, so tests can check exactly what a
/// sampler offered. The final squeeze beat carries the `last` flag and may be
/// shorter than [`BEAT_BYTES`]; an empty stream ends with a single
/// [`Beat::terminator`]. Stalls can be injected on either side:
/// `with_gaps(n)` answers every `n`-th squeeze poll with "not valid" and
/// `with_absorb_backpressure(n)` refuses every `n`-th absorb offer. Periods
/// below 2 disable injection.
#[derive(Clone, Debug)]
pub struct SliceProducer<'a> {
    stream: &'a [u8],
    position: usize,
    absorbed: [u8; UNIFORM_INPUT_BYTES],
    absorbed_len: usize,
    absorb_beats: usize,
    absorb_done: bool,
    absorb_offers: usize,
    absorb_period: usize,
    squeeze_polls: usize,
    gap_period: usize,
    ended: bool,
    stopped: bool,
}

impl<'a> SliceProducer<'a> {
    /// A producer that will squeeze `stream` once
    pub fn new(stream: &'a [u8]) -> Self {
        Self {
            stream,
            position: 0,
            absorbed: [0u8; UNIFORM_INPUT_BYTES],
            absorbed_len: 0,
            absorb_beats: 0,
            absorb_done: false,
            absorb_offers: 0,
            absorb_period: 0,
            squeeze_polls: 0,
            gap_period: 0,
            ended: false,
            stopped: false,
        }
    }

    /// Answer every `period`-th squeeze poll with `None`
    pub fn with_gaps(mut self, period: usize) -> Self {
        self.gap_period = period;
        self
    }

    /// Refuse every `period`-th absorb offer
    pub fn with_absorb_backpressure(mut self, period: usize) -> Self {
        self.absorb_period = period;
        self
    }

    /// Bytes absorbed since the last reset
    pub fn absorbed(&self) -> &[u8] {
        &self.absorbed[..self.absorbed_len]
    }

    /// Acknowledged absorb beats since the last reset
    pub fn absorb_beats(&self) -> usize {
        self.absorb_beats
    }

    /// Stream bytes handed out since the last reset
    pub fn consumed(&self) -> usize {
        self.position
    }

    /// Stream bytes not yet handed out
    pub fn remaining(&self) -> usize {
        self.stream.len() - self.position
    }

    /// Whether the sampler called `stop` during the current run
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn injected(counter: &mut usize, period: usize) -> bool {
        *counter += 1;
        period >= 2 && *counter % period == 0
    }
}

impl XofProducer for SliceProducer<'_> {
    fn absorb(&mut self, beat: &Beat) -> Result<bool> {
        validate::protocol(
            !self.absorb_done,
            "SliceProducer::absorb",
            "absorb after the final beat",
        )?;
        if Self::injected(&mut self.absorb_offers, self.absorb_period) {
            return Ok(false);
        }

        let end = self.absorbed_len + beat.len();
        validate::max_length("SliceProducer::absorb", end, UNIFORM_INPUT_BYTES)?;
        self.absorbed[self.absorbed_len..end].copy_from_slice(beat.as_bytes());
        self.absorbed_len = end;
        self.absorb_beats += 1;
        self.absorb_done = beat.is_last();
        Ok(true)
    }

    fn squeeze(&mut self) -> Result<Option<Beat>> {
        if !self.absorb_done {
            return Err(Error::Protocol {
                context: "SliceProducer::squeeze",
                message: "squeeze before the final absorb beat",
            });
        }
        if self.stopped || self.ended {
            return Ok(None);
        }
        if Self::injected(&mut self.squeeze_polls, self.gap_period) {
            return Ok(None);
        }
        if self.remaining() == 0 {
            self.ended = true;
            return Ok(Some(Beat::terminator()));
        }

        let end = (self.position + BEAT_BYTES).min(self.stream.len());
        let last = end == self.stream.len();
        let beat = Beat::new(&self.stream[self.position..end], last)?;
        self.position = end;
        self.ended = last;
        Ok(Some(beat))
    }

    fn stop(&mut self) {
        self.stopped = true;
    }

    fn reset(&mut self) {
        self.position = 0;
        self.absorbed.zeroize();
        self.absorbed_len = 0;
        self.absorb_beats = 0;
        self.absorb_done = false;
        self.absorb_offers = 0;
        self.squeeze_polls = 0;
        self.ended = false;
        self.stopped = false;
    }
}
