//! Flow controller for streamed rejection sampling
//!
//! A run moves through
//!
//! ```text
//! Idle -> Absorbing -> Squeezing <-> Decoding -> Draining -> Complete -> Idle
//! ```
//!
//! one transition per tick at most. Absorbing hands seed || nonce to the
//! producer in beats; Squeezing pulls one beat into the byte queue when a
//! whole beat fits; Decoding commits one chunk when the output buffer can take
//! everything it yields. Once `N` candidates are accepted the producer is told
//! to stop, leftover bytes are dropped, and the run waits for the consumer.

use core::fmt;

use polysample_api::{
    validate, CoefficientSampler, Beat, Error, OutputItem, Result, Stall, Status, Tick,
    XofProducer,
};
use polysample_params::{BEAT_BYTES, N, NONCE_BYTES, SEED_BYTES, UNIFORM_INPUT_BYTES};
use zeroize::{Zeroize, Zeroizing};

use super::rejection::{DecodeStep, RejectionDecoder};
use crate::buffer::{ByteQueue, OutputBuffer};
use crate::log::{debug, trace, warn};

/// Run state of a [`FlowController`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    /// Waiting for `start`
    Idle,
    /// Offering absorb beats; `offset` bytes of seed || nonce already taken
    Absorbing {
        /// Bytes acknowledged by the producer so far
        offset: usize,
    },
    /// Pulling squeezed bytes into the byte queue
    Squeezing,
    /// Evaluating chunks from the byte queue
    Decoding,
    /// All coefficients accepted; waiting for the consumer
    Draining,
    /// `done` asserted for this tick
    Complete,
}

/// Rejection sampler driven by an XOF producer
pub struct FlowController<P> {
    producer: P,
    input: Zeroizing<[u8; UNIFORM_INPUT_BYTES]>,
    state: FlowState,
    queue: ByteQueue,
    output: OutputBuffer,
    decoder: RejectionDecoder,
    stream_ended: bool,
}

impl<P: XofProducer> FlowController<P> {
    /// An idle controller owning `producer`
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            input: Zeroizing::new([0u8; UNIFORM_INPUT_BYTES]),
            state: FlowState::Idle,
            queue: ByteQueue::new(),
            output: OutputBuffer::new(),
            decoder: RejectionDecoder::new(),
            stream_ended: false,
        }
    }

    /// Start a run from a seed and a separate nonce
    pub fn start_with_nonce(
        &mut self,
        seed: &[u8; SEED_BYTES],
        nonce: [u8; NONCE_BYTES],
    ) -> Result<()> {
        let mut input = Zeroizing::new([0u8; UNIFORM_INPUT_BYTES]);
        input[..SEED_BYTES].copy_from_slice(seed);
        input[SEED_BYTES..].copy_from_slice(&nonce);
        self.start(&input[..])
    }

    /// Current run state
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Coefficients accepted in the current run
    pub fn accepted(&self) -> usize {
        self.decoder.accepted()
    }

    /// Bytes squeezed but not yet decoded
    pub fn byte_queue(&self) -> &ByteQueue {
        &self.queue
    }

    /// Pending output
    pub fn output_buffer(&self) -> &OutputBuffer {
        &self.output
    }

    /// The producer
    pub fn producer(&self) -> &P {
        &self.producer
    }

    /// The producer, mutably
    pub fn producer_mut(&mut self) -> &mut P {
        &mut self.producer
    }

    /// Give the producer back, discarding any run in flight
    pub fn into_producer(mut self) -> P {
        self.abort();
        self.producer
    }

    fn absorb(&mut self, offset: usize) -> Result<Tick> {
        let end = (offset + BEAT_BYTES).min(UNIFORM_INPUT_BYTES);
        let last = end == UNIFORM_INPUT_BYTES;

        let mut beat = Beat::new(&self.input[offset..end], last)?;
        let acknowledged = self.producer.absorb(&beat);
        beat.zeroize();
        if !acknowledged? {
            return Ok(Tick::Stalled(Stall::ProducerBusy));
        }

        self.state = if last {
            trace!("absorb complete");
            FlowState::Squeezing
        } else {
            FlowState::Absorbing { offset: end }
        };
        Ok(Tick::Progress)
    }

    fn squeeze(&mut self) -> Result<Tick> {
        if !self.stream_ended && self.queue.free() >= BEAT_BYTES {
            if let Some(beat) = self.producer.squeeze()? {
                validate::protocol(
                    self.queue.push_slice(beat.as_bytes()),
                    "FlowController::step",
                    "squeezed beat does not fit the byte queue",
                )?;
                self.stream_ended = beat.is_last();
                if self.queue.has_chunk() {
                    self.state = FlowState::Decoding;
                }
                return Ok(Tick::Progress);
            }
        }

        if self.queue.has_chunk() {
            self.state = FlowState::Decoding;
            return Ok(Tick::Progress);
        }
        if self.stream_ended {
            warn!(
                accepted = self.decoder.accepted(),
                leftover = self.queue.len(),
                "byte stream ended before the run completed"
            );
            return Err(Error::StreamExhausted {
                accepted: self.decoder.accepted(),
                required: N,
            });
        }
        Ok(Tick::Stalled(Stall::InputUnderrun))
    }

    fn decode(&mut self) -> Tick {
        match self.decoder.try_commit(&mut self.queue, &mut self.output) {
            DecodeStep::Committed { accepted } => {
                trace!(accepted, total = self.decoder.accepted(), "chunk committed");
                if self.decoder.is_finished() {
                    self.finish_stream();
                } else if !self.queue.has_chunk() {
                    self.state = FlowState::Squeezing;
                }
                Tick::Progress
            }
            DecodeStep::NeedBytes => {
                self.state = FlowState::Squeezing;
                Tick::Stalled(Stall::InputUnderrun)
            }
            DecodeStep::OutputFull => Tick::Stalled(Stall::OutputFull),
            DecodeStep::Finished => {
                self.finish_stream();
                Tick::Progress
            }
        }
    }

    fn finish_stream(&mut self) {
        debug!(
            discarded = self.queue.len(),
            "all coefficients accepted, stopping producer"
        );
        self.producer.stop();
        self.queue.clear();
        self.state = FlowState::Draining;
    }

    fn advance(&mut self) -> Result<Tick> {
        match self.state {
            FlowState::Idle => Ok(Tick::Idle),
            FlowState::Absorbing { offset } => self.absorb(offset),
            FlowState::Squeezing => self.squeeze(),
            FlowState::Decoding => Ok(self.decode()),
            FlowState::Draining => {
                if !self.output.is_empty() {
                    return Ok(Tick::Stalled(Stall::OutputFull));
                }
                self.state = FlowState::Complete;
                Ok(Tick::Progress)
            }
            FlowState::Complete => {
                self.input.zeroize();
                self.state = FlowState::Idle;
                debug!("rejection run complete");
                Ok(Tick::Done)
            }
        }
    }
}

impl<P> fmt::Debug for FlowController<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowController")
            .field("state", &self.state)
            .field("accepted", &self.decoder.accepted())
            .field("queued", &self.queue.len())
            .field("pending", &self.output.len())
            .field("stream_ended", &self.stream_ended)
            .finish_non_exhaustive()
    }
}

impl<P: XofProducer> CoefficientSampler for FlowController<P> {
    fn name(&self) -> &'static str {
        "Rejection"
    }

    fn seed_len(&self) -> usize {
        UNIFORM_INPUT_BYTES
    }

    fn start(&mut self, seed: &[u8]) -> Result<()> {
        if self.state != FlowState::Idle {
            return Err(Error::Busy {
                context: "FlowController::start",
            });
        }
        validate::length("FlowController::start", seed.len(), UNIFORM_INPUT_BYTES)?;

        self.producer.reset();
        self.queue.clear();
        self.output.clear();
        self.decoder.reset();
        self.stream_ended = false;
        self.input.copy_from_slice(seed);
        self.state = FlowState::Absorbing { offset: 0 };
        debug!("rejection run started");
        Ok(())
    }

    fn step(&mut self) -> Result<Tick> {
        let result = self.advance();
        if result.is_err() {
            self.abort();
        }
        result
    }

    fn poll_output(&mut self) -> Option<OutputItem> {
        self.output.pop()
    }

    fn abort(&mut self) {
        if self.state != FlowState::Idle {
            debug!(state = ?self.state, accepted = self.decoder.accepted(), "rejection run aborted");
        }
        self.producer.reset();
        self.input.zeroize();
        self.queue.clear();
        self.output.clear();
        self.decoder.reset();
        self.stream_ended = false;
        self.state = FlowState::Idle;
    }

    fn status(&self) -> Status {
        Status {
            busy: self.state != FlowState::Idle,
            done: self.state == FlowState::Complete,
        }
    }
}
