//! Trait definition for the XOF side of the absorb/squeeze handshake

use crate::error::ProducerResult;
use crate::types::Beat;

/// A byte producer driven one beat at a time
///
/// The sampler plays the bus master: it offers absorb beats until the producer
/// acknowledges the one flagged last, then polls for squeeze beats. Neither
/// call may block; "not ready" is expressed through the return value.
pub trait XofProducer {
    /// Offer one absorb beat
    ///
    /// Returns `Ok(true)` when the beat was accepted and `Ok(false)` when the
    /// producer was not ready; the caller re-offers the same beat later.
    fn absorb(&mut self, beat: &Beat) -> ProducerResult<bool>;

    /// Poll for one squeeze beat
    ///
    /// `Ok(None)` means no beat is valid this tick. A beat flagged last ends
    /// the stream for the current run.
    fn squeeze(&mut self) -> ProducerResult<Option<Beat>>;

    /// The sampler needs no more bytes for this run
    fn stop(&mut self);

    /// Drop all state and return to the absorb phase
    fn reset(&mut self);
}

impl<P: XofProducer + ?Sized> XofProducer for &mut P {
    fn absorb(&mut self, beat: &Beat) -> ProducerResult<bool> {
        (**self).absorb(beat)
    }

    fn squeeze(&mut self) -> ProducerResult<Option<Beat>> {
        (**self).squeeze()
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
