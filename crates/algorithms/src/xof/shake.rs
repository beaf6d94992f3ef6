//! SHAKE-backed producer
//!
//! The permutation lives in the `sha3` crate; this module only adapts its
//! absorb/finalize/read interface to the beat handshake.

use core::fmt;
use core::mem;

use polysample_api::{Beat, Error, Result, XofProducer};
use polysample_params::BEAT_BYTES;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake256};
use zeroize::Zeroize;

/// SHAKE128 producer, used for uniform matrix entries
pub type Shake128Producer = ShakeProducer<Shake128>;

/// SHAKE256 producer
pub type Shake256Producer = ShakeProducer<Shake256>;

enum Phase<X: ExtendableOutput> {
    Absorbing(X),
    Squeezing(X::Reader),
    Stopped,
}

/// An [`XofProducer`] over any `sha3` extendable-output function
///
/// Absorb beats are always acknowledged. The beat flagged last finalizes the
/// sponge, after which every squeeze poll yields a full beat. The stream never
/// ends on its own; the sampler calls [`stop`](XofProducer::stop) when it has
/// enough coefficients.
pub struct ShakeProducer<X: ExtendableOutput> {
    phase: Phase<X>,
    absorbed: usize,
    squeezed: usize,
}

impl<X> ShakeProducer<X>
where
    X: ExtendableOutput + Update + Default,
{
    /// A fresh producer in the absorb phase
    pub fn new() -> Self {
        Self {
            phase: Phase::Absorbing(X::default()),
            absorbed: 0,
            squeezed: 0,
        }
    }

    /// Bytes absorbed since the last reset
    pub fn absorbed(&self) -> usize {
        self.absorbed
    }

    /// Bytes squeezed since the last reset
    pub fn squeezed(&self) -> usize {
        self.squeezed
    }

    /// True once the sponge has been finalized and not yet stopped
    pub fn is_squeezing(&self) -> bool {
        matches!(self.phase, Phase::Squeezing(_))
    }

    /// True after `stop`
    pub fn is_stopped(&self) -> bool {
        matches!(self.phase, Phase::Stopped)
    }
}

impl<X> Default for ShakeProducer<X>
where
    X: ExtendableOutput + Update + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<X: ExtendableOutput> fmt::Debug for ShakeProducer<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self.phase {
            Phase::Absorbing(_) => "absorbing",
            Phase::Squeezing(_) => "squeezing",
            Phase::Stopped => "stopped",
        };
        f.debug_struct("ShakeProducer")
            .field("phase", &phase)
            .field("absorbed", &self.absorbed)
            .field("squeezed", &self.squeezed)
            .finish()
    }
}

impl<X> XofProducer for ShakeProducer<X>
where
    X: ExtendableOutput + Update + Default,
{
    fn absorb(&mut self, beat: &Beat) -> Result<bool> {
        let Phase::Absorbing(xof) = &mut self.phase else {
            return Err(Error::Protocol {
                context: "ShakeProducer::absorb",
                message: "absorb after the final beat",
            });
        };
        xof.update(beat.as_bytes());
        self.absorbed += beat.len();

        if beat.is_last() {
            if let Phase::Absorbing(xof) = mem::replace(&mut self.phase, Phase::Stopped) {
                self.phase = Phase::Squeezing(xof.finalize_xof());
            }
        }
        Ok(true)
    }

    fn squeeze(&mut self) -> Result<Option<Beat>> {
        match &mut self.phase {
            Phase::Absorbing(_) => Err(Error::Protocol {
                context: "ShakeProducer::squeeze",
                message: "squeeze before the final absorb beat",
            }),
            Phase::Squeezing(reader) => {
                let mut bytes = [0u8; BEAT_BYTES];
                reader.read(&mut bytes);
                let beat = Beat::full(bytes, false);
                bytes.zeroize();
                self.squeezed += BEAT_BYTES;
                Ok(Some(beat))
            }
            Phase::Stopped => Ok(None),
        }
    }

    fn stop(&mut self) {
        self.phase = Phase::Stopped;
    }

    fn reset(&mut self) {
        self.phase = Phase::Absorbing(X::default());
        self.absorbed = 0;
        self.squeezed = 0;
    }
}
