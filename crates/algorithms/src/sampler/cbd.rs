//! Centered binomial distribution sampler
//!
//! Coefficient `i` is `x - y mod Q`, where `x` and `y` count the set bits in
//! two adjacent `eta`-bit windows starting at bit `2 * i * eta` of the seed.
//! No candidate is ever rejected, so a run takes exactly `N` sampling steps.

use core::fmt;

use polysample_api::{
    validate, CoefficientSampler, Coefficient, Error, OutputItem, Result, Stall, Status, Tick,
};
use polysample_internal::constant_time::ct_sub_mod;
use polysample_params::{cbd_seed_bytes, is_supported_eta, MAX_CBD_SEED_BYTES, N, Q};
use zeroize::{Zeroize, Zeroizing};

use crate::bits::BitView;
use crate::buffer::OutputBuffer;
use crate::log::debug;

/// Reject any `eta` outside the supported set
fn check_eta(eta: u8) -> Result<()> {
    validate::parameter(is_supported_eta(eta), "CBD sampling", "eta must be 2 or 3")
}

/// Coefficient `index` of CBD(`eta`) over `bits`
pub fn cbd_coefficient(bits: &BitView<'_>, index: usize, eta: u8) -> Result<u16> {
    let eta = eta as usize;
    let base = 2 * index * eta;
    let x = bits.sum(base, eta)?;
    let y = bits.sum(base + eta, eta)?;
    Ok(ct_sub_mod(x, y, Q))
}

/// One-shot CBD(`eta`) over a complete seed of `64 * eta` bytes
pub fn sample_cbd(seed: &[u8], eta: u8) -> Result<[u16; N]> {
    check_eta(eta)?;
    validate::length("sample_cbd", seed.len(), cbd_seed_bytes(eta))?;

    let bits = BitView::new(seed);
    let mut coeffs = [0u16; N];
    for (i, coeff) in coeffs.iter_mut().enumerate() {
        *coeff = cbd_coefficient(&bits, i, eta)?;
    }
    Ok(coeffs)
}

/// Run state of a [`CbdSampler`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CbdState {
    /// Waiting for `start`
    Idle,
    /// Seed latched; the bit view is built on the next tick
    Converting,
    /// Emitting coefficient `index`
    Sampling {
        /// Next index to emit
        index: u16,
    },
    /// All coefficients produced; waiting for the consumer
    Draining,
    /// `done` asserted for this tick
    Complete,
}

/// Step-driven CBD sampler
///
/// ```
/// use polysample_algorithms::sampler::CbdSampler;
/// use polysample_algorithms::drive::Driver;
///
/// let mut sampler = CbdSampler::new(2).unwrap();
/// let poly = Driver::default().run(&mut sampler, &[0u8; 128]).unwrap();
/// assert!(poly.as_coeffs_slice().iter().all(|&c| c == 0));
/// ```
#[derive(Clone)]
pub struct CbdSampler {
    eta: u8,
    seed: Zeroizing<[u8; MAX_CBD_SEED_BYTES]>,
    state: CbdState,
    output: OutputBuffer,
}

impl CbdSampler {
    /// A sampler for CBD(`eta`), `eta` in {2, 3}
    pub fn new(eta: u8) -> Result<Self> {
        check_eta(eta)?;
        Ok(Self {
            eta,
            seed: Zeroizing::new([0u8; MAX_CBD_SEED_BYTES]),
            state: CbdState::Idle,
            output: OutputBuffer::new(),
        })
    }

    /// Shape parameter
    pub fn eta(&self) -> u8 {
        self.eta
    }

    /// Current run state
    pub fn state(&self) -> CbdState {
        self.state
    }

    /// Pending output
    pub fn output_buffer(&self) -> &OutputBuffer {
        &self.output
    }

    fn seed(&self) -> &[u8] {
        &self.seed[..cbd_seed_bytes(self.eta)]
    }

    fn sample(&mut self, index: u16) -> Result<Tick> {
        if self.output.free_slots() == 0 {
            return Ok(Tick::Stalled(Stall::OutputFull));
        }

        let value = cbd_coefficient(&BitView::new(self.seed()), index as usize, self.eta)?;
        let is_last = index as usize == N - 1;
        self.output
            .push(OutputItem {
                coefficient: Coefficient::new(index, value),
                is_last,
            })
            .map_err(|_| Error::Protocol {
                context: "CbdSampler::step",
                message: "output buffer refused a checked push",
            })?;

        self.state = if is_last {
            CbdState::Draining
        } else {
            CbdState::Sampling { index: index + 1 }
        };
        Ok(Tick::Progress)
    }

    fn advance(&mut self) -> Result<Tick> {
        match self.state {
            CbdState::Idle => Ok(Tick::Idle),
            CbdState::Converting => {
                self.state = CbdState::Sampling { index: 0 };
                Ok(Tick::Progress)
            }
            CbdState::Sampling { index } => self.sample(index),
            CbdState::Draining => {
                if !self.output.is_empty() {
                    return Ok(Tick::Stalled(Stall::OutputFull));
                }
                self.state = CbdState::Complete;
                Ok(Tick::Progress)
            }
            CbdState::Complete => {
                self.seed.zeroize();
                self.state = CbdState::Idle;
                debug!(eta = self.eta, "CBD run complete");
                Ok(Tick::Done)
            }
        }
    }
}

impl fmt::Debug for CbdSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CbdSampler")
            .field("eta", &self.eta)
            .field("state", &self.state)
            .field("pending", &self.output.len())
            .finish_non_exhaustive()
    }
}

impl CoefficientSampler for CbdSampler {
    fn name(&self) -> &'static str {
        "CBD"
    }

    fn seed_len(&self) -> usize {
        cbd_seed_bytes(self.eta)
    }

    fn start(&mut self, seed: &[u8]) -> Result<()> {
        if self.state != CbdState::Idle {
            return Err(Error::Busy {
                context: "CbdSampler::start",
            });
        }
        validate::length("CbdSampler::start", seed.len(), self.seed_len())?;

        self.output.clear();
        self.seed.zeroize();
        self.seed[..seed.len()].copy_from_slice(seed);
        self.state = CbdState::Converting;
        debug!(eta = self.eta, "CBD run started");
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
        if self.state != CbdState::Idle {
            debug!(state = ?self.state, "CBD run aborted");
        }
        self.seed.zeroize();
        self.output.clear();
        self.state = CbdState::Idle;
    }

    fn status(&self) -> Status {
        Status {
            busy: self.state != CbdState::Idle,
            done: self.state == CbdState::Complete,
        }
    }
}
