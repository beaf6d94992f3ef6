//! Testing utilities for the polysample library
pub mod vectors;

use polysample_api::{CoefficientSampler, OutputItem, Result, Tick};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaChaRng;

/// Upper bound on ticks for any run driven by these helpers
pub const TICK_BUDGET: usize = 1 << 16;

/// Deterministic RNG for reproducible test inputs
pub fn test_rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

/// `len` bytes from `rng`
pub fn random_bytes<R: RngCore>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    bytes
}

/// What a hand-driven run observed
#[derive(Debug, Clone, Default)]
pub struct RunLog {
    /// Items in the order they were polled
    pub items: Vec<OutputItem>,
    /// Every tick result, `Done` included
    pub ticks: Vec<Tick>,
    /// Ticks on which `status().done` was set before stepping
    pub done_flags: usize,
}

/// Drive `sampler` by hand, polling the output only every `poll_every` ticks
///
/// A slow consumer keeps the skid buffer full and exercises backpressure.
pub fn run_with_consumer<S>(sampler: &mut S, seed: &[u8], poll_every: usize) -> Result<RunLog>
where
    S: CoefficientSampler + ?Sized,
{
    sampler.start(seed)?;
    let mut log = RunLog::default();
    for tick_no in 0..TICK_BUDGET {
        if sampler.status().done {
            log.done_flags += 1;
        }
        let tick = sampler.step()?;
        log.ticks.push(tick);
        if poll_every <= 1 || tick_no % poll_every == 0 || tick.is_done() {
            while let Some(item) = sampler.poll_output() {
                log.items.push(item);
            }
        }
        if tick.is_done() {
            return Ok(log);
        }
    }
    panic!("run did not finish within {TICK_BUDGET} ticks");
}

/// Values of a run's items
pub fn values(items: &[OutputItem]) -> Vec<u16> {
    items.iter().map(|item| item.coefficient.value).collect()
}
