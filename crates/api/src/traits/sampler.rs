//! Trait definition for step-driven coefficient samplers

use crate::error::{Result, StepResult};
use crate::types::{OutputItem, Status, Tick};

/// Common control surface of the CBD and rejection samplers
///
/// A run is a single transaction: `start` opens it from idle, the driver
/// calls `step` once per tick and drains `poll_output` whenever it has room,
/// and the run ends on the tick that returns [`Tick::Done`]. The trait is
/// object safe so callers can swap strategies behind `&mut dyn`.
pub trait CoefficientSampler {
    /// Human-readable sampler name
    fn name(&self) -> &'static str;

    /// Number of seed bytes `start` expects
    fn seed_len(&self) -> usize;

    /// Begin a run; only valid while idle
    ///
    /// The seed length is checked before any state changes.
    fn start(&mut self, seed: &[u8]) -> Result<()>;

    /// Advance the run by one tick
    fn step(&mut self) -> StepResult<Tick>;

    /// Pop the oldest pending output, if any
    fn poll_output(&mut self) -> Option<OutputItem>;

    /// Discard the run and every buffered byte; always legal
    fn abort(&mut self);

    /// Current `busy`/`done` flags
    fn status(&self) -> Status;
}
