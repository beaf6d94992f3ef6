//! Tick driver for step-function samplers
//!
//! The samplers never loop on their own. A [`Driver`] starts a run, calls
//! `step` until the run reports `Done`, and hands every coefficient to the
//! caller as soon as it reaches the output buffer. The tick budget turns a
//! producer that stops delivering into an error instead of a hang.

use polysample_api::{Coefficient, CoefficientSampler, Error, Result, Tick};

use crate::log::{debug, warn};
use crate::poly::Polynomial;

/// Default tick budget of a [`Driver`]
pub const DEFAULT_MAX_TICKS: u64 = 1 << 20;

/// Driver configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriveConfig {
    /// Ticks a run may take before it is aborted; `None` never gives up
    pub max_ticks: Option<u64>,
}

impl DriveConfig {
    /// A budget of `max_ticks` ticks per run
    pub const fn with_max_ticks(max_ticks: u64) -> Self {
        Self {
            max_ticks: Some(max_ticks),
        }
    }

    /// No tick budget
    pub const fn unbounded() -> Self {
        Self { max_ticks: None }
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self::with_max_ticks(DEFAULT_MAX_TICKS)
    }
}

/// Runs samplers to completion
#[derive(Clone, Copy, Debug, Default)]
pub struct Driver {
    config: DriveConfig,
}

impl Driver {
    /// A driver with the given configuration
    pub const fn new(config: DriveConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &DriveConfig {
        &self.config
    }

    /// Start a run and return its coefficients as a lazy iterator
    ///
    /// Dropping the iterator before it is exhausted aborts the run.
    pub fn coefficients<'a, S>(&self, sampler: &'a mut S, seed: &[u8]) -> Result<Coefficients<'a, S>>
    where
        S: CoefficientSampler + ?Sized,
    {
        sampler.start(seed)?;
        debug!(sampler = sampler.name(), "driving run");
        Ok(Coefficients {
            sampler,
            max_ticks: self.config.max_ticks,
            ticks: 0,
            finished: false,
        })
    }

    /// Run a sampler to completion and collect its polynomial
    pub fn run<S>(&self, sampler: &mut S, seed: &[u8]) -> Result<Polynomial>
    where
        S: CoefficientSampler + ?Sized,
    {
        Polynomial::try_from_coefficients(self.coefficients(sampler, seed)?)
    }
}

/// Coefficients of one run, in index order
///
/// Yields exactly `N` items on success. After an error or the final
/// coefficient the iterator is fused.
#[derive(Debug)]
pub struct Coefficients<'a, S: CoefficientSampler + ?Sized> {
    sampler: &'a mut S,
    max_ticks: Option<u64>,
    ticks: u64,
    finished: bool,
}

impl<S: CoefficientSampler + ?Sized> Coefficients<'_, S> {
    /// Ticks spent so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn fail(&mut self, err: Error) -> Option<Result<Coefficient>> {
        self.finished = true;
        Some(Err(err))
    }
}

impl<S: CoefficientSampler + ?Sized> Iterator for Coefficients<'_, S> {
    type Item = Result<Coefficient>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            if let Some(item) = self.sampler.poll_output() {
                return Some(Ok(item.coefficient));
            }

            if let Some(limit) = self.max_ticks {
                if self.ticks >= limit {
                    warn!(limit, sampler = self.sampler.name(), "tick budget exhausted");
                    self.sampler.abort();
                    return self.fail(Error::TickLimit { limit });
                }
            }
            self.ticks += 1;

            match self.sampler.step() {
                Ok(Tick::Done) | Ok(Tick::Idle) => {
                    self.finished = true;
                    debug!(ticks = self.ticks, "run finished");
                    return None;
                }
                Ok(Tick::Progress) | Ok(Tick::Stalled(_)) => {}
                Err(err) => return self.fail(err),
            }
        }
    }
}

impl<S: CoefficientSampler + ?Sized> Drop for Coefficients<'_, S> {
    fn drop(&mut self) {
        if !self.finished {
            self.sampler.abort();
        }
    }
}
