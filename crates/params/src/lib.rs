//! Constant values for the polysample library
//!
//! Everything here is fixed at compile time: the ring dimensions, the widths
//! of the buffers owned by a sampler run, and the Kyber parameter sets the
//! sampling front end is instantiated for.

#![no_std]

pub mod pqc;
pub mod sampler;

pub use pqc::kyber::{KyberVariant, KYBER1024, KYBER512, KYBER768, KYBER_N, KYBER_Q};
pub use sampler::*;
