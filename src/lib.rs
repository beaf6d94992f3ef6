//! # polysample
//!
//! Step-driven coefficient samplers for Kyber-class lattice cryptography.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! polysample = "0.3"
//! ```
//!
//! ```
//! use polysample::prelude::*;
//!
//! let seed = [0x5Au8; 32];
//! let noise = polysample::algorithms::sample_noise(&seed, 0, 2).unwrap();
//! let uniform = polysample::algorithms::sample_uniform(&seed, 0, 0).unwrap();
//! assert!(noise.as_coeffs_slice().iter().all(|&c| c < polysample::params::Q));
//! assert_ne!(noise, uniform);
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, implies `alloc`
//! - `alloc`: matrix and noise-vector helpers that return `Vec`
//! - `tracing` (default): structured logging of run lifecycle and stalls
//! - `serde`: `Serialize`/`Deserialize` for the public value types
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`polysample-api`]: error type, traits and value types
//! - [`polysample-params`]: compile-time constants and Kyber parameter sets
//! - [`polysample-internal`]: constant-time helpers
//! - [`polysample-algorithms`]: samplers, buffers, producers and the driver

#![cfg_attr(not(feature = "std"), no_std)]

pub use polysample_algorithms as algorithms;
pub use polysample_api as api;
pub use polysample_internal as internal;
pub use polysample_params as params;

pub use subtle;
pub use zeroize;

/// Common imports for polysample users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{CoefficientSampler, XofProducer};

    // Re-export value types
    pub use crate::api::{Beat, Coefficient, OutputItem, Stall, Status, Tick};

    // Samplers and driver
    pub use crate::algorithms::prelude::*;
    pub use crate::algorithms::{CbdState, FlowState};

    pub use crate::params::{KyberVariant, KYBER1024, KYBER512, KYBER768};
}
