//! Public API traits and types for the polysample library
//!
//! This crate provides the public API surface shared by every sampler: the
//! error type, the step-driven control traits, and the small value types that
//! cross the producer and consumer boundaries.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{CoefficientSampler, XofProducer};

// Re-export trait modules for direct access
pub use traits::{producer, sampler};
