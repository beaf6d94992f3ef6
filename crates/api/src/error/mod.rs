//! Error handling for the sampling pipeline

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Specialized result types for different operations
/// Result type for a single tick of a sampler
pub type StepResult<T> = Result<T>;
/// Result type for producer handshakes
pub type ProducerResult<T> = Result<T>;
