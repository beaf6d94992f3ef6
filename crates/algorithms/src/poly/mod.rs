//! Polynomials assembled from sampler output
//!
//! [`Polynomial`] is the collection target for a complete run, and
//! [`sampling`] wires the samplers to SHAKE the way Kyber derives its noise
//! and matrix polynomials.

pub mod polynomial;
pub mod sampling;

pub use polynomial::Polynomial;
pub use sampling::{sample_noise, sample_uniform};

#[cfg(feature = "alloc")]
pub use sampling::{expand_matrix, sample_noise_vec};

/// Prelude for easy importing of polynomial types and helpers
pub mod prelude {
    pub use super::polynomial::Polynomial;
    pub use super::sampling::{sample_noise, sample_uniform};

    #[cfg(feature = "alloc")]
    pub use super::sampling::{expand_matrix, sample_noise_vec};
}
