//! Constants for the Kyber sampling front end

#[cfg(feature = "serde")]
use serde::Serialize;

/// Kyber polynomial degree
pub const KYBER_N: usize = 256;

/// Kyber modulus
pub const KYBER_Q: u16 = 3329;

/// Sampling-relevant parameters of one Kyber security level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct KyberVariant {
    /// Algorithm name
    pub name: &'static str,

    /// Number of polynomials (dimension)
    pub k: usize,

    /// Error distribution parameter for the secret and first error vector
    pub eta1: u8,

    /// Error distribution parameter for the encryption noise
    pub eta2: u8,
}

impl KyberVariant {
    /// Seed length consumed by one CBD polynomial drawn with `eta1`
    pub const fn eta1_seed_bytes(&self) -> usize {
        crate::sampler::cbd_seed_bytes(self.eta1)
    }

    /// Seed length consumed by one CBD polynomial drawn with `eta2`
    pub const fn eta2_seed_bytes(&self) -> usize {
        crate::sampler::cbd_seed_bytes(self.eta2)
    }
}

/// Kyber-512 parameters
pub const KYBER512: KyberVariant = KyberVariant {
    name: "Kyber-512",
    k: 2,
    eta1: 3,
    eta2: 2,
};

/// Kyber-768 parameters
pub const KYBER768: KyberVariant = KyberVariant {
    name: "Kyber-768",
    k: 3,
    eta1: 2,
    eta2: 2,
};

/// Kyber-1024 parameters
pub const KYBER1024: KyberVariant = KyberVariant {
    name: "Kyber-1024",
    k: 4,
    eta1: 2,
    eta2: 2,
};
