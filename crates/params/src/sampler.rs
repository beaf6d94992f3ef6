//! Sizing constants for one sampler instance

use crate::pqc::kyber::{KYBER_N, KYBER_Q};

/// Number of coefficients emitted per run
pub const N: usize = KYBER_N;

/// Coefficient modulus
pub const Q: u16 = KYBER_Q;

/// Length of the public seed fed to the uniform sampler
pub const SEED_BYTES: usize = 32;

/// Length of the domain-separation nonce appended to the seed
pub const NONCE_BYTES: usize = 2;

/// Total absorb input of a uniform (rejection) run: seed || nonce
pub const UNIFORM_INPUT_BYTES: usize = SEED_BYTES + NONCE_BYTES;

/// CBD shape parameters accepted by the sampler
pub const SUPPORTED_ETAS: [u8; 2] = [2, 3];

/// Largest CBD seed across `SUPPORTED_ETAS`
pub const MAX_CBD_SEED_BYTES: usize = cbd_seed_bytes(3);

/// Capacity of the byte FIFO between the XOF and the rejection decoder
pub const BYTE_QUEUE_CAPACITY: usize = 64;

/// Capacity of the output skid buffer
pub const OUTPUT_BUFFER_CAPACITY: usize = 2;

/// Width of one producer bus transfer
pub const BEAT_BYTES: usize = 8;

/// Bytes evaluated per rejection step
pub const CHUNK_BYTES: usize = 3;

/// Mask selecting a 12-bit candidate
pub const CANDIDATE_MASK: u16 = 0x0FFF;

/// Seed length required by CBD(eta) for `N` coefficients
///
/// Each coefficient consumes `2 * eta` bits.
pub const fn cbd_seed_bytes(eta: u8) -> usize {
    N * 2 * eta as usize / 8
}

/// Whether `eta` is one of `SUPPORTED_ETAS`
pub const fn is_supported_eta(eta: u8) -> bool {
    eta == 2 || eta == 3
}
