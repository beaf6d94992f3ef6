//! Kyber-style polynomial sampling over SHAKE
//!
//! Noise polynomials come from CBD over `SHAKE256(seed || nonce)`; matrix
//! entries come from the streamed rejection sampler over
//! `SHAKE128(rho || a || b)`.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use polysample_api::{validate, Result};
use polysample_params::{cbd_seed_bytes, MAX_CBD_SEED_BYTES, SEED_BYTES, UNIFORM_INPUT_BYTES};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;
use zeroize::Zeroizing;

use super::polynomial::Polynomial;
use crate::drive::Driver;
use crate::sampler::{sample_cbd, FlowController};
use crate::xof::Shake128Producer;

#[cfg(feature = "alloc")]
use crate::log::debug;

/// CBD(`eta`) noise polynomial from `SHAKE256(seed || nonce)`
pub fn sample_noise(seed: &[u8; SEED_BYTES], nonce: u8, eta: u8) -> Result<Polynomial> {
    validate::parameter(
        polysample_params::is_supported_eta(eta),
        "sample_noise",
        "eta must be 2 or 3",
    )?;
    let len = cbd_seed_bytes(eta);

    let mut buf = Zeroizing::new([0u8; MAX_CBD_SEED_BYTES]);
    let mut reader = Shake256::default().chain(seed).chain([nonce]).finalize_xof();
    reader.read(&mut buf[..len]);

    Polynomial::from_coeffs(sample_cbd(&buf[..len], eta)?)
}

/// Uniform polynomial from the rejection sampler over `SHAKE128(rho || a || b)`
pub fn sample_uniform(rho: &[u8; SEED_BYTES], a: u8, b: u8) -> Result<Polynomial> {
    let mut flow = FlowController::new(Shake128Producer::new());
    uniform_with(&mut flow, &Driver::default(), rho, a, b)
}

fn uniform_with(
    flow: &mut FlowController<Shake128Producer>,
    driver: &Driver,
    rho: &[u8; SEED_BYTES],
    a: u8,
    b: u8,
) -> Result<Polynomial> {
    let mut input = Zeroizing::new([0u8; UNIFORM_INPUT_BYTES]);
    input[..SEED_BYTES].copy_from_slice(rho);
    input[SEED_BYTES] = a;
    input[SEED_BYTES + 1] = b;
    driver.run(flow, &input[..])
}

/// The `k x k` public matrix with `A[i][j]` from `SHAKE128(rho || j || i)`
///
/// One controller and producer are reused for every entry.
#[cfg(feature = "alloc")]
pub fn expand_matrix(rho: &[u8; SEED_BYTES], k: usize) -> Result<Vec<Vec<Polynomial>>> {
    validate::parameter((2..=4).contains(&k), "expand_matrix", "k must be 2, 3 or 4")?;

    let driver = Driver::default();
    let mut flow = FlowController::new(Shake128Producer::new());
    let mut matrix = Vec::with_capacity(k);
    for i in 0..k {
        let mut row = Vec::with_capacity(k);
        for j in 0..k {
            row.push(uniform_with(&mut flow, &driver, rho, j as u8, i as u8)?);
        }
        matrix.push(row);
    }
    debug!(k, squeezed = flow.producer().squeezed(), "matrix expanded");
    Ok(matrix)
}

/// `count` noise polynomials with consecutive nonces from `first_nonce`
#[cfg(feature = "alloc")]
pub fn sample_noise_vec(
    seed: &[u8; SEED_BYTES],
    first_nonce: u8,
    count: usize,
    eta: u8,
) -> Result<Vec<Polynomial>> {
    validate::parameter(
        first_nonce as usize + count <= 256,
        "sample_noise_vec",
        "nonce range overflows a byte",
    )?;
    (0..count)
        .map(|offset| sample_noise(seed, first_nonce + offset as u8, eta))
        .collect()
}
