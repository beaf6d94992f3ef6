//! Known-answer vectors
//!
//! Seeds are the ramp `00 01 .. 1f`. Values were produced by an independent
//! SHAKE implementation.

/// The 32-byte ramp seed shared by every vector
pub const RAMP_SEED_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

/// Decode the ramp seed
pub fn ramp_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    hex::decode_to_slice(RAMP_SEED_HEX, &mut seed).expect("valid hex");
    seed
}

/// A polynomial vector, summarized by its head, tail and coefficient sum
#[derive(Debug, Clone, Copy)]
pub struct PolyVector {
    /// First sixteen coefficients
    pub head: [u16; 16],
    /// Last four coefficients, when recorded
    pub tail: Option<[u16; 4]>,
    /// Sum of all `N` coefficients
    pub sum: u64,
}

/// CBD(2) over SHAKE256(ramp || 00)
pub const NOISE_ETA2_NONCE0: PolyVector = PolyVector {
    head: [
        3328, 0, 1, 1, 3327, 1, 0, 0, 3328, 1, 3328, 3328, 3327, 0, 1, 3328,
    ],
    tail: None,
    sum: 229_704,
};

/// CBD(3) over SHAKE256(ramp || 00)
pub const NOISE_ETA3_NONCE0: PolyVector = PolyVector {
    head: [0, 2, 1, 1, 1, 0, 3, 0, 3328, 0, 3326, 1, 1, 1, 0, 3327],
    tail: None,
    sum: 259_680,
};

/// Rejection sampling over SHAKE128(ramp || 00 || 00)
pub const UNIFORM_0_0: PolyVector = PolyVector {
    head: [
        481, 1919, 1434, 2359, 327, 1066, 3001, 649, 1037, 2971, 661, 1148, 1602, 864, 301, 1835,
    ],
    tail: Some([1926, 2513, 2367, 3216]),
    sum: 428_176,
};

/// Stream bytes decoded for [`UNIFORM_0_0`]
pub const UNIFORM_0_0_BYTES_USED: usize = 474;

/// First 24 bytes of SHAKE128(ramp || 00 || 00)
pub const SHAKE128_RAMP_PREFIX_HEX: &str = "e1a1f8aafe779a759347a142b9cbf789d2409b5b2989cf47";

/// Check a polynomial against a vector
pub fn assert_matches(coeffs: &[u16], vector: &PolyVector) {
    assert_eq!(coeffs.len(), 256);
    assert_eq!(&coeffs[..16], &vector.head[..]);
    if let Some(tail) = vector.tail {
        assert_eq!(&coeffs[252..], &tail[..]);
    }
    assert_eq!(coeffs.iter().map(|&c| c as u64).sum::<u64>(), vector.sum);
}
