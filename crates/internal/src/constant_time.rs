//! Constant-time operations to prevent timing attacks
//!
//! CBD coefficients are secret, so reducing `x - y` into `[0, q)` must not
//! branch on the sign of the difference.

use subtle::{Choice, ConditionallySelectable, ConstantTimeLess};

/// Constant-time `a < b` as a [`Choice`]
pub fn ct_lt(a: u16, b: u16) -> Choice {
    a.ct_lt(&b)
}

/// Compute `(x - y) mod q` for `x, y < q` without branching
///
/// Yields `x - y` when `x >= y` and `q - (y - x)` otherwise.
pub fn ct_sub_mod(x: u16, y: u16, q: u16) -> u16 {
    let direct = x.wrapping_sub(y);
    let wrapped = q.wrapping_sub(y.wrapping_sub(x));
    u16::conditional_select(&direct, &wrapped, ct_lt(x, y))
}
