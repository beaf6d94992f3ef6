//! Fixed-degree polynomial over Z_Q

use polysample_api::{validate, Coefficient, Result};
use polysample_params::{N, Q};
use zeroize::Zeroize;

/// A polynomial with `N` coefficients in `[0, Q)`
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial {
    /// Coefficients in index order
    pub coeffs: [u16; N],
}

impl Polynomial {
    /// The zero polynomial
    pub const fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Wrap a coefficient array, checking every value against `Q`
    pub fn from_coeffs(coeffs: [u16; N]) -> Result<Self> {
        validate::parameter(
            coeffs.iter().all(|&c| c < Q),
            "Polynomial::from_coeffs",
            "coefficient not reduced mod Q",
        )?;
        Ok(Self { coeffs })
    }

    /// Collect the output of one sampling run
    ///
    /// Coefficients must arrive with indices `0, 1, .., N - 1` and values below
    /// `Q`. The first error from the source is returned as is.
    pub fn try_from_coefficients<I>(source: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Coefficient>>,
    {
        let mut poly = Self::zero();
        let mut count = 0usize;
        for item in source {
            let coefficient = item?;
            validate::protocol(
                count < N && coefficient.index as usize == count,
                "Polynomial::try_from_coefficients",
                "coefficient index out of order",
            )?;
            validate::protocol(
                coefficient.value < Q,
                "Polynomial::try_from_coefficients",
                "coefficient not reduced mod Q",
            )?;
            poly.coeffs[count] = coefficient.value;
            count += 1;
        }
        validate::length("Polynomial::try_from_coefficients", count, N)?;
        Ok(poly)
    }

    /// Coefficients as a slice
    pub fn as_coeffs_slice(&self) -> &[u16] {
        &self.coeffs
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl AsRef<[u16]> for Polynomial {
    fn as_ref(&self) -> &[u16] {
        &self.coeffs
    }
}
