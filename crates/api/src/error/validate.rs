//! Validation utilities for sampler inputs

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter { context, message });
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::InvalidLength {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate a protocol contract
#[inline(always)]
pub fn protocol(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Protocol { context, message });
    }
    Ok(())
}
