//! Validation utilities for code-based primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Turn an accumulated constant-time failure flag into a result.
///
/// `fail` is 0 or 1 and is the only value that leaves the constant-time
/// region; the error names the operation, never an index or value.
#[inline(always)]
pub fn processing(fail: u64, operation: &'static str, details: &'static str) -> Result<()> {
    if fail != 0 {
        return Err(Error::Processing { operation, details });
    }
    Ok(())
}
