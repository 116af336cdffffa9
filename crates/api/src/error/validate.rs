//! Validation helpers returning API errors

use super::types::{Error, Result};

/// Fail with `InvalidParameter` unless `condition` holds
pub fn parameter(condition: bool, context: &'static str, reason: &str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}

/// Fail with `InvalidLength` unless `actual == expected`
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

/// Fail with `InvalidKey` unless `condition` holds
pub fn key(condition: bool, context: &'static str, reason: &str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}
