//! Validation utilities for key-generation operations

use super::{Error, Result};

/// Validate key format
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}

/// Validate serialized length
pub fn serialized_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Serialization {
            context,
            details: "unexpected length",
        });
    }
    Ok(())
}

// Re-export primitive validations for convenience
pub use cmce_algorithms::error::validate::{length, min_length, parameter};
