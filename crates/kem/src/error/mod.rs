//! Error handling for key-generation operations

use std::fmt;

use cmce_algorithms::error::Error as PrimitiveError;
use cmce_api::error::Error as CoreError;

/// Error type for key-generation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// Key generation gave up
    KeyGeneration {
        /// Parameter set name
        algorithm: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// Invalid key format
    InvalidKey {
        /// Which key
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Serialization/deserialization errors
    Serialization {
        /// Where the error occurred
        context: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// The seed expander failed to produce output
    Expansion {
        /// Expander in use
        context: &'static str,
        /// What went wrong
        details: &'static str,
    },
}

/// Result type for key-generation operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error for {}: {}", algorithm, details)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::Serialization { context, details } => {
                write!(f, "Serialization error in {}: {}", context, details)
            }
            Error::Expansion { context, details } => {
                write!(f, "Seed expansion error in {}: {}", context, details)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyGeneration { algorithm, details } => CoreError::Other {
                context: algorithm,
                message: format!("key generation failed: {}", details),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::Serialization { context, details } => CoreError::SerializationError {
                context,
                message: details.to_string(),
            },
            Error::Expansion { context, details } => CoreError::RandomGenerationError {
                context,
                message: details.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;

// Re-export core error handling traits
pub use cmce_api::error::ResultExt;
