//! Errors raised while loading or checking vectors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed vector file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("unknown parameter set: {0}")]
    UnknownParams(String),

    #[error("operation failed: {0}")]
    Operation(String),

    #[error("{case}: mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        case: String,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, VectorError>;

impl From<cmce_algorithms::Error> for VectorError {
    fn from(e: cmce_algorithms::Error) -> Self {
        VectorError::Operation(e.to_string())
    }
}

impl From<cmce_api::Error> for VectorError {
    fn from(e: cmce_api::Error) -> Self {
        VectorError::Operation(e.to_string())
    }
}
