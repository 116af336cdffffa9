//! Public API traits and types for the cmce workspace
//!
//! This crate provides the public API surface shared by the algorithm and
//! key-generation crates: the error type and the serialization and
//! key-generation traits.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{KeyGenerator, Serialize, SerializeSecret};
pub use traits::{keygen, serialize};
