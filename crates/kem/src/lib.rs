//! Classic McEliece key-pair generation
//!
//! This crate drives the code-based kernels of `cmce-algorithms` through the
//! seeded retry loop that produces Classic McEliece key pairs.

#![forbid(unsafe_code)]

pub mod error;
pub mod mceliece;

// Re-exports
pub use error::{Error, Result};
pub use mceliece::{
    McEliece348864, McEliece460896, McEliece6688128, McEliece6960119, McEliece8192128,
    McElieceKem, McEliecePublicKey, McElieceSecretKey, SeedExpander, Shake256Expander,
};
