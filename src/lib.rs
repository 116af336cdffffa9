//! # cmce
//!
//! Classic McEliece key generation in pure Rust.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! cmce = "0.3"
//! ```
//!
//! ```no_run
//! use cmce::prelude::*;
//! use cmce::kem::McEliece348864;
//!
//! # fn main() -> cmce::api::Result<()> {
//! let mut rng = rand::rngs::OsRng;
//! let (pk, sk) = McEliece348864::keypair(&mut rng)?;
//! assert_eq!(pk.to_bytes().len(), 261120);
//! assert_eq!(sk.to_bytes_zeroizing().len(), 6492);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `kem` (default): key-pair generation for every parameter set
//! - `algorithms`: the code-based kernels on their own
//! - `serde`: `Serialize` for parameter metadata
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`cmce-api`]: error type and traits
//! - [`cmce-params`]: parameter sets
//! - [`cmce-algorithms`]: field arithmetic, sorting, Goppa polynomials, Benes
//!   networks and public-key construction
//! - [`cmce-kem`]: seeded key-pair generation

// Core re-exports (always available)
pub use cmce_api as api;
pub use cmce_internal as internal;
pub use cmce_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use cmce_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use cmce_kem as kem;

/// Common imports for cmce users
pub mod prelude {
    pub use crate::api::{Error, KeyGenerator, Result, Serialize, SerializeSecret};
    pub use crate::params::pqc::mceliece::McElieceParams;

    #[cfg(feature = "kem")]
    pub use crate::kem::{McElieceKem, SeedExpander, Shake256Expander};

    pub use zeroize::{Zeroize, Zeroizing};
}
