//! Classic McEliece key generation
//!
//! [`McElieceKem`] turns 32 bytes of randomness into a key pair by repeatedly
//! expanding a seed until the derived Goppa polynomial is irreducible and the
//! parity-check matrix has systematic form. One generic implementation serves
//! every parameter set; the aliases below fix `P`.

mod keygen;

pub mod expander;
pub mod kem;
pub mod keys;
pub mod params;

pub use expander::{SeedExpander, Shake256Expander};
pub use kem::McElieceKem;
pub use keygen::MAX_ATTEMPTS;
pub use keys::{McEliecePublicKey, McElieceSecretKey};
pub use params::{
    McEliece348864Params, McEliece460896Params, McEliece6688128Params, McEliece6960119Params,
    McEliece8192128Params, McElieceParamSet,
};

/// mceliece348864 key generation
pub type McEliece348864 = McElieceKem<McEliece348864Params>;
/// mceliece460896 key generation
pub type McEliece460896 = McElieceKem<McEliece460896Params>;
/// mceliece6688128 key generation
pub type McEliece6688128 = McElieceKem<McEliece6688128Params>;
/// mceliece6960119 key generation
pub type McEliece6960119 = McElieceKem<McEliece6960119Params>;
/// mceliece8192128 key generation
pub type McEliece8192128 = McElieceKem<McEliece8192128Params>;
