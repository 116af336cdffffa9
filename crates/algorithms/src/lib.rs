//! Constant-time code-based primitives
//!
//! This crate implements the algebraic core of Classic McEliece key
//! generation: arithmetic in GF(2^12) and GF(2^13), oblivious sorting
//! networks, the Goppa-polynomial solver, Benes-network synthesis and
//! application, and the systematic public-key builder.
//!
//! Every routine in [`code`] runs in time that depends only on the parameter
//! set, never on secret inputs. Control flow is driven by public sizes and all
//! data-dependent choices are made with masks.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Code-based primitives
pub mod code;
pub use code::{
    apply_benes, build_public_key, controlbits_from_permutation, int32_sort, minimal_polynomial,
    uint64_sort, Field, Gf, PublicKeyMatrix,
};
