//! Code-based cryptography primitives
//!
//! The building blocks of Classic McEliece key generation, leaves first:
//!
//! - [`gf`]: scalar GF(2^m) arithmetic
//! - [`vec`]: bit-sliced GF(2^m) arithmetic on 64 lanes
//! - [`sort`]: oblivious sorting networks
//! - [`goppa`]: ring multiplication and the minimal-polynomial solver
//! - [`fft`]: additive FFT evaluation
//! - [`controlbits`]: permutation to Benes control bits
//! - [`benes`]: bit-sliced Benes network application
//! - [`support`]: support reconstruction from control bits
//! - [`pk_gen`]: systematic public-key construction

pub mod benes;
pub mod controlbits;
pub mod fft;
pub mod gf;
pub mod goppa;
pub mod pk_gen;
pub mod sort;
pub mod support;
pub mod vec;

pub use benes::apply_benes;
pub use controlbits::{controlbits_from_permutation, permutation_from_controlbits};
pub use gf::{Field, Gf};
pub use goppa::{minimal_polynomial, poly_mul};
pub use pk_gen::{build_public_key, PublicKeyMatrix};
pub use sort::{int32_sort, uint64_sort};
pub use support::support_from_controlbits;
