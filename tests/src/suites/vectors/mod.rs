//! Known-answer vectors
//!
//! Vectors live as JSON under `src/vectors/json` and are parsed once per
//! process.

pub mod error;
pub mod loader;
pub mod model;

pub use error::{Result, VectorError};
pub use loader::{controlbits_vectors, gf_vectors, goppa_vectors, params_by_name};
pub use model::{ControlBitsCase, GfCase, GfField, GoppaCase};
