//! Trait definitions shared across the workspace

pub mod keygen;
pub mod serialize;

pub use keygen::KeyGenerator;
pub use serialize::{Serialize, SerializeSecret};
