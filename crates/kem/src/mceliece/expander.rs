//! Seed expansion
//!
//! Every key-generation attempt expands a 33-byte seed, a domain byte
//! followed by the 32-byte secret, into the randomness for that attempt.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

use crate::error::Result;

/// Domain-separation byte prefixed to key-generation seeds
pub const KEYGEN_DOMAIN: u8 = 64;

/// Length of the expander input, domain byte included
pub const EXPANDER_SEED_BYTES: usize = 33;

/// Deterministic source of per-attempt key-generation randomness.
pub trait SeedExpander {
    /// Fill `out` with output determined by `seed`.
    fn expand(&mut self, seed: &[u8; EXPANDER_SEED_BYTES], out: &mut [u8]) -> Result<()>;
}

/// SHAKE256 seed expander.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shake256Expander;

impl SeedExpander for Shake256Expander {
    fn expand(&mut self, seed: &[u8; EXPANDER_SEED_BYTES], out: &mut [u8]) -> Result<()> {
        let mut h = Shake256::default();
        Update::update(&mut h, seed);
        let mut reader = h.finalize_xof();
        reader.read(out);
        Ok(())
    }
}
