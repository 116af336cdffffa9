//! Trait definition for key-pair generators
//!
//! A key generator owns no state: every call draws its randomness from the
//! supplied generator and returns freshly allocated key objects.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for algorithms that produce a public/secret key pair.
pub trait KeyGenerator {
    /// Public key type.
    ///
    /// Implements `Serialize` so that length checks happen in `from_bytes`.
    type PublicKey: Clone + Serialize;

    /// Secret key type.
    ///
    /// # Security Note
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Serialized output is wrapped in `Zeroizing`.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Keypair type holding both halves.
    type KeyPair: Clone;

    /// Returns the algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    /// - Internal retries must not be observable beyond their count.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;
}
