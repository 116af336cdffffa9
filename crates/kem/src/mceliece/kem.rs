//! Classic McEliece key-pair generator.

use core::marker::PhantomData;

use cmce_api::error::ResultExt;
use cmce_api::{KeyGenerator, Result as ApiResult};
use cmce_params::pqc::mceliece::MCELIECE_SEED_BYTES;
use rand::{CryptoRng, RngCore};
use tracing::instrument;
use zeroize::Zeroizing;

use super::expander::{SeedExpander, Shake256Expander};
use super::keygen::generate;
use super::keys::{McEliecePublicKey, McElieceSecretKey};
use super::params::McElieceParamSet;

/// Classic McEliece key generation for parameter set `P`.
pub struct McElieceKem<P: McElieceParamSet> {
    _params: PhantomData<P>,
}

impl<P: McElieceParamSet> McElieceKem<P> {
    /// Generate a key pair, expanding seeds with `expander`.
    ///
    /// The generator is consulted once, for the initial 32-byte seed.
    /// Expander failures abort the call.
    #[instrument(level = "debug", skip_all, fields(algorithm = P::NAME))]
    pub fn keypair_with_expander<R, E>(
        rng: &mut R,
        expander: &mut E,
    ) -> ApiResult<(McEliecePublicKey<P>, McElieceSecretKey<P>)>
    where
        R: CryptoRng + RngCore,
        E: SeedExpander + ?Sized,
    {
        let mut seed = Zeroizing::new([0u8; MCELIECE_SEED_BYTES]);
        rng.try_fill_bytes(&mut *seed)
            .map_err(|e| cmce_api::Error::RandomGenerationError {
                context: P::NAME,
                message: e.to_string(),
            })?;
        generate::<P, E>(&seed, expander).with_context(P::NAME)
    }

    /// Deterministically derive a key pair from a 32-byte seed using SHAKE256.
    pub fn keypair_from_seed(
        seed: &[u8; MCELIECE_SEED_BYTES],
    ) -> ApiResult<(McEliecePublicKey<P>, McElieceSecretKey<P>)> {
        generate::<P, _>(seed, &mut Shake256Expander).with_context(P::NAME)
    }
}

impl<P: McElieceParamSet> KeyGenerator for McElieceKem<P> {
    type PublicKey = McEliecePublicKey<P>;
    type SecretKey = McElieceSecretKey<P>;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        Self::keypair_with_expander(rng, &mut Shake256Expander)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }
}
