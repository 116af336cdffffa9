//! Key-generation retry loop
//!
//! Each attempt expands the current seed, takes the next seed from the tail
//! of the expansion and tries to derive a key from the rest. Rejected
//! attempts leave no trace beyond the attempt counter.

use cmce_algorithms::code::{
    build_public_key, controlbits_from_permutation, minimal_polynomial, Field, Gf,
};
use cmce_algorithms::Error as PrimitiveError;
use cmce_internal::endian::{load_gf, store_gf, store_u64_le, u32_from_le_bytes};
use cmce_params::pqc::mceliece::{MCELIECE_SEED_BYTES, MCELIECE_SYSTEMATIC_PIVOTS};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::expander::{SeedExpander, EXPANDER_SEED_BYTES, KEYGEN_DOMAIN};
use super::keys::{McEliecePublicKey, McElieceSecretKey, SecretLayout};
use super::params::McElieceParamSet;
use crate::error::{Error, Result};

/// Attempts before giving up on an expander that never yields a usable key
pub const MAX_ATTEMPTS: u32 = 256;

/// Why an attempt was rejected
#[derive(Debug, Clone, Copy)]
enum Rejection {
    GoppaPolynomial,
    PublicKey,
}

fn retry_or_abort<T>(
    r: core::result::Result<T, PrimitiveError>,
    class: Rejection,
    attempt: u32,
) -> Result<Option<T>> {
    match r {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_retryable() => {
            trace!(attempt, rejection = ?class, "key generation attempt rejected");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Derive a key pair from a 32-byte seed.
pub(crate) fn generate<P, E>(
    delta: &[u8; MCELIECE_SEED_BYTES],
    expander: &mut E,
) -> Result<(McEliecePublicKey<P>, McElieceSecretKey<P>)>
where
    P: McElieceParamSet,
    E: SeedExpander + ?Sized,
{
    let params = P::PARAMS;
    let field = Field::from_params(&params);
    let mask = field.mask();
    let size = params.field_size();
    let layout = SecretLayout::of::<P>();

    let mut seed = Zeroizing::new([0u8; EXPANDER_SEED_BYTES]);
    seed[0] = KEYGEN_DOMAIN;
    seed[1..].copy_from_slice(delta);

    // r = s || perm seeds || f || next seed
    let mut r = Zeroizing::new(vec![0u8; params.expanded_bytes()]);
    let next_seed = r.len() - MCELIECE_SEED_BYTES;
    let irr = next_seed - params.irr_bytes();
    let perm = irr - 4 * size;
    let s = 0..params.sys_n_bytes();

    for attempt in 1..=MAX_ATTEMPTS {
        expander.expand(&seed, &mut r)?;

        let mut sk = Zeroizing::new(vec![0u8; P::SECRET_KEY_BYTES]);
        sk[layout.seed.clone()].copy_from_slice(&seed[1..]);
        seed[1..].copy_from_slice(&r[next_seed..]);

        let f: Zeroizing<Vec<Gf>> = Zeroizing::new(
            r[irr..next_seed]
                .chunks_exact(2)
                .map(|c| load_gf(c, mask))
                .collect(),
        );
        let goppa = match retry_or_abort(
            minimal_polynomial(&params, &f),
            Rejection::GoppaPolynomial,
            attempt,
        )? {
            Some(g) => Zeroizing::new(g),
            None => continue,
        };

        let seeds: Zeroizing<Vec<u32>> =
            Zeroizing::new(r[perm..irr].chunks_exact(4).map(u32_from_le_bytes).collect());
        let matrix = match retry_or_abort(
            build_public_key(&params, &goppa, &seeds),
            Rejection::PublicKey,
            attempt,
        )? {
            Some(m) => m,
            None => continue,
        };

        let bits = Zeroizing::new(controlbits_from_permutation(
            matrix.permutation(),
            params.gf_bits,
            size,
        )?);

        store_u64_le(&mut sk[layout.pivots.clone()], MCELIECE_SYSTEMATIC_PIVOTS);
        for (out, &c) in sk[layout.goppa.clone()].chunks_exact_mut(2).zip(goppa.iter()) {
            store_gf(out, c);
        }
        sk[layout.control_bits.clone()].copy_from_slice(&bits);
        sk[layout.rejection.clone()].copy_from_slice(&r[s.clone()]);

        debug!(algorithm = P::NAME, attempts = attempt, "key pair generated");
        let pk = McEliecePublicKey::new(matrix.into_public_key())?;
        let sk = McElieceSecretKey::new(core::mem::take(&mut *sk))?;
        return Ok((pk, sk));
    }

    debug!(algorithm = P::NAME, attempts = MAX_ATTEMPTS, "key generation gave up");
    Err(Error::KeyGeneration {
        algorithm: P::NAME,
        details: "retry limit reached",
    })
}
