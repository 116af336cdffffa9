//! Key objects
//!
//! Secret key layout: `delta (32) || pivots (8) || g (2t) || control bits || s (n/8)`,
//! all integers little-endian.

use core::fmt;
use core::marker::PhantomData;
use core::ops::Range;

use cmce_algorithms::code::Gf;
use cmce_api::{Result as ApiResult, Serialize, SerializeSecret};
use cmce_internal::constant_time::ct_eq;
use cmce_internal::endian::{load_gf, u64_from_le_bytes};
use cmce_params::pqc::mceliece::{
    MCELIECE_PIVOT_BYTES, MCELIECE_SEED_BYTES, MCELIECE_SYSTEMATIC_PIVOTS,
};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::params::McElieceParamSet;
use crate::error::{validate, Result};

/// Byte ranges of the secret-key fields for parameter set `P`
pub(crate) struct SecretLayout {
    pub seed: Range<usize>,
    pub pivots: Range<usize>,
    pub goppa: Range<usize>,
    pub control_bits: Range<usize>,
    pub rejection: Range<usize>,
}

impl SecretLayout {
    pub(crate) fn of<P: McElieceParamSet>() -> Self {
        let p = P::PARAMS;
        let seed = 0..MCELIECE_SEED_BYTES;
        let pivots = seed.end..seed.end + MCELIECE_PIVOT_BYTES;
        let goppa = pivots.end..pivots.end + p.irr_bytes();
        let control_bits = goppa.end..goppa.end + p.cond_bytes();
        let rejection = control_bits.end..control_bits.end + p.sys_n_bytes();
        Self {
            seed,
            pivots,
            goppa,
            control_bits,
            rejection,
        }
    }
}

/// Classic McEliece public key: the systematic part `T` of the parity-check
/// matrix, row-major.
pub struct McEliecePublicKey<P: McElieceParamSet> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

impl<P: McElieceParamSet> McEliecePublicKey<P> {
    pub(crate) fn new(bytes: Vec<u8>) -> Result<Self> {
        validate::serialized_length("McEliece public key", bytes.len(), P::PUBLIC_KEY_BYTES)?;
        Ok(Self {
            bytes,
            _params: PhantomData,
        })
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the public key
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the public key is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Row `i` of `T`, `pk_row_bytes` long
    pub fn row(&self, i: usize) -> Option<&[u8]> {
        let row_bytes = P::PARAMS.pk_row_bytes();
        self.bytes.get(i * row_bytes..(i + 1) * row_bytes)
    }
}

impl<P: McElieceParamSet> Clone for McEliecePublicKey<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: McElieceParamSet> PartialEq for McEliecePublicKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: McElieceParamSet> Eq for McEliecePublicKey<P> {}

impl<P: McElieceParamSet> fmt::Debug for McEliecePublicKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("McEliecePublicKey")
            .field("algorithm", &P::NAME)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl<P: McElieceParamSet> Zeroize for McEliecePublicKey<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: McElieceParamSet> Serialize for McEliecePublicKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::new(bytes.to_vec())?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

/// Classic McEliece secret key.
pub struct McElieceSecretKey<P: McElieceParamSet> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

impl<P: McElieceParamSet> McElieceSecretKey<P> {
    pub(crate) fn new(bytes: Vec<u8>) -> Result<Self> {
        let key = Self {
            bytes,
            _params: PhantomData,
        };
        validate::serialized_length("McEliece secret key", key.bytes.len(), P::SECRET_KEY_BYTES)?;
        validate::key(
            key.pivots() == MCELIECE_SYSTEMATIC_PIVOTS,
            "McEliece secret",
            "pivot record is not systematic",
        )?;
        let mask = P::PARAMS.gf_mask();
        validate::key(
            key.bytes[SecretLayout::of::<P>().goppa]
                .chunks_exact(2)
                .all(|c| load_gf(c, !mask) == 0),
            "McEliece secret",
            "Goppa coefficient out of range",
        )?;
        Ok(key)
    }

    fn field(&self, range: Range<usize>) -> &[u8] {
        &self.bytes[range]
    }

    /// The 32-byte seed this key was expanded from
    pub fn seed(&self) -> &[u8] {
        self.field(SecretLayout::of::<P>().seed)
    }

    /// Pivot record
    pub fn pivots(&self) -> u64 {
        u64_from_le_bytes(self.field(SecretLayout::of::<P>().pivots))
    }

    /// The `t` low coefficients of the monic Goppa polynomial
    pub fn goppa_polynomial(&self) -> Zeroizing<Vec<Gf>> {
        let mask = P::PARAMS.gf_mask();
        Zeroizing::new(
            self.field(SecretLayout::of::<P>().goppa)
                .chunks_exact(2)
                .map(|c| load_gf(c, mask))
                .collect(),
        )
    }

    /// Benes network control bits of the support permutation
    pub fn control_bits(&self) -> &[u8] {
        self.field(SecretLayout::of::<P>().control_bits)
    }

    /// Implicit-rejection string `s`, `n / 8` bytes
    pub fn rejection_string(&self) -> &[u8] {
        self.field(SecretLayout::of::<P>().rejection)
    }

    /// Length of the secret key
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the secret key is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl<P: McElieceParamSet> Clone for McElieceSecretKey<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: McElieceParamSet> PartialEq for McElieceSecretKey<P> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.bytes, &other.bytes)
    }
}

impl<P: McElieceParamSet> Eq for McElieceSecretKey<P> {}

impl<P: McElieceParamSet> fmt::Debug for McElieceSecretKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("McElieceSecretKey")
            .field("algorithm", &P::NAME)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl<P: McElieceParamSet> Zeroize for McElieceSecretKey<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: McElieceParamSet> Drop for McElieceSecretKey<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: McElieceParamSet> ZeroizeOnDrop for McElieceSecretKey<P> {}

impl<P: McElieceParamSet> SerializeSecret for McElieceSecretKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::new(bytes.to_vec())?)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.clone())
    }
}
