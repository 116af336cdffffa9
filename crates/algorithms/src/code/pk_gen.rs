//! Systematic public-key construction
//!
//! The parity-check matrix `H` has `m * t` rows and `n` columns: column `j`
//! stacks the bits of `g(L_j)^-1 * L_j^i` for `i < t`, where `L` is the
//! support selected by the secret permutation. Gauss-Jordan elimination of
//! the left `m * t` columns brings `H` to `[I | T]`; `T` is the public key.
//!
//! Rows are packed into `u64` words, column `j` at bit `j % 64` of word
//! `j / 64`. All row operations are masked so the instruction stream depends
//! only on the parameter set.

use cmce_internal::constant_time::{ct_bit_mask_u64, ct_eq_u64};
use cmce_internal::endian::store_u64_le_partial;
use cmce_params::pqc::mceliece::McElieceParams;
use zeroize::{Zeroize, Zeroizing};

use super::fft::evaluate_sliced;
use super::gf::{Field, Gf};
use super::sort::uint64_sort;
use super::vec::{bitslice, unbitslice, vec_inv, vec_mul, BitSliced};
use crate::error::{validate, Result};

const OPERATION: &str = "public key generation";

/// Public key bytes together with the support permutation that produced them
#[derive(Clone)]
pub struct PublicKeyMatrix {
    bytes: Vec<u8>,
    pi: Vec<u16>,
}

impl PublicKeyMatrix {
    /// Serialized `T`, `m * t` rows of `pk_row_bytes` bytes
    pub fn public_key(&self) -> &[u8] {
        &self.bytes
    }

    /// Permutation of `[0, 2^m)`: position `i` of the code uses support
    /// element `bitrev(pi[i])`
    pub fn permutation(&self) -> &[u16] {
        &self.pi
    }

    /// Take the public key bytes, wiping the permutation
    pub fn into_public_key(mut self) -> Vec<u8> {
        core::mem::take(&mut self.bytes)
    }
}

impl Drop for PublicKeyMatrix {
    fn drop(&mut self) {
        self.pi.zeroize();
    }
}

impl core::fmt::Debug for PublicKeyMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PublicKeyMatrix")
            .field("bytes", &self.bytes.len())
            .field("pi", &"[REDACTED]")
            .finish()
    }
}

/// Per-position inverses `1 / g(bitrev(p))` for every `p < 2^m`
fn inverse_evaluations(field: &Field, goppa: &[Gf]) -> Result<Zeroizing<Vec<Gf>>> {
    let mut coeffs = Zeroizing::new(goppa.to_vec());
    coeffs.push(1);
    let sliced: Zeroizing<Vec<BitSliced>> =
        Zeroizing::new(coeffs.chunks(64).map(|c| bitslice(field, c)).collect());

    let basis: Vec<Gf> = (0..field.bits()).map(|i| 1 << i).collect();
    let eval = evaluate_sliced(field, &sliced, &basis)?;
    let blocks = eval.len();

    // prefix products, a single inversion, then back-substitution
    let mut prod: Zeroizing<Vec<BitSliced>> = Zeroizing::new(eval.to_vec());
    for i in 1..blocks {
        prod[i] = vec_mul(field, &prod[i - 1], &eval[i]);
    }
    let mut tmp = vec_inv(field, &prod[blocks - 1]);
    for i in (0..blocks - 1).rev() {
        prod[i + 1] = vec_mul(field, &prod[i], &tmp);
        tmp = vec_mul(field, &tmp, &eval[i + 1]);
    }
    prod[0] = tmp;
    tmp.zeroize();

    let mut inv = Zeroizing::new(Vec::with_capacity(64 * blocks));
    for block in prod.iter() {
        inv.extend_from_slice(&unbitslice(field, block));
    }
    Ok(inv)
}

/// Build the systematic public key from the Goppa polynomial `goppa`
/// (`t` low coefficients of the monic polynomial) and the permutation seeds
/// `perm` (`2^m` words).
///
/// Fails with a retryable error when two seeds collide or the left `m * t`
/// columns of `H` are singular. Both conditions are accumulated over the
/// whole computation and reported once at the end.
pub fn build_public_key(
    params: &McElieceParams,
    goppa: &[Gf],
    perm: &[u32],
) -> Result<PublicKeyMatrix> {
    let field = Field::from_params(params);
    let m = field.bits();
    let size = field.size();
    let n = params.sys_n;
    let t = params.sys_t;
    let rows = params.pk_nrows();
    validate::length("goppa polynomial", goppa.len(), t)?;
    validate::length("permutation seeds", perm.len(), size)?;

    let mask = field.mask() as u64;
    let inv = inverse_evaluations(&field, goppa)?;

    // sort positions by seed, carrying each position's inverse
    let mut list = Zeroizing::new(vec![0u64; size]);
    for p in 0..size {
        list[p] = ((perm[p] as u64) << 31) | ((inv[p] as u64) << m) | p as u64;
    }
    uint64_sort(&mut list);

    let mut fail = 0u64;
    for i in 1..size {
        fail |= ct_eq_u64(list[i - 1] >> 31, list[i] >> 31);
    }

    let pi: Vec<u16> = list.iter().map(|&k| (k & mask) as u16).collect();
    let support = Zeroizing::new(pi.iter().map(|&p| field.bitrev(p)).collect::<Vec<Gf>>());
    let sorted_inv = Zeroizing::new(list.iter().map(|&k| ((k >> m) & mask) as Gf).collect::<Vec<Gf>>());

    // fill H; lanes at or beyond n stay zero
    let words = (n + 63) / 64;
    let mut h = Zeroizing::new(vec![0u64; rows * words]);
    for j in 0..words {
        let end = n.min(64 * j + 64);
        let l = bitslice(&field, &support[64 * j..end]);
        let mut cur = bitslice(&field, &sorted_inv[64 * j..end]);
        for i in 0..t {
            for k in 0..m {
                h[(i * m + k) * words + j] = cur[k];
            }
            cur = vec_mul(&field, &cur, &l);
        }
        cur.zeroize();
    }

    // Gauss-Jordan on the left block, recording row operations in `ops`
    let left_words = (rows + 63) / 64;
    let mut left = Zeroizing::new(vec![0u64; rows * left_words]);
    let mut ops = Zeroizing::new(vec![0u64; rows * left_words]);
    for r in 0..rows {
        left[r * left_words..(r + 1) * left_words]
            .copy_from_slice(&h[r * words..r * words + left_words]);
        ops[r * left_words + r / 64] = 1u64 << (r % 64);
    }

    for row in 0..rows {
        let i = row / 64;
        let j = (row % 64) as u32;

        for k in row + 1..rows {
            let sel = !ct_bit_mask_u64(left[row * left_words + i], j);
            for c in 0..left_words {
                left[row * left_words + c] ^= left[k * left_words + c] & sel;
                ops[row * left_words + c] ^= ops[k * left_words + c] & sel;
            }
        }

        fail |= 1 ^ ((left[row * left_words + i] >> j) & 1);

        for k in 0..rows {
            if k == row {
                continue;
            }
            let sel = ct_bit_mask_u64(left[k * left_words + i], j);
            for c in 0..left_words {
                left[k * left_words + c] ^= left[row * left_words + c] & sel;
                ops[k * left_words + c] ^= ops[row * left_words + c] & sel;
            }
        }
    }

    validate::processing(fail, OPERATION, "matrix is not systematic")?;

    // T = ops * H, restricted to columns [m*t, n)
    let row_bytes = params.pk_row_bytes();
    let first = rows / 64;
    let shift = rows % 64;
    let mut bytes = vec![0u8; rows * row_bytes];
    let mut acc = Zeroizing::new(vec![0u64; words - first + 1]);
    for (r, out) in bytes.chunks_exact_mut(row_bytes).enumerate() {
        acc.iter_mut().for_each(|a| *a = 0);
        for c in 0..rows {
            let sel = ct_bit_mask_u64(ops[r * left_words + c / 64], (c % 64) as u32);
            for (a, &hw) in acc.iter_mut().zip(&h[c * words + first..(c + 1) * words]) {
                *a ^= hw & sel;
            }
        }

        for (k, chunk) in out.chunks_mut(8).enumerate() {
            let word = if shift == 0 {
                acc[k]
            } else {
                (acc[k] >> shift) | (acc[k + 1] << (64 - shift))
            };
            store_u64_le_partial(chunk, word, chunk.len());
        }
    }

    Ok(PublicKeyMatrix { bytes, pi })
}
