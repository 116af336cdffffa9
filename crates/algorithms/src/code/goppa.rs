//! Goppa polynomial generation
//!
//! The secret Goppa polynomial is the minimal polynomial over GF(2^m) of a
//! random element `f` of GF((2^m)^t) = GF(2^m)[y] / F(y). Elements of the
//! extension are coefficient vectors of length `t`.

use cmce_params::pqc::mceliece::McElieceParams;
use zeroize::Zeroizing;

use super::gf::{Field, Gf};
use crate::error::{validate, Result};

/// Multiply two extension elements without validating their lengths
fn ring_mul(field: &Field, params: &McElieceParams, a: &[Gf], b: &[Gf], out: &mut [Gf]) {
    let t = params.sys_t;
    let mut product = Zeroizing::new(vec![0 as Gf; 2 * t - 1]);

    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            product[i + j] ^= field.mul(ai, bj);
        }
    }

    // y^t = sum(c * y^e) over the tail of F
    for i in (t..2 * t - 1).rev() {
        for &(exp, coeff) in params.ring_tail {
            product[i - t + exp] ^= field.mul(product[i], coeff);
        }
    }

    out.copy_from_slice(&product[..t]);
}

/// Product of two elements of GF((2^m)^t)
pub fn poly_mul(params: &McElieceParams, a: &[Gf], b: &[Gf]) -> Result<Vec<Gf>> {
    validate::length("poly_mul lhs", a.len(), params.sys_t)?;
    validate::length("poly_mul rhs", b.len(), params.sys_t)?;

    let field = Field::from_params(params);
    let mut out = vec![0; params.sys_t];
    ring_mul(&field, params, a, b, &mut out);
    Ok(out)
}

/// Minimal polynomial of `f` over GF(2^m).
///
/// Returns the `t` low coefficients of the monic degree-`t` result. Fails with
/// a retryable error when the powers `1, f, ..., f^(t-1)` are linearly
/// dependent, in which case `f` lies in a proper subfield.
pub fn minimal_polynomial(params: &McElieceParams, f: &[Gf]) -> Result<Vec<Gf>> {
    let t = params.sys_t;
    validate::length("minimal_polynomial input", f.len(), t)?;

    let field = Field::from_params(params);
    let mask = field.mask();

    // mat[c * t + j]: coefficient j of f^c
    let mut mat = Zeroizing::new(vec![0 as Gf; (t + 1) * t]);
    mat[0] = 1;
    for (dst, &src) in mat[t..2 * t].iter_mut().zip(f) {
        *dst = src & mask;
    }
    for c in 2..=t {
        let (done, rest) = mat.split_at_mut(c * t);
        ring_mul(&field, params, &done[(c - 1) * t..], &done[t..2 * t], &mut rest[..t]);
    }

    let mut fail = 0u64;
    for j in 0..t {
        for k in j + 1..t {
            let zero = field.is_zero_mask(mat[j * t + j]);
            for c in j..=t {
                mat[c * t + j] ^= mat[c * t + k] & zero;
            }
        }

        let pivot = mat[j * t + j];
        fail |= (field.is_zero_mask(pivot) & 1) as u64;

        let inv = field.inv(pivot);
        for c in j..=t {
            mat[c * t + j] = field.mul(mat[c * t + j], inv);
        }

        for k in 0..t {
            if k != j {
                let factor = mat[j * t + k];
                for c in j..=t {
                    mat[c * t + k] ^= field.mul(mat[c * t + j], factor);
                }
            }
        }
    }

    validate::processing(fail, "minimal polynomial", "element lies in a subfield")?;
    Ok(mat[t * t..].to_vec())
}
