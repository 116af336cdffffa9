//! Bit-sliced GF(2^m) vectors
//!
//! A [`BitSliced`] value holds 64 field elements: lane `r` of plane `k` is bit
//! `k` of element `r`. Only the first `m` planes are meaningful; the rest stay
//! zero.

use super::gf::{Field, Gf, MAX_GF_BITS};

/// 64 field elements in bit-sliced form
pub type BitSliced = [u64; MAX_GF_BITS];

/// Lane-wise product of two bit-sliced vectors
pub fn vec_mul(field: &Field, a: &BitSliced, b: &BitSliced) -> BitSliced {
    let m = field.bits();
    let mut buf = [0u64; 2 * MAX_GF_BITS - 1];

    for i in 0..m {
        for j in 0..m {
            buf[i + j] ^= a[i] & b[j];
        }
    }

    let modulus = field.modulus();
    for i in (m..2 * m - 1).rev() {
        for bit in 0..m {
            if (modulus >> bit) & 1 == 1 {
                buf[i - m + bit] ^= buf[i];
            }
        }
    }

    let mut out = [0u64; MAX_GF_BITS];
    out[..m].copy_from_slice(&buf[..m]);
    out
}

/// Lane-wise square
#[inline]
pub fn vec_sq(field: &Field, a: &BitSliced) -> BitSliced {
    vec_mul(field, a, a)
}

/// Lane-wise inverse, same addition chain as [`Field::inv`]
pub fn vec_inv(field: &Field, a: &BitSliced) -> BitSliced {
    let target = field.bits() - 1;
    let top = usize::BITS - 1 - target.leading_zeros();

    let mut e = *a;
    let mut k = 1usize;
    for bit in (0..top).rev() {
        let mut t = e;
        for _ in 0..k {
            t = vec_sq(field, &t);
        }
        e = vec_mul(field, &t, &e);
        k *= 2;
        if (target >> bit) & 1 == 1 {
            e = vec_mul(field, &vec_sq(field, &e), a);
            k += 1;
        }
    }

    vec_sq(field, &e)
}

/// Bit-slice up to 64 elements; missing lanes are zero
pub fn bitslice(field: &Field, elems: &[Gf]) -> BitSliced {
    let mut out = [0u64; MAX_GF_BITS];
    for (r, &e) in elems.iter().take(64).enumerate() {
        for (k, plane) in out.iter_mut().enumerate().take(field.bits()) {
            *plane |= (((e >> k) & 1) as u64) << r;
        }
    }
    out
}

/// Recover the 64 elements of a bit-sliced vector
pub fn unbitslice(field: &Field, v: &BitSliced) -> [Gf; 64] {
    let mut out = [0 as Gf; 64];
    for (r, e) in out.iter_mut().enumerate() {
        for (k, plane) in v.iter().enumerate().take(field.bits()) {
            *e |= (((plane >> r) & 1) as Gf) << k;
        }
    }
    out
}
