//! Bit-sliced additive FFT over GF(2^m)
//!
//! Gao-Mateer evaluation of a polynomial at every point of the subspace
//! spanned by a basis `b_0, ..., b_(k-1)`; point `c` is the sum of the `b_i`
//! selected by the bits of `c`.
//!
//! All data lives in [`BitSliced`] blocks, 64 lanes each. On the way down,
//! coefficient `i` of a sub-polynomial sits in lane `j + i * 2^d`, where the
//! `d` low bits `j` record the radix choices made so far; twists are lane-wise
//! products and radix steps are lane-shifted XORs. On the way up, butterflies
//! combine lanes `2^d` apart, leaving the value at point `c` in lane
//! `bitrev_k(c)`.

use zeroize::Zeroizing;

use super::gf::{Field, Gf, MAX_GF_BITS};
use super::vec::{bitslice, unbitslice, vec_mul, BitSliced};
use crate::error::{validate, Result};

const LANES: usize = 64;

/// Constants of one recursion level
struct Level {
    /// Last basis element, divided out by the twist
    beta: Gf,
    /// Remaining basis elements scaled by `1 / beta`
    gamma: Vec<Gf>,
}

/// Level `d` evaluates on a basis of `k - d` elements
fn levels(field: &Field, basis: &[Gf]) -> Vec<Level> {
    let mut levels = Vec::with_capacity(basis.len());
    let mut current = basis.to_vec();
    while let Some(beta) = current.pop() {
        let beta_inv = field.inv(beta);
        let gamma: Vec<Gf> = current.iter().map(|&b| field.mul(b, beta_inv)).collect();
        current = gamma.iter().map(|&g| field.sq(g) ^ g).collect();
        levels.push(Level { beta, gamma });
    }
    levels
}

/// All subset sums of `gamma`, indexed by selector bits
fn subspace(gamma: &[Gf]) -> Vec<Gf> {
    let mut span = vec![0 as Gf; 1 << gamma.len()];
    for (i, &g) in gamma.iter().enumerate() {
        let step = 1usize << i;
        for c in 0..step {
            span[c | step] = span[c] ^ g;
        }
    }
    span
}

fn bitrev_bits(x: usize, bits: usize) -> usize {
    if bits == 0 {
        0
    } else {
        x.reverse_bits() >> (usize::BITS as usize - bits)
    }
}

/// Block `w` with lane `p` taken from lane `p + shift`; lanes past the end read zero
fn lanes_down(v: &[BitSliced], w: usize, shift: usize) -> BitSliced {
    let q = w + shift / LANES;
    let r = shift % LANES;
    let mut out = [0u64; MAX_GF_BITS];
    for (k, o) in out.iter_mut().enumerate() {
        let lo = v.get(q).map_or(0, |b| b[k]);
        let hi = v.get(q + 1).map_or(0, |b| b[k]);
        *o = if r == 0 { lo } else { (lo >> r) | (hi << (LANES - r)) };
    }
    out
}

/// Block `w` with lane `p` taken from lane `p - shift`; lanes before the start read zero
fn lanes_up(v: &[BitSliced], w: usize, shift: usize) -> BitSliced {
    let q = shift / LANES;
    let r = shift % LANES;
    let mut out = [0u64; MAX_GF_BITS];
    if w < q {
        return out;
    }
    for (k, o) in out.iter_mut().enumerate() {
        let lo = v[w - q][k];
        let prev = if w > q { v[w - q - 1][k] } else { 0 };
        *o = if r == 0 { lo } else { (lo << r) | (prev >> (LANES - r)) };
    }
    out
}

/// Lanes of block `w` whose global index satisfies `pred`
fn lane_mask(w: usize, pred: impl Fn(usize) -> bool) -> u64 {
    (0..LANES)
        .filter(|&r| pred(LANES * w + r))
        .fold(0, |m, r| m | 1u64 << r)
}

#[inline]
fn xor_masked(dst: &mut BitSliced, src: &BitSliced, mask: u64) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s & mask;
    }
}

/// Twist by `beta`, then split each sub-polynomial of length `len` at depth
/// `d` into `f0` (even coefficients) and `f1` (odd coefficients) with
/// `f(y) = f0(y^2 + y) + y * f1(y^2 + y)`.
fn radix_level(field: &Field, v: &mut [BitSliced], d: usize, len: usize, beta: Gf) {
    let mut powers = vec![1 as Gf; (LANES * v.len()) >> d];
    for i in 1..powers.len() {
        powers[i] = field.mul(powers[i - 1], beta);
    }
    let mut lane = [0 as Gf; LANES];
    for (w, block) in v.iter_mut().enumerate() {
        for (r, e) in lane.iter_mut().enumerate() {
            *e = powers[(LANES * w + r) >> d];
        }
        *block = vec_mul(field, block, &bitslice(field, &lane));
    }

    // (y^2 + y)^n = y^2n + y^n for n a power of two
    let mut s = len;
    while s >= 4 {
        let n = s / 4;
        for (lo, hi) in [(2 * n, 3 * n), (n, 2 * n)] {
            for w in 0..v.len() {
                let src = lanes_down(v, w, n << d);
                let mask = lane_mask(w, |p| (lo..hi).contains(&((p >> d) % s)));
                xor_masked(&mut v[w], &src, mask);
            }
        }
        s /= 2;
    }
}

/// Evaluate bit-sliced coefficients at every point of `span(basis)`.
///
/// Coefficient `i` is lane `i % 64` of `coeffs[i / 64]`. The result has
/// `max(1, 2^k / 64)` blocks: lane `bitrev_k(c)` holds the value at point `c`
/// and lanes at or past `2^k` are zero. With the basis `z^0, ..., z^(m-1)`,
/// block `b` lane `r` is `f(bitrev(64 * b + r))`.
pub fn evaluate_sliced(
    field: &Field,
    coeffs: &[BitSliced],
    basis: &[Gf],
) -> Result<Zeroizing<Vec<BitSliced>>> {
    validate::min_length("polynomial blocks", coeffs.len(), 1)?;
    validate::parameter(
        basis.len() <= field.bits(),
        "basis",
        "more elements than the field has bits",
    )?;

    let k = basis.len();
    let points = 1usize << k;
    let levels = levels(field, basis);

    let mut v = Zeroizing::new(coeffs.to_vec());
    let len = (LANES * coeffs.len()).next_power_of_two();
    let depth = len.trailing_zeros() as usize;
    for (d, level) in levels.iter().enumerate().take(depth) {
        radix_level(field, &mut v, d, len >> d, level.beta);
    }

    // constant term of every leaf; leaves past the last radix level are zero
    let blocks = (points / LANES).max(1);
    let mut out = Zeroizing::new(vec![[0u64; MAX_GF_BITS]; blocks]);
    for (w, (o, c)) in out.iter_mut().zip(v.iter()).enumerate() {
        xor_masked(o, c, lane_mask(w, |p| p < points));
    }

    let mut pattern = [0 as Gf; LANES];
    for (d, level) in levels.iter().enumerate().rev() {
        let stride = 1usize << d;
        let bits = level.gamma.len();
        let alpha = subspace(&level.gamma);

        // low half: u + alpha * v
        for w in 0..blocks {
            for (r, a) in pattern.iter_mut().enumerate() {
                let p = LANES * w + r;
                *a = if p < points && (p >> d) & 1 == 0 {
                    alpha[bitrev_bits(p >> (d + 1), bits)]
                } else {
                    0
                };
            }
            let hi = lanes_down(&out, w, stride);
            let prod = vec_mul(field, &hi, &bitslice(field, &pattern));
            xor_masked(&mut out[w], &prod, u64::MAX);
        }

        // high half: low half + v
        for w in 0..blocks {
            let lo = lanes_up(&out, w, stride);
            let mask = lane_mask(w, |p| p < points && (p >> d) & 1 == 1);
            xor_masked(&mut out[w], &lo, mask);
        }
    }

    Ok(out)
}

/// Evaluate `f` (coefficients lowest first) at all `2^k` points of
/// `span(basis)`: `out[c]` is the value at the point selected by the bits of
/// `c`.
pub fn evaluate(field: &Field, f: &[Gf], basis: &[Gf]) -> Result<Vec<Gf>> {
    validate::min_length("polynomial", f.len(), 1)?;

    let coeffs: Zeroizing<Vec<BitSliced>> =
        Zeroizing::new(f.chunks(LANES).map(|c| bitslice(field, c)).collect());
    let sliced = evaluate_sliced(field, &coeffs, basis)?;

    let k = basis.len();
    let mut flat = Zeroizing::new(Vec::with_capacity(LANES * sliced.len()));
    for block in sliced.iter() {
        flat.extend_from_slice(&unbitslice(field, block));
    }
    Ok((0..1usize << k).map(|c| flat[bitrev_bits(c, k)]).collect())
}
