//! Benes network synthesis
//!
//! A permutation of `n = 2^w` points is encoded as the conditional-swap bits
//! of a Benes network with `2w - 1` stages. Stage `t` uses stride `2^s` where
//! `s` runs `0, 1, ..., w-1, w-2, ..., 0`; its `n / 2` bits start at bit
//! `t * n / 2`. Within a stage, pairs `(i + j, i + j + 2^s)` are visited for
//! `i` stepping by `2^(s+1)` and `j < 2^s`, one bit each, LSB first.
//!
//! Running every stage over the identity array yields `pi`; over data it
//! produces `out[i] = data[pi[i]]`.
//!
//! The encoder follows the sorting-based recursion of Bernstein's
//! "Verified fast formulas for control bits for permutation networks": every
//! data-dependent step is an oblivious sort or a masked min.

use cmce_internal::constant_time::{ct_is_nonzero_u64, ct_min_i32};
use zeroize::Zeroizing;

use super::sort::int32_sort;
use crate::error::{validate, Result};

/// Largest supported network width
pub const MAX_WIDTH: usize = 13;

/// Number of control-bit bytes for a network of width `w` over `n` points
pub const fn controlbits_len(w: usize, n: usize) -> usize {
    ((2 * w - 1) * n / 2 + 7) / 8
}

/// Stage schedule as `(stage index, stride exponent)` pairs
pub(crate) fn stages(w: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..w).chain((0..w - 1).rev()).enumerate()
}

/// Write cursor into a control-bit buffer.
///
/// A sub-network owns every other bit of its parent's stages, so a child
/// cursor keeps the parent's buffer and doubles the stride.
struct ControlBitSink<'a> {
    out: &'a mut [u8],
    pos: usize,
    step: usize,
}

impl<'a> ControlBitSink<'a> {
    fn new(out: &'a mut [u8]) -> Self {
        Self {
            out,
            pos: 0,
            step: 1,
        }
    }

    #[inline(always)]
    fn emit(&mut self, bit: i32) {
        self.out[self.pos >> 3] ^= ((bit & 1) as u8) << (self.pos & 7);
        self.pos += self.step;
    }

    fn advance(&mut self, count: usize) {
        self.pos += count * self.step;
    }

    fn rewind(&mut self, count: usize) {
        self.pos -= count * self.step;
    }

    /// Cursor for the sub-network starting `offset` positions in
    fn interleaved(&mut self, offset: usize) -> ControlBitSink<'_> {
        ControlBitSink {
            out: &mut *self.out,
            pos: self.pos + offset * self.step,
            step: self.step * 2,
        }
    }
}

fn cbrecursion(sink: &mut ControlBitSink<'_>, pi: &[i32], w: usize) {
    if w == 1 {
        sink.emit(pi[0]);
        return;
    }

    let n = pi.len();
    let half = n / 2;
    let mut a = Zeroizing::new(vec![0i32; n]);
    let mut b = Zeroizing::new(vec![0i32; n]);

    for x in 0..n {
        a[x] = ((pi[x] ^ 1) << 16) | pi[x ^ 1];
    }
    int32_sort(&mut a);

    for x in 0..n {
        let px = a[x] & 0xffff;
        b[x] = (px << 16) | ct_min_i32(px, x as i32);
    }

    for x in 0..n {
        a[x] = (a[x] << 16) | x as i32;
    }
    int32_sort(&mut a);
    for x in 0..n {
        a[x] = (a[x] << 16) + (b[x] >> 16);
    }
    int32_sort(&mut a);

    // propagate the minimum over each cycle; w - 2 rounds of doubling
    if w <= 10 {
        for x in 0..n {
            b[x] = ((a[x] & 0xffff) << 10) | (b[x] & 0x3ff);
        }
        for _ in 1..w - 1 {
            for x in 0..n {
                a[x] = ((b[x] & !0x3ff) << 6) | x as i32;
            }
            int32_sort(&mut a);
            for x in 0..n {
                a[x] = (a[x] << 20) | b[x];
            }
            int32_sort(&mut a);
            for x in 0..n {
                let ppcpx = a[x] & 0xfffff;
                let ppcx = (a[x] & 0xffc00) | (b[x] & 0x3ff);
                b[x] = ct_min_i32(ppcx, ppcpx);
            }
        }
        for bx in b.iter_mut() {
            *bx &= 0x3ff;
        }
    } else {
        for x in 0..n {
            b[x] = (a[x] << 16) | (b[x] & 0xffff);
        }
        for i in 1..w - 1 {
            for x in 0..n {
                a[x] = (b[x] & !0xffff) | x as i32;
            }
            int32_sort(&mut a);
            for x in 0..n {
                a[x] = (a[x] << 16) | (b[x] & 0xffff);
            }
            if i < w - 2 {
                for x in 0..n {
                    b[x] = (a[x] & !0xffff) | (b[x] >> 16);
                }
                int32_sort(&mut b);
                for x in 0..n {
                    b[x] = (b[x] << 16) | (a[x] & 0xffff);
                }
            }
            int32_sort(&mut a);
            for x in 0..n {
                let cpx = (b[x] & !0xffff) | (a[x] & 0xffff);
                b[x] = ct_min_i32(b[x], cpx);
            }
        }
        for bx in b.iter_mut() {
            *bx &= 0xffff;
        }
    }

    for x in 0..n {
        a[x] = (pi[x] << 16) + x as i32;
    }
    int32_sort(&mut a);

    // first stage
    for j in 0..half {
        let x = 2 * j;
        let fj = b[x] & 1;
        let fx = x as i32 + fj;
        sink.emit(fj);
        b[x] = (a[x] << 16) | fx;
        b[x + 1] = (a[x + 1] << 16) | (fx ^ 1);
    }
    int32_sort(&mut b);

    // last stage
    sink.advance((2 * w - 3) * half);
    for k in 0..half {
        let y = 2 * k;
        let lk = b[y] & 1;
        let ly = y as i32 + lk;
        sink.emit(lk);
        a[y] = (ly << 16) | (b[y] & 0xffff);
        a[y + 1] = ((ly ^ 1) << 16) | (b[y + 1] & 0xffff);
    }
    int32_sort(&mut a);
    sink.rewind((2 * w - 2) * half);

    let mut q = Zeroizing::new(vec![0i32; n]);
    for j in 0..half {
        q[j] = (a[2 * j] & 0xffff) >> 1;
        q[j + half] = (a[2 * j + 1] & 0xffff) >> 1;
    }

    cbrecursion(&mut sink.interleaved(0), &q[..half], w - 1);
    cbrecursion(&mut sink.interleaved(1), &q[half..], w - 1);
}

/// One conditional-swap stage over `p`, masks only
fn layer(p: &mut [u16], bits: &[u8], stage: usize, s: usize) {
    let n = p.len();
    let stride = 1usize << s;
    let mut index = stage * (n / 2);
    for i in (0..n).step_by(2 * stride) {
        for j in 0..stride {
            let m = 0u16.wrapping_sub(((bits[index >> 3] >> (index & 7)) & 1) as u16);
            let d = (p[i + j] ^ p[i + j + stride]) & m;
            p[i + j] ^= d;
            p[i + j + stride] ^= d;
            index += 1;
        }
    }
}

fn check_width(w: usize) -> Result<()> {
    validate::parameter(
        (1..=MAX_WIDTH).contains(&w),
        "w",
        "network width must be between 1 and 13",
    )
}

/// Run every stage of the network over the identity, giving the encoded
/// permutation.
pub fn permutation_from_controlbits(bits: &[u8], w: usize) -> Result<Vec<u16>> {
    check_width(w)?;
    let n = 1usize << w;
    validate::min_length("control bits", bits.len(), controlbits_len(w, n))?;

    let mut p: Vec<u16> = (0..n as u32).map(|i| i as u16).collect();
    for (stage, s) in stages(w) {
        layer(&mut p, bits, stage, s);
    }
    Ok(p)
}

/// Encode the permutation `pi` of `n = 2^w` points as Benes control bits.
///
/// `pi` must hold distinct values; this is not checked on the hot path. The
/// result is verified against the layer model before it is returned.
pub fn controlbits_from_permutation(pi: &[u16], w: usize, n: usize) -> Result<Vec<u8>> {
    check_width(w)?;
    validate::length("network size", n, 1 << w)?;
    validate::length("permutation", pi.len(), n)?;

    let pi32: Zeroizing<Vec<i32>> = Zeroizing::new(pi.iter().map(|&v| v as i32).collect());
    let mut out = vec![0u8; controlbits_len(w, n)];
    cbrecursion(&mut ControlBitSink::new(&mut out), &pi32, w);

    let test = Zeroizing::new(permutation_from_controlbits(&out, w)?);
    let diff = pi
        .iter()
        .zip(test.iter())
        .fold(0u16, |acc, (&x, &y)| acc | (x ^ y));
    validate::processing(
        ct_is_nonzero_u64(diff as u64),
        "control bits",
        "network does not reproduce the permutation",
    )?;

    Ok(out)
}
