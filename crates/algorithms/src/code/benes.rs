//! Bit-sliced Benes network
//!
//! Applies the network encoded by [`controlbits`](super::controlbits) to a
//! `2^w`-bit string held as `2^w / 64` little-endian words. Strides below 64
//! act inside a word: each 64x64 block is transposed so that those stages
//! become word-level swaps. Larger strides swap whole words directly.

use cmce_internal::endian::{u32_from_le_bytes, u64_from_le_bytes};
use zeroize::{Zeroize, Zeroizing};

use super::controlbits::{controlbits_len, MAX_WIDTH};
use crate::error::{validate, Result};

/// Smallest width with at least one full 64x64 block
pub const MIN_WIDTH: usize = 12;

const TRANSPOSE_MASKS: [[u64; 2]; 6] = [
    [0x5555555555555555, 0xAAAAAAAAAAAAAAAA],
    [0x3333333333333333, 0xCCCCCCCCCCCCCCCC],
    [0x0F0F0F0F0F0F0F0F, 0xF0F0F0F0F0F0F0F0],
    [0x00FF00FF00FF00FF, 0xFF00FF00FF00FF00],
    [0x0000FFFF0000FFFF, 0xFFFF0000FFFF0000],
    [0x00000000FFFFFFFF, 0xFFFFFFFF00000000],
];

/// In-place transpose of a 64x64 bit matrix (word `i`, bit `j`)
pub fn transpose_64x64(a: &mut [u64]) {
    for d in (0..6).rev() {
        let s = 1usize << d;
        let [m0, m1] = TRANSPOSE_MASKS[d];
        for i in (0..64).step_by(2 * s) {
            for j in i..i + s {
                let x = (a[j] & m0) | ((a[j + s] & m0) << s);
                let y = ((a[j] & m1) >> s) | (a[j + s] & m1);
                a[j] = x;
                a[j + s] = y;
            }
        }
    }
}

/// Word-level conditional swaps at stride `2^lgs`, one mask word per pair
fn layer(data: &mut [u64], cond: &[u64], lgs: usize) {
    let s = 1usize << lgs;
    let mut c = 0;
    for i in (0..data.len()).step_by(2 * s) {
        for j in i..i + s {
            let d = (data[j] ^ data[j + s]) & cond[c];
            data[j] ^= d;
            data[j + s] ^= d;
            c += 1;
        }
    }
}

/// Stages with stride below 64, run on transposed blocks.
///
/// `schedule` lists `(stage index, stride exponent)` pairs.
fn intra_word_stages(words: &mut [u64], bits: &[u8], stage_bytes: usize, schedule: &[(usize, usize)]) {
    let mut cond = [0u64; 64];
    for (h, block) in words.chunks_exact_mut(64).enumerate() {
        transpose_64x64(block);
        for &(stage, s) in schedule {
            // 32 bits per row of the block
            let base = stage * stage_bytes + h * 64 * 4;
            for (k, c) in cond.iter_mut().enumerate() {
                *c = u32_from_le_bytes(&bits[base + 4 * k..]) as u64;
            }
            transpose_64x64(&mut cond);
            layer(block, &cond, s);
        }
        transpose_64x64(block);
    }
    cond.zeroize();
}

/// Permute the bits of `data` with the network encoded in `bits`.
///
/// Bit `p` of `data` is bit `p % 8` of byte `p / 8`. On return bit `i` holds
/// the former bit `pi[i]`.
pub fn apply_benes(data: &mut [u8], bits: &[u8], w: usize) -> Result<()> {
    validate::parameter(
        (MIN_WIDTH..=MAX_WIDTH).contains(&w),
        "w",
        "bit-sliced network width must be 12 or 13",
    )?;
    let n = 1usize << w;
    validate::length("benes data", data.len(), n / 8)?;
    validate::min_length("control bits", bits.len(), controlbits_len(w, n))?;

    let stage_bytes = n / 16;
    let mut words: Zeroizing<Vec<u64>> =
        Zeroizing::new(data.chunks_exact(8).map(u64_from_le_bytes).collect());

    let ascending: Vec<(usize, usize)> = (0..6).map(|s| (s, s)).collect();
    intra_word_stages(&mut words, bits, stage_bytes, &ascending);

    let mut cond = Zeroizing::new(vec![0u64; words.len() / 2]);
    let inter = (6..w).map(|s| (s, s)).chain((6..w - 1).rev().map(|s| (2 * w - 2 - s, s)));
    for (stage, s) in inter {
        let base = stage * stage_bytes;
        for (c, v) in cond.iter_mut().enumerate() {
            *v = u64_from_le_bytes(&bits[base + 8 * c..]);
        }
        layer(&mut words, &cond, s - 6);
    }

    let descending: Vec<(usize, usize)> = (0..6).rev().map(|s| (2 * w - 2 - s, s)).collect();
    intra_word_stages(&mut words, bits, stage_bytes, &descending);

    for (chunk, word) in data.chunks_exact_mut(8).zip(words.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    Ok(())
}
