//! Constant-time operations to prevent timing attacks
//!
//! The word-level helpers turn a condition into an all-ones or all-zeros mask
//! with pure arithmetic, so callers can write `dst ^= src & mask` instead of
//! branching on secret data.

use subtle::ConstantTimeEq;

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// This function runs in constant time regardless of the input values.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// All-ones `u16` mask when `x == 0`, zero otherwise.
#[inline(always)]
pub fn ct_is_zero_mask_u16(x: u16) -> u16 {
    let t = (x as u32).wrapping_sub(1) >> 31;
    0u16.wrapping_sub(t as u16)
}

/// All-ones `u64` mask when bit `bit` of `x` is set.
#[inline(always)]
pub fn ct_bit_mask_u64(x: u64, bit: u32) -> u64 {
    0u64.wrapping_sub((x >> bit) & 1)
}

/// Returns 1 if `x != 0`, 0 otherwise.
#[inline(always)]
pub fn ct_is_nonzero_u64(x: u64) -> u64 {
    (x | x.wrapping_neg()) >> 63
}

/// Returns 1 if `a == b`, 0 otherwise.
#[inline(always)]
pub fn ct_eq_u64(a: u64, b: u64) -> u64 {
    1 ^ ct_is_nonzero_u64(a ^ b)
}

/// Constant-time minimum of two `i32` values.
///
/// Valid whenever `b - a` does not overflow, which holds for all keys built by
/// the sorting-based permutation encoder.
#[inline(always)]
pub fn ct_min_i32(a: i32, b: i32) -> i32 {
    let ab = b ^ a;
    let mut c = b.wrapping_sub(a);
    c ^= ab & (c ^ b);
    c >>= 31;
    c &= ab;
    a ^ c
}
