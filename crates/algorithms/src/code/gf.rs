//! Arithmetic in GF(2^m) for m in {12, 13}
//!
//! Elements are polynomials over GF(2) reduced modulo the parameter set's
//! field modulus, stored in the low `m` bits of a `u16`. Every operation masks
//! its inputs to `m` bits and runs a fixed instruction sequence.

use cmce_params::pqc::mceliece::McElieceParams;

/// A field element
pub type Gf = u16;

/// Largest supported extension degree
pub const MAX_GF_BITS: usize = 13;

/// GF(2^m) with a fixed modulus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    bits: usize,
    modulus: u32,
}

impl Field {
    /// Field with extension degree `bits` and `modulus` (including `z^bits`)
    pub const fn new(bits: usize, modulus: u32) -> Self {
        Self { bits, modulus }
    }

    /// Field of a parameter set
    pub const fn from_params(params: &McElieceParams) -> Self {
        Self::new(params.gf_bits, params.field_modulus)
    }

    /// Extension degree `m`
    #[inline(always)]
    pub const fn bits(&self) -> usize {
        self.bits
    }

    /// Modulus including the leading term
    #[inline(always)]
    pub const fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Mask of the low `m` bits
    #[inline(always)]
    pub const fn mask(&self) -> Gf {
        ((1u32 << self.bits) - 1) as Gf
    }

    /// Number of elements, `2^m`
    #[inline(always)]
    pub const fn size(&self) -> usize {
        1 << self.bits
    }

    /// Addition (XOR)
    #[inline(always)]
    pub fn add(&self, a: Gf, b: Gf) -> Gf {
        (a ^ b) & self.mask()
    }

    /// Multiplication: carry-less product then reduction from the top bit
    #[inline]
    pub fn mul(&self, a: Gf, b: Gf) -> Gf {
        let m = self.bits;
        let a = (a & self.mask()) as u32;
        let b = (b & self.mask()) as u32;

        let mut t = 0u32;
        for i in 0..m {
            t ^= (a << i) & 0u32.wrapping_sub((b >> i) & 1);
        }

        for i in (m..2 * m - 1).rev() {
            t ^= (self.modulus << (i - m)) & 0u32.wrapping_sub((t >> i) & 1);
        }

        (t as Gf) & self.mask()
    }

    /// Square
    #[inline]
    pub fn sq(&self, a: Gf) -> Gf {
        self.mul(a, a)
    }

    /// Fourth power
    #[inline]
    pub fn sq2(&self, a: Gf) -> Gf {
        self.sq(self.sq(a))
    }

    /// `a^(2^k)`
    #[inline]
    fn sq_n(&self, mut a: Gf, k: usize) -> Gf {
        for _ in 0..k {
            a = self.sq(a);
        }
        a
    }

    /// Inverse via `a^(2^m - 2)`; `inv(0) == 0`.
    ///
    /// Itoh-Tsujii: `e_k = a^(2^k - 1)` is built along the binary expansion of
    /// `m - 1`, using `e_2k = e_k^(2^k) * e_k` and `e_(k+1) = e_k^2 * a`, and
    /// the result is `e_(m-1)^2`. The chain depends on `m` only.
    pub fn inv(&self, a: Gf) -> Gf {
        let a = a & self.mask();
        let target = self.bits - 1;
        let top = usize::BITS - 1 - target.leading_zeros();

        let mut e = a;
        let mut k = 1usize;
        for bit in (0..top).rev() {
            e = self.mul(self.sq_n(e, k), e);
            k *= 2;
            if (target >> bit) & 1 == 1 {
                e = self.mul(self.sq(e), a);
                k += 1;
            }
        }
        debug_assert_eq!(k, target);

        self.sq(e)
    }

    /// Division `a / b`; zero when `b == 0`
    #[inline]
    pub fn div(&self, a: Gf, b: Gf) -> Gf {
        self.mul(a, self.inv(b))
    }

    /// All-ones mask when `a == 0`, zero otherwise
    #[inline(always)]
    pub fn is_zero_mask(&self, a: Gf) -> Gf {
        cmce_internal::constant_time::ct_is_zero_mask_u16(a & self.mask())
    }

    /// Reverse the low `m` bits of `a`
    #[inline(always)]
    pub fn bitrev(&self, a: Gf) -> Gf {
        a.reverse_bits() >> (16 - self.bits)
    }
}
