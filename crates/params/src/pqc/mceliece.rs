//! Constants for Classic McEliece key encapsulation mechanism
//!
//! A parameter set is fully described by the field size `m`, the code length
//! `n`, the error weight `t`, the field modulus and the tail of the degree-`t`
//! polynomial defining GF((2^m)^t). All byte sizes are derived from these.

/// Seed length used by the key-generation expander, in bytes.
pub const MCELIECE_SEED_BYTES: usize = 32;

/// Shared secret length for every parameter set, in bytes.
pub const MCELIECE_SHARED_SECRET_BYTES: usize = 32;

/// Length of the pivot record stored in secret keys, in bytes.
pub const MCELIECE_PIVOT_BYTES: usize = 8;

/// Pivot record of the systematic parameter sets: the leading 32 columns of
/// the last pivot block are taken in order.
pub const MCELIECE_SYSTEMATIC_PIVOTS: u64 = 0xFFFF_FFFF;

/// GF(2^12) modulus: z^12 + z^3 + 1
pub const GF4096_MODULUS: u32 = (1 << 12) | (1 << 3) | 1;

/// GF(2^13) modulus: z^13 + z^4 + z^3 + z + 1
pub const GF8192_MODULUS: u32 = (1 << 13) | (1 << 4) | (1 << 3) | (1 << 1) | 1;

/// One Classic McEliece parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct McElieceParams {
    /// Human-readable name
    pub name: &'static str,

    /// Field extension degree `m`
    pub gf_bits: usize,

    /// Code length `n`
    pub sys_n: usize,

    /// Error correction capability `t`
    pub sys_t: usize,

    /// Field modulus including the leading `z^m` term
    pub field_modulus: u32,

    /// Lower terms of the ring polynomial `F(y) = y^t + sum(c * y^e)` as
    /// `(e, c)` pairs, `c` a field element
    pub ring_tail: &'static [(usize, u16)],
}

impl McElieceParams {
    /// Number of field elements, `2^m`
    pub const fn field_size(&self) -> usize {
        1 << self.gf_bits
    }

    /// Mask selecting the low `m` bits of a word
    pub const fn gf_mask(&self) -> u16 {
        ((1u32 << self.gf_bits) - 1) as u16
    }

    /// Rows of the public-key matrix, `m * t`
    pub const fn pk_nrows(&self) -> usize {
        self.gf_bits * self.sys_t
    }

    /// Columns of `T`, `n - m*t`
    pub const fn pk_ncols(&self) -> usize {
        self.sys_n - self.pk_nrows()
    }

    /// Bytes per serialized row of `T`
    pub const fn pk_row_bytes(&self) -> usize {
        (self.pk_ncols() + 7) / 8
    }

    /// Bytes of the serialized Goppa polynomial
    pub const fn irr_bytes(&self) -> usize {
        self.sys_t * 2
    }

    /// Bytes of Benes control bits, `(2m - 1) * 2^m / 16`
    pub const fn cond_bytes(&self) -> usize {
        (2 * self.gf_bits - 1) * (self.field_size() / 16)
    }

    /// Bytes of the implicit-rejection string, `n / 8`
    pub const fn sys_n_bytes(&self) -> usize {
        self.sys_n / 8
    }

    /// Bytes of SHAKE256 output consumed per key-generation attempt
    pub const fn expanded_bytes(&self) -> usize {
        self.sys_n_bytes() + 4 * self.field_size() + self.irr_bytes() + MCELIECE_SEED_BYTES
    }

    /// Public key size in bytes
    pub const fn public_key_size(&self) -> usize {
        self.pk_nrows() * self.pk_row_bytes()
    }

    /// Secret key size in bytes
    pub const fn secret_key_size(&self) -> usize {
        MCELIECE_SEED_BYTES
            + MCELIECE_PIVOT_BYTES
            + self.irr_bytes()
            + self.cond_bytes()
            + self.sys_n_bytes()
    }

    /// Ciphertext (syndrome) size in bytes
    pub const fn ciphertext_size(&self) -> usize {
        (self.pk_nrows() + 7) / 8
    }

    /// Shared secret size in bytes
    pub const fn shared_secret_size(&self) -> usize {
        MCELIECE_SHARED_SECRET_BYTES
    }

    /// Consistency check between the fields; evaluated at compile time for
    /// every constant below.
    pub const fn validate(&self) -> bool {
        let m = self.gf_bits;
        if m != 12 && m != 13 {
            return false;
        }
        if self.field_modulus >> m != 1 || self.field_modulus & 1 == 0 {
            return false;
        }
        if self.sys_n % 8 != 0 || self.sys_n > self.field_size() {
            return false;
        }
        if self.sys_t < 2 || self.pk_nrows() >= self.sys_n {
            return false;
        }
        if self.ring_tail.is_empty() {
            return false;
        }
        let mut i = 0;
        while i < self.ring_tail.len() {
            let (exp, coeff) = self.ring_tail[i];
            if exp >= self.sys_t || coeff == 0 || coeff as usize >= self.field_size() {
                return false;
            }
            i += 1;
        }
        true
    }
}

/// McEliece-348864 parameters (NIST security level 1)
pub const MCELIECE_348864: McElieceParams = McElieceParams {
    name: "McEliece-348864",
    gf_bits: 12,
    sys_n: 3488,
    sys_t: 64,
    field_modulus: GF4096_MODULUS,
    ring_tail: &[(3, 1), (1, 1), (0, 2)],
};

/// McEliece-460896 parameters (NIST security level 3)
pub const MCELIECE_460896: McElieceParams = McElieceParams {
    name: "McEliece-460896",
    gf_bits: 13,
    sys_n: 4608,
    sys_t: 96,
    field_modulus: GF8192_MODULUS,
    ring_tail: &[(10, 1), (9, 1), (6, 1), (0, 1)],
};

/// McEliece-6688128 parameters (NIST security level 5)
pub const MCELIECE_6688128: McElieceParams = McElieceParams {
    name: "McEliece-6688128",
    gf_bits: 13,
    sys_n: 6688,
    sys_t: 128,
    field_modulus: GF8192_MODULUS,
    ring_tail: &[(7, 1), (2, 1), (1, 1), (0, 1)],
};

/// McEliece-6960119 parameters (NIST security level 5)
pub const MCELIECE_6960119: McElieceParams = McElieceParams {
    name: "McEliece-6960119",
    gf_bits: 13,
    sys_n: 6960,
    sys_t: 119,
    field_modulus: GF8192_MODULUS,
    ring_tail: &[(8, 1), (0, 1)],
};

/// McEliece-8192128 parameters (NIST security level 5)
pub const MCELIECE_8192128: McElieceParams = McElieceParams {
    name: "McEliece-8192128",
    gf_bits: 13,
    sys_n: 8192,
    sys_t: 128,
    field_modulus: GF8192_MODULUS,
    ring_tail: &[(7, 1), (2, 1), (1, 1), (0, 1)],
};

/// All supported parameter sets, smallest first.
pub const ALL_PARAMS: [McElieceParams; 5] = [
    MCELIECE_348864,
    MCELIECE_460896,
    MCELIECE_6688128,
    MCELIECE_6960119,
    MCELIECE_8192128,
];

const _: () = assert!(MCELIECE_348864.validate());
const _: () = assert!(MCELIECE_460896.validate());
const _: () = assert!(MCELIECE_6688128.validate());
const _: () = assert!(MCELIECE_6960119.validate());
const _: () = assert!(MCELIECE_8192128.validate());
