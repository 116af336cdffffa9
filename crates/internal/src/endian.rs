//! Little-endian load/store helpers
//!
//! Field elements travel as 2-byte words, permutation seeds as 4-byte words and
//! bit-sliced rows as 8-byte words. Callers slice the buffers; these helpers
//! only read or write the leading bytes.

/// Load a field element from two little-endian bytes, masked to `mask`.
#[inline]
pub fn load_gf(bytes: &[u8], mask: u16) -> u16 {
    u16_from_le_bytes(bytes) & mask
}

/// Store a field element as two little-endian bytes.
#[inline]
pub fn store_gf(out: &mut [u8], value: u16) {
    out[..2].copy_from_slice(&value.to_le_bytes());
}

/// Convert a u16 from little-endian byte order to native byte order
pub fn u16_from_le_bytes(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Convert a u32 from little-endian byte order to native byte order
pub fn u32_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Convert a u64 from little-endian byte order to native byte order
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Store a u64 as eight little-endian bytes
pub fn store_u64_le(out: &mut [u8], value: u64) {
    out[..8].copy_from_slice(&value.to_le_bytes());
}

/// Store the low `len` bytes of a u64 in little-endian order (`len <= 8`)
pub fn store_u64_le_partial(out: &mut [u8], value: u64, len: usize) {
    out[..len].copy_from_slice(&value.to_le_bytes()[..len]);
}
