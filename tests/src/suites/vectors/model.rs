//! Serde models of the vector files

use serde::Deserialize;

use super::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct GfFile {
    pub fields: Vec<GfField>,
}

/// One binary field and its cases
#[derive(Debug, Clone, Deserialize)]
pub struct GfField {
    pub name: String,
    pub bits: usize,
    pub modulus: u32,
    pub cases: Vec<GfCase>,
}

/// `mul = a*b`, `sq = a^2`, `inv = a^-1` (0 for 0), `div = a/b`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GfCase {
    pub a: u16,
    pub b: u16,
    pub mul: u16,
    pub sq: u16,
    pub inv: u16,
    pub div: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoppaFile {
    pub cases: Vec<GoppaCase>,
}

/// Minimal polynomial of `input`; `output` is empty when none exists
#[derive(Debug, Clone, Deserialize)]
pub struct GoppaCase {
    pub params: String,
    pub input: Vec<u16>,
    pub output: Vec<u16>,
    pub irreducible: bool,
}

/// Control-bit cases.
///
/// These were produced by the same recursive encoder that is under test, so
/// they pin its output against regressions; `source` records that. Cases
/// derived by hand from the layer schedule are kept next to the tests.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlBitsFile {
    pub source: String,
    pub cases: Vec<ControlBitsCase>,
}

/// A permutation of `[0, 2^w)` and its hex-encoded control bits
#[derive(Debug, Clone, Deserialize)]
pub struct ControlBitsCase {
    pub w: usize,
    pub permutation: Vec<u16>,
    pub control_bits: String,
}

impl ControlBitsCase {
    pub fn control_bits(&self) -> Result<Vec<u8>> {
        Ok(hex::decode(&self.control_bits)?)
    }
}
