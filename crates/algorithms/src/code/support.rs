//! Support reconstruction from control bits

use cmce_params::pqc::mceliece::McElieceParams;
use zeroize::Zeroizing;

use super::benes::apply_benes;
use super::controlbits::controlbits_len;
use super::gf::{Field, Gf};
use crate::error::{validate, Result};

/// Rebuild the support `L[i] = bitrev(pi[i])`, `i < n`, from the secret key's
/// control bits.
///
/// Each of the `m` bit planes of the sequence `bitrev(0), bitrev(1), ...` is
/// routed through the network separately.
pub fn support_from_controlbits(params: &McElieceParams, bits: &[u8]) -> Result<Vec<Gf>> {
    let field = Field::from_params(params);
    let m = field.bits();
    let size = field.size();
    validate::length("control bits", bits.len(), controlbits_len(m, size))?;

    let mut planes = Zeroizing::new(vec![vec![0u8; size / 8]; m]);
    for i in 0..size {
        let a = field.bitrev(i as Gf);
        for (j, plane) in planes.iter_mut().enumerate() {
            plane[i / 8] |= (((a >> j) & 1) as u8) << (i % 8);
        }
    }

    for plane in planes.iter_mut() {
        apply_benes(plane, bits, m)?;
    }

    let support = (0..params.sys_n)
        .map(|i| {
            planes
                .iter()
                .enumerate()
                .fold(0 as Gf, |acc, (j, plane)| {
                    acc | ((((plane[i / 8] >> (i % 8)) & 1) as Gf) << j)
                })
        })
        .collect();
    Ok(support)
}
