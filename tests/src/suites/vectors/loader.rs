//! Loads vector files from disk

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use cmce_params::pqc::mceliece::{McElieceParams, ALL_PARAMS};

use super::error::{Result, VectorError};
use super::model::{ControlBitsCase, ControlBitsFile, GfField, GfFile, GoppaCase, GoppaFile};

fn json_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("json")
}

fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
    let path = json_dir().join(name);
    let json = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&json)?)
}

static GF: OnceCell<GfFile> = OnceCell::new();
static GOPPA: OnceCell<GoppaFile> = OnceCell::new();
static CONTROL_BITS: OnceCell<ControlBitsFile> = OnceCell::new();

/// Field-arithmetic cases for GF(2^12) and GF(2^13)
pub fn gf_vectors() -> Result<&'static [GfField]> {
    Ok(&GF.get_or_try_init(|| load("gf.json"))?.fields)
}

/// Minimal-polynomial cases across parameter sets
pub fn goppa_vectors() -> Result<&'static [GoppaCase]> {
    Ok(&GOPPA.get_or_try_init(|| load("goppa.json"))?.cases)
}

/// Permutation to control-bit cases for small widths
pub fn controlbits_vectors() -> Result<&'static [ControlBitsCase]> {
    Ok(&CONTROL_BITS
        .get_or_try_init(|| load("controlbits.json"))?
        .cases)
}

/// Parameter set by its display name, e.g. `McEliece-348864`
pub fn params_by_name(name: &str) -> Result<McElieceParams> {
    ALL_PARAMS
        .iter()
        .find(|p| p.name == name)
        .copied()
        .ok_or_else(|| VectorError::UnknownParams(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_parse() {
        assert_eq!(gf_vectors().unwrap().len(), 2);
        assert!(!goppa_vectors().unwrap().is_empty());
        for case in controlbits_vectors().unwrap() {
            assert_eq!(case.permutation.len(), 1 << case.w);
            assert!(!case.control_bits().unwrap().is_empty());
        }
        assert!(!CONTROL_BITS.get().unwrap().source.is_empty());
    }

    #[test]
    fn test_params_lookup() {
        assert_eq!(params_by_name("McEliece-6960119").unwrap().sys_t, 119);
        assert!(matches!(
            params_by_name("McEliece-1"),
            Err(VectorError::UnknownParams(_))
        ));
    }
}
