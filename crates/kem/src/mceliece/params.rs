//! Classic McEliece parameter-set markers.

use cmce_params::pqc::mceliece as global_params;
use cmce_params::pqc::mceliece::McElieceParams;

/// Trait binding a marker type to one parameter set.
pub trait McElieceParamSet: Send + Sync + 'static {
    /// The parameter set.
    const PARAMS: McElieceParams;

    /// Algorithm name string.
    const NAME: &'static str = Self::PARAMS.name;
    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize = Self::PARAMS.public_key_size();
    /// Size of the secret key in bytes.
    const SECRET_KEY_BYTES: usize = Self::PARAMS.secret_key_size();
}

macro_rules! param_set {
    ($(#[$doc:meta])* $name:ident => $params:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl McElieceParamSet for $name {
            const PARAMS: McElieceParams = $params;
        }
    };
}

param_set!(
    /// mceliece348864 (m = 12, n = 3488, t = 64)
    McEliece348864Params => global_params::MCELIECE_348864
);
param_set!(
    /// mceliece460896 (m = 13, n = 4608, t = 96)
    McEliece460896Params => global_params::MCELIECE_460896
);
param_set!(
    /// mceliece6688128 (m = 13, n = 6688, t = 128)
    McEliece6688128Params => global_params::MCELIECE_6688128
);
param_set!(
    /// mceliece6960119 (m = 13, n = 6960, t = 119)
    McEliece6960119Params => global_params::MCELIECE_6960119
);
param_set!(
    /// mceliece8192128 (m = 13, n = 8192, t = 128)
    McEliece8192128Params => global_params::MCELIECE_8192128
);
