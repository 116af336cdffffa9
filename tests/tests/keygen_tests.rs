// Key generation through the public traits

use cmce_algorithms::code::{support_from_controlbits, Field, Gf};
use cmce_api::{KeyGenerator, Serialize, SerializeSecret};
use cmce_kem::mceliece::{
    McEliece348864, McEliece460896, McEliece6688128, McEliece6960119, McEliece8192128,
    McElieceKem, McElieceParamSet, McElieceSecretKey,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Evaluate the monic polynomial with low coefficients `g` at `x`
fn eval_monic(field: &Field, g: &[Gf], x: Gf) -> Gf {
    g.iter()
        .rev()
        .fold(1, |acc, &c| field.add(field.mul(acc, x), c))
}

fn roundtrip<K: KeyGenerator>(seed: u64) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let kp = K::keypair(&mut rng).expect("keypair");
    let pk = K::public_key(&kp);
    let sk = K::secret_key(&kp);

    let pk_bytes = pk.to_bytes();
    let pk2 = K::PublicKey::from_bytes(&pk_bytes).expect("public key parses");
    assert_eq!(pk2.to_bytes(), pk_bytes);

    let sk_bytes = sk.to_bytes_zeroizing();
    let sk2 = K::SecretKey::from_bytes(&sk_bytes).expect("secret key parses");
    assert_eq!(*sk2.to_bytes_zeroizing(), *sk_bytes);
}

/// The support drawn from the control bits must avoid every root of g
fn check_goppa_code<P: McElieceParamSet>(sk: &McElieceSecretKey<P>) {
    let params = P::PARAMS;
    let field = Field::from_params(&params);
    let g = sk.goppa_polynomial();
    let support = support_from_controlbits(&params, sk.control_bits()).expect("support");
    assert_eq!(support.len(), params.sys_n);
    for &a in &support {
        assert_ne!(eval_monic(&field, &g, a), 0, "{}: support hits a root", P::NAME);
    }

    let mut sorted = support.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), params.sys_n, "support elements are distinct");
}

#[test]
fn test_keygen_trait_roundtrip() {
    roundtrip::<McEliece348864>(42);
}

#[test]
fn test_secret_key_defines_goppa_code() {
    let (_, sk) = McEliece348864::keypair_from_seed(&[0x5a; 32]).unwrap();
    check_goppa_code(&sk);
}

#[test]
fn test_rng_seed_determines_keys() {
    let mut a = ChaCha20Rng::seed_from_u64(1);
    let mut b = ChaCha20Rng::seed_from_u64(1);
    let mut c = ChaCha20Rng::seed_from_u64(2);
    let (pk_a, _) = McEliece348864::keypair(&mut a).unwrap();
    let (pk_b, _) = McEliece348864::keypair(&mut b).unwrap();
    let (pk_c, _) = McEliece348864::keypair(&mut c).unwrap();
    assert_eq!(pk_a, pk_b);
    assert_ne!(pk_a, pk_c);
}

#[test]
fn test_seed_bit_flip_changes_public_key() {
    let mut seed = [0x3c; 32];
    let (pk_a, _) = McEliece348864::keypair_from_seed(&seed).unwrap();
    seed[31] ^= 1;
    let (pk_b, _) = McEliece348864::keypair_from_seed(&seed).unwrap();
    assert_ne!(pk_a.as_bytes(), pk_b.as_bytes());

    seed[31] ^= 1;
    let (pk_c, _) = McEliece348864::keypair_from_seed(&seed).unwrap();
    assert_eq!(pk_a.as_bytes(), pk_c.as_bytes());
}

#[test]
#[ignore = "slow in debug builds"]
fn test_large_parameter_sets() {
    fn run<P: McElieceParamSet>() {
        roundtrip::<McElieceKem<P>>(7);
        let (pk, sk) = McElieceKem::<P>::keypair_from_seed(&[7; 32]).unwrap();
        assert_eq!(pk.len(), P::PUBLIC_KEY_BYTES);
        assert_eq!(sk.len(), P::SECRET_KEY_BYTES);
        check_goppa_code(&sk);
    }
    run::<cmce_kem::mceliece::McEliece460896Params>();
    run::<cmce_kem::mceliece::McEliece6688128Params>();
    run::<cmce_kem::mceliece::McEliece6960119Params>();
    run::<cmce_kem::mceliece::McEliece8192128Params>();

    assert_eq!(McEliece460896::name(), "McEliece-460896");
    assert_eq!(McEliece6688128::name(), "McEliece-6688128");
    assert_eq!(McEliece6960119::name(), "McEliece-6960119");
    assert_eq!(McEliece8192128::name(), "McEliece-8192128");
}
