//! End-to-end coverage across the public `Engine` API: round-trip
//! correctness, determinism, tamper detection, and the pre-hash interface.

use rand::rngs::StdRng;
use rand::SeedableRng;
use slh_dsa_engine::{Engine, Error, PreHashAlg};

const ALL_PARAMETER_SETS: [&str; 12] = [
    "SLH-DSA-SHA2-128s",
    "SLH-DSA-SHA2-128f",
    "SLH-DSA-SHA2-192s",
    "SLH-DSA-SHA2-192f",
    "SLH-DSA-SHA2-256s",
    "SLH-DSA-SHA2-256f",
    "SLH-DSA-SHAKE-128s",
    "SLH-DSA-SHAKE-128f",
    "SLH-DSA-SHAKE-192s",
    "SLH-DSA-SHAKE-192f",
    "SLH-DSA-SHAKE-256s",
    "SLH-DSA-SHAKE-256f",
];

#[test]
fn round_trips_across_every_standardized_parameter_set() {
    for name in ALL_PARAMETER_SETS {
        let engine = Engine::new(name).unwrap();
        let mut rng = StdRng::seed_from_u64(100);
        let (sk, pk) = engine.generate_key_pair(&mut rng);

        let sig = engine
            .generate_signature(&mut rng, &sk, b"Hello, world!", b"", false, PreHashAlg::Pure)
            .unwrap();
        assert!(
            engine
                .verify_signature(&pk, b"Hello, world!", &sig, b"", PreHashAlg::Pure)
                .unwrap(),
            "{name}"
        );
    }
}

#[test]
fn deterministic_signatures_match_byte_for_byte() {
    let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
    let mut rng = StdRng::seed_from_u64(101);
    let (sk, _pk) = engine.generate_key_pair(&mut rng);

    let sig1 = engine
        .generate_signature(&mut rng, &sk, b"Hello, world!", b"", false, PreHashAlg::Pure)
        .unwrap();
    let sig2 = engine
        .generate_signature(&mut rng, &sk, b"Hello, world!", b"", false, PreHashAlg::Pure)
        .unwrap();
    assert_eq!(sig1, sig2);
}

#[test]
fn hedged_signatures_differ_but_both_verify() {
    let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
    let mut rng = StdRng::seed_from_u64(102);
    let (sk, pk) = engine.generate_key_pair(&mut rng);

    let sig1 = engine
        .generate_signature(&mut rng, &sk, b"Hello, world!", b"", true, PreHashAlg::Pure)
        .unwrap();
    let sig2 = engine
        .generate_signature(&mut rng, &sk, b"Hello, world!", b"", true, PreHashAlg::Pure)
        .unwrap();

    assert_ne!(sig1, sig2, "two successive hedged signatures should not be equal");
    assert!(engine.verify_signature(&pk, b"Hello, world!", &sig1, b"", PreHashAlg::Pure).unwrap());
    assert!(engine.verify_signature(&pk, b"Hello, world!", &sig2, b"", PreHashAlg::Pure).unwrap());
}

#[test]
fn tampered_signature_byte_fails_verification() {
    let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
    let mut rng = StdRng::seed_from_u64(103);
    let (sk, pk) = engine.generate_key_pair(&mut rng);

    let mut sig = engine
        .generate_signature(&mut rng, &sk, b"Hello, world!", b"", false, PreHashAlg::Pure)
        .unwrap();
    let last = sig.len() - 1;
    sig[last] ^= 0xff;

    assert!(!engine.verify_signature(&pk, b"Hello, world!", &sig, b"", PreHashAlg::Pure).unwrap());
}

#[test]
fn verification_fails_against_a_different_public_key() {
    let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
    let mut rng = StdRng::seed_from_u64(104);
    let (sk, _pk) = engine.generate_key_pair(&mut rng);
    let (_other_sk, other_pk) = engine.generate_key_pair(&mut rng);

    let sig = engine
        .generate_signature(&mut rng, &sk, b"Hello, world!", b"", false, PreHashAlg::Pure)
        .unwrap();
    assert!(!engine
        .verify_signature(&other_pk, b"Hello, world!", &sig, b"", PreHashAlg::Pure)
        .unwrap());
}

#[test]
fn nonempty_context_round_trips_and_rejects_the_wrong_context() {
    let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
    let mut rng = StdRng::seed_from_u64(105);
    let (sk, pk) = engine.generate_key_pair(&mut rng);

    let sig = engine
        .generate_signature(&mut rng, &sk, b"Test", b"lalalala", false, PreHashAlg::Pure)
        .unwrap();
    assert!(engine.verify_signature(&pk, b"Test", &sig, b"lalalala", PreHashAlg::Pure).unwrap());
    assert!(!engine.verify_signature(&pk, b"Test", &sig, b"wrong ctx", PreHashAlg::Pure).unwrap());
}

#[test]
fn prehash_sha2_512_256_round_trips() {
    let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
    let mut rng = StdRng::seed_from_u64(106);
    let (sk, pk) = engine.generate_key_pair(&mut rng);

    let sig = engine
        .generate_signature(&mut rng, &sk, b"Test", b"lalalala", false, PreHashAlg::Sha2_512_256)
        .unwrap();
    assert!(engine
        .verify_signature(&pk, b"Test", &sig, b"lalalala", PreHashAlg::Sha2_512_256)
        .unwrap());
}

#[test]
fn signature_of_the_wrong_length_is_an_error_not_a_panic() {
    let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
    let mut rng = StdRng::seed_from_u64(107);
    let (sk, pk) = engine.generate_key_pair(&mut rng);
    let sig = engine
        .generate_signature(&mut rng, &sk, b"Test", b"", false, PreHashAlg::Pure)
        .unwrap();

    let mut short = sig.clone();
    short.pop();
    assert_eq!(
        engine.verify_signature(&pk, b"Test", &short, b"", PreHashAlg::Pure),
        Err(Error::InvalidSignatureLength {
            expected: sig.len(),
            got: sig.len() - 1,
        })
    );
}

#[test]
fn context_over_255_bytes_is_rejected() {
    let engine = Engine::new("SLH-DSA-SHAKE-128s").unwrap();
    let mut rng = StdRng::seed_from_u64(108);
    let (sk, _pk) = engine.generate_key_pair(&mut rng);
    let ctx = vec![0u8; 256];
    assert_eq!(
        engine.generate_signature(&mut rng, &sk, b"Test", &ctx, false, PreHashAlg::Pure),
        Err(Error::ContextTooLong(256))
    );
}

#[test]
fn unknown_parameter_set_name_is_rejected() {
    assert_eq!(
        Engine::new("SLH-DSA-SHAKE-128x"),
        Err(Error::InvalidParameterSet("SLH-DSA-SHAKE-128x".to_string()))
    );
}
