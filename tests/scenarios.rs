//! End-to-end scenarios exercising the public API against real parameter sets and real
//! (seeded) randomness.

use arlc::traits::{Arlc, Decrypt, Encrypt, KeyGen, SerDes};
use arlc::{ArlcError, CipherText, Params, PublicKey};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Fixed-seed keygen followed by a "Hello, World!" round-trip.
#[test]
fn hello_world_roundtrips_under_a_fixed_seed() {
    let params = Params::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2026);

    let (pk, sk) = Arlc::try_keygen_with_rng(&params, &mut rng).unwrap();
    let message: Vec<u32> = "Hello, World!".bytes().map(u32::from).collect();

    let ciphertext = pk.try_encrypt_with_rng(&params, &message, &mut rng).unwrap();
    let recovered = sk.decrypt(&params, &ciphertext);

    assert_eq!(recovered, message);
}

/// The avionics radio-call sentence round-trips exactly.
#[test]
fn avionics_radio_call_roundtrips() {
    let params = Params::default();
    let mut rng = ChaCha8Rng::seed_from_u64(35_000);

    let (pk, sk) = Arlc::try_keygen_with_rng(&params, &mut rng).unwrap();
    let message: Vec<u32> =
        "Aircraft A to B: Requesting permission to change altitude to 35,000ft"
            .bytes()
            .map(u32::from)
            .collect();

    let ciphertext = pk.try_encrypt_with_rng(&params, &message, &mut rng).unwrap();
    assert_eq!(sk.decrypt(&params, &ciphertext), message);
}

/// A 65-symbol message, one past the default `r_weight`, to rule out an off-by-one in the
/// per-symbol loop.
#[test]
fn sixty_five_symbol_message_roundtrips() {
    let params = Params::default();
    let mut rng = ChaCha8Rng::seed_from_u64(65);

    let (pk, sk) = Arlc::try_keygen_with_rng(&params, &mut rng).unwrap();
    let message: Vec<u32> = (0..65).map(|i| (i * 3 + 1) % params.p).collect();

    let ciphertext = pk.try_encrypt_with_rng(&params, &message, &mut rng).unwrap();
    assert_eq!(ciphertext.len(), 65);
    assert_eq!(sk.decrypt(&params, &ciphertext), message);
}

/// Every symbol value in the default alphabet `[0, 256)` round-trips in one message.
#[test]
fn full_alphabet_permutation_roundtrips() {
    let params = Params::default();
    let mut rng = ChaCha8Rng::seed_from_u64(256);

    let (pk, sk) = Arlc::try_keygen_with_rng(&params, &mut rng).unwrap();
    let message: Vec<u32> = (0..params.p).collect();

    let ciphertext = pk.try_encrypt_with_rng(&params, &message, &mut rng).unwrap();
    assert_eq!(sk.decrypt(&params, &ciphertext), message);
}

/// The empty-plaintext edge case, at both the symbol-sequence and ciphertext-wire layers.
#[test]
fn empty_plaintext_produces_empty_ciphertext() {
    let params = Params::default();
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let (pk, sk) = Arlc::try_keygen_with_rng(&params, &mut rng).unwrap();
    let ciphertext = pk.try_encrypt_with_rng(&params, &[], &mut rng).unwrap();

    assert!(ciphertext.is_empty());
    assert!(sk.decrypt(&params, &ciphertext).is_empty());
    assert!(ciphertext.to_bytes(&params).is_empty());
}

/// A symbol outside `[0, p)` is rejected with `SymbolOutOfRange`, and no ciphertext is
/// produced for the symbols that did validate.
#[test]
fn out_of_range_symbol_is_rejected() {
    let params = Params::default();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let (pk, _sk) = Arlc::try_keygen_with_rng(&params, &mut rng).unwrap();
    let message = vec![0, 1, params.p, 2];

    let result = pk.try_encrypt_with_rng(&params, &message, &mut rng);
    assert_eq!(result, Err(ArlcError::SymbolOutOfRange { symbol: params.p, p: params.p }));
}

/// Ciphertext (and public key) wire serialization round-trips through raw bytes.
#[test]
fn wire_serialization_roundtrips() {
    let params = Params::default();
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    let (pk, sk) = Arlc::try_keygen_with_rng(&params, &mut rng).unwrap();
    let pk_bytes = pk.to_bytes(&params);
    let pk_restored = PublicKey::try_from_bytes(&pk_bytes, &params).unwrap();
    assert_eq!(pk, pk_restored);

    let message = vec![1, 22, 233];
    let ciphertext = pk.try_encrypt_with_rng(&params, &message, &mut rng).unwrap();
    let ct_bytes = ciphertext.to_bytes(&params);
    let ct_restored = CipherText::try_from_bytes(&ct_bytes, &params).unwrap();

    assert_eq!(sk.decrypt(&params, &ct_restored), message);
}

/// Malformed ciphertext bytes (wrong length) are rejected rather than silently truncated.
#[test]
fn malformed_ciphertext_bytes_are_rejected() {
    let params = Params::default();
    let bad_len = CipherText::try_from_bytes(&[0u8; 1], &params);
    assert!(bad_len.is_err());
}

/// Two independently generated key pairs never share a public matrix seed.
#[test]
fn independent_keypairs_use_independent_seeds() {
    let params = Params::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let (pk1, _) = Arlc::try_keygen_with_rng(&params, &mut rng).unwrap();
    let (pk2, _) = Arlc::try_keygen_with_rng(&params, &mut rng).unwrap();

    assert_ne!(pk1.seed(), pk2.seed());
}
