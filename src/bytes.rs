//! Byte-string convenience layer over the core symbol-sequence API: one symbol per input
//! byte. A thin adapter only, it never alters the semantics of [`crate::encrypt`]/
//! [`crate::decrypt`], which operate on `Vec<u32>` directly.

use rand_core::CryptoRngCore;

use crate::cipher::CipherText;
use crate::core_ops;
use crate::error::ArlcError;
use crate::keys::PublicKey;
use crate::params::Params;

/// Encrypts a byte string, one symbol per byte. Requires `params.p >= 256` for every byte
/// value to be representable; a byte `>= params.p` is rejected the same as any other
/// out-of-range symbol.
///
/// # Errors
/// Returns [`ArlcError::SymbolOutOfRange`] if any byte lies outside `[0, p)`, or
/// [`ArlcError::RandomnessFailure`] if the randomness source fails.
pub fn encrypt_bytes(
    params: &Params, pk: &PublicKey, plaintext: &[u8], rng: &mut impl CryptoRngCore,
) -> Result<CipherText, ArlcError> {
    let symbols: Vec<u32> = plaintext.iter().map(|&b| u32::from(b)).collect();
    core_ops::encrypt(params, pk, &symbols, rng)
}

/// Decrypts a ciphertext produced by [`encrypt_bytes`] back into a byte string.
///
/// Never fails: a symbol that decodes outside `[0, 256)` (possible only when `params.p > 256`)
/// is truncated to its low byte, matching the adapter's "one symbol per byte" contract rather
/// than signalling an error the core decrypt operation does not have.
#[must_use]
pub fn decrypt_bytes(
    params: &Params, sk: &crate::keys::SecretKey, ciphertext: &CipherText,
) -> Vec<u8> {
    core_ops::decrypt(params, sk, ciphertext).into_iter().map(|m| m as u8).collect()
}
