//! Trait-based entry points keyed on a runtime [`crate::Params`] rather than per-variant
//! const generics.
//!
//! All functionality is covered by traits, such that consumers can utilize trait objects if
//! desired.

use rand_core::CryptoRngCore;

#[cfg(feature = "default-rng")]
use rand_core::OsRng;

use crate::cipher::CipherText;
use crate::core_ops;
use crate::error::ArlcError;
use crate::keys::{PublicKey, SecretKey};
use crate::params::Params;

/// Zero-sized marker type implementing [`KeyGen`].
pub struct Arlc;

/// Generates a key pair for a given parameter set.
pub trait KeyGen {
    /// The public key type.
    type PublicKey;
    /// The secret key type.
    type SecretKey;

    /// Generates a key pair using the OS default random number generator.
    /// # Errors
    /// Returns an error when the random number generator fails.
    /// # Examples
    /// ```rust
    /// use arlc::{Params, traits::{Arlc, KeyGen}};
    ///
    /// let params = Params::default();
    /// let (pk, sk) = Arlc::try_keygen(&params)?;
    /// # Ok::<(), arlc::ArlcError>(())
    /// ```
    #[cfg(feature = "default-rng")]
    fn try_keygen(params: &Params) -> Result<(Self::PublicKey, Self::SecretKey), ArlcError> {
        Self::try_keygen_with_rng(params, &mut OsRng)
    }

    /// Generates a key pair using a caller-supplied random number generator.
    /// # Errors
    /// Returns an error when the random number generator fails.
    fn try_keygen_with_rng(
        params: &Params, rng: &mut impl CryptoRngCore,
    ) -> Result<(Self::PublicKey, Self::SecretKey), ArlcError>;
}

impl KeyGen for Arlc {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;

    fn try_keygen_with_rng(
        params: &Params, rng: &mut impl CryptoRngCore,
    ) -> Result<(PublicKey, SecretKey), ArlcError> {
        core_ops::generate_keypair(params, rng)
    }
}

/// Encrypts a sequence of plaintext symbols under a public key.
pub trait Encrypt {
    /// The ciphertext type produced.
    type CipherText;

    /// Encrypts `plaintext` using the OS default random number generator.
    /// # Errors
    /// Returns an error when the random number generator fails, or when a plaintext symbol
    /// lies outside `[0, p)`.
    #[cfg(feature = "default-rng")]
    fn try_encrypt(&self, params: &Params, plaintext: &[u32]) -> Result<Self::CipherText, ArlcError> {
        self.try_encrypt_with_rng(params, plaintext, &mut OsRng)
    }

    /// Encrypts `plaintext` using a caller-supplied random number generator.
    /// # Errors
    /// Returns an error when the random number generator fails, or when a plaintext symbol
    /// lies outside `[0, p)`.
    /// # Examples
    /// ```rust
    /// use arlc::{Params, traits::{Arlc, KeyGen, Encrypt, Decrypt}};
    /// use rand_core::OsRng;
    ///
    /// let params = Params::default();
    /// let (pk, sk) = Arlc::try_keygen(&params)?;
    /// let ct = pk.try_encrypt_with_rng(&params, &[72, 105], &mut OsRng)?;
    /// let recovered = sk.decrypt(&params, &ct);
    /// assert_eq!(recovered, vec![72, 105]);
    /// # Ok::<(), arlc::ArlcError>(())
    /// ```
    fn try_encrypt_with_rng(
        &self, params: &Params, plaintext: &[u32], rng: &mut impl CryptoRngCore,
    ) -> Result<Self::CipherText, ArlcError>;
}

impl Encrypt for PublicKey {
    type CipherText = CipherText;

    fn try_encrypt_with_rng(
        &self, params: &Params, plaintext: &[u32], rng: &mut impl CryptoRngCore,
    ) -> Result<CipherText, ArlcError> {
        core_ops::encrypt(params, self, plaintext, rng)
    }
}

/// Decrypts a ciphertext with a secret key.
pub trait Decrypt {
    /// The ciphertext type consumed.
    type CipherText;

    /// Recovers the plaintext symbol sequence. Never fails: an incorrect key or a noise
    /// excursion beyond the correctness margin yields garbage symbols rather than an error
    /// (an inherent property of unauthenticated LWE PKE).
    fn decrypt(&self, params: &Params, ciphertext: &Self::CipherText) -> Vec<u32>;
}

impl Decrypt for SecretKey {
    type CipherText = CipherText;

    fn decrypt(&self, params: &Params, ciphertext: &CipherText) -> Vec<u32> {
        core_ops::decrypt(params, self, ciphertext)
    }
}

/// Serialization and deserialization to/from the wire byte layout.
pub trait SerDes {
    /// Produces the wire-format byte representation for the given parameter set.
    fn to_bytes(&self, params: &Params) -> Vec<u8>;

    /// Parses the wire-format byte representation for the given parameter set.
    /// # Errors
    /// Returns [`ArlcError::MalformedCiphertext`] on malformed input.
    fn try_from_bytes(bytes: &[u8], params: &Params) -> Result<Self, ArlcError>
    where
        Self: Sized;
}

impl SerDes for PublicKey {
    fn to_bytes(&self, params: &Params) -> Vec<u8> { PublicKey::to_bytes(self, params) }

    fn try_from_bytes(bytes: &[u8], params: &Params) -> Result<Self, ArlcError> {
        PublicKey::from_bytes(bytes, params)
    }
}

impl SerDes for CipherText {
    fn to_bytes(&self, params: &Params) -> Vec<u8> { CipherText::to_bytes(self, params) }

    fn try_from_bytes(bytes: &[u8], params: &Params) -> Result<Self, ArlcError> {
        CipherText::from_bytes(bytes, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn trait_based_roundtrip() {
        let params = Params::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let (pk, sk) = Arlc::try_keygen_with_rng(&params, &mut rng).unwrap();
        let plaintext = vec![72, 101, 108, 108, 111];
        let ct = pk.try_encrypt_with_rng(&params, &plaintext, &mut rng).unwrap();
        assert_eq!(sk.decrypt(&params, &ct), plaintext);
    }

    #[test]
    fn serdes_roundtrips_public_key_and_ciphertext() {
        let params = Params::default();
        let mut rng = ChaCha8Rng::seed_from_u64(100);
        let (pk, sk) = Arlc::try_keygen_with_rng(&params, &mut rng).unwrap();
        let pk_bytes = SerDes::to_bytes(&pk, &params);
        let pk2 = PublicKey::try_from_bytes(&pk_bytes, &params).unwrap();
        assert_eq!(pk, pk2);

        let ct = pk.try_encrypt_with_rng(&params, &[1, 2, 3], &mut rng).unwrap();
        let ct_bytes = SerDes::to_bytes(&ct, &params);
        let ct2 = CipherText::try_from_bytes(&ct_bytes, &params).unwrap();
        assert_eq!(sk.decrypt(&params, &ct2), vec![1, 2, 3]);
    }
}
