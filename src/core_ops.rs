//! The three top-level operations: key generation, encryption, and decryption. Each is a
//! pure function of its inputs and the supplied randomness source; they share only the
//! [`Params`] object and, for encrypt/decrypt, the public matrix.

use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::cipher::{CipherText, SymbolCipherText};
use crate::encode::{decode, encode};
use crate::error::ArlcError;
use crate::keys::{random_seed, PublicKey, PublicMatrix, SecretKey};
use crate::params::Params;
use crate::ring::{add_vecs, dot, mat_t_vec_mul_bits, mat_vec_mul, sparse_dot};
use crate::sampling::{sample_error, sample_sparse};

/// Draws `(s, e)`, expands `A` from a fresh seed, and derives `b = A*s + e mod q`.
///
/// # Errors
/// Returns [`ArlcError::RandomnessFailure`] if the randomness source cannot supply the bytes
/// needed for the seed, the secret `s`, or the error vector `e`.
pub fn generate_keypair(
    params: &Params, rng: &mut impl CryptoRngCore,
) -> Result<(PublicKey, SecretKey), ArlcError> {
    let seed = random_seed(rng)?;
    let a = PublicMatrix::expand(&seed, params);

    let s = sample_error(params.n, params.eta, rng)?;
    let e = Zeroizing::new(sample_error(params.m, params.eta, rng)?);

    let as_vec = mat_vec_mul(&a.data, a.rows, a.cols, &s, params.q);
    let e_unsigned: Zeroizing<Vec<u32>> =
        Zeroizing::new(e.iter().map(|&x| crate::ring::reduce(i64::from(x), params.q)).collect());
    let b = add_vecs(&as_vec, &e_unsigned, params.q);

    Ok((PublicKey { seed, b }, SecretKey(s)))
}

/// Encrypts each plaintext symbol independently with fresh sparse randomness `r`. Fails
/// fast with no partial output on the first out-of-range symbol.
///
/// # Errors
/// Returns [`ArlcError::SymbolOutOfRange`] if any symbol lies outside `[0, p)`, or
/// [`ArlcError::RandomnessFailure`] if the randomness source fails.
pub fn encrypt(
    params: &Params, pk: &PublicKey, plaintext: &[u32], rng: &mut impl CryptoRngCore,
) -> Result<CipherText, ArlcError> {
    // Fail fast: validate every symbol before touching the randomness source, so an
    // out-of-range symbol never consumes entropy or emits a partial ciphertext.
    for &m in plaintext {
        if m >= params.p {
            return Err(ArlcError::SymbolOutOfRange { symbol: m, p: params.p });
        }
    }

    let a = pk.matrix(params);
    let mut symbols = Vec::with_capacity(plaintext.len());
    for &m in plaintext {
        let r = Zeroizing::new(sample_sparse(params.m, params.r_weight, rng)?);
        let m_scaled = encode(m, params)?;

        let u = mat_t_vec_mul_bits(&a.data, a.rows, a.cols, &r, params.q);
        let r_dot_b = sparse_dot(&pk.b, &r, params.q);
        let v = crate::ring::reduce(i64::from(r_dot_b) + i64::from(m_scaled), params.q);

        symbols.push(SymbolCipherText { u, v });
    }
    Ok(CipherText(symbols))
}

/// Recovers each plaintext symbol from `V - <U, s> mod q`.
///
/// Never signals "wrong key": an incorrect secret key yields garbage symbols rather than an
/// error, an inherent property of unauthenticated LWE PKE.
pub fn decrypt(params: &Params, sk: &SecretKey, ciphertext: &CipherText) -> Vec<u32> {
    ciphertext
        .iter()
        .map(|symbol| {
            let prod = Zeroizing::new(dot(&symbol.u, &sk.0, params.q));
            let m_scaled = crate::ring::reduce(i64::from(symbol.v) - i64::from(*prod), params.q);
            decode(m_scaled, params)
        })
        .collect()
}
