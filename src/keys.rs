//! Key material: the public matrix `A`, the public key `(seed, b)`, and the secret key `s`.

use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::ArlcError;
use crate::params::Params;
use crate::xof::{expand_matrix, MatrixSeed, SEED_LEN};

/// The `m x n` public matrix `A`, row-major, entries in `[0, q)`.
///
/// Expanded deterministically from a [`MatrixSeed`] rather than stored as raw random values;
/// cheaply reconstructible by anyone holding the seed and the parameter set, and safe to
/// share across threads once built (read-only, no interior mutability).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicMatrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<u32>,
}

impl PublicMatrix {
    /// Expands `A` from `seed` for the given parameter set.
    #[must_use]
    pub fn expand(seed: &MatrixSeed, params: &Params) -> Self {
        let data = expand_matrix(seed, params.m, params.n, params.q);
        Self { rows: params.m, cols: params.n, data }
    }

    /// Row count (`m`).
    #[must_use]
    pub fn rows(&self) -> usize { self.rows }

    /// Column count (`n`).
    #[must_use]
    pub fn cols(&self) -> usize { self.cols }
}

/// The public key: a matrix seed plus the derived vector `b = A*s + e mod q`.
///
/// Serializes as `seed ∥ b`; `A` itself is never transmitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) seed: MatrixSeed,
    pub(crate) b: Vec<u32>,
}

impl PublicKey {
    /// The matrix seed this key's `A` expands from.
    #[must_use]
    pub fn seed(&self) -> &MatrixSeed { &self.seed }

    /// The derived public vector `b`.
    #[must_use]
    pub fn b(&self) -> &[u32] { &self.b }

    /// Reconstructs the public matrix `A` this key was generated against.
    #[must_use]
    pub fn matrix(&self, params: &Params) -> PublicMatrix {
        PublicMatrix::expand(&self.seed, params)
    }

    /// Byte width of one element of `b`: `ceil(bits(q) / 8)`, byte-aligned little-endian.
    fn element_width(params: &Params) -> usize {
        let bits = 32 - (params.q - 1).leading_zeros();
        (bits as usize).div_ceil(8)
    }

    /// Serializes as `seed ∥ b`; `A` is never transmitted, only the seed it expands from.
    #[must_use]
    pub fn to_bytes(&self, params: &Params) -> Vec<u8> {
        let width = Self::element_width(params);
        let mut out = Vec::with_capacity(SEED_LEN + self.b.len() * width);
        out.extend_from_slice(&self.seed);
        for &elem in &self.b {
            out.extend_from_slice(&elem.to_le_bytes()[..width]);
        }
        out
    }

    /// Deserializes from the `seed ∥ b` wire layout, validating length and that every `b`
    /// element lies in `[0, q)`.
    ///
    /// # Errors
    /// Returns [`ArlcError::MalformedCiphertext`] on a bad length or an out-of-range element.
    pub fn from_bytes(bytes: &[u8], params: &Params) -> Result<Self, ArlcError> {
        let width = Self::element_width(params);
        let expected = SEED_LEN + params.m * width;
        if bytes.len() != expected {
            return Err(ArlcError::MalformedCiphertext("public key length does not match params"));
        }
        let mut seed = [0u8; SEED_LEN];
        seed.copy_from_slice(&bytes[..SEED_LEN]);
        let mut b = Vec::with_capacity(params.m);
        for chunk in bytes[SEED_LEN..].chunks_exact(width) {
            let mut buf = [0u8; 4];
            buf[..width].copy_from_slice(chunk);
            let value = u32::from_le_bytes(buf);
            if value >= params.q {
                return Err(ArlcError::MalformedCiphertext("public key element is not in range [0, q)"));
            }
            b.push(value);
        }
        Ok(Self { seed, b })
    }
}

/// The secret key `s`: a length-`n` vector of signed small integers in `[-eta, +eta]`.
///
/// Zeroized on drop so secret coefficients do not linger in memory past their useful life.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(pub(crate) Vec<i32>);

impl SecretKey {
    /// The raw secret coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &[i32] { &self.0 }
}

/// Draws a fresh random [`MatrixSeed`] from `rng`.
pub(crate) fn random_seed(rng: &mut impl CryptoRngCore) -> Result<MatrixSeed, ArlcError> {
    let mut seed = [0u8; SEED_LEN];
    rng.try_fill_bytes(&mut seed).map_err(|_| ArlcError::RandomnessFailure)?;
    Ok(seed)
}
