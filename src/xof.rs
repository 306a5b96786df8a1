//! Deterministic expansion of the public matrix `A` from a short seed.
//!
//! `A` is expanded on demand from a 32-byte seed via a `Shake256` XOF rather than stored as a
//! field of random values, so a public key reduces to `(seed, b)` on the wire.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

/// Length in bytes of the seed the public matrix is expanded from.
pub const SEED_LEN: usize = 32;

/// A 32-byte seed from which [`crate::keys::PublicMatrix`] is deterministically expanded.
pub type MatrixSeed = [u8; SEED_LEN];

/// Number of bits needed to losslessly carry any residue in `[0, q)`.
fn bits_for_modulus(q: u32) -> u32 {
    32 - (q - 1).leading_zeros()
}

/// Draws a uniform residue in `[0, q)` from an XOF stream via rejection sampling over the
/// minimal bit width covering `q` (rather than the minimal byte width, which keeps the
/// rejection rate bounded by roughly 1/2 instead of blowing up for moduli just over a byte
/// boundary); `q` a power of two (the shipped default) rejects nothing at all.
fn sample_uniform(reader: &mut impl XofReader, q: u32) -> u32 {
    let bits = bits_for_modulus(q);
    let width = (bits as usize).div_ceil(8);
    let mask = if bits == 32 { u32::MAX } else { (1u32 << bits) - 1 };
    let mut buf = [0u8; 4];
    loop {
        reader.read(&mut buf[..width]);
        let mut candidate = 0u32;
        for &b in buf[..width].iter().rev() {
            candidate = (candidate << 8) | u32::from(b);
        }
        candidate &= mask;
        if candidate < q {
            return candidate;
        }
    }
}

/// Expands the `m x n` public matrix `A` (row-major, residues in `[0, q)`) from `seed`.
///
/// Each entry `A[i][j]` is drawn from an independent `Shake256(seed ∥ i ∥ j)` stream.
#[must_use]
pub(crate) fn expand_matrix(seed: &MatrixSeed, rows: usize, cols: usize, q: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            let mut hasher = Shake256::default();
            hasher.update(seed);
            hasher.update(&(i as u64).to_le_bytes());
            hasher.update(&(j as u64).to_le_bytes());
            let mut reader = hasher.finalize_xof();
            out.push(sample_uniform(&mut reader, q));
        }
    }
    out
}
