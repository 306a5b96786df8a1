use crate::error::{ensure, ArlcError};

/// Parameter set for the LWE core: secret dimension, sample count, modulus, error bound,
/// symbol alphabet, scaling factor, and encryption-randomness Hamming weight.
///
/// Constructed once via [`Params::new`] (or [`Params::default`]), which validates every
/// invariant up front; there is no path through key generation, encryption, or decryption
/// that re-checks these invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Secret dimension.
    pub n: usize,
    /// Sample count; number of rows of the public matrix `A`.
    pub m: usize,
    /// Ring modulus.
    pub q: u32,
    /// Error magnitude bound.
    pub eta: i32,
    /// Symbol alphabet size.
    pub p: u32,
    /// Scaling factor; must equal `q / p` exactly.
    pub delta: u32,
    /// Hamming weight of the sparse encryption-randomness vector `r`.
    pub r_weight: usize,
}

impl Default for Params {
    fn default() -> Self {
        // A naive q=32768, delta=128 pairing violates the correctness margin in the worst
        // case: (r_weight+1)*eta = 65*4 = 260 is not below delta/2 = 64. Widening delta/q
        // instead of shrinking r_weight or eta lands on q=262144, delta=1024 (q = delta * p
        // still holds, p=256 unchanged); n, m, eta and r_weight are untouched. See DESIGN.md.
        Self::new(256, 512, 262_144, 4, 256, 1024, 64).expect("default parameter set is valid")
    }
}

impl Params {
    /// Constructs and validates a parameter set.
    ///
    /// # Errors
    /// Returns [`ArlcError::InvalidParameters`] if `q != delta * p`, if `r_weight` is zero or
    /// exceeds `m`, or if the correctness margin `(r_weight + 1) * eta < delta / 2` does not
    /// hold: a parameter set failing this margin is not decryption-correct in the worst case,
    /// so it is rejected rather than silently accepted.
    pub fn new(
        n: usize,
        m: usize,
        q: u32,
        eta: i32,
        p: u32,
        delta: u32,
        r_weight: usize,
    ) -> Result<Self, ArlcError> {
        ensure!(n > 0, ArlcError::InvalidParameters("n must be positive"));
        ensure!(m > 0, ArlcError::InvalidParameters("m must be positive"));
        ensure!(q > 1, ArlcError::InvalidParameters("q must exceed 1"));
        ensure!(eta > 0, ArlcError::InvalidParameters("eta must be positive"));
        ensure!(p > 0, ArlcError::InvalidParameters("p must be positive"));
        ensure!(
            u64::from(delta) * u64::from(p) == u64::from(q),
            ArlcError::InvalidParameters("q must equal delta * p exactly")
        );
        ensure!(
            r_weight > 0 && r_weight <= m,
            ArlcError::InvalidParameters("0 < r_weight <= m must hold")
        );
        // (r_weight + 1) * eta < delta / 2, computed without overflow or truncation.
        let margin_lhs = (r_weight as u64 + 1) * eta as u64 * 2;
        ensure!(
            margin_lhs < u64::from(delta),
            ArlcError::InvalidParameters(
                "correctness margin violated: (r_weight + 1) * eta must be < delta / 2"
            )
        );
        // Matrix-vector products must fit in a 64-bit signed accumulator.
        let max_product = (m as u128) * (u128::from(q) - 1) * (u128::from(q) - 1);
        ensure!(
            max_product < (1u128 << 62),
            ArlcError::InvalidParameters("m * (q-1)^2 must fit a 64-bit signed accumulator")
        );
        Ok(Self { n, m, q, eta, p, delta, r_weight })
    }
}
