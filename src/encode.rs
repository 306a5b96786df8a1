//! Scaled symbol encode/decode.
//!
//! `encode(m) = ((m + p/2) * delta) mod q`; `decode` mirrors the centring and rounds to the
//! nearest scaled value. `Params::new` enforces the noise-budget invariant at construction,
//! so decode never needs a post-hoc correction for an out-of-budget parameter set.

use crate::error::ArlcError;
use crate::params::Params;

/// Scales a plaintext symbol `m ∈ [0, p)` into the ring.
///
/// # Errors
/// Returns [`ArlcError::SymbolOutOfRange`] if `m >= p`.
pub(crate) fn encode(m: u32, params: &Params) -> Result<u32, ArlcError> {
    if m >= params.p {
        return Err(ArlcError::SymbolOutOfRange { symbol: m, p: params.p });
    }
    let half_p = params.p / 2;
    let scaled = u64::from(m + half_p) * u64::from(params.delta) % u64::from(params.q);
    Ok(scaled as u32)
}

/// Recovers a plaintext symbol from a noisy scaled ring element.
///
/// Rounds `m_scaled / delta` to the nearest integer (ties away from zero), undoes the `p/2`
/// centring, then reduces mod `p`. Correct whenever the residual noise has magnitude strictly
/// less than `delta / 2`.
pub(crate) fn decode(m_scaled: u32, params: &Params) -> u32 {
    let delta = i64::from(params.delta);
    let half_p = i64::from(params.p / 2);

    // Round-half-away-from-zero division of a non-negative numerator: add delta/2 and floor.
    let rounded = (i64::from(m_scaled) + delta / 2) / delta;
    let m_approx = rounded - half_p;
    let p = i64::from(params.p);
    let reduced = ((m_approx % p) + p) % p;
    reduced as u32
}
