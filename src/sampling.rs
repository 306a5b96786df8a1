//! Error sampler and sparse randomness sampler.

use rand_core::CryptoRngCore;

use crate::error::ArlcError;

/// Draws `size` independent samples uniform on `[-eta, +eta]`.
///
/// Each coordinate is drawn by rejection sampling over the smallest power-of-two span
/// covering `2*eta + 1` values.
pub(crate) fn sample_error(
    size: usize, eta: i32, rng: &mut impl CryptoRngCore,
) -> Result<Vec<i32>, ArlcError> {
    let span = 2 * eta as u32 + 1;
    let bits = 32 - (span - 1).leading_zeros();
    let mask = if bits >= 32 { u32::MAX } else { (1u32 << bits) - 1 };
    let mut out = Vec::with_capacity(size);
    let mut buf = [0u8; 4];
    for _ in 0..size {
        loop {
            rng.try_fill_bytes(&mut buf).map_err(|_| ArlcError::RandomnessFailure)?;
            let candidate = u32::from_le_bytes(buf) & mask;
            if candidate < span {
                out.push(candidate as i32 - eta);
                break;
            }
        }
    }
    Ok(out)
}

/// Draws a uniformly random `r_weight`-subset of `{0, …, m-1}`, returned as a sorted vector of
/// indices (the positions where the conceptual 0/1 vector `r` is 1).
///
/// Uses a partial Fisher–Yates shuffle over `0..m`: every `r_weight`-subset is equally likely,
/// and no index is oversampled.
pub(crate) fn sample_sparse(
    m: usize, r_weight: usize, rng: &mut impl CryptoRngCore,
) -> Result<Vec<usize>, ArlcError> {
    debug_assert!(r_weight <= m);
    let mut pool: Vec<usize> = (0..m).collect();
    for i in 0..r_weight {
        let remaining = m - i;
        let offset = uniform_below(remaining as u32, rng)? as usize;
        pool.swap(i, i + offset);
    }
    let mut selected = pool[..r_weight].to_vec();
    selected.sort_unstable();
    Ok(selected)
}

/// Draws a uniform integer in `[0, bound)` via rejection sampling, `bound > 0`.
fn uniform_below(bound: u32, rng: &mut impl CryptoRngCore) -> Result<u32, ArlcError> {
    debug_assert!(bound > 0);
    let bits = 32 - (bound - 1).leading_zeros();
    let mask = if bits >= 32 { u32::MAX } else { (1u32 << bits) - 1 };
    let mut buf = [0u8; 4];
    loop {
        rng.try_fill_bytes(&mut buf).map_err(|_| ArlcError::RandomnessFailure)?;
        let candidate = u32::from_le_bytes(buf) & mask;
        if candidate < bound {
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn error_samples_stay_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let samples = sample_error(10_000, 4, &mut rng).unwrap();
        assert_eq!(samples.len(), 10_000);
        assert!(samples.iter().all(|&x| (-4..=4).contains(&x)));
    }

    #[test]
    fn error_sample_distribution_is_roughly_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let samples = sample_error(90_000, 4, &mut rng).unwrap();
        let mut counts = [0u32; 9];
        for s in samples {
            counts[(s + 4) as usize] += 1;
        }
        // Expected count per bucket is 10,000; allow generous statistical slack.
        for count in counts {
            assert!((8500..11_500).contains(&count), "bucket count {count} out of tolerance");
        }
    }

    #[test]
    fn sparse_sampler_has_exact_weight() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let selected = sample_sparse(512, 64, &mut rng).unwrap();
            assert_eq!(selected.len(), 64);
            let mut dedup = selected.clone();
            dedup.dedup();
            assert_eq!(dedup.len(), 64, "indices must be distinct");
            assert!(selected.iter().all(|&i| i < 512));
        }
    }

    #[test]
    fn noise_budget_stays_under_half_delta_over_a_million_trials() {
        // <r, e> is a sum of r_weight independent error samples (r selects which coordinates
        // of e contribute, and error coordinates are iid, so summing r_weight fresh draws has
        // the same distribution as the dot product against a uniformly chosen sparse r). The
        // default params require this sum to stay under delta/2 = 512 with overwhelming
        // probability even though the worst case (r_weight*eta = 256) does not.
        let params = crate::params::Params::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1_000_000);
        let half_delta = i64::from(params.delta) / 2;
        let mut max_abs = 0i64;
        for _ in 0..1_000_000 {
            let e = sample_error(params.r_weight, params.eta, &mut rng).unwrap();
            let sum: i64 = e.iter().map(|&x| i64::from(x)).sum();
            max_abs = max_abs.max(sum.abs());
        }
        assert!(
            max_abs < half_delta,
            "observed |<r,e>|={max_abs} exceeds delta/2={half_delta} over 1,000,000 trials"
        );
    }

    #[test]
    fn sparse_sampler_index_frequency_is_roughly_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let m = 32;
        let r_weight = 4;
        let trials = 20_000;
        let mut counts = vec![0u32; m];
        for _ in 0..trials {
            for idx in sample_sparse(m, r_weight, &mut rng).unwrap() {
                counts[idx] += 1;
            }
        }
        // Each index should be selected with probability r_weight/m = 1/8.
        let expected = trials * r_weight as u32 / m as u32;
        for count in counts {
            let low = expected * 7 / 10;
            let high = expected * 13 / 10;
            assert!((low..=high).contains(&count), "count {count} expected near {expected}");
        }
    }
}
