//! The Poisson distribution: probability mass and random sampling.

use tinyrand::Rand;

use crate::random::{random_f64, standard_normal};

/// Rates at or above this value are sampled by the normal approximation; below it, by Knuth's
/// multiplicative method. The multiplicative method underflows `e^(-λ)` and slows linearly in λ.
pub const NORMAL_APPROXIMATION_THRESHOLD: f64 = 30.0;

/// Probability of exactly `k` events at rate `lambda`.
#[inline]
pub fn univariate(k: u16, lambda: f64) -> f64 {
    let mut prob = f64::exp(-lambda);
    for i in 1..=k {
        prob *= lambda / i as f64;
    }
    prob
}

/// Probabilities of `0..n` events at rate `lambda`.
pub fn univariate_series(n: usize, lambda: f64) -> Vec<f64> {
    let mut probs = Vec::with_capacity(n);
    let mut prob = f64::exp(-lambda);
    for k in 0..n {
        if k > 0 {
            prob *= lambda / k as f64;
        }
        probs.push(prob);
    }
    probs
}

/// Draws a single Poisson variate with mean `lambda`.
#[inline]
pub fn sample_once(lambda: f64, rand: &mut impl Rand) -> u16 {
    if lambda < NORMAL_APPROXIMATION_THRESHOLD {
        knuth(lambda, rand)
    } else {
        normal_approximation(lambda, rand)
    }
}

/// Draws `count` independent Poisson variates with mean `lambda`.
pub fn sample(lambda: f64, count: usize, rand: &mut impl Rand) -> Vec<u16> {
    let mut samples = Vec::with_capacity(count);
    sample_into(lambda, &mut samples, count, rand);
    samples
}

/// Appends `count` independent Poisson variates to `samples`.
pub fn sample_into(lambda: f64, samples: &mut Vec<u16>, count: usize, rand: &mut impl Rand) {
    samples.reserve(count);
    for _ in 0..count {
        samples.push(sample_once(lambda, rand));
    }
}

#[inline]
fn knuth(lambda: f64, rand: &mut impl Rand) -> u16 {
    let threshold = f64::exp(-lambda);
    let mut k: u16 = 0;
    let mut product = 1.0;
    loop {
        k = k.saturating_add(1);
        product *= random_f64(rand);
        if product <= threshold {
            return k - 1;
        }
    }
}

#[inline]
fn normal_approximation(lambda: f64, rand: &mut impl Rand) -> u16 {
    let z = standard_normal(rand);
    let draw = f64::round(lambda + lambda.sqrt() * z);
    // negative draws are clamped; the float-to-int cast saturates at the top end
    f64::max(0.0, draw) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;
    use scorecast_testing::{assert_slice_f64_relative, assert_sum_f64};
    use tinyrand::{Seeded, StdRand};
    use tinyrand_alloc::Mock;

    #[test]
    fn univariate_pmf() {
        assert_float_relative_eq!(0.36787944117144233, univariate(0, 1.0), 1e-12);
        assert_float_relative_eq!(0.36787944117144233, univariate(1, 1.0), 1e-12);
        assert_float_relative_eq!(0.18393972058572117, univariate(2, 1.0), 1e-12);
        assert_float_relative_eq!(0.0820849986238988, univariate(0, 2.5), 1e-12);
        assert_float_relative_eq!(0.205212496559747, univariate(1, 2.5), 1e-12);
        assert_float_relative_eq!(0.25651562069968376, univariate(2, 2.5), 1e-12);
        assert_eq!(1.0, univariate(0, 0.0));
        assert_eq!(0.0, univariate(3, 0.0));
    }

    #[test]
    fn univariate_series_matches_pmf() {
        let series = univariate_series(6, 1.6);
        let expected = (0..6).map(|k| univariate(k, 1.6)).collect::<Vec<_>>();
        assert_slice_f64_relative(&expected, &series, 1e-12);
        assert_sum_f64(1.0, &univariate_series(40, 1.6), 1e-12);
    }

    #[test]
    fn knuth_with_zero_rate_yields_zero() {
        let mut rand = StdRand::seed(7);
        assert!(sample(0.0, 1_000, &mut rand).iter().all(|&goals| goals == 0));
    }

    #[test]
    fn knuth_with_midpoint_uniforms() {
        // successive products 0.5, 0.25, 0.125, ... are compared against e^(-λ)
        let mut rand = Mock::default().with_next_u128(|_| (u64::MAX / 2) as u128);
        assert_eq!(1, sample_once(1.0, &mut rand));
        assert_eq!(0, sample_once(0.5, &mut rand));
        assert_eq!(2, sample_once(1.5, &mut rand));
        assert_eq!(3, sample_once(2.5, &mut rand));
    }

    #[test]
    fn knuth_with_zero_uniform_yields_zero() {
        let mut rand = Mock::default().with_next_u128(|_| 0);
        assert_eq!(0, sample_once(29.9, &mut rand));
    }

    #[test]
    fn normal_approximation_with_midpoint_uniforms() {
        // z = -sqrt(2 ln 2) ≈ -1.1774
        let mut rand = Mock::default().with_next_u128(|_| (u64::MAX / 2) as u128);
        assert_eq!(88, sample_once(100.0, &mut rand));
        assert_eq!(24, sample_once(NORMAL_APPROXIMATION_THRESHOLD, &mut rand));
    }

    #[test]
    fn normal_approximation_clamps_negative_draws() {
        // alternates a near-zero u_1 with a midpoint u_2, giving z ≈ -9.42
        let mut rand = Mock::default().with_next_u128(|state| {
            if state.next_u128_invocations() % 2 == 0 {
                1
            } else {
                (u64::MAX / 2) as u128
            }
        });
        assert_eq!(0, sample_once(NORMAL_APPROXIMATION_THRESHOLD, &mut rand));
    }

    #[test]
    fn sample_count() {
        let mut rand = StdRand::seed(0);
        assert_eq!(0, sample(1.2, 0, &mut rand).len());
        assert_eq!(1_000, sample(1.2, 1_000, &mut rand).len());

        let mut samples = vec![7];
        sample_into(1.2, &mut samples, 10, &mut rand);
        assert_eq!(11, samples.len());
        assert_eq!(7, samples[0]);
    }

    fn mean_and_variance(samples: &[u16]) -> (f64, f64) {
        let mean = samples.iter().map(|&k| k as f64).sum::<f64>() / samples.len() as f64;
        let variance = samples
            .iter()
            .map(|&k| (k as f64 - mean).powi(2))
            .sum::<f64>()
            / samples.len() as f64;
        (mean, variance)
    }

    #[test]
    fn knuth_moments() {
        let mut rand = StdRand::seed(11);
        let (mean, variance) = mean_and_variance(&sample(1.6, 100_000, &mut rand));
        assert_float_absolute_eq!(1.6, mean, 0.02);
        assert_float_absolute_eq!(1.6, variance, 0.05);
    }

    #[test]
    fn normal_approximation_moments() {
        let mut rand = StdRand::seed(13);
        let (mean, variance) = mean_and_variance(&sample(50.0, 100_000, &mut rand));
        assert_float_absolute_eq!(50.0, mean, 0.15);
        assert_float_absolute_eq!(50.0, variance, 1.5);
    }

    #[test]
    fn empirical_frequencies_approach_pmf() {
        const SAMPLES: usize = 200_000;
        let mut rand = StdRand::seed(17);
        let samples = sample(1.2, SAMPLES, &mut rand);
        for k in 0..5 {
            let freq = samples.iter().filter(|&&goals| goals == k).count() as f64 / SAMPLES as f64;
            assert_float_absolute_eq!(univariate(k, 1.2), freq, 0.005);
        }
    }
}
