//! Empirical goal distributions from simulated samples.

/// Frequency of each goal count in `0..goal_range` among `samples`. Samples at or beyond the
/// range are counted in the denominator only, so the histogram sums to less than 1 when
/// probability mass falls outside the grid. An empty sample set yields all zeros.
pub fn from_samples(samples: &[u16], goal_range: usize) -> Vec<f64> {
    let mut counts = vec![0u64; goal_range];
    for &goals in samples {
        if let Some(count) = counts.get_mut(goals as usize) {
            *count += 1;
        }
    }
    if samples.is_empty() {
        return vec![0.0; goal_range];
    }
    let total = samples.len() as f64;
    counts.into_iter().map(|count| count as f64 / total).collect()
}

/// Fraction of the sample mass that lies outside `0..goal_range`.
pub fn excluded_mass(histogram: &[f64]) -> f64 {
    f64::max(0.0, 1.0 - histogram.iter().sum::<f64>())
}
