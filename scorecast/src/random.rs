//! Random variates drawn from an injected [Rand] source.

use std::f64::consts::PI;

use chrono::Utc;
use tinyrand::Rand;

/// A uniformly distributed value in `[0, 1]`.
#[inline]
pub fn random_f64(rand: &mut impl Rand) -> f64 {
    rand.next_u64() as f64 / u64::MAX as f64
}

/// A standard normal variate (mean 0, standard deviation 1), obtained by the Box-Muller transform.
#[inline]
pub fn standard_normal(rand: &mut impl Rand) -> f64 {
    let u_1 = f64::max(random_f64(rand), f64::MIN_POSITIVE);
    let u_2 = random_f64(rand);
    f64::sqrt(-2.0 * u_1.ln()) * f64::cos(2.0 * PI * u_2)
}

/// A seed taken from the nanosecond-resolution wall clock, for runs that need not be reproducible.
pub fn clock_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .map(|nanos| nanos as u64)
        .unwrap_or_else(|| now.timestamp_micros() as u64)
}

/// Derives the seed of the `stream`-th independent generator from a base seed, so that work split
/// across threads draws the same variates as the same work done sequentially. Uses the SplitMix64
/// finaliser.
pub fn derive_seed(seed: u64, stream: u64) -> u64 {
    let mut z = seed.wrapping_add(stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
