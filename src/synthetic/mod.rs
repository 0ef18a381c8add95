//! Seeded synthetic observation generators for exercising the engine.
//!
//! Every generator is deterministic per seed, so examples and tests can
//! regenerate the exact observation set that produced a posterior.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distribution::Distribution;
use crate::error::{CreerError, Result};

/// Draws `n` samples from Normal(mean, sd).
///
/// # Errors
///
/// Returns `InvalidParameter` if `sd` ≤ 0 or either parameter is
/// non-finite.
///
/// # Example
///
/// ```
/// use creer::synthetic::normal_samples;
///
/// let a = normal_samples(100, 5.0, 2.0, 42).expect("valid parameters");
/// let b = normal_samples(100, 5.0, 2.0, 42).expect("valid parameters");
/// assert_eq!(a, b); // same seed, same data
/// ```
pub fn normal_samples(n: usize, mean: f64, sd: f64, seed: u64) -> Result<Vec<f64>> {
    Distribution::normal(mean, sd)?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..n)
        .map(|_| mean + sd * standard_normal(&mut rng))
        .collect())
}

/// Draws `n` samples from SkewNormal(location, scale, shape).
///
/// Uses the delta transform of a correlated standard-normal pair:
/// `z = δ|u₀| + √(1-δ²) u₁` with `δ = shape/√(1+shape²)`.
///
/// # Errors
///
/// Returns `InvalidParameter` if `scale` ≤ 0 or any parameter is
/// non-finite.
pub fn skew_normal_samples(
    n: usize,
    location: f64,
    scale: f64,
    shape: f64,
    seed: u64,
) -> Result<Vec<f64>> {
    Distribution::skew_normal(location, scale, shape)?;
    let delta = shape / (1.0 + shape * shape).sqrt();
    let tail = (1.0 - delta * delta).sqrt();
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..n)
        .map(|_| {
            let u0 = standard_normal(&mut rng);
            let u1 = standard_normal(&mut rng);
            location + scale * (delta * u0.abs() + tail * u1)
        })
        .collect())
}

/// Counts successes in `trials` Bernoulli(p) draws.
///
/// # Errors
///
/// Returns `InvalidParameter` if `p` is outside [0, 1].
///
/// # Example
///
/// ```
/// use creer::synthetic::binomial_successes;
///
/// let h = binomial_successes(20, 0.4, 7).expect("valid probability");
/// assert!(h <= 20);
/// ```
pub fn binomial_successes(trials: u64, p: f64, seed: u64) -> Result<u64> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(CreerError::invalid_parameter("p", p, "in [0, 1]"));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut successes = 0;
    for _ in 0..trials {
        if rng.gen::<f64>() < p {
            successes += 1;
        }
    }
    Ok(successes)
}

/// Standard normal deviate via the Box–Muller transform.
fn standard_normal(rng: &mut StdRng) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>(); // (0, 1], keeps ln finite
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_samples_deterministic_per_seed() {
        let a = normal_samples(50, 0.0, 1.0, 123).expect("valid parameters");
        let b = normal_samples(50, 0.0, 1.0, 123).expect("valid parameters");
        let c = normal_samples(50, 0.0, 1.0, 124).expect("valid parameters");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_normal_samples_moments() {
        let samples = normal_samples(20_000, 5.0, 2.0, 42).expect("valid parameters");
        #[allow(clippy::cast_precision_loss)]
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
        assert!((mean - 5.0).abs() < 0.1, "sample mean = {mean}");
        assert!((var - 4.0).abs() < 0.2, "sample variance = {var}");
    }

    #[test]
    fn test_normal_samples_rejects_bad_sd() {
        assert!(normal_samples(10, 0.0, 0.0, 1).is_err());
        assert!(normal_samples(10, 0.0, -1.0, 1).is_err());
    }

    #[test]
    fn test_skew_normal_samples_zero_shape_is_symmetric() {
        let samples = skew_normal_samples(20_000, 1.0, 2.0, 0.0, 9).expect("valid parameters");
        #[allow(clippy::cast_precision_loss)]
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!((mean - 1.0).abs() < 0.1, "sample mean = {mean}");
    }

    #[test]
    fn test_skew_normal_samples_match_analytic_mean() {
        let d = Distribution::skew_normal(0.0, 1.0, 4.0).expect("valid parameters");
        let samples = skew_normal_samples(20_000, 0.0, 1.0, 4.0, 11).expect("valid parameters");
        #[allow(clippy::cast_precision_loss)]
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!((mean - d.mean()).abs() < 0.05, "sample mean = {mean}");
    }

    #[test]
    fn test_binomial_successes_bounded_and_deterministic() {
        let a = binomial_successes(1000, 0.3, 5).expect("valid probability");
        let b = binomial_successes(1000, 0.3, 5).expect("valid probability");
        assert_eq!(a, b);
        assert!(a <= 1000);
        // Rough agreement with the rate
        assert!(a > 200 && a < 400, "successes = {a}");
    }

    #[test]
    fn test_binomial_successes_extreme_rates() {
        assert_eq!(binomial_successes(100, 0.0, 1).expect("valid"), 0);
        assert_eq!(binomial_successes(100, 1.0, 1).expect("valid"), 100);
        assert!(binomial_successes(100, 1.5, 1).is_err());
        assert!(binomial_successes(100, -0.1, 1).is_err());
    }
}
