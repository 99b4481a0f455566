//! Pseudo-random source for the stochastic action increment.
//!
//! This module provides [`CosmoRng`], a seeded PRNG wrapper exposing a
//! uniform draw on the open interval (0,1) and a standard-normal draw
//! derived from it via the Box–Muller transform.
//!
//! # Determinism
//!
//! The same seed always produces the same draw sequence, which makes runs
//! reproducible end to end: the action series, and everything derived from
//! it, is a pure function of the seed and the model parameters.
//!
//! # Box–Muller variant
//!
//! Only the cosine branch of the Box–Muller transform is used; the paired
//! sine sample is discarded. This is statistically valid (the marginal of
//! either branch is standard normal) and is kept deliberately: completing
//! the transform would consume the uniform stream differently and break
//! determinism comparisons against reference runs.

use std::f64::consts::PI;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random source for the simulation.
///
/// Owns the underlying bit generator; constructed exactly once per
/// [`Simulator`](crate::sim::Simulator). There is no reseeding method:
/// a new stream requires a new `CosmoRng`, so a stream can never be
/// silently reset mid-run.
///
/// # Examples
///
/// ```rust
/// use cosmo_engine::rng::CosmoRng;
///
/// let mut rng1 = CosmoRng::from_seed(42);
/// let mut rng2 = CosmoRng::from_seed(42);
///
/// // Same seed produces identical sequences.
/// assert_eq!(rng1.gaussian(), rng2.gaussian());
/// ```
pub struct CosmoRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (kept for diagnostics).
    seed: u64,
}

impl CosmoRng {
    /// Creates a new source initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new source seeded from the wall clock (whole seconds
    /// since the Unix epoch).
    ///
    /// Two sources created within the same second share a stream; use
    /// [`from_seed`](Self::from_seed) when reproducibility matters.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_seed(seed)
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a uniform value from the open interval (0,1).
    ///
    /// The underlying generator samples the half-open interval [0,1), so
    /// 1.0 can never occur; an exact 0.0 is re-drawn. Neither endpoint
    /// can therefore escape, and the `1 − u` division in
    /// [`gaussian`](Self::gaussian) cannot degenerate.
    #[inline]
    pub fn uniform_open(&mut self) -> f64 {
        loop {
            let u: f64 = self.inner.gen();
            if u > 0.0 {
                return u;
            }
        }
    }

    /// Draws a standard-normal value via the cosine-only Box–Muller
    /// transform:
    ///
    /// ```text
    /// g = cos(2π·U₁) · sqrt(2·ln(1/(1 − U₂)))
    /// ```
    ///
    /// with U₁, U₂ independent draws from
    /// [`uniform_open`](Self::uniform_open). The first draw feeds the
    /// angle, the second the radius; the paired sine sample is discarded.
    #[inline]
    pub fn gaussian(&mut self) -> f64 {
        let phi = 2.0 * PI * self.uniform_open();
        let r = (2.0 * (1.0 / (1.0 - self.uniform_open())).ln()).sqrt();
        phi.cos() * r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let mut rng1 = CosmoRng::from_seed(12345);
        let mut rng2 = CosmoRng::from_seed(12345);
        for _ in 0..1000 {
            assert_eq!(rng1.uniform_open(), rng2.uniform_open());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut rng1 = CosmoRng::from_seed(1);
        let mut rng2 = CosmoRng::from_seed(2);
        let diverged = (0..100).any(|_| rng1.uniform_open() != rng2.uniform_open());
        assert!(diverged);
    }

    #[test]
    fn test_uniform_stays_inside_open_interval() {
        let mut rng = CosmoRng::from_seed(42);
        for _ in 0..100_000 {
            let u = rng.uniform_open();
            assert!(u > 0.0 && u < 1.0, "draw escaped (0,1): {}", u);
        }
    }

    #[test]
    fn test_gaussian_matches_documented_formula() {
        // Replay the uniform stream of an identically seeded source and
        // apply the cosine-only transform by hand.
        let mut rng = CosmoRng::from_seed(987);
        let mut replay = CosmoRng::from_seed(987);

        for _ in 0..100 {
            let g = rng.gaussian();
            let u1 = replay.uniform_open();
            let u2 = replay.uniform_open();
            let expected = (2.0 * PI * u1).cos() * (2.0 * (1.0 / (1.0 - u2)).ln()).sqrt();
            assert_eq!(g, expected);
        }
    }

    #[test]
    fn test_gaussian_sample_moments() {
        let mut rng = CosmoRng::from_seed(7);
        let n = 200_000;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for _ in 0..n {
            let g = rng.gaussian();
            assert!(g.is_finite());
            sum += g;
            sum_sq += g * g;
        }
        let mean = sum / n as f64;
        let var = sum_sq / n as f64 - mean * mean;
        assert_relative_eq!(mean, 0.0, epsilon = 0.02);
        assert_relative_eq!(var, 1.0, max_relative = 0.02);
    }

    #[test]
    fn test_seed_accessor() {
        assert_eq!(CosmoRng::from_seed(42).seed(), 42);
    }
}
