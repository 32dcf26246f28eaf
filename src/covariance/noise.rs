//! covariance::noise — injectable Gaussian noise sources.
//!
//! Purpose
//! -------
//! Abstract the source of Gaussian perturbations behind the
//! [`GaussianSource`] trait so that the Monte Carlo estimator never touches
//! global random state. Production code injects a [`SeededGaussian`] over a
//! seedable PRNG; tests inject counting or constant sources to instrument
//! draw counts and pin outcomes.
//!
//! Conventions
//! -----------
//! - One source per estimator call. A caller sharding realizations across
//!   threads creates one independent source per shard.
//! - A draw with `std_dev == 0.0` returns the mean exactly, so noise-free
//!   modes pass through resampling unchanged.
//!
//! Testing notes
//! -------------
//! - Unit tests verify seed reproducibility, the zero-σ passthrough, and
//!   that distinct seeds decorrelate the streams.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// A source of Gaussian random draws parameterized per call.
///
/// Implementors return one draw from Normal(`mean`, `std_dev`) per call and
/// may keep arbitrary internal state (PRNG position, call counters).
pub trait GaussianSource {
    /// Draw a single value from Normal(`mean`, `std_dev`).
    ///
    /// `std_dev` must be finite and non-negative; the estimator validates
    /// this before its first draw. `std_dev == 0.0` must return `mean`.
    fn draw(&mut self, mean: f64, std_dev: f64) -> f64;
}

/// SeededGaussian — a reproducible Gaussian source over `StdRng`.
///
/// Purpose
/// -------
/// Provide the default noise source for covariance estimation: a standard
/// normal draw scaled and shifted per call, backed by a seedable PRNG so
/// that analyses can be replayed exactly.
///
/// Notes
/// -----
/// - Scaling a standard normal draw (rather than constructing a
///   Normal(mean, σ) distribution per call) keeps the zero-σ case exact and
///   makes the draw infallible.
#[derive(Debug, Clone)]
pub struct SeededGaussian {
    rng: StdRng,
}

impl SeededGaussian {
    /// A source seeded for exact reproducibility.
    pub fn from_seed(seed: u64) -> Self {
        SeededGaussian { rng: StdRng::seed_from_u64(seed) }
    }

    /// A source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        SeededGaussian { rng: StdRng::from_entropy() }
    }
}

impl GaussianSource for SeededGaussian {
    fn draw(&mut self, mean: f64, std_dev: f64) -> f64 {
        let standard: f64 = self.rng.sample(StandardNormal);
        mean + std_dev * standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Reproducibility of draws under a fixed seed.
    // - Independence of streams under distinct seeds.
    // - The exact zero-σ passthrough.
    //
    // They intentionally DO NOT cover:
    // - Distributional properties of the underlying PRNG; those belong to
    //   the rand project's own test suites.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that two sources with the same seed produce identical draw
    // streams.
    //
    // Given
    // -----
    // - Two `SeededGaussian::from_seed(7)` sources.
    //
    // Expect
    // ------
    // - Ten successive draws with matching parameters agree exactly.
    fn seeded_gaussian_same_seed_reproduces_stream() {
        // Arrange
        let mut a = SeededGaussian::from_seed(7);
        let mut b = SeededGaussian::from_seed(7);

        // Act & Assert
        for i in 0..10 {
            let mean = i as f64;
            let sigma = 0.5 + i as f64 * 0.1;
            assert_eq!(a.draw(mean, sigma), b.draw(mean, sigma), "streams diverged at draw {i}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that distinct seeds produce distinct draw streams.
    //
    // Given
    // -----
    // - Sources seeded with 1 and 2.
    //
    // Expect
    // ------
    // - The first ten draws are not all equal between the streams.
    fn seeded_gaussian_distinct_seeds_produce_distinct_streams() {
        // Arrange
        let mut a = SeededGaussian::from_seed(1);
        let mut b = SeededGaussian::from_seed(2);

        // Act
        let diverged = (0..10).any(|_| a.draw(0.0, 1.0) != b.draw(0.0, 1.0));

        // Assert
        assert!(diverged, "streams with different seeds should not coincide");
    }

    #[test]
    // Purpose
    // -------
    // Verify the zero-σ contract: the draw returns the mean exactly, with
    // the PRNG still advancing deterministically.
    //
    // Given
    // -----
    // - A seeded source and draws with σ = 0 around varying means.
    //
    // Expect
    // ------
    // - Each draw equals its mean bit-for-bit.
    fn seeded_gaussian_zero_sigma_returns_mean_exactly() {
        // Arrange
        let mut source = SeededGaussian::from_seed(42);

        // Act & Assert
        for mean in [0.0, -3.25, 1234.5] {
            assert_eq!(source.draw(mean, 0.0), mean);
        }
    }
}
