//! covariance — Monte Carlo covariance of frequency-ratio sequences.
//!
//! Purpose
//! -------
//! Estimate the uncertainty of a frequency-ratio sequence as a full sample
//! covariance matrix. The finite-difference ratio formulas share frequencies
//! between neighboring entries, so the entries of a sequence are strongly
//! correlated; this subtree captures those correlations by resampling the
//! observed frequencies within their reported uncertainties and recomputing
//! the requested sequence per realization.
//!
//! Key behaviors
//! -------------
//! - Estimate a ratio sequence with its m×m covariance and a convergence
//!   diagnostic via [`RatioCov::estimate`], configured by
//!   [`MonteCarloOptions`].
//! - Inject all randomness through the [`GaussianSource`] trait, with
//!   [`SeededGaussian`] as the reproducible default implementation.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input validation happens before the first random draw; a rejected call
//!   consumes no randomness.
//! - Non-convergence of the covariance is a logged warning and a diagnostic
//!   flag, never an error.
//!
//! Downstream usage
//! ----------------
//! - Typical callers seed a source and estimate in two lines:
//!
//!   ```rust
//!   use astero_ratios::covariance::{MonteCarloOptions, RatioCov, SeededGaussian};
//!   use astero_ratios::ratios::{Mode, ModeSet, RatioKind};
//!
//!   let set = ModeSet::new(vec![
//!       Mode::new(0, 20, 2000.0, 0.1),
//!       // ... degrees 1 and 2 ...
//!   # Mode::new(0, 21, 2100.0, 0.1), Mode::new(0, 22, 2200.0, 0.1),
//!   # Mode::new(1, 20, 2045.0, 0.1), Mode::new(1, 21, 2145.0, 0.1),
//!   # Mode::new(1, 22, 2245.0, 0.1), Mode::new(2, 20, 2090.0, 0.1),
//!   # Mode::new(2, 21, 2190.0, 0.1), Mode::new(2, 22, 2290.0, 0.1),
//!   ]);
//!   let mut noise = SeededGaussian::from_seed(42);
//!   let outcome = RatioCov::estimate(
//!       &set,
//!       RatioKind::R012,
//!       &MonteCarloOptions::new(200),
//!       &mut noise,
//!   )?;
//!   assert_eq!(outcome.covariance().nrows(), outcome.sequence().len());
//!   # Ok::<(), astero_ratios::covariance::CovarianceError>(())
//!   ```

pub mod errors;
pub mod estimator;
pub mod noise;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{CovResult, CovarianceError};
pub use self::estimator::{
    ConvergenceDiagnostic, DEFAULT_CONVERGENCE_TOL, DEFAULT_REALIZATIONS, MonteCarloOptions,
    RatioCov,
};
pub use self::noise::{GaussianSource, SeededGaussian};
