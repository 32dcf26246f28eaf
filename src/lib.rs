//! astero_ratios — asteroseismic frequency ratios with Monte Carlo covariance.
//!
//! Purpose
//! -------
//! Compute the asteroseismic frequency ratios r02, r01 and r10 — and their
//! ordered combinations r010, r012 and r102 — from a star's oscillation-mode
//! frequencies, and estimate the covariance of those ratios by Monte Carlo
//! resampling of the observed frequencies within their reported
//! uncertainties. Frequency ratios are diagnostics of the stellar interior
//! that are largely insensitive to poorly modeled surface layers.
//!
//! Key behaviors
//! -------------
//! - Align modes of harmonic degree ℓ = 0, 1, 2 by radial order n, tolerating
//!   degree sets that start and end at different orders, and evaluate the
//!   two-point (r02) and five-point (r01, r10) finite-difference ratio
//!   formulas over the full order overlap (`ratios::ElementaryRatios`).
//! - Interleave pairs of elementary sequences into combined sequences ordered
//!   by radial order with a stable first-then-second tie-break
//!   (`ratios::CombinedRatios`).
//! - Propagate observational uncertainties into a sample covariance matrix
//!   over Gaussian-perturbed realizations, with a Frobenius-norm convergence
//!   diagnostic (`covariance::RatioCov`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Each harmonic degree 0, 1, 2 must be present with a contiguous run of
//!   radial orders; violations are reported as `RatioError` values, never as
//!   partial output or panics.
//! - All ratio computations are pure functions of their input: no state is
//!   retained between calls, and every Monte Carlo trial perturbs a fresh
//!   copy of the mode set.
//! - Randomness is always injected via the `covariance::GaussianSource`
//!   trait; the crate holds no global random state.
//!
//! Conventions
//! -----------
//! - Errors are reported through subtree-local enums (`ratios::RatioError`,
//!   `covariance::CovarianceError`) with `RatioResult` / `CovResult` aliases
//!   and `?`-based propagation.
//! - Matrices use `ndarray`; the covariance of a length-m ratio sequence is
//!   an m×m `Array2<f64>`.
//! - The non-fatal convergence warning is emitted via `log::warn!` and also
//!   returned as a `covariance::ConvergenceDiagnostic` value.
//!
//! Downstream usage
//! ----------------
//! - Callers own data loading and presentation: build a `ratios::ModeSet`
//!   from tabular (degree, order, frequency, uncertainty) data, then call
//!   `ratios::ratio_sequence` for noise-free ratios or
//!   `covariance::RatioCov::estimate` for ratios with covariance.
//! - `RatioSequence` rows carry (radial order, ratio value, uncertainty,
//!   reference frequency) and are suitable for direct printing or plotting.

pub mod covariance;
pub mod ratios;

pub use covariance::{
    ConvergenceDiagnostic, CovResult, CovarianceError, GaussianSource, MonteCarloOptions,
    RatioCov, SeededGaussian,
};
pub use ratios::{Mode, ModeSet, RatioError, RatioKind, RatioResult, RatioSequence};
