//! covariance::estimator — Monte Carlo ratio covariance estimation.
//!
//! Purpose
//! -------
//! Propagate per-mode frequency uncertainties into the uncertainty of a
//! frequency-ratio sequence. The analytic propagation through the
//! finite-difference ratio formulas is intractable, so the estimator
//! resamples: it perturbs every mode frequency with independent Gaussian
//! noise at its reported 1σ uncertainty, recomputes the requested ratio
//! sequence per realization, and forms the sample covariance of the ratio
//! values across realizations.
//!
//! Key behaviors
//! -------------
//! - Compute the baseline (unperturbed) sequence once to fix the row layout,
//!   then fill a realizations × m sample matrix with one recomputed ratio
//!   vector per trial ([`RatioCov::estimate`]).
//! - Compare the full-sample covariance against the first-half-sample
//!   covariance via a normalized Frobenius distance as a convergence
//!   diagnostic; non-convergence warns (`log::warn!`) but never fails.
//! - Fill each baseline record's uncertainty with the square root of the
//!   matching covariance diagonal entry.
//!
//! Invariants & assumptions
//! ------------------------
//! - All input validation (realization count, uncertainty finiteness and
//!   sign) happens before the first random draw; a rejected call consumes
//!   no randomness.
//! - Every trial perturbs a fresh copy of the mode set; the baseline set is
//!   never mutated, and trials write disjoint rows of the sample matrix.
//! - Perturbation draws follow the canonical (degree, order) mode order, so
//!   a seeded run is exactly reproducible by external code iterating
//!   [`ModeSet::modes`] in the same order.
//!
//! Conventions
//! -----------
//! - Sample covariances use the unbiased n−1 divisor.
//! - The diagnostic distance is ‖C_full − C_half‖_F / m² for a length-m
//!   sequence, compared against `MonteCarloOptions::convergence_tol`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover option defaults, the exact sqrt-diagonal/uncertainty
//!   correspondence, seed reproducibility, covariance symmetry, and the
//!   zero-draw guarantee of each validation failure (via a counting noise
//!   source).
//! - The integration suite cross-checks the covariance diagonal against an
//!   independently recomputed per-column sample variance from the same
//!   seeded draws.

use crate::covariance::errors::{CovResult, CovarianceError};
use crate::covariance::noise::GaussianSource;
use crate::ratios::combined::ratio_sequence;
use crate::ratios::modes::{Mode, ModeSet};
use crate::ratios::records::{RatioKind, RatioSequence};
use ndarray::{Array2, ArrayView2, Axis, s};

/// Default number of Monte Carlo realizations.
pub const DEFAULT_REALIZATIONS: usize = 10_000;

/// Default tolerance for the normalized Frobenius convergence check.
pub const DEFAULT_CONVERGENCE_TOL: f64 = 1.0e-6;

/// MonteCarloOptions — configuration for ratio covariance estimation.
///
/// Purpose
/// -------
/// Hold the realization count and convergence tolerance in one value that
/// can be shared across estimation runs.
///
/// Fields
/// ------
/// - `realizations`: `usize`
///   Number of Monte Carlo trials; must be at least 2 for the sample
///   covariance to be defined. With fewer than 4, the half-sample matrix is
///   degenerate and the convergence check can only warn.
/// - `convergence_tol`: `f64`
///   Threshold on the normalized Frobenius distance between the full- and
///   half-sample covariances above which the result is flagged as not
///   converged.
///
/// Notes
/// -----
/// - `Default` uses 10 000 realizations and a 1e-6 tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct MonteCarloOptions {
    pub realizations: usize,
    pub convergence_tol: f64,
}

impl MonteCarloOptions {
    /// Options with an explicit realization count and the default tolerance.
    pub fn new(realizations: usize) -> Self {
        MonteCarloOptions { realizations, convergence_tol: DEFAULT_CONVERGENCE_TOL }
    }
}

impl Default for MonteCarloOptions {
    fn default() -> Self {
        MonteCarloOptions {
            realizations: DEFAULT_REALIZATIONS,
            convergence_tol: DEFAULT_CONVERGENCE_TOL,
        }
    }
}

/// Outcome of the Monte Carlo convergence check.
///
/// `frobenius_distance` is ‖C_full − C_half‖_F / m²; `converged` records
/// whether it stayed within the configured tolerance. Non-convergence is
/// informational: the covariance is still returned, with reduced confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceDiagnostic {
    pub frobenius_distance: f64,
    pub converged: bool,
}

/// RatioCov — a ratio sequence with its Monte Carlo covariance.
///
/// Purpose
/// -------
/// Bundle the baseline ratio sequence (uncertainties filled from the
/// covariance diagonal), the full m×m sample covariance matrix, and the
/// convergence diagnostic of one estimation run.
///
/// Invariants
/// ----------
/// - `covariance` is square with side `sequence.len()`, symmetric up to
///   floating-point roundoff, with non-negative diagonal entries.
/// - `sequence.records()[i].uncertainty == covariance[[i, i]].sqrt()`
///   exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioCov {
    sequence: RatioSequence,
    covariance: Array2<f64>,
    diagnostic: ConvergenceDiagnostic,
}

impl RatioCov {
    /// Estimate a ratio sequence and its covariance by Monte Carlo
    /// resampling.
    ///
    /// Parameters
    /// ----------
    /// - `modes`: `&ModeSet`
    ///   Frequency table with degrees 0, 1 and 2 contiguous, and a finite,
    ///   non-negative uncertainty on every mode.
    /// - `kind`: `RatioKind`
    ///   The ratio type to estimate; combined kinds recompute the merge per
    ///   realization.
    /// - `opts`: `&MonteCarloOptions`
    ///   Realization count (≥ 2) and convergence tolerance.
    /// - `noise`: `&mut S`
    ///   Injected Gaussian source. Draws happen in canonical (degree,
    ///   order) mode order, one per mode per realization.
    ///
    /// Returns
    /// -------
    /// `CovResult<RatioCov>`
    ///   - `Ok(RatioCov)` with the baseline sequence (uncertainties filled),
    ///     the full sample covariance, and the convergence diagnostic.
    ///   - `Err(CovarianceError)` on invalid input; see Errors.
    ///
    /// Errors
    /// ------
    /// - `CovarianceError::InvalidRealizations` when `opts.realizations < 2`
    ///   (checked before any draw).
    /// - `CovarianceError::InvalidUncertainty` when a mode's uncertainty is
    ///   negative or non-finite (checked before any draw).
    /// - `CovarianceError::Ratio` when the mode set violates the ratio
    ///   preconditions. Perturbation changes no mode identities, so once the
    ///   baseline succeeds the per-trial recomputation cannot fail them.
    /// - `CovarianceError::EmptySequence` when the baseline sequence of the
    ///   requested kind has no records.
    ///
    /// Notes
    /// -----
    /// - Non-convergence of the covariance is not an error: the diagnostic
    ///   is returned and a `log::warn!` is emitted, and callers needing
    ///   rigor should rerun with more realizations.
    /// - The trial loop is embarrassingly parallel in structure (fresh
    ///   perturbed set and disjoint sample row per trial); callers wanting
    ///   parallelism can shard realizations across calls with independent
    ///   noise sources and pool the sample rows.
    pub fn estimate<S: GaussianSource>(
        modes: &ModeSet, kind: RatioKind, opts: &MonteCarloOptions, noise: &mut S,
    ) -> CovResult<RatioCov> {
        if opts.realizations < 2 {
            return Err(CovarianceError::InvalidRealizations(opts.realizations));
        }
        validate_uncertainties(modes)?;

        let mut baseline = ratio_sequence(modes, kind)?;
        let m = baseline.len();
        if m == 0 {
            return Err(CovarianceError::EmptySequence(kind));
        }

        let mut samples = Array2::<f64>::zeros((opts.realizations, m));
        for trial in 0..opts.realizations {
            let perturbed = perturbed_set(modes, noise);
            let sequence = ratio_sequence(&perturbed, kind)?;
            for (col, record) in sequence.records().iter().enumerate() {
                samples[[trial, col]] = record.value;
            }
        }

        let half = sample_covariance(samples.slice(s![..opts.realizations / 2, ..]));
        let covariance = sample_covariance(samples.view());

        let frobenius_distance = frobenius_distance(&covariance, &half) / (m * m) as f64;
        let converged = frobenius_distance <= opts.convergence_tol;
        if !converged {
            log::warn!(
                "{kind} covariance has not stabilized: normalized Frobenius distance \
                 {frobenius_distance:e} exceeds {:e} after {} realizations",
                opts.convergence_tol,
                opts.realizations
            );
        }

        baseline.set_uncertainties(&covariance.diag().to_owned());
        Ok(RatioCov {
            sequence: baseline,
            covariance,
            diagnostic: ConvergenceDiagnostic { frobenius_distance, converged },
        })
    }

    /// The baseline ratio sequence with uncertainties filled.
    pub fn sequence(&self) -> &RatioSequence {
        &self.sequence
    }

    /// The full m×m sample covariance matrix.
    pub fn covariance(&self) -> &Array2<f64> {
        &self.covariance
    }

    /// The convergence diagnostic of this run.
    pub fn diagnostic(&self) -> ConvergenceDiagnostic {
        self.diagnostic
    }

    /// Decompose into the annotated sequence and the covariance matrix.
    pub fn into_parts(self) -> (RatioSequence, Array2<f64>) {
        (self.sequence, self.covariance)
    }
}

// ---- Helper methods ----

/// Reject negative or non-finite mode uncertainties before any draw.
fn validate_uncertainties(modes: &ModeSet) -> CovResult<()> {
    for mode in modes.modes() {
        if !mode.uncertainty.is_finite() || mode.uncertainty < 0.0 {
            return Err(CovarianceError::InvalidUncertainty {
                degree: mode.degree,
                order: mode.order,
                value: mode.uncertainty,
            });
        }
    }
    Ok(())
}

/// Build a fresh mode set with every frequency perturbed by its own σ.
///
/// Draws follow the canonical (degree, order) order of `modes`; degrees,
/// orders and uncertainties are carried over unchanged, so the perturbed set
/// has exactly the same mode identities as the input.
fn perturbed_set<S: GaussianSource>(modes: &ModeSet, noise: &mut S) -> ModeSet {
    let perturbed = modes
        .modes()
        .iter()
        .map(|m| Mode::new(m.degree, m.order, noise.draw(m.frequency, m.uncertainty), m.uncertainty))
        .collect();
    ModeSet::new(perturbed)
}

/// Sample covariance of the columns of `samples` with the n−1 divisor.
///
/// Rows are observations (realizations), columns are variables (ratio
/// entries). With a single row the divisor is zero and the result is
/// NaN-valued; the estimator only feeds single-row input to the half-sample
/// matrix at very small realization counts, where the convergence check is
/// expected to warn.
fn sample_covariance(samples: ArrayView2<'_, f64>) -> Array2<f64> {
    let n = samples.nrows();
    let means = samples.mean_axis(Axis(0)).unwrap();
    let centered = samples.to_owned() - &means;
    centered.t().dot(&centered) / (n as f64 - 1.0)
}

/// Frobenius norm of the elementwise difference of two matrices.
fn frobenius_distance(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    (a - b).mapv(|x| x * x).sum().sqrt()
}
