//! Unified error handling for covariance estimation.
//!
//! This module defines `CovarianceError`, the central error type used by the
//! Monte Carlo ratio-covariance estimator. It wraps precondition failures
//! from the ratio subtree and adds estimator-specific input validation
//! (realization count, mode uncertainties, degenerate sequences). An alias
//! `CovResult<T>` standardizes the return type across covariance code.

use crate::ratios::errors::RatioError;
use crate::ratios::records::RatioKind;

/// Unified error type for covariance estimation.
///
/// Covers ratio preconditions surfaced during the baseline or a perturbed
/// recomputation, invalid estimator inputs, and degenerate (empty) baseline
/// sequences. Integrates with `RatioError` via `From` so `?` propagates
/// ratio failures directly.
#[derive(Debug, Clone, PartialEq)]
pub enum CovarianceError {
    // ---- Ratio subtree passthrough ----
    /// A ratio precondition failed while computing the baseline or a
    /// perturbed realization.
    Ratio(RatioError),

    // ---- Estimator input validation ----
    /// Fewer than two realizations were requested; the sample covariance is
    /// undefined below that.
    InvalidRealizations(usize),

    /// A mode carries a negative or non-finite measurement uncertainty.
    InvalidUncertainty { degree: u8, order: i32, value: f64 },

    /// The baseline sequence of the requested kind is empty, so there is
    /// nothing to estimate a covariance for.
    EmptySequence(RatioKind),
}

pub type CovResult<T> = Result<T, CovarianceError>;

impl From<RatioError> for CovarianceError {
    fn from(err: RatioError) -> Self {
        CovarianceError::Ratio(err)
    }
}

impl std::error::Error for CovarianceError {}

impl std::fmt::Display for CovarianceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CovarianceError::Ratio(err) => write!(f, "Covariance Error: {err}"),
            CovarianceError::InvalidRealizations(n) => write!(
                f,
                "Covariance Error: {n} realizations requested; at least 2 are required for a \
                 sample covariance"
            ),
            CovarianceError::InvalidUncertainty { degree, order, value } => write!(
                f,
                "Covariance Error: invalid uncertainty {value} for mode (l = {degree}, n = \
                 {order}); uncertainties must be finite and non-negative"
            ),
            CovarianceError::EmptySequence(kind) => write!(
                f,
                "Covariance Error: the {kind} sequence is empty for this mode set; no covariance \
                 can be estimated"
            ),
        }
    }
}
