//! ratios::validation — shared precondition guard for ratio computation.
//!
//! Purpose
//! -------
//! Centralize the mode-set preconditions that every ratio formula relies on:
//! harmonic degrees 0, 1 and 2 each present, each with a contiguous run of
//! radial orders and finite frequencies. Exposing the guard separately lets
//! callers pre-flight a frequency table before committing to an expensive
//! resampling run.
//!
//! Conventions
//! -----------
//! - Validation is performed by constructing the per-degree views, so this
//!   module cannot drift from what [`ElementaryRatios::compute`] actually
//!   requires.
//! - A successful return guarantees that ratio computation on the same set
//!   cannot fail its preconditions.
//!
//! [`ElementaryRatios::compute`]: crate::ratios::ElementaryRatios::compute

use crate::ratios::errors::RatioResult;
use crate::ratios::modes::ModeSet;

/// Degrees every ratio formula draws on.
pub(crate) const RATIO_DEGREES: [u8; 3] = [0, 1, 2];

/// Check the ratio preconditions on a mode set.
///
/// Parameters
/// ----------
/// - `modes`: `&ModeSet`
///   The frequency table to check.
///
/// Returns
/// -------
/// `RatioResult<()>`
///   - `Ok(())` when degrees 0, 1 and 2 are each present with strictly
///     consecutive radial orders and finite frequencies.
///   - `Err(RatioError)` identifying the first violated precondition.
///
/// Errors
/// ------
/// - `RatioError::MissingDegree` when a required degree has no modes.
/// - `RatioError::OrderGap` when a degree's orders skip or repeat a value.
/// - `RatioError::NonFiniteFrequency` when a frequency is NaN or infinite.
///
/// Notes
/// -----
/// - Degrees are checked in ascending order, so the reported error concerns
///   the lowest offending degree.
pub fn validate_mode_set(modes: &ModeSet) -> RatioResult<()> {
    for degree in RATIO_DEGREES {
        modes.degree_view(degree)?;
    }
    Ok(())
}
