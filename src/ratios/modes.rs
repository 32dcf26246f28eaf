//! ratios::modes — oscillation-mode data model.
//!
//! Purpose
//! -------
//! Define the input data model for ratio computation: a single oscillation
//! [`Mode`] (harmonic degree ℓ, radial order n, frequency, uncertainty), an
//! immutable [`ModeSet`] holding a whole frequency table in canonical order,
//! and the per-degree contiguous view [`DegreeModes`] through which the
//! finite-difference formulas index frequencies by radial order.
//!
//! Key behaviors
//! -------------
//! - [`ModeSet::new`] sorts modes by (degree, order) once at construction;
//!   everything downstream relies on that canonical layout, including the
//!   Monte Carlo perturbation order in the covariance estimator.
//! - [`ModeSet::degree_view`] enforces the ratio preconditions while carving
//!   out a degree: the degree must be present, its radial orders strictly
//!   consecutive, and its frequencies finite. A view that constructs
//!   successfully can be indexed by order without further checks.
//!
//! Invariants & assumptions
//! ------------------------
//! - A `DegreeModes` view always satisfies
//!   `orders == first_order ..= last_order` with no gaps or duplicates, so
//!   `freq(n)` is a direct offset lookup.
//! - `ModeSet` is immutable after construction; perturbed realizations are
//!   built as fresh sets, never by mutating a shared one.
//!
//! Conventions
//! -----------
//! - Degrees are `u8` (here 0, 1, 2), radial orders `i32` (may be negative
//!   for gravity-dominated modes), frequencies and uncertainties `f64` in
//!   the caller's physical units (conventionally µHz).
//! - Uncertainties are 0.0 when processing model data without noise; they
//!   are validated only by the covariance estimator, which is the sole
//!   consumer.
//!
//! Testing notes
//! -------------
//! - Unit tests cover canonical sorting, successful view construction, and
//!   each precondition branch (missing degree, order gap, duplicate order,
//!   non-finite frequency).

use crate::ratios::errors::{RatioError, RatioResult};

/// A single observed or modeled oscillation mode.
///
/// Fields
/// ------
/// - `degree`: harmonic degree ℓ of the mode's surface pattern.
/// - `order`: radial order n; distinguishes modes of equal degree.
/// - `frequency`: mode frequency in the caller's units.
/// - `uncertainty`: 1σ measurement uncertainty of `frequency`; 0.0 for
///   noise-free model frequencies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mode {
    pub degree: u8,
    pub order: i32,
    pub frequency: f64,
    pub uncertainty: f64,
}

impl Mode {
    /// Construct a mode from a (degree, order, frequency, uncertainty) row.
    pub fn new(degree: u8, order: i32, frequency: f64, uncertainty: f64) -> Self {
        Mode { degree, order, frequency, uncertainty }
    }

    /// Construct a mode without measurement uncertainty (σ = 0).
    pub fn noise_free(degree: u8, order: i32, frequency: f64) -> Self {
        Mode::new(degree, order, frequency, 0.0)
    }
}

/// ModeSet — an immutable frequency table in canonical (degree, order) order.
///
/// Purpose
/// -------
/// Own the full set of modes entering ratio computation and expose
/// per-degree contiguous views. The set is the unit of input for both the
/// pure ratio computation and the Monte Carlo covariance estimator.
///
/// Key behaviors
/// -------------
/// - Sorts the supplied modes by (degree, order) once; the resulting order
///   is the documented iteration order for [`ModeSet::modes`] and therefore
///   the deterministic draw order during resampling.
/// - Defers precondition checking to [`ModeSet::degree_view`], so a set may
///   legally contain extra degrees (ℓ > 2) that ratio formulas ignore.
///
/// Invariants
/// ----------
/// - `modes()` is sorted by (degree, order) and never changes after
///   construction.
///
/// Notes
/// -----
/// - Construction never fails: malformed tables are only rejected when a
///   degree view is requested, which keeps error reporting tied to the
///   computation that actually needs the precondition.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeSet {
    modes: Vec<Mode>,
}

impl ModeSet {
    /// Build a mode set from an arbitrary-order list of modes.
    ///
    /// Parameters
    /// ----------
    /// - `modes`: `Vec<Mode>`
    ///   Rows of a frequency table in any order; ownership is taken and the
    ///   rows are sorted by (degree, order).
    ///
    /// Returns
    /// -------
    /// `ModeSet`
    ///   The canonicalized set. No validation is performed here; see
    ///   [`ModeSet::degree_view`].
    pub fn new(mut modes: Vec<Mode>) -> Self {
        modes.sort_by(|a, b| (a.degree, a.order).cmp(&(b.degree, b.order)));
        ModeSet { modes }
    }

    /// All modes in canonical (degree, order) order.
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    /// Number of modes in the set.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Whether the set contains no modes.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Carve out the contiguous view of one harmonic degree.
    ///
    /// Parameters
    /// ----------
    /// - `degree`: `u8`
    ///   Harmonic degree to isolate (0, 1 or 2 for ratio computation).
    ///
    /// Returns
    /// -------
    /// `RatioResult<DegreeModes<'_>>`
    ///   - `Ok(view)` when the degree is present with strictly consecutive
    ///     radial orders and finite frequencies.
    ///   - `Err(RatioError)` otherwise; see Errors.
    ///
    /// Errors
    /// ------
    /// - `RatioError::MissingDegree(degree)` when no mode of `degree` exists.
    /// - `RatioError::OrderGap { .. }` when the degree's orders skip or
    ///   repeat a value within their min..=max span.
    /// - `RatioError::NonFiniteFrequency { .. }` when any frequency of the
    ///   degree is NaN or infinite.
    pub fn degree_view(&self, degree: u8) -> RatioResult<DegreeModes<'_>> {
        let start = self.modes.partition_point(|m| m.degree < degree);
        let end = self.modes.partition_point(|m| m.degree <= degree);
        DegreeModes::new(degree, &self.modes[start..end])
    }
}

/// DegreeModes — contiguous, order-indexed view of one degree's modes.
///
/// Purpose
/// -------
/// Give the ratio formulas O(1) frequency lookup by radial order. A view
/// existing at all is proof that the degree passed the contiguity and
/// finiteness preconditions, so formula code can index freely inside
/// `first_order() ..= last_order()`.
///
/// Invariants
/// ----------
/// - `modes[i].order == first_order() + i` for every i.
/// - Every `modes[i].frequency` is finite.
#[derive(Debug, Clone, Copy)]
pub struct DegreeModes<'a> {
    degree: u8,
    modes: &'a [Mode],
}

impl<'a> DegreeModes<'a> {
    /// Validate a degree slice and wrap it as an order-indexed view.
    ///
    /// The slice must be sorted by order (guaranteed by `ModeSet`), non-empty,
    /// strictly consecutive in order, and carry finite frequencies.
    fn new(degree: u8, modes: &'a [Mode]) -> RatioResult<Self> {
        if modes.is_empty() {
            return Err(RatioError::MissingDegree(degree));
        }
        for (i, mode) in modes.iter().enumerate() {
            let expected = modes[0].order + i as i32;
            if mode.order != expected {
                return Err(RatioError::OrderGap { degree, expected, found: mode.order });
            }
            if !mode.frequency.is_finite() {
                return Err(RatioError::NonFiniteFrequency {
                    degree,
                    order: mode.order,
                    value: mode.frequency,
                });
            }
        }
        Ok(DegreeModes { degree, modes })
    }

    /// Harmonic degree of the viewed modes.
    pub fn degree(&self) -> u8 {
        self.degree
    }

    /// Lowest radial order in the view.
    pub fn first_order(&self) -> i32 {
        self.modes[0].order
    }

    /// Highest radial order in the view.
    pub fn last_order(&self) -> i32 {
        self.modes[self.modes.len() - 1].order
    }

    /// Number of modes in the view.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Whether the view is empty (never true for a constructed view).
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Frequency of the mode with radial order `order`.
    ///
    /// Panics
    /// ------
    /// - If `order` lies outside `first_order() ..= last_order()`. Ratio
    ///   formulas stay inside the order overlap computed from these bounds,
    ///   so an out-of-range lookup indicates a programming error.
    pub fn freq(&self, order: i32) -> f64 {
        let idx = (order - self.first_order()) as usize;
        self.modes[idx].frequency
    }
}
