//! ratios::records — ratio kinds, records and sequences.
//!
//! Purpose
//! -------
//! Define the output data model of ratio computation: the closed set of
//! ratio types ([`RatioKind`]), one row of a ratio table ([`RatioRecord`])
//! and an ordered sequence of rows ([`RatioSequence`]).
//!
//! Conventions
//! -----------
//! - `RatioKind` is a closed enum dispatched by exhaustive `match`; an
//!   unknown ratio type can only surface at the `FromStr` boundary as
//!   `RatioError::UnknownRatioKind`.
//! - Elementary sequences carry strictly increasing radial orders; combined
//!   sequences are non-decreasing, with equal-order rows adjacent in
//!   first-listed-then-second-listed order (see the `combined` module).
//! - A record's `uncertainty` is 0.0 until the covariance estimator fills it
//!   with the square root of the matching covariance diagonal entry.

use crate::ratios::errors::RatioError;
use ndarray::Array1;
use std::str::FromStr;

/// RatioKind — the six supported frequency-ratio types.
///
/// Variants
/// --------
/// - `R02`, `R01`, `R10`: elementary sequences from the two-point and
///   five-point finite-difference formulas.
/// - `R010` (= R01 ∪ R10), `R012` (= R01 ∪ R02), `R102` (= R10 ∪ R02):
///   combined sequences interleaved by radial order.
///
/// Notes
/// -----
/// - Parsing accepts exactly the canonical names ("R02", ..., "R102");
///   anything else is `RatioError::UnknownRatioKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioKind {
    R02,
    R01,
    R10,
    R010,
    R012,
    R102,
}

impl RatioKind {
    /// Canonical name of the ratio type.
    pub fn as_str(&self) -> &'static str {
        match self {
            RatioKind::R02 => "R02",
            RatioKind::R01 => "R01",
            RatioKind::R10 => "R10",
            RatioKind::R010 => "R010",
            RatioKind::R012 => "R012",
            RatioKind::R102 => "R102",
        }
    }

    /// Whether this kind is a merge of two elementary sequences.
    pub fn is_combined(&self) -> bool {
        matches!(self, RatioKind::R010 | RatioKind::R012 | RatioKind::R102)
    }
}

impl std::fmt::Display for RatioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatioKind {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R02" => Ok(RatioKind::R02),
            "R01" => Ok(RatioKind::R01),
            "R10" => Ok(RatioKind::R10),
            "R010" => Ok(RatioKind::R010),
            "R012" => Ok(RatioKind::R012),
            "R102" => Ok(RatioKind::R102),
            other => Err(RatioError::UnknownRatioKind(other.to_string())),
        }
    }
}

/// One row of a ratio table.
///
/// Fields
/// ------
/// - `order`: radial order n the ratio is tagged with.
/// - `value`: the dimensionless ratio value.
/// - `uncertainty`: 1σ uncertainty of `value`; 0.0 before covariance
///   estimation.
/// - `frequency`: reference frequency of the ratio (ν(0,n) for r02/r01,
///   ν(1,n) for r10), for plotting ratios against frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioRecord {
    pub order: i32,
    pub value: f64,
    pub uncertainty: f64,
    pub frequency: f64,
}

impl RatioRecord {
    pub(crate) fn new(order: i32, value: f64, frequency: f64) -> Self {
        RatioRecord { order, value, uncertainty: 0.0, frequency }
    }
}

/// RatioSequence — an ordered sequence of ratio records of one kind.
///
/// Purpose
/// -------
/// Carry the output of ratio computation as a table with columns (radial
/// order, ratio value, uncertainty, reference frequency), ordered by radial
/// order, suitable for direct printing or plotting by the caller.
///
/// Invariants
/// ----------
/// - Records are ordered by radial order: strictly increasing for the
///   elementary kinds, non-decreasing with the documented tie-break
///   adjacency for combined kinds.
/// - The sequence length is fixed by the order overlap of the contributing
///   degrees; the covariance estimator relies on that length and ordering
///   being identical across perturbed realizations.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioSequence {
    kind: RatioKind,
    records: Vec<RatioRecord>,
}

impl RatioSequence {
    pub(crate) fn new(kind: RatioKind, records: Vec<RatioRecord>) -> Self {
        RatioSequence { kind, records }
    }

    /// The ratio type of this sequence.
    pub fn kind(&self) -> RatioKind {
        self.kind
    }

    /// The ordered records of the sequence.
    pub fn records(&self) -> &[RatioRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the sequence holds no records (empty order overlap).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The ratio values as a dense vector, in record order.
    pub fn values(&self) -> Array1<f64> {
        Array1::from_iter(self.records.iter().map(|r| r.value))
    }

    /// Fill per-record uncertainties from a covariance diagonal.
    ///
    /// `variances` must have one entry per record; each uncertainty becomes
    /// the square root of the matching entry.
    pub(crate) fn set_uncertainties(&mut self, variances: &Array1<f64>) {
        debug_assert_eq!(variances.len(), self.records.len());
        for (record, &var) in self.records.iter_mut().zip(variances.iter()) {
            record.uncertainty = var.sqrt();
        }
    }
}
