//! ratios::errors — shared error types for ratio computation.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by mode-set validation and
//! ratio computation. Precondition failures (missing degrees, gaps in radial
//! order, non-finite frequencies) and the ratio-kind parsing boundary all
//! report through [`RatioError`], keeping the failure surface of the ratio
//! subtree in one place.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints ("degree 1
//!   has a gap in radial order") rather than implementation details.
//! - Variants carry just enough payload (degree, offending order, offending
//!   value) for diagnostics without dragging data structures along.
//! - A precondition failure means *no* ratio output: callers never receive
//!   partial sequences alongside an error.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload, so logs remain meaningful without additional context.

pub type RatioResult<T> = Result<T, RatioError>;

/// RatioError — precondition and parse failures for ratio computation.
///
/// Variants
/// --------
/// - `MissingDegree(degree)`
///   The mode set contains no modes of the given harmonic degree. Degrees
///   0, 1 and 2 must each be present for any ratio to be computable.
/// - `OrderGap { degree, expected, found }`
///   The modes of `degree` do not form a contiguous run of radial orders:
///   after the mode of order `expected - 1`, the next mode carries order
///   `found` instead of `expected`. Duplicated orders surface the same way.
/// - `NonFiniteFrequency { degree, order, value }`
///   A mode carries a NaN or infinite frequency and cannot enter any
///   finite-difference formula.
/// - `UnknownRatioKind(name)`
///   A ratio-type string did not match any of R02, R01, R10, R010, R012,
///   R102. Only reachable at the [`RatioKind`](crate::ratios::RatioKind)
///   `FromStr` boundary; past it, the kind is a closed enum.
///
/// Invariants
/// ----------
/// - `OrderGap` is only emitted with `found != expected`, both within the
///   order span of the affected degree.
/// - Whenever a `RatioError` is returned, none of the three elementary
///   sequences has been produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RatioError {
    //------ Mode-set preconditions ------
    MissingDegree(u8),
    OrderGap { degree: u8, expected: i32, found: i32 },
    NonFiniteFrequency { degree: u8, order: i32, value: f64 },
    //------ Parse boundary ------
    UnknownRatioKind(String),
}

impl std::error::Error for RatioError {}

impl std::fmt::Display for RatioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatioError::MissingDegree(degree) => {
                write!(f, "No modes of harmonic degree {degree}; degrees 0, 1 and 2 are required.")
            }
            RatioError::OrderGap { degree, expected, found } => write!(
                f,
                "Degree {degree} has a gap in radial order: expected n = {expected}, found n = \
                 {found}. Orders must be contiguous within each degree."
            ),
            RatioError::NonFiniteFrequency { degree, order, value } => write!(
                f,
                "Non-finite frequency {value} for mode (l = {degree}, n = {order}). Frequencies \
                 must be finite."
            ),
            RatioError::UnknownRatioKind(name) => write!(
                f,
                "Unknown ratio type {name:?}. Expected one of R02, R01, R10, R010, R012, R102."
            ),
        }
    }
}
