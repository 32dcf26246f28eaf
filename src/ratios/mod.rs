//! ratios — frequency-ratio computation from oscillation modes.
//!
//! Purpose
//! -------
//! Collect the data model, validation and computation of asteroseismic
//! frequency ratios. Given a table of oscillation modes for harmonic degrees
//! 0, 1 and 2, this subtree produces the elementary ratio sequences r02, r01
//! and r10 and their order-interleaved combinations r010, r012 and r102.
//!
//! Key behaviors
//! -------------
//! - Model the input as an immutable [`ModeSet`] of [`Mode`] rows, with
//!   per-degree contiguous views enforcing the ratio preconditions.
//! - Compute the elementary sequences over the full radial-order overlap of
//!   the degrees via [`ElementaryRatios::compute`], and the combined
//!   sequences via [`CombinedRatios::combine`] with a stable
//!   first-then-second tie-break at shared orders.
//! - Dispatch any [`RatioKind`] through [`ratio_sequence`], the entry point
//!   the covariance estimator uses per realization.
//!
//! Invariants & assumptions
//! ------------------------
//! - Degrees 0, 1 and 2 must each be present with contiguous radial orders
//!   and finite frequencies; [`validate_mode_set`] checks exactly what the
//!   computation requires, and violations yield a [`RatioError`] with no
//!   partial output.
//! - All computations are pure functions of the mode set.
//!
//! Downstream usage
//! ----------------
//! - Typical callers import the surface as:
//!
//!   ```rust
//!   use astero_ratios::ratios::{Mode, ModeSet, RatioKind, ratio_sequence};
//!
//!   let set = ModeSet::new(vec![
//!       Mode::noise_free(0, 20, 2000.0),
//!       // ... degrees 1 and 2 ...
//!   # Mode::noise_free(0, 21, 2100.0), Mode::noise_free(0, 22, 2200.0),
//!   # Mode::noise_free(1, 20, 2045.0), Mode::noise_free(1, 21, 2145.0),
//!   # Mode::noise_free(1, 22, 2245.0), Mode::noise_free(2, 20, 2090.0),
//!   # Mode::noise_free(2, 21, 2190.0), Mode::noise_free(2, 22, 2290.0),
//!   ]);
//!   let r01 = ratio_sequence(&set, RatioKind::R01)?;
//!   assert_eq!(r01.records()[0].order, 21);
//!   # Ok::<(), astero_ratios::ratios::RatioError>(())
//!   ```
//! - The covariance subtree recomputes these sequences per Monte Carlo
//!   realization; see `crate::covariance`.

pub mod combined;
pub mod elementary;
pub mod errors;
pub mod modes;
pub mod records;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::combined::{CombinedRatios, ratio_sequence};
pub use self::elementary::ElementaryRatios;
pub use self::errors::{RatioError, RatioResult};
pub use self::modes::{DegreeModes, Mode, ModeSet};
pub use self::records::{RatioKind, RatioRecord, RatioSequence};
pub use self::validation::validate_mode_set;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use astero_ratios::ratios::prelude::*;
//
// to import the main ratio-computation surface in a single line.

pub mod prelude {
    pub use super::combined::{CombinedRatios, ratio_sequence};
    pub use super::elementary::ElementaryRatios;
    pub use super::errors::{RatioError, RatioResult};
    pub use super::modes::{Mode, ModeSet};
    pub use super::records::{RatioKind, RatioRecord, RatioSequence};
}
