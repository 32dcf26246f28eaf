//! ratios::elementary — the elementary ratio sequences r02, r01 and r10.
//!
//! Purpose
//! -------
//! Evaluate the two-point and five-point finite-difference frequency ratios
//! from a validated mode set. With ν(ℓ,n) the frequency of the mode with
//! degree ℓ and radial order n, the formulas are:
//!
//! - r02(n) = [ν(0,n) − ν(2,n−1)] / [ν(1,n) − ν(1,n−1)]
//! - r01(n) = [ν(0,n−1) + 6ν(0,n) + ν(0,n+1) − 4(ν(1,n) + ν(1,n−1))]
//!   / [8(ν(1,n) − ν(1,n−1))]
//! - r10(n) = [ν(1,n−1) + 6ν(1,n) + ν(1,n+1) − 4(ν(0,n) + ν(0,n+1))]
//!   / [−8(ν(0,n+1) − ν(0,n))]
//!
//! Key behaviors
//! -------------
//! - Align the three degrees by radial order even when their order ranges
//!   start and end at different n: each sequence runs over the full overlap
//!   of orders for which every frequency its formula touches exists, and
//!   never indexes outside any degree's available range.
//! - Tag r02 and r01 with reference frequency ν(0,n), and r10 with ν(1,n).
//! - Return records ordered by strictly increasing n; an empty overlap
//!   yields an empty sequence rather than an error.
//!
//! Invariants & assumptions
//! ------------------------
//! - Preconditions (degrees 0–2 present, contiguous orders, finite
//!   frequencies) are enforced through `ModeSet::degree_view`; a violation
//!   fails the whole computation with no partial output.
//! - Computation is a pure function of the mode set: identical input yields
//!   identical sequences, and no state is retained between calls.
//!
//! Conventions
//! -----------
//! - The overlap bounds below are stated per ratio type as a max of lower
//!   bounds and a min of upper bounds over the degrees involved; this is the
//!   closed form of choosing the most interior starting sequence and the
//!   most restrictive ending sequence.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the overlap bounds on offset degree ranges, check the
//!   formula values against hand-computed references on a linear frequency
//!   grid, and verify purity and the no-partial-output contract.

use crate::ratios::errors::RatioResult;
use crate::ratios::modes::{DegreeModes, ModeSet};
use crate::ratios::records::{RatioKind, RatioRecord, RatioSequence};

/// ElementaryRatios — the three elementary sequences of one mode set.
///
/// Purpose
/// -------
/// Bundle the r02, r01 and r10 sequences produced from a single mode set, as
/// input to the combined-sequence merges and the covariance estimator.
///
/// Invariants
/// ----------
/// - All three sequences come from the same mode set, so their radial-order
///   tags are mutually consistent.
/// - Each sequence is ordered by strictly increasing radial order.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementaryRatios {
    pub r02: RatioSequence,
    pub r01: RatioSequence,
    pub r10: RatioSequence,
}

impl ElementaryRatios {
    /// Compute the elementary ratio sequences of a mode set.
    ///
    /// Parameters
    /// ----------
    /// - `modes`: `&ModeSet`
    ///   Frequency table containing at least degrees 0, 1 and 2, each with a
    ///   contiguous run of radial orders.
    ///
    /// Returns
    /// -------
    /// `RatioResult<ElementaryRatios>`
    ///   - `Ok` with all three sequences on success. Sequences may be empty
    ///     when the degree ranges barely overlap.
    ///   - `Err(RatioError)` when any precondition fails; no sequence is
    ///     produced in that case.
    ///
    /// Errors
    /// ------
    /// - `RatioError::MissingDegree`, `RatioError::OrderGap`,
    ///   `RatioError::NonFiniteFrequency` — surfaced by the per-degree views
    ///   before any ratio is evaluated.
    ///
    /// Notes
    /// -----
    /// - The order ranges per sequence are:
    ///   - r02: max(n₀ᵐⁱⁿ, n₁ᵐⁱⁿ+1, n₂ᵐⁱⁿ+1) ≤ n ≤ min(n₀ᵐᵃˣ, n₁ᵐᵃˣ, n₂ᵐᵃˣ+1)
    ///   - r01: max(n₀ᵐⁱⁿ+1, n₁ᵐⁱⁿ+1) ≤ n ≤ min(n₀ᵐᵃˣ−1, n₁ᵐᵃˣ)
    ///   - r10: max(n₀ᵐⁱⁿ, n₁ᵐⁱⁿ+1) ≤ n ≤ min(n₀ᵐᵃˣ, n₁ᵐᵃˣ) − 1
    ///
    ///   where nₗᵐⁱⁿ/nₗᵐᵃˣ are the first and last radial orders of degree ℓ.
    pub fn compute(modes: &ModeSet) -> RatioResult<Self> {
        let f0 = modes.degree_view(0)?;
        let f1 = modes.degree_view(1)?;
        let f2 = modes.degree_view(2)?;

        Ok(ElementaryRatios {
            r02: compute_r02(&f0, &f1, &f2),
            r01: compute_r01(&f0, &f1),
            r10: compute_r10(&f0, &f1),
        })
    }

    /// The sequence of an elementary kind, or `None` for combined kinds.
    pub fn sequence(&self, kind: RatioKind) -> Option<&RatioSequence> {
        match kind {
            RatioKind::R02 => Some(&self.r02),
            RatioKind::R01 => Some(&self.r01),
            RatioKind::R10 => Some(&self.r10),
            RatioKind::R010 | RatioKind::R012 | RatioKind::R102 => None,
        }
    }
}

/// Two-point ratio r02 over the order overlap of degrees 0, 1 and 2.
///
/// r02(n) touches ν(0,n), ν(2,n−1), ν(1,n) and ν(1,n−1), so n runs from
/// max(n₀ᵐⁱⁿ, n₁ᵐⁱⁿ+1, n₂ᵐⁱⁿ+1) to min(n₀ᵐᵃˣ, n₁ᵐᵃˣ, n₂ᵐᵃˣ+1).
fn compute_r02(f0: &DegreeModes<'_>, f1: &DegreeModes<'_>, f2: &DegreeModes<'_>) -> RatioSequence {
    let first = f0.first_order().max(f1.first_order() + 1).max(f2.first_order() + 1);
    let last = f0.last_order().min(f1.last_order()).min(f2.last_order() + 1);

    let records = (first..=last)
        .map(|n| {
            let value = (f0.freq(n) - f2.freq(n - 1)) / (f1.freq(n) - f1.freq(n - 1));
            RatioRecord::new(n, value, f0.freq(n))
        })
        .collect();
    RatioSequence::new(RatioKind::R02, records)
}

/// Five-point ratio r01 over the order overlap of degrees 0 and 1.
///
/// r01(n) touches ν(0,n−1..=n+1) and ν(1,n−1..=n), so n runs from
/// max(n₀ᵐⁱⁿ+1, n₁ᵐⁱⁿ+1) to min(n₀ᵐᵃˣ−1, n₁ᵐᵃˣ).
fn compute_r01(f0: &DegreeModes<'_>, f1: &DegreeModes<'_>) -> RatioSequence {
    let first = (f0.first_order() + 1).max(f1.first_order() + 1);
    let last = (f0.last_order() - 1).min(f1.last_order());

    let records = (first..=last)
        .map(|n| {
            let smooth =
                f0.freq(n - 1) + 6.0 * f0.freq(n) + f0.freq(n + 1) - 4.0 * (f1.freq(n) + f1.freq(n - 1));
            let value = smooth / (8.0 * (f1.freq(n) - f1.freq(n - 1)));
            RatioRecord::new(n, value, f0.freq(n))
        })
        .collect();
    RatioSequence::new(RatioKind::R01, records)
}

/// Five-point ratio r10 over the order overlap of degrees 0 and 1.
///
/// r10(n) touches ν(1,n−1..=n+1) and ν(0,n..=n+1), so n runs from
/// max(n₀ᵐⁱⁿ, n₁ᵐⁱⁿ+1) to min(n₀ᵐᵃˣ, n₁ᵐᵃˣ) − 1.
fn compute_r10(f0: &DegreeModes<'_>, f1: &DegreeModes<'_>) -> RatioSequence {
    let first = f0.first_order().max(f1.first_order() + 1);
    let last = f0.last_order().min(f1.last_order()) - 1;

    let records = (first..=last)
        .map(|n| {
            let smooth =
                f1.freq(n - 1) + 6.0 * f1.freq(n) + f1.freq(n + 1) - 4.0 * (f0.freq(n) + f0.freq(n + 1));
            let value = smooth / (-8.0 * (f0.freq(n + 1) - f0.freq(n)));
            RatioRecord::new(n, value, f1.freq(n))
        })
        .collect();
    RatioSequence::new(RatioKind::R10, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratios::errors::RatioError;
    use crate::ratios::modes::Mode;
    use approx::assert_abs_diff_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Overlap bounds for aligned and offset degree ranges, including the
    //   empty-overlap case.
    // - Formula values against hand-computed references on a linear
    //   frequency grid.
    // - Strictly increasing radial orders and reference-frequency tagging.
    // - Purity (identical output on repeated calls) and the no-partial-
    //   output contract on precondition failure.
    //
    // They intentionally DO NOT cover:
    // - Merging into combined sequences; that lives in the combined module.
    // - Statistical propagation of uncertainties; that lives in the
    //   covariance subtree.
    // -------------------------------------------------------------------------

    /// Linear frequency grid: ν(0,n) = 100n, ν(1,n) = 100n + 45,
    /// ν(2,n) = 100n + 90. On this grid r02(n) = 0.1 and
    /// r01(n) = r10(n) = 0.05 for every computable n.
    fn linear_set(orders0: (i32, i32), orders1: (i32, i32), orders2: (i32, i32)) -> ModeSet {
        let mut modes = Vec::new();
        for n in orders0.0..=orders0.1 {
            modes.push(Mode::noise_free(0, n, 100.0 * n as f64));
        }
        for n in orders1.0..=orders1.1 {
            modes.push(Mode::noise_free(1, n, 100.0 * n as f64 + 45.0));
        }
        for n in orders2.0..=orders2.1 {
            modes.push(Mode::noise_free(2, n, 100.0 * n as f64 + 90.0));
        }
        ModeSet::new(modes)
    }

    #[test]
    // Purpose
    // -------
    // Verify the overlap bounds when degree 2 starts one order below
    // degrees 0 and 1 (the common observational layout).
    //
    // Given
    // -----
    // - Degree 0: orders 10..=15; degree 1: 10..=15; degree 2: 9..=14.
    //
    // Expect
    // ------
    // - r02 spans orders 11..=15 (5 records), r01 spans 11..=14 (4) and
    //   r10 spans 11..=14 (4); all orders lie within [10, 15].
    fn compute_offset_degree_two_produces_expected_spans() {
        // Arrange
        let set = linear_set((10, 15), (10, 15), (9, 14));

        // Act
        let ratios = ElementaryRatios::compute(&set).expect("well-formed set should compute");

        // Assert
        let orders02: Vec<i32> = ratios.r02.records().iter().map(|r| r.order).collect();
        let orders01: Vec<i32> = ratios.r01.records().iter().map(|r| r.order).collect();
        let orders10: Vec<i32> = ratios.r10.records().iter().map(|r| r.order).collect();
        assert_eq!(orders02, vec![11, 12, 13, 14, 15]);
        assert_eq!(orders01, vec![11, 12, 13, 14]);
        assert_eq!(orders10, vec![11, 12, 13, 14]);
        for n in orders02.iter().chain(&orders01).chain(&orders10) {
            assert!((10..=15).contains(n), "order {n} escaped the input range");
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the three formulas against hand-computed references on the
    // linear grid, including the reference-frequency tags.
    //
    // Given
    // -----
    // - All degrees with orders 10..=14 on the linear grid, where
    //   r02(n) = (100n − (100(n−1) + 90)) / 100 = 0.1,
    //   r01(n) = 40 / 800 = 0.05 and r10(n) = −40 / −800 = 0.05.
    //
    // Expect
    // ------
    // - Every r02 value is 0.1; every r01 and r10 value is 0.05.
    // - r02/r01 reference ν(0,n); r10 references ν(1,n).
    fn compute_linear_grid_matches_hand_computed_values() {
        // Arrange
        let set = linear_set((10, 14), (10, 14), (10, 14));

        // Act
        let ratios = ElementaryRatios::compute(&set).expect("well-formed set should compute");

        // Assert
        assert!(!ratios.r02.is_empty() && !ratios.r01.is_empty() && !ratios.r10.is_empty());
        for record in ratios.r02.records() {
            assert_abs_diff_eq!(record.value, 0.1, epsilon = 1e-12);
            assert_abs_diff_eq!(record.frequency, 100.0 * record.order as f64, epsilon = 1e-12);
        }
        for record in ratios.r01.records() {
            assert_abs_diff_eq!(record.value, 0.05, epsilon = 1e-12);
            assert_abs_diff_eq!(record.frequency, 100.0 * record.order as f64, epsilon = 1e-12);
        }
        for record in ratios.r10.records() {
            assert_abs_diff_eq!(record.value, 0.05, epsilon = 1e-12);
            assert_abs_diff_eq!(
                record.frequency,
                100.0 * record.order as f64 + 45.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that every elementary sequence carries strictly increasing
    // radial orders.
    //
    // Given
    // -----
    // - Degree ranges with mixed offsets: 0: 9..=15, 1: 10..=14, 2: 8..=13.
    //
    // Expect
    // ------
    // - Orders in each of r02, r01, r10 increase strictly.
    fn compute_orders_strictly_increase() {
        // Arrange
        let set = linear_set((9, 15), (10, 14), (8, 13));

        // Act
        let ratios = ElementaryRatios::compute(&set).expect("well-formed set should compute");

        // Assert
        for seq in [&ratios.r02, &ratios.r01, &ratios.r10] {
            for pair in seq.records().windows(2) {
                assert!(
                    pair[0].order < pair[1].order,
                    "{:?} orders should strictly increase: {} then {}",
                    seq.kind(),
                    pair[0].order,
                    pair[1].order
                );
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a degree-2 range too far below the others yields an
    // empty r02 without failing r01 and r10.
    //
    // Given
    // -----
    // - Degrees 0 and 1 with orders 10..=12; degree 2 with orders 5..=6.
    //
    // Expect
    // ------
    // - r02 is empty; r01 and r10 are non-empty.
    fn compute_empty_overlap_yields_empty_r02_only() {
        // Arrange
        let set = linear_set((10, 12), (10, 12), (5, 6));

        // Act
        let ratios = ElementaryRatios::compute(&set).expect("contiguous set should compute");

        // Assert
        assert!(ratios.r02.is_empty(), "r02 should be empty for a disjoint degree-2 range");
        assert!(!ratios.r01.is_empty());
        assert!(!ratios.r10.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Verify purity: computing twice on the same mode set yields identical
    // sequences.
    //
    // Given
    // -----
    // - A fixed mode set with offset degree ranges.
    //
    // Expect
    // ------
    // - Both computations compare equal.
    fn compute_is_idempotent_on_identical_input() {
        // Arrange
        let set = linear_set((10, 15), (10, 15), (9, 14));

        // Act
        let first = ElementaryRatios::compute(&set).expect("first computation should succeed");
        let second = ElementaryRatios::compute(&set).expect("second computation should succeed");

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a gap in degree 1 fails the whole computation: no sequence is
    // produced, not even the r02 that only needs two degree-1 neighbors.
    //
    // Given
    // -----
    // - A set whose degree-1 modes skip order 12.
    //
    // Expect
    // ------
    // - `compute` returns `Err(OrderGap { degree: 1, .. })`.
    fn compute_gap_in_degree_one_fails_all_outputs() {
        // Arrange
        let mut modes: Vec<Mode> = linear_set((10, 15), (10, 15), (10, 15))
            .modes()
            .iter()
            .copied()
            .filter(|m| !(m.degree == 1 && m.order == 12))
            .collect();
        modes.shrink_to_fit();
        let set = ModeSet::new(modes);

        // Act
        let result = ElementaryRatios::compute(&set);

        // Assert
        assert!(
            matches!(result, Err(RatioError::OrderGap { degree: 1, .. })),
            "expected OrderGap in degree 1, got {result:?}"
        );
    }
}
