//! ratios::combined — interleaved ratio sequences r010, r012 and r102.
//!
//! Purpose
//! -------
//! Merge pairs of elementary sequences into the combined sequences used when
//! a single ordered diagnostic series is wanted:
//!
//! - r010 = r01 ∪ r10, r012 = r01 ∪ r02, r102 = r10 ∪ r02.
//!
//! Key behaviors
//! -------------
//! - Each merge concatenates two order-sorted sequences and re-sorts by the
//!   explicit stable key (radial order, source rank), where the first-listed
//!   sequence has rank 0 and the second rank 1. Entries sharing an integer
//!   order therefore end up adjacent, first-listed first.
//! - No deduplication: the merged length is exactly the sum of the input
//!   lengths.
//!
//! Conventions
//! -----------
//! - The (order, rank) key replaces the historical trick of adding a 0.1
//!   offset to the second sequence's orders and rounding after the sort; the
//!   row order produced is identical, without the float round-trip.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the merged length, the tie-break adjacency and the
//!   non-decreasing order invariant, and exercise the kind dispatch of
//!   [`ratio_sequence`].

use crate::ratios::elementary::ElementaryRatios;
use crate::ratios::errors::RatioResult;
use crate::ratios::modes::ModeSet;
use crate::ratios::records::{RatioKind, RatioRecord, RatioSequence};

/// CombinedRatios — the three interleaved sequences of one mode set.
///
/// Invariants
/// ----------
/// - Each sequence is ordered by non-decreasing radial order; equal-order
///   rows are adjacent with the first-listed constituent first (r01 before
///   r10 in r010, r01 before r02 in r012, r10 before r02 in r102).
/// - `len()` of each sequence equals the sum of its constituents' lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRatios {
    pub r010: RatioSequence,
    pub r012: RatioSequence,
    pub r102: RatioSequence,
}

impl CombinedRatios {
    /// Merge a set of elementary sequences into the combined sequences.
    pub fn combine(elementary: &ElementaryRatios) -> Self {
        CombinedRatios {
            r010: merge_by_order(RatioKind::R010, &elementary.r01, &elementary.r10),
            r012: merge_by_order(RatioKind::R012, &elementary.r01, &elementary.r02),
            r102: merge_by_order(RatioKind::R102, &elementary.r10, &elementary.r02),
        }
    }

    /// The sequence of a combined kind, or `None` for elementary kinds.
    pub fn sequence(&self, kind: RatioKind) -> Option<&RatioSequence> {
        match kind {
            RatioKind::R010 => Some(&self.r010),
            RatioKind::R012 => Some(&self.r012),
            RatioKind::R102 => Some(&self.r102),
            RatioKind::R02 | RatioKind::R01 | RatioKind::R10 => None,
        }
    }
}

/// Compute the ratio sequence of any kind from a mode set.
///
/// Parameters
/// ----------
/// - `modes`: `&ModeSet`
///   Frequency table satisfying the elementary-ratio preconditions.
/// - `kind`: `RatioKind`
///   Requested ratio type; combined kinds trigger the corresponding merge.
///
/// Returns
/// -------
/// `RatioResult<RatioSequence>`
///   The requested sequence, or the precondition error from
///   [`ElementaryRatios::compute`].
///
/// Notes
/// -----
/// - This is the dispatch used by the covariance estimator for both the
///   baseline and every perturbed realization; elementary kinds skip the
///   merges entirely.
pub fn ratio_sequence(modes: &ModeSet, kind: RatioKind) -> RatioResult<RatioSequence> {
    let elementary = ElementaryRatios::compute(modes)?;
    Ok(match kind {
        RatioKind::R02 => elementary.r02,
        RatioKind::R01 => elementary.r01,
        RatioKind::R10 => elementary.r10,
        RatioKind::R010 => merge_by_order(RatioKind::R010, &elementary.r01, &elementary.r10),
        RatioKind::R012 => merge_by_order(RatioKind::R012, &elementary.r01, &elementary.r02),
        RatioKind::R102 => merge_by_order(RatioKind::R102, &elementary.r10, &elementary.r02),
    })
}

/// Stable merge of two order-sorted sequences by (order, source rank).
///
/// The first-listed sequence receives rank 0 and the second rank 1, so a
/// shared integer order sorts the first-listed entry immediately before the
/// second-listed one.
fn merge_by_order(kind: RatioKind, first: &RatioSequence, second: &RatioSequence) -> RatioSequence {
    let mut tagged: Vec<(i32, u8, RatioRecord)> = first
        .records()
        .iter()
        .map(|&r| (r.order, 0, r))
        .chain(second.records().iter().map(|&r| (r.order, 1, r)))
        .collect();
    tagged.sort_by_key(|&(order, rank, _)| (order, rank));
    RatioSequence::new(kind, tagged.into_iter().map(|(_, _, r)| r).collect())
}
