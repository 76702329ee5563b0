//! Hybrid selection — per-file best-of-two, never a blend.
//!
//! The hybrid approach is synthesized by choosing, for each file, whichever
//! of two competing candidates scored the lower total error. The chosen
//! record is copied verbatim apart from its approach label; no partial line
//! sets are ever mixed across candidates.

use serde::Serialize;

use crate::metrics::CountRow;
use crate::reconcile::ReconciliationRecord;

/// A reconciliation record relabeled as the synthesized hybrid approach.
#[derive(Debug, Clone, Serialize)]
pub struct HybridRecord {
    pub record: ReconciliationRecord,
}

/// Pick the lower-total-error record of the two; ties favor `first`.
///
/// Both inputs must describe the same file. The result is one of the two
/// inputs verbatim, with `approach` replaced by `hybrid_label`.
pub fn select(
    first: &ReconciliationRecord,
    second: &ReconciliationRecord,
    hybrid_label: &str,
) -> HybridRecord {
    debug_assert_eq!(first.key, second.key, "hybrid selection requires one file identity");

    let winner = if first.total_error() <= second.total_error() {
        first
    } else {
        second
    };

    let mut record = winner.clone();
    record.approach = hybrid_label.to_string();
    HybridRecord { record }
}

/// Count-task variant: per row, keep the prediction with the lower absolute
/// error; ties favor `first`.
pub fn select_count(first: &CountRow, second: &CountRow, hybrid_label: &str) -> CountRow {
    debug_assert_eq!(first.key, second.key, "hybrid selection requires one file identity");

    let winner = if first.abs_error() <= second.abs_error() {
        first
    } else {
        second
    };

    CountRow {
        key: winner.key.clone(),
        approach: hybrid_label.to_string(),
        ground_truth: winner.ground_truth,
        predicted: winner.predicted,
    }
}
