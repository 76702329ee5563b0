//! Reconciliation — candidate change records scored against the baseline.
//!
//! A miss is a line the baseline reports as changed that the candidate does
//! not; a hallucination is a line the candidate reports that the baseline
//! does not. Both are computed over the source∪destination union and,
//! separately, restricted to each side.

use serde::Serialize;

use diffgauge_core::types::collections::FxHashSet;
use diffgauge_core::types::RowKey;

use crate::normalize::ChangeRecord;

/// Miss/hallucination counts for one candidate record against the baseline.
///
/// All counts are set-difference cardinalities and therefore non-negative
/// by construction. The side-partitioned counts are computed from the
/// one-sided sets, not by splitting the union, so a line contributed by
/// both sides is counted once per side it actually appears on.
#[derive(Debug, Clone, Serialize)]
pub struct ReconciliationRecord {
    pub key: RowKey,
    pub approach: String,
    /// Size of the baseline's changed-line union.
    pub baseline_count: usize,
    /// Size of the candidate's changed-line union.
    pub candidate_count: usize,
    /// Baseline-only lines in the union.
    pub misses: usize,
    /// Candidate-only lines in the union.
    pub hallucinations: usize,
    pub misses_src: usize,
    pub misses_dst: usize,
    pub hallucinations_src: usize,
    pub hallucinations_dst: usize,
}

impl ReconciliationRecord {
    /// Combined error used for hybrid selection.
    pub fn total_error(&self) -> usize {
        self.misses + self.hallucinations
    }

    /// True when the candidate's changed-line union equals the baseline's.
    pub fn is_exact(&self) -> bool {
        self.total_error() == 0
    }
}

/// Reconcile one candidate record against the baseline for the same file.
///
/// Pure function of the two records. A baseline with zero changed lines
/// reconciles normally — both counts may legitimately be zero.
pub fn reconcile(baseline: &ChangeRecord, candidate: &ChangeRecord) -> ReconciliationRecord {
    debug_assert_eq!(baseline.key, candidate.key, "reconcile requires one file identity");

    let baseline_src = baseline.source_changed();
    let baseline_dst = baseline.dest_changed();
    let candidate_src = candidate.source_changed();
    let candidate_dst = candidate.dest_changed();

    let baseline_lines = baseline.changed_lines();
    let candidate_lines = candidate.changed_lines();

    ReconciliationRecord {
        key: candidate.key.clone(),
        approach: candidate.approach.clone(),
        baseline_count: baseline_lines.len(),
        candidate_count: candidate_lines.len(),
        misses: difference_len(&baseline_lines, &candidate_lines),
        hallucinations: difference_len(&candidate_lines, &baseline_lines),
        misses_src: difference_len(&baseline_src, &candidate_src),
        misses_dst: difference_len(&baseline_dst, &candidate_dst),
        hallucinations_src: difference_len(&candidate_src, &baseline_src),
        hallucinations_dst: difference_len(&candidate_dst, &baseline_dst),
    }
}

fn difference_len(left: &FxHashSet<u32>, right: &FxHashSet<u32>) -> usize {
    left.difference(right).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{ActionKind, ExtractedAction};
    use diffgauge_core::types::LineRangeSpec;

    fn key() -> RowKey {
        RowKey::new("proj", "c1", "A.java")
    }

    fn record(approach: &str, src_lines: &[u32], dst_lines: &[u32]) -> ChangeRecord {
        let mut actions = Vec::new();
        for &line in src_lines {
            actions.push(ExtractedAction {
                kind: ActionKind::Delete,
                source: Some(LineRangeSpec::Line(line)),
                dest: None,
            });
        }
        for &line in dst_lines {
            actions.push(ExtractedAction {
                kind: ActionKind::Insert,
                source: None,
                dest: Some(LineRangeSpec::Line(line)),
            });
        }
        ChangeRecord::from_actions(key(), approach, &actions)
    }

    #[test]
    fn test_misses_and_hallucinations() {
        // Baseline union {1,2,3,5}, candidate union {2,3,4}:
        // misses {1,5}, hallucinations {4}.
        let baseline = record("treediff", &[1, 2, 3, 5], &[]);
        let candidate = record("graphdiff", &[2, 3, 4], &[]);

        let rec = reconcile(&baseline, &candidate);
        assert_eq!(rec.baseline_count, 4);
        assert_eq!(rec.candidate_count, 3);
        assert_eq!(rec.misses, 2);
        assert_eq!(rec.hallucinations, 1);
        assert_eq!(rec.total_error(), 3);
    }

    #[test]
    fn test_exact_match_has_zero_error() {
        let baseline = record("treediff", &[1, 2], &[10]);
        let candidate = record("graphdiff", &[1, 2], &[10]);

        let rec = reconcile(&baseline, &candidate);
        assert_eq!(rec.total_error(), 0);
        assert!(rec.is_exact());
    }

    #[test]
    fn test_side_partitions_use_one_sided_sets() {
        // Baseline: src {1,2}, dst {8}. Candidate: src {2}, dst {8,9}.
        let baseline = record("treediff", &[1, 2], &[8]);
        let candidate = record("graphdiff", &[2], &[8, 9]);

        let rec = reconcile(&baseline, &candidate);
        assert_eq!(rec.misses_src, 1); // line 1
        assert_eq!(rec.misses_dst, 0);
        assert_eq!(rec.hallucinations_src, 0);
        assert_eq!(rec.hallucinations_dst, 1); // line 9
    }

    #[test]
    fn test_partitions_sum_to_union_when_sides_disjoint() {
        // Source and destination line sets are disjoint here, so the
        // per-side counts add up exactly to the union counts.
        let baseline = record("treediff", &[1, 2], &[11, 12]);
        let candidate = record("graphdiff", &[2, 3], &[12, 13]);

        let rec = reconcile(&baseline, &candidate);
        assert_eq!(rec.misses_src + rec.misses_dst, rec.misses);
        assert_eq!(rec.hallucinations_src + rec.hallucinations_dst, rec.hallucinations);
    }

    #[test]
    fn test_zero_baseline_reconciles_normally() {
        let baseline = record("treediff", &[], &[]);
        let candidate = record("graphdiff", &[4], &[]);

        let rec = reconcile(&baseline, &candidate);
        assert_eq!(rec.baseline_count, 0);
        assert_eq!(rec.misses, 0);
        assert_eq!(rec.hallucinations, 1);
    }

    #[test]
    fn test_empty_both_sides_zero_error() {
        let baseline = record("treediff", &[], &[]);
        let candidate = record("graphdiff", &[], &[]);

        let rec = reconcile(&baseline, &candidate);
        assert_eq!(rec.total_error(), 0);
    }
}
