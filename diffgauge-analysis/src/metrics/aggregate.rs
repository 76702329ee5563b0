//! Per-approach aggregation over evaluation corpora.
//!
//! Two corpora exist: count rows for the change-count regression task, and
//! reconciliation records for the line-level task. Both aggregate per
//! approach only, tolerate empty input, and are invariant under row order.

use serde::Serialize;

use diffgauge_core::types::collections::FxHashMap;
use diffgauge_core::types::RowKey;

use crate::reconcile::ReconciliationRecord;

use super::stats;

/// One change-count regression row: ground-truth and predicted totals for
/// one (file, approach).
#[derive(Debug, Clone, Serialize)]
pub struct CountRow {
    pub key: RowKey,
    pub approach: String,
    pub ground_truth: u64,
    pub predicted: u64,
}

impl CountRow {
    /// Absolute error `|predicted − ground_truth|`.
    pub fn abs_error(&self) -> u64 {
        self.predicted.abs_diff(self.ground_truth)
    }

    /// Clipped relative error `|predicted − ground_truth| / max(ground_truth, α)`.
    ///
    /// The clamp keeps small or zero ground truths from blowing the ratio up.
    pub fn clipped_rel_error(&self, alpha: f64) -> f64 {
        self.abs_error() as f64 / (self.ground_truth as f64).max(alpha)
    }
}

/// Summary statistics for one approach over a count-row corpus.
///
/// `None` means "not available": the corpus was empty or the statistic is
/// undefined (zero variance for Pearson). Never NaN.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateStats {
    pub approach: String,
    pub count: usize,
    pub mean_abs_error: Option<f64>,
    pub median_abs_error: Option<f64>,
    pub p80_abs_error: Option<f64>,
    pub p90_abs_error: Option<f64>,
    pub mean_rel_error: Option<f64>,
    pub macro_agg_error: Option<f64>,
    pub pearson_corr: Option<f64>,
}

/// Summarize one approach's rows. Rows carrying a different approach label
/// are ignored, so a mixed corpus can be passed directly.
pub fn summarize_counts(rows: &[CountRow], approach: &str, alpha: f64) -> AggregateStats {
    let rows: Vec<&CountRow> = rows.iter().filter(|r| r.approach == approach).collect();

    if rows.is_empty() {
        return AggregateStats {
            approach: approach.to_string(),
            count: 0,
            mean_abs_error: None,
            median_abs_error: None,
            p80_abs_error: None,
            p90_abs_error: None,
            mean_rel_error: None,
            macro_agg_error: None,
            pearson_corr: None,
        };
    }

    let mut abs_errors: Vec<f64> = rows.iter().map(|r| r.abs_error() as f64).collect();
    abs_errors.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rel_errors: Vec<f64> = rows.iter().map(|r| r.clipped_rel_error(alpha)).collect();

    let predicted: Vec<f64> = rows.iter().map(|r| r.predicted as f64).collect();
    let ground_truth: Vec<f64> = rows.iter().map(|r| r.ground_truth as f64).collect();

    AggregateStats {
        approach: approach.to_string(),
        count: rows.len(),
        mean_abs_error: stats::mean(&abs_errors),
        median_abs_error: Some(stats::percentile(&abs_errors, 50.0)),
        p80_abs_error: Some(stats::percentile(&abs_errors, 80.0)),
        p90_abs_error: Some(stats::percentile(&abs_errors, 90.0)),
        mean_rel_error: stats::mean(&rel_errors),
        macro_agg_error: Some(macro_aggregate_error(&rows)),
        pearson_corr: stats::pearson(&predicted, &ground_truth),
    }
}

/// Summarize every approach present in the corpus, in label order.
pub fn summarize_all_counts(rows: &[CountRow], alpha: f64) -> Vec<AggregateStats> {
    let mut approaches: Vec<&str> = rows.iter().map(|r| r.approach.as_str()).collect();
    approaches.sort_unstable();
    approaches.dedup();

    approaches
        .into_iter()
        .map(|approach| summarize_counts(rows, approach, alpha))
        .collect()
}

/// Corpus-wide error ratio `Σ abs_error / Σ ground_truth`.
///
/// Zero-ground-truth sentinel: 0.0 when the predictions also sum to zero,
/// 1.0 (total disagreement) otherwise. Bounded and NaN-free.
fn macro_aggregate_error(rows: &[&CountRow]) -> f64 {
    let sum_err: u64 = rows.iter().map(|r| r.abs_error()).sum();
    let sum_gt: u64 = rows.iter().map(|r| r.ground_truth).sum();

    if sum_gt == 0 {
        let sum_pred: u64 = rows.iter().map(|r| r.predicted).sum();
        if sum_pred == 0 {
            0.0
        } else {
            1.0
        }
    } else {
        sum_err as f64 / sum_gt as f64
    }
}

/// Build count rows from reconciliation records: the baseline's changed-line
/// union is the ground truth, the candidate's is the prediction.
pub fn count_rows(records: &[ReconciliationRecord]) -> Vec<CountRow> {
    records
        .iter()
        .map(|r| CountRow {
            key: r.key.clone(),
            approach: r.approach.clone(),
            ground_truth: r.baseline_count as u64,
            predicted: r.candidate_count as u64,
        })
        .collect()
}

/// Left-join candidate totals onto baseline totals by row key.
///
/// Every baseline row yields one count row; a file the candidate produced
/// no output for predicts 0 (the tool saw no changes it could report).
pub fn merge_counts(
    baseline: &[(RowKey, u64)],
    candidate: &[(RowKey, u64)],
    approach: &str,
) -> Vec<CountRow> {
    let candidate_by_key: FxHashMap<&RowKey, u64> =
        candidate.iter().map(|(k, n)| (k, *n)).collect();

    baseline
        .iter()
        .map(|(key, ground_truth)| CountRow {
            key: key.clone(),
            approach: approach.to_string(),
            ground_truth: *ground_truth,
            predicted: candidate_by_key.get(key).copied().unwrap_or(0),
        })
        .collect()
}

/// Distributional summary of one non-empty count series.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionStats {
    pub mean: f64,
    pub total: u64,
    pub median: f64,
    pub p80: f64,
    pub p90: f64,
}

fn distribution(values: &mut Vec<f64>) -> Option<DistributionStats> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Some(DistributionStats {
        mean: stats::mean(values)?,
        total: values.iter().sum::<f64>() as u64,
        median: stats::percentile(values, 50.0),
        p80: stats::percentile(values, 80.0),
        p90: stats::percentile(values, 90.0),
    })
}

/// Mean side-partitioned miss/hallucination counts.
#[derive(Debug, Clone, Serialize)]
pub struct SideMeans {
    pub misses_src: f64,
    pub misses_dst: f64,
    pub hallucinations_src: f64,
    pub hallucinations_dst: f64,
}

/// Summary of one approach's reconciliation records.
#[derive(Debug, Clone, Serialize)]
pub struct ReconciliationSummary {
    pub approach: String,
    pub count: usize,
    pub misses: Option<DistributionStats>,
    pub hallucinations: Option<DistributionStats>,
    pub side_means: Option<SideMeans>,
}

/// Summarize one approach's reconciliation records. Records for other
/// approaches are ignored; an empty selection yields count 0 and no stats.
pub fn summarize_reconciliations(
    records: &[ReconciliationRecord],
    approach: &str,
) -> ReconciliationSummary {
    let records: Vec<&ReconciliationRecord> =
        records.iter().filter(|r| r.approach == approach).collect();

    let mut misses: Vec<f64> = records.iter().map(|r| r.misses as f64).collect();
    let mut hallucinations: Vec<f64> = records.iter().map(|r| r.hallucinations as f64).collect();

    let side_means = if records.is_empty() {
        None
    } else {
        let n = records.len() as f64;
        Some(SideMeans {
            misses_src: records.iter().map(|r| r.misses_src as f64).sum::<f64>() / n,
            misses_dst: records.iter().map(|r| r.misses_dst as f64).sum::<f64>() / n,
            hallucinations_src: records.iter().map(|r| r.hallucinations_src as f64).sum::<f64>()
                / n,
            hallucinations_dst: records.iter().map(|r| r.hallucinations_dst as f64).sum::<f64>()
                / n,
        })
    };

    ReconciliationSummary {
        approach: approach.to_string(),
        count: records.len(),
        misses: distribution(&mut misses),
        hallucinations: distribution(&mut hallucinations),
        side_means,
    }
}
