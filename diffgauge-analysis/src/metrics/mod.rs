//! Corpus-wide accuracy statistics, computed per approach.

pub mod aggregate;
pub mod stats;

pub use aggregate::{
    count_rows, merge_counts, summarize_all_counts, summarize_counts, summarize_reconciliations,
    AggregateStats, CountRow, DistributionStats, ReconciliationSummary, SideMeans,
};
pub use stats::percentile_curve;
