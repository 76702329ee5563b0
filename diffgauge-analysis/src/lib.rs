//! Diff-reconciliation and accuracy-metrics pipeline.
//!
//! Evaluates structural code-diff algorithms against a trusted baseline
//! diff tool. Heterogeneous tool outputs (character-offset based and line
//! based) are normalized into canonical per-file changed-line sets, each
//! candidate is reconciled against the baseline to count misses and
//! hallucinations, a best-of-two hybrid is synthesized per file, and
//! corpus-wide accuracy statistics are aggregated per approach.

pub mod extract;
pub mod hybrid;
pub mod linemap;
pub mod metrics;
pub mod normalize;
pub mod pipeline;
pub mod reconcile;
pub mod report;

pub use hybrid::HybridRecord;
pub use linemap::CharOffsetLineMapper;
pub use normalize::ChangeRecord;
pub use pipeline::EvalPipeline;
pub use reconcile::ReconciliationRecord;
