//! Batch evaluation pipeline.
//!
//! Consumes per-row tool outputs plus the two source files being diffed,
//! normalizes everything into change records, reconciles each candidate
//! against the baseline, synthesizes hybrids, and keeps a skip ledger. No
//! row can abort the batch: the worst outcome for any single row is
//! exclusion from the aggregate with a recorded reason.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use diffgauge_core::config::EvalConfig;
use diffgauge_core::errors::PipelineResult;
use diffgauge_core::events::types::{
    AggregationCompleteEvent, HybridSelectedEvent, LocatorUnresolvedEvent, ReconciledEvent,
    RecordNormalizedEvent, RowSkippedEvent, UnknownActionEvent,
};
use diffgauge_core::events::{EvalEventHandler, EventDispatcher};
use diffgauge_core::types::RowKey;

use crate::extract::types::Extraction;
use crate::extract::{line, offset, LineDiffOutput, OffsetDiffOutput};
use crate::hybrid::{self, HybridRecord};
use crate::linemap::CharOffsetLineMapper;
use crate::metrics::{self, AggregateStats};
use crate::normalize::ChangeRecord;
use crate::reconcile::{self, ReconciliationRecord};

/// Baseline tool output for one row, with the two files it was run on.
/// The file contents feed the character-offset index.
#[derive(Debug, Clone)]
pub struct BaselineInput {
    pub output: OffsetDiffOutput,
    pub source_text: String,
    pub dest_text: String,
}

/// One candidate approach's output for a row. `None` means the external
/// tool failed or timed out upstream — the row is skipped for this
/// approach only.
#[derive(Debug, Clone)]
pub struct CandidateInput {
    pub approach: String,
    pub output: Option<LineDiffOutput>,
}

/// Everything the pipeline needs for one (project, commit, file) row.
#[derive(Debug, Clone)]
pub struct RowInput {
    pub key: RowKey,
    pub baseline: Option<BaselineInput>,
    pub candidates: Vec<CandidateInput>,
}

/// Why a row (or one approach of a row) was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// No baseline output — misses/hallucinations cannot be computed.
    MissingBaseline,
    /// No candidate output for this approach.
    MissingCandidate,
    /// Tool output present but not deserializable at the envelope level.
    MalformedOutput,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingBaseline => "missing baseline",
            Self::MissingCandidate => "missing candidate output",
            Self::MalformedOutput => "malformed tool output",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One skip ledger entry. `approach` is `None` when the whole row was
/// excluded (baseline missing), `Some` when only one approach was.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRow {
    pub key: RowKey,
    pub approach: Option<String>,
    pub reason: SkipReason,
}

/// Output of one batch run.
#[derive(Debug, Default)]
pub struct EvalBatch {
    /// Every change record built, baseline and candidates alike.
    pub changes: Vec<ChangeRecord>,
    /// One reconciliation per (row, candidate) that had both records.
    pub reconciliations: Vec<ReconciliationRecord>,
    /// One hybrid per row where exactly two candidates reconciled.
    pub hybrids: Vec<HybridRecord>,
    /// Rows and approaches excluded, with reasons.
    pub skips: Vec<SkippedRow>,
}

/// The batch evaluation pipeline. Single-threaded; rows are processed
/// independently and results do not depend on row order.
pub struct EvalPipeline {
    config: EvalConfig,
    dispatcher: EventDispatcher,
}

impl EvalPipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Create a pipeline with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EvalConfig::default())
    }

    /// Register an observability handler.
    pub fn register_handler(&mut self, handler: Arc<dyn EvalEventHandler>) {
        self.dispatcher.register(handler);
    }

    /// Run the batch over already-parsed inputs.
    pub fn run(&self, rows: &[RowInput]) -> EvalBatch {
        tracing::debug!(rows = rows.len(), "starting evaluation batch");
        let mut batch = EvalBatch::default();

        for row in rows {
            self.process_row(row, &mut batch);
        }

        tracing::debug!(
            reconciliations = batch.reconciliations.len(),
            hybrids = batch.hybrids.len(),
            skips = batch.skips.len(),
            "evaluation batch complete"
        );
        batch
    }

    /// Run the batch over raw tool stdout.
    ///
    /// Envelope-level deserialization failures are collected as non-fatal
    /// errors and the affected row/approach is skipped as malformed; the
    /// batch always completes.
    pub fn run_raw(&self, rows: &[RawRowInput]) -> PipelineResult<EvalBatch> {
        let mut result = PipelineResult::<EvalBatch>::default();
        let mut parsed = Vec::with_capacity(rows.len());

        for row in rows {
            let baseline = match &row.baseline {
                Some(raw) => match OffsetDiffOutput::from_json(&raw.json) {
                    Ok(output) => Some(BaselineInput {
                        output,
                        source_text: raw.source_text.clone(),
                        dest_text: raw.dest_text.clone(),
                    }),
                    Err(e) => {
                        self.skip(&mut result.data, row.key.clone(), None, SkipReason::MalformedOutput);
                        result.add_error(e.into());
                        continue;
                    }
                },
                None => None,
            };

            let mut candidates = Vec::with_capacity(row.candidates.len());
            for candidate in &row.candidates {
                let output = match &candidate.json {
                    Some(json) => match LineDiffOutput::from_json(json) {
                        Ok(output) => Some(output),
                        Err(e) => {
                            self.skip(
                                &mut result.data,
                                row.key.clone(),
                                Some(candidate.approach.clone()),
                                SkipReason::MalformedOutput,
                            );
                            result.add_error(e.into());
                            continue;
                        }
                    },
                    None => None,
                };
                candidates.push(CandidateInput {
                    approach: candidate.approach.clone(),
                    output,
                });
            }

            parsed.push(RowInput {
                key: row.key.clone(),
                baseline,
                candidates,
            });
        }

        let batch = self.run(&parsed);
        result.data.changes.extend(batch.changes);
        result.data.reconciliations.extend(batch.reconciliations);
        result.data.hybrids.extend(batch.hybrids);
        result.data.skips.extend(batch.skips);
        result
    }

    /// Aggregate the batch's change-count task per approach, hybrids
    /// included as their own approach.
    pub fn aggregate(&self, batch: &EvalBatch) -> Vec<AggregateStats> {
        let alpha = self.config.metrics.effective_alpha();

        let mut records = batch.reconciliations.clone();
        records.extend(batch.hybrids.iter().map(|h| h.record.clone()));

        let rows = metrics::count_rows(&records);
        let stats = metrics::summarize_all_counts(&rows, alpha);
        for summary in &stats {
            self.dispatcher.emit_aggregation_complete(&AggregationCompleteEvent {
                approach: summary.approach.clone(),
                row_count: summary.count,
            });
        }
        stats
    }

    fn process_row(&self, row: &RowInput, batch: &mut EvalBatch) {
        let Some(baseline_input) = &row.baseline else {
            self.skip(batch, row.key.clone(), None, SkipReason::MissingBaseline);
            return;
        };

        let baseline_label = self.config.pipeline.effective_baseline_approach();
        let src_map = CharOffsetLineMapper::new(&baseline_input.source_text);
        let dst_map = CharOffsetLineMapper::new(&baseline_input.dest_text);

        let extraction = offset::extract(&baseline_input.output, &src_map, &dst_map);
        self.report_extraction(&row.key, &baseline_label, &extraction);
        let baseline = ChangeRecord::from_actions(row.key.clone(), &baseline_label, &extraction.actions);
        self.dispatcher.emit_record_normalized(&RecordNormalizedEvent {
            key: row.key.clone(),
            approach: baseline_label.clone(),
            total_lines: baseline.total_lines(),
        });

        let mut row_reconciliations: Vec<ReconciliationRecord> = Vec::new();
        for candidate_input in &row.candidates {
            let Some(output) = &candidate_input.output else {
                self.skip(
                    batch,
                    row.key.clone(),
                    Some(candidate_input.approach.clone()),
                    SkipReason::MissingCandidate,
                );
                continue;
            };

            let extraction = line::extract(output);
            self.report_extraction(&row.key, &candidate_input.approach, &extraction);
            let candidate =
                ChangeRecord::from_actions(row.key.clone(), &candidate_input.approach, &extraction.actions);
            self.dispatcher.emit_record_normalized(&RecordNormalizedEvent {
                key: row.key.clone(),
                approach: candidate.approach.clone(),
                total_lines: candidate.total_lines(),
            });

            let record = reconcile::reconcile(&baseline, &candidate);
            self.dispatcher.emit_reconciled(&ReconciledEvent {
                key: record.key.clone(),
                approach: record.approach.clone(),
                misses: record.misses,
                hallucinations: record.hallucinations,
            });

            batch.changes.push(candidate);
            row_reconciliations.push(record);
        }

        batch.changes.push(baseline);

        // A hybrid exists only where both competing candidates are present;
        // the first-listed candidate wins ties.
        if row_reconciliations.len() == 2 {
            let hybrid_label = self.config.pipeline.effective_hybrid_approach();
            let hybrid = hybrid::select(&row_reconciliations[0], &row_reconciliations[1], &hybrid_label);
            self.dispatcher.emit_hybrid_selected(&HybridSelectedEvent {
                key: hybrid.record.key.clone(),
                winner: hybrid.record.approach.clone(),
            });
            batch.hybrids.push(hybrid);
        }

        batch.reconciliations.extend(row_reconciliations);
    }

    fn report_extraction(&self, key: &RowKey, approach: &str, extraction: &Extraction) {
        for descriptor in &extraction.unresolved {
            self.dispatcher.emit_locator_unresolved(&LocatorUnresolvedEvent {
                key: key.clone(),
                approach: approach.to_string(),
                descriptor: descriptor.clone(),
            });
        }
        for action in &extraction.unknown_kinds {
            self.dispatcher.emit_unknown_action(&UnknownActionEvent {
                key: key.clone(),
                approach: approach.to_string(),
                action: action.clone(),
            });
        }
    }

    fn skip(&self, batch: &mut EvalBatch, key: RowKey, approach: Option<String>, reason: SkipReason) {
        self.dispatcher.emit_row_skipped(&RowSkippedEvent {
            key: key.clone(),
            approach: approach.clone(),
            reason: reason.to_string(),
        });
        batch.skips.push(SkippedRow {
            key,
            approach,
            reason,
        });
    }
}

/// Raw-stdout form of `BaselineInput`.
#[derive(Debug, Clone)]
pub struct RawBaselineInput {
    pub json: String,
    pub source_text: String,
    pub dest_text: String,
}

/// Raw-stdout form of `CandidateInput`.
#[derive(Debug, Clone)]
pub struct RawCandidateInput {
    pub approach: String,
    pub json: Option<String>,
}

/// Raw-stdout form of `RowInput`, for callers holding tool output verbatim.
#[derive(Debug, Clone)]
pub struct RawRowInput {
    pub key: RowKey,
    pub baseline: Option<RawBaselineInput>,
    pub candidates: Vec<RawCandidateInput>,
}
