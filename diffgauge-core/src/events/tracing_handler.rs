//! Bridge from pipeline events onto `tracing`.
//!
//! Replaces the ad hoc print-based logging the evaluation scripts would
//! otherwise grow: register this handler and every pipeline event becomes a
//! structured span-free log record.

use super::handler::EvalEventHandler;
use super::types::*;

/// Event handler that forwards everything to `tracing`.
pub struct TracingEventHandler;

impl EvalEventHandler for TracingEventHandler {
    fn on_record_normalized(&self, event: &RecordNormalizedEvent) {
        tracing::debug!(
            key = %event.key,
            approach = %event.approach,
            total_lines = event.total_lines,
            "change record normalized"
        );
    }

    fn on_locator_unresolved(&self, event: &LocatorUnresolvedEvent) {
        tracing::warn!(
            key = %event.key,
            approach = %event.approach,
            descriptor = %event.descriptor,
            "locator unresolved — action dropped"
        );
    }

    fn on_unknown_action(&self, event: &UnknownActionEvent) {
        tracing::warn!(
            key = %event.key,
            approach = %event.approach,
            action = %event.action,
            "unknown action kind ignored"
        );
    }

    fn on_row_skipped(&self, event: &RowSkippedEvent) {
        tracing::info!(
            key = %event.key,
            approach = event.approach.as_deref().unwrap_or("<all>"),
            reason = %event.reason,
            "row skipped"
        );
    }

    fn on_reconciled(&self, event: &ReconciledEvent) {
        tracing::debug!(
            key = %event.key,
            approach = %event.approach,
            misses = event.misses,
            hallucinations = event.hallucinations,
            "reconciled against baseline"
        );
    }

    fn on_hybrid_selected(&self, event: &HybridSelectedEvent) {
        tracing::debug!(key = %event.key, winner = %event.winner, "hybrid selected");
    }

    fn on_aggregation_complete(&self, event: &AggregationCompleteEvent) {
        tracing::info!(
            approach = %event.approach,
            row_count = event.row_count,
            "aggregation complete"
        );
    }

    fn on_error(&self, event: &ErrorEvent) {
        tracing::error!(message = %event.message, "pipeline error");
    }
}
