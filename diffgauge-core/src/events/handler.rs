//! Handler trait for pipeline events. All methods default to no-ops so
//! handlers implement only what they observe.

use super::types::*;

/// Receiver of evaluation pipeline events.
///
/// Implementations must be `Send + Sync`; the dispatcher shares them via
/// `Arc`. Handlers should be cheap — dispatch is synchronous.
pub trait EvalEventHandler: Send + Sync {
    /// A tool output was normalized into a change record.
    fn on_record_normalized(&self, event: &RecordNormalizedEvent) {
        let _ = event;
    }

    /// An action's locator could not be resolved and was dropped.
    fn on_locator_unresolved(&self, event: &LocatorUnresolvedEvent) {
        let _ = event;
    }

    /// An action carried an unrecognized kind and was ignored.
    fn on_unknown_action(&self, event: &UnknownActionEvent) {
        let _ = event;
    }

    /// A row was excluded from reconciliation, with a reason.
    fn on_row_skipped(&self, event: &RowSkippedEvent) {
        let _ = event;
    }

    /// A candidate record was reconciled against the baseline.
    fn on_reconciled(&self, event: &ReconciledEvent) {
        let _ = event;
    }

    /// A hybrid record was synthesized for a file.
    fn on_hybrid_selected(&self, event: &HybridSelectedEvent) {
        let _ = event;
    }

    /// Corpus aggregation finished for one approach.
    fn on_aggregation_complete(&self, event: &AggregationCompleteEvent) {
        let _ = event;
    }

    /// A non-fatal error was recorded.
    fn on_error(&self, event: &ErrorEvent) {
        let _ = event;
    }
}
