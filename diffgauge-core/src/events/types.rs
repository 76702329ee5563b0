//! Event payload types for the evaluation pipeline.

use crate::types::RowKey;

/// Payload for `on_record_normalized`.
#[derive(Debug, Clone)]
pub struct RecordNormalizedEvent {
    pub key: RowKey,
    pub approach: String,
    pub total_lines: usize,
}

/// Payload for `on_locator_unresolved`.
#[derive(Debug, Clone)]
pub struct LocatorUnresolvedEvent {
    pub key: RowKey,
    pub approach: String,
    pub descriptor: String,
}

/// Payload for `on_unknown_action`.
#[derive(Debug, Clone)]
pub struct UnknownActionEvent {
    pub key: RowKey,
    pub approach: String,
    pub action: String,
}

/// Payload for `on_row_skipped`.
#[derive(Debug, Clone)]
pub struct RowSkippedEvent {
    pub key: RowKey,
    pub approach: Option<String>,
    pub reason: String,
}

/// Payload for `on_reconciled`.
#[derive(Debug, Clone)]
pub struct ReconciledEvent {
    pub key: RowKey,
    pub approach: String,
    pub misses: usize,
    pub hallucinations: usize,
}

/// Payload for `on_hybrid_selected`.
#[derive(Debug, Clone)]
pub struct HybridSelectedEvent {
    pub key: RowKey,
    pub winner: String,
}

/// Payload for `on_aggregation_complete`.
#[derive(Debug, Clone)]
pub struct AggregationCompleteEvent {
    pub approach: String,
    pub row_count: usize,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
}
