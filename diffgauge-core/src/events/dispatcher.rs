//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::EvalEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec —
/// effectively zero cost.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EvalEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn EvalEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn EvalEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    pub fn emit_record_normalized(&self, event: &RecordNormalizedEvent) {
        self.emit(|h| h.on_record_normalized(event));
    }

    pub fn emit_locator_unresolved(&self, event: &LocatorUnresolvedEvent) {
        self.emit(|h| h.on_locator_unresolved(event));
    }

    pub fn emit_unknown_action(&self, event: &UnknownActionEvent) {
        self.emit(|h| h.on_unknown_action(event));
    }

    pub fn emit_row_skipped(&self, event: &RowSkippedEvent) {
        self.emit(|h| h.on_row_skipped(event));
    }

    pub fn emit_reconciled(&self, event: &ReconciledEvent) {
        self.emit(|h| h.on_reconciled(event));
    }

    pub fn emit_hybrid_selected(&self, event: &HybridSelectedEvent) {
        self.emit(|h| h.on_hybrid_selected(event));
    }

    pub fn emit_aggregation_complete(&self, event: &AggregationCompleteEvent) {
        self.emit(|h| h.on_aggregation_complete(event));
    }

    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}
