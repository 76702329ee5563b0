//! Event system — the structured observability collaborator injected into
//! the pipeline, decoupled from reconciliation/metrics logic.

pub mod dispatcher;
pub mod handler;
pub mod tracing_handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::EvalEventHandler;
pub use tracing_handler::TracingEventHandler;
