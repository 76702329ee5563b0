//! Configuration for the evaluation engine.

pub mod eval_config;
pub mod metrics_config;
pub mod pipeline_config;

pub use eval_config::EvalConfig;
pub use metrics_config::MetricsConfig;
pub use pipeline_config::PipelineConfig;
