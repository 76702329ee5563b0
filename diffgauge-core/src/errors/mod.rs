//! Error handling for diffgauge.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod extract_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use extract_error::ExtractError;
pub use pipeline_error::{PipelineError, PipelineResult};
