//! Top-level evaluation configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{MetricsConfig, PipelineConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Loaded from `diffgauge.toml` in the evaluation root when present,
/// compiled defaults otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EvalConfig {
    pub metrics: MetricsConfig,
    pub pipeline: PipelineConfig,
}

impl EvalConfig {
    /// Load configuration from `diffgauge.toml` in `root`.
    ///
    /// A missing file is not an error — compiled defaults apply. An
    /// unreadable or invalid file is.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join("diffgauge.toml");
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the final config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let alpha = self.metrics.effective_alpha();
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "metrics.alpha".to_string(),
                message: format!("must be a positive finite number, got {alpha}"),
            });
        }
        for p in self.metrics.effective_percentiles() {
            if p > 100 {
                return Err(ConfigError::InvalidValue {
                    field: "metrics.percentiles".to_string(),
                    message: format!("percentile {p} out of range 0..=100"),
                });
            }
        }
        Ok(())
    }
}
