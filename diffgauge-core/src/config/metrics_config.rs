//! Metrics configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the metrics subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MetricsConfig {
    /// Smoothing constant for clipped relative error. Default: 5.0.
    pub alpha: Option<f64>,
    /// Percentiles reported for absolute-error distributions. Default: [80, 90].
    #[serde(default)]
    pub percentiles: Vec<u8>,
}

impl MetricsConfig {
    /// Returns the effective smoothing constant, defaulting to 5.0.
    pub fn effective_alpha(&self) -> f64 {
        self.alpha.unwrap_or(5.0)
    }

    /// Returns the effective reporting percentiles, defaulting to [80, 90].
    pub fn effective_percentiles(&self) -> Vec<u8> {
        if self.percentiles.is_empty() {
            vec![80, 90]
        } else {
            self.percentiles.clone()
        }
    }
}
