//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the evaluation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Approach label treated as ground truth. Default: "gumtree".
    pub baseline_approach: Option<String>,
    /// Label given to synthesized best-of-two records. Default: "hybrid".
    pub hybrid_approach: Option<String>,
}

impl PipelineConfig {
    /// Returns the effective baseline approach label, defaulting to "gumtree".
    pub fn effective_baseline_approach(&self) -> String {
        self.baseline_approach
            .clone()
            .unwrap_or_else(|| "gumtree".to_string())
    }

    /// Returns the effective hybrid approach label, defaulting to "hybrid".
    pub fn effective_hybrid_approach(&self) -> String {
        self.hybrid_approach
            .clone()
            .unwrap_or_else(|| "hybrid".to_string())
    }
}
