//! Serde view of the two tool output formats.
//!
//! Both formats are consumed as already-parsed structured data; the
//! `from_json` helpers exist for callers holding raw tool stdout and fail
//! only at the envelope level.

use serde::Deserialize;

use diffgauge_core::errors::ExtractError;

/// Output of the offset-based baseline tool.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OffsetDiffOutput {
    #[serde(default)]
    pub actions: Vec<OffsetAction>,
    #[serde(default)]
    pub matches: Vec<MatchEntry>,
}

/// One baseline action: a kind string and a free-text tree descriptor with
/// an embedded `[start,end)` character range, e.g. `"identifier: print [19,24]"`.
#[derive(Debug, Clone, Deserialize)]
pub struct OffsetAction {
    pub action: String,
    pub tree: String,
}

/// One matched source↔destination tree pair, both sides in descriptor form.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchEntry {
    pub src: String,
    pub dest: String,
}

/// Output of the line-based candidate tool.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LineDiffOutput {
    #[serde(default)]
    pub actions: Vec<LineAction>,
}

/// One candidate action with explicit 1-based line numbers.
///
/// `Delete` and `Insert` carry `line`; `Update` and `Move` carry
/// `oldLine`/`newLine`. Absent fields drop that side's contribution.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAction {
    pub action: String,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub old_line: Option<u32>,
    #[serde(default)]
    pub new_line: Option<u32>,
}

impl OffsetDiffOutput {
    /// Parse raw baseline tool stdout.
    pub fn from_json(raw: &str) -> Result<Self, ExtractError> {
        serde_json::from_str(raw).map_err(|e| ExtractError::invalid_output("baseline", e.to_string()))
    }
}

impl LineDiffOutput {
    /// Parse raw candidate tool stdout.
    pub fn from_json(raw: &str) -> Result<Self, ExtractError> {
        serde_json::from_str(raw).map_err(|e| ExtractError::invalid_output("candidate", e.to_string()))
    }
}
