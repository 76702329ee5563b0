//! Extraction errors.
//!
//! Only envelope-level failures are errors: a tool output that is not valid
//! JSON at all. Malformed individual locators (missing brackets, non-numeric
//! ranges, absent match entries) resolve to `None` at the call site and drop
//! a single action, never the record.

/// Errors that can occur while consuming raw tool output.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Invalid {tool} output: {message}")]
    InvalidOutput { tool: String, message: String },
}

impl ExtractError {
    /// Envelope-level deserialization failure for the named tool.
    pub fn invalid_output(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOutput {
            tool: tool.into(),
            message: message.into(),
        }
    }
}
