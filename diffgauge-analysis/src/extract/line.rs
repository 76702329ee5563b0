//! Extraction for the line-based candidate format.
//!
//! No mapping step: actions already carry explicit 1-based line numbers.
//! `Delete`/`Insert` use `line`, `Update`/`Move` use `oldLine`/`newLine`.

use diffgauge_core::types::LineRangeSpec;

use super::formats::LineDiffOutput;
use super::types::{ActionKind, ExtractedAction, Extraction};

/// Extract all usable actions from a candidate output.
///
/// Actions with an unknown kind land in `unknown_kinds`; actions missing
/// every line field for their kind contribute nothing and are dropped
/// silently (the tool emitted no locator at all).
pub fn extract(output: &LineDiffOutput) -> Extraction {
    let mut extraction = Extraction::default();

    for action in &output.actions {
        let Some(kind) = ActionKind::from_exact(&action.action) else {
            extraction.unknown_kinds.push(action.action.clone());
            continue;
        };

        let (source, dest) = match kind {
            ActionKind::Delete => (action.line.map(LineRangeSpec::Line), None),
            ActionKind::Insert => (None, action.line.map(LineRangeSpec::Line)),
            ActionKind::Update | ActionKind::Move => (
                action.old_line.map(LineRangeSpec::Line),
                action.new_line.map(LineRangeSpec::Line),
            ),
        };

        if source.is_none() && dest.is_none() {
            continue;
        }
        extraction.actions.push(ExtractedAction { kind, source, dest });
    }

    extraction
}
