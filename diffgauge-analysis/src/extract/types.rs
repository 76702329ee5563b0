//! Canonical action shapes shared by both extraction paths.

use diffgauge_core::types::LineRangeSpec;

use crate::linemap::CharOffsetLineMapper;

/// Normalized action kind. Every tool-specific kind maps to exactly one of
/// these, or is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Delete,
    Insert,
    Update,
    Move,
}

impl ActionKind {
    /// Match an offset-format kind by prefix: the baseline tool emits
    /// variants like `delete-tree` and `insert-node`.
    pub fn from_prefix(kind: &str) -> Option<Self> {
        if kind.starts_with("delete") {
            Some(Self::Delete)
        } else if kind.starts_with("insert") {
            Some(Self::Insert)
        } else if kind.starts_with("update") {
            Some(Self::Update)
        } else if kind.starts_with("move") {
            Some(Self::Move)
        } else {
            None
        }
    }

    /// Match a line-format kind exactly: `Delete`, `Insert`, `Update`, `Move`.
    pub fn from_exact(kind: &str) -> Option<Self> {
        match kind {
            "Delete" => Some(Self::Delete),
            "Insert" => Some(Self::Insert),
            "Update" => Some(Self::Update),
            "Move" => Some(Self::Move),
            _ => None,
        }
    }
}

/// A range locator before resolution: either a `[start, end)` character
/// range needing the offset index, or an already-explicit line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeLocator {
    /// Character range, end-exclusive.
    Offset { start: usize, end: usize },
    /// Explicit 1-based line number.
    Line(u32),
}

impl RangeLocator {
    /// Resolve to a line range. Offset locators consult `mapper`; line
    /// locators pass through. Unresolvable offsets yield `None`.
    pub fn resolve(&self, mapper: &CharOffsetLineMapper) -> Option<LineRangeSpec> {
        match *self {
            Self::Offset { start, end } => mapper.span(start, end),
            Self::Line(n) => Some(LineRangeSpec::Line(n)),
        }
    }
}

/// One extracted action with resolved line ranges.
///
/// `source` covers the old file, `dest` the new file. Which sides are
/// populated depends on the kind: deletes are source-only, inserts
/// dest-only, updates and moves may carry both. A side whose locator could
/// not be resolved is simply absent.
#[derive(Debug, Clone, Copy)]
pub struct ExtractedAction {
    pub kind: ActionKind,
    pub source: Option<LineRangeSpec>,
    pub dest: Option<LineRangeSpec>,
}

/// Result of extracting one tool output: the usable actions plus what was
/// dropped on the way, for the event ledger.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub actions: Vec<ExtractedAction>,
    /// Descriptors whose range could not be parsed or mapped.
    pub unresolved: Vec<String>,
    /// Action kind strings nothing matched.
    pub unknown_kinds: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_kinds() {
        assert_eq!(ActionKind::from_prefix("delete-tree"), Some(ActionKind::Delete));
        assert_eq!(ActionKind::from_prefix("insert-node"), Some(ActionKind::Insert));
        assert_eq!(ActionKind::from_prefix("update-node"), Some(ActionKind::Update));
        assert_eq!(ActionKind::from_prefix("move-tree"), Some(ActionKind::Move));
        assert_eq!(ActionKind::from_prefix("rename"), None);
    }

    #[test]
    fn test_exact_kinds() {
        assert_eq!(ActionKind::from_exact("Delete"), Some(ActionKind::Delete));
        assert_eq!(ActionKind::from_exact("Move"), Some(ActionKind::Move));
        // Exact means exact — offset-format spellings do not match.
        assert_eq!(ActionKind::from_exact("delete-tree"), None);
        assert_eq!(ActionKind::from_exact("delete"), None);
    }

    #[test]
    fn test_line_locator_ignores_mapper() {
        let mapper = CharOffsetLineMapper::new("");
        let spec = RangeLocator::Line(12).resolve(&mapper);
        assert_eq!(spec, Some(diffgauge_core::types::LineRangeSpec::Line(12)));
    }
}
