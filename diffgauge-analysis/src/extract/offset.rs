//! Extraction for the offset-based baseline format.
//!
//! Each action descriptor embeds a `[start,end)` character range. Deletes
//! resolve against the source file, inserts against the destination file.
//! Updates and moves resolve their source range directly and their
//! destination range through the match table keyed by the exact source
//! range; a missing match entry drops only the destination contribution.

use diffgauge_core::types::collections::FxHashMap;

use crate::linemap::CharOffsetLineMapper;

use super::formats::OffsetDiffOutput;
use super::types::{ActionKind, ExtractedAction, Extraction, RangeLocator};

/// Character range embedded in a descriptor, end-exclusive.
pub type CharRange = (usize, usize);

/// Pull the bracketed integer pair out of a tree descriptor.
///
/// `"identifier: print [19,24]"` → `Some((19, 24))`. Missing brackets,
/// non-numeric contents, or a missing comma yield `None`.
pub fn parse_char_range(descriptor: &str) -> Option<CharRange> {
    let open = descriptor.find('[')?;
    let close = descriptor[open..].find(']')? + open;
    let inner = &descriptor[open + 1..close];
    let (start_str, end_str) = inner.split_once(',')?;
    let start = start_str.trim().parse().ok()?;
    let end = end_str.trim().parse().ok()?;
    Some((start, end))
}

/// Source-range → destination-range correspondence from the tool's
/// `matches` array. Entries with unparseable descriptors on either side are
/// dropped at construction.
#[derive(Debug, Default)]
pub struct MatchTable {
    entries: FxHashMap<CharRange, CharRange>,
}

impl MatchTable {
    /// Build the table from a baseline output's match list.
    pub fn new(output: &OffsetDiffOutput) -> Self {
        let mut entries = FxHashMap::default();
        for entry in &output.matches {
            if let (Some(src), Some(dest)) =
                (parse_char_range(&entry.src), parse_char_range(&entry.dest))
            {
                entries.insert(src, dest);
            }
        }
        Self { entries }
    }

    /// Destination range matched to `src`, if any.
    pub fn dest_of(&self, src: CharRange) -> Option<CharRange> {
        self.entries.get(&src).copied()
    }

    /// Number of usable match entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extract all usable actions from a baseline output.
///
/// `src_map` indexes the old file, `dst_map` the new file. Actions whose
/// primary range cannot be parsed or mapped land in `unresolved`; unknown
/// kinds land in `unknown_kinds`; neither aborts extraction.
pub fn extract(
    output: &OffsetDiffOutput,
    src_map: &CharOffsetLineMapper,
    dst_map: &CharOffsetLineMapper,
) -> Extraction {
    let matches = MatchTable::new(output);
    let mut extraction = Extraction::default();

    for action in &output.actions {
        let Some(kind) = ActionKind::from_prefix(&action.action) else {
            extraction.unknown_kinds.push(action.action.clone());
            continue;
        };

        let Some(range) = parse_char_range(&action.tree) else {
            extraction.unresolved.push(action.tree.clone());
            continue;
        };
        let locator = RangeLocator::Offset {
            start: range.0,
            end: range.1,
        };

        let extracted = match kind {
            ActionKind::Delete => locator.resolve(src_map).map(|source| ExtractedAction {
                kind,
                source: Some(source),
                dest: None,
            }),
            ActionKind::Insert => locator.resolve(dst_map).map(|dest| ExtractedAction {
                kind,
                source: None,
                dest: Some(dest),
            }),
            ActionKind::Update | ActionKind::Move => {
                // The destination side resolves through the match table; a
                // miss there is not an error and drops only that side.
                let dest = matches.dest_of(range).and_then(|(start, end)| {
                    RangeLocator::Offset { start, end }.resolve(dst_map)
                });
                locator.resolve(src_map).map(|source| ExtractedAction {
                    kind,
                    source: Some(source),
                    dest,
                })
            }
        };

        match extracted {
            Some(a) => extraction.actions.push(a),
            None => extraction.unresolved.push(action.tree.clone()),
        }
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::formats::{MatchEntry, OffsetAction};

    #[test]
    fn test_parse_char_range_basic() {
        assert_eq!(parse_char_range("identifier: print [19,24]"), Some((19, 24)));
        assert_eq!(parse_char_range("[0,7]"), Some((0, 7)));
    }

    #[test]
    fn test_parse_char_range_malformed() {
        assert_eq!(parse_char_range("no brackets here"), None);
        assert_eq!(parse_char_range("half open [12,"), None);
        assert_eq!(parse_char_range("words [a,b]"), None);
        assert_eq!(parse_char_range("no comma [12]"), None);
    }

    fn output_with(actions: Vec<OffsetAction>, matches: Vec<MatchEntry>) -> OffsetDiffOutput {
        OffsetDiffOutput { actions, matches }
    }

    fn action(kind: &str, tree: &str) -> OffsetAction {
        OffsetAction {
            action: kind.to_string(),
            tree: tree.to_string(),
        }
    }

    #[test]
    fn test_delete_resolves_against_source() {
        // Source lines: "aaa" (0..4 incl newline), "bbb" (4..8).
        let src = CharOffsetLineMapper::new("aaa\nbbb\n");
        let dst = CharOffsetLineMapper::new("aaa\n");
        let output = output_with(vec![action("delete-tree", "stmt [4,7]")], vec![]);

        let extraction = extract(&output, &src, &dst);
        assert_eq!(extraction.actions.len(), 1);
        let a = extraction.actions[0];
        assert_eq!(a.kind, ActionKind::Delete);
        assert_eq!(a.source.unwrap().start(), 2);
        assert!(a.dest.is_none());
    }

    #[test]
    fn test_update_resolves_dest_via_match_table() {
        let src = CharOffsetLineMapper::new("aaa\nbbb\n");
        let dst = CharOffsetLineMapper::new("xxx\nyyy\nzzz\n");
        let output = output_with(
            vec![action("update-node", "identifier: a [0,3]")],
            vec![MatchEntry {
                src: "identifier: a [0,3]".to_string(),
                dest: "identifier: x [8,11]".to_string(),
            }],
        );

        let extraction = extract(&output, &src, &dst);
        let a = extraction.actions[0];
        assert_eq!(a.kind, ActionKind::Update);
        assert_eq!(a.source.unwrap().start(), 1);
        assert_eq!(a.dest.unwrap().start(), 3);
    }

    #[test]
    fn test_update_without_match_keeps_source_only() {
        let src = CharOffsetLineMapper::new("aaa\n");
        let dst = CharOffsetLineMapper::new("xxx\n");
        let output = output_with(vec![action("update-node", "identifier: a [0,3]")], vec![]);

        let extraction = extract(&output, &src, &dst);
        let a = extraction.actions[0];
        assert!(a.source.is_some());
        assert!(a.dest.is_none());
        assert!(extraction.unresolved.is_empty());
    }

    #[test]
    fn test_malformed_descriptor_is_unresolved_not_fatal() {
        let src = CharOffsetLineMapper::new("aaa\n");
        let dst = CharOffsetLineMapper::new("xxx\n");
        let output = output_with(
            vec![
                action("delete-node", "garbled descriptor"),
                action("delete-node", "stmt [0,3]"),
            ],
            vec![],
        );

        let extraction = extract(&output, &src, &dst);
        assert_eq!(extraction.actions.len(), 1);
        assert_eq!(extraction.unresolved, vec!["garbled descriptor".to_string()]);
    }

    #[test]
    fn test_out_of_range_offset_is_unresolved() {
        let src = CharOffsetLineMapper::new("aaa\n");
        let dst = CharOffsetLineMapper::new("xxx\n");
        let output = output_with(vec![action("delete-node", "stmt [90,99]")], vec![]);

        let extraction = extract(&output, &src, &dst);
        assert!(extraction.actions.is_empty());
        assert_eq!(extraction.unresolved.len(), 1);
    }

    #[test]
    fn test_unknown_kind_is_reported() {
        let src = CharOffsetLineMapper::new("aaa\n");
        let dst = CharOffsetLineMapper::new("xxx\n");
        let output = output_with(vec![action("rename-node", "stmt [0,3]")], vec![]);

        let extraction = extract(&output, &src, &dst);
        assert!(extraction.actions.is_empty());
        assert_eq!(extraction.unknown_kinds, vec!["rename-node".to_string()]);
    }
}
