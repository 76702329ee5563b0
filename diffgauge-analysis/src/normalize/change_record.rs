//! Canonical per-file change representation.

use serde::Serialize;

use diffgauge_core::types::collections::FxHashSet;
use diffgauge_core::types::RowKey;

use crate::extract::{ActionKind, ExtractedAction};

/// Six sorted, deduplicated changed-line sets for one (file, approach).
///
/// Ranges are expanded to individual lines before storage; each set holds
/// no duplicates and is sorted ascending for deterministic reporting.
/// Built once from one tool invocation's output, immutable thereafter.
///
/// Approaches that do not model moves simply have empty move sets — the
/// union accessors below then degrade to the remaining categories, so
/// downstream code never special-cases the approach.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeRecord {
    pub key: RowKey,
    pub approach: String,
    pub deleted_src: Vec<u32>,
    pub inserted_dst: Vec<u32>,
    pub updated_src: Vec<u32>,
    pub updated_dst: Vec<u32>,
    pub moved_src: Vec<u32>,
    pub moved_dst: Vec<u32>,
}

impl ChangeRecord {
    /// Assemble a record from extracted actions.
    ///
    /// Routing: delete → `deleted_src`; insert → `inserted_dst`; update →
    /// `updated_src` + `updated_dst`; move → `moved_src` + `moved_dst`.
    /// Sides whose locator did not resolve contribute nothing.
    pub fn from_actions(key: RowKey, approach: impl Into<String>, actions: &[ExtractedAction]) -> Self {
        let mut deleted_src = FxHashSet::default();
        let mut inserted_dst = FxHashSet::default();
        let mut updated_src = FxHashSet::default();
        let mut updated_dst = FxHashSet::default();
        let mut moved_src = FxHashSet::default();
        let mut moved_dst = FxHashSet::default();

        for action in actions {
            match action.kind {
                ActionKind::Delete => {
                    if let Some(range) = action.source {
                        deleted_src.extend(range.lines());
                    }
                }
                ActionKind::Insert => {
                    if let Some(range) = action.dest {
                        inserted_dst.extend(range.lines());
                    }
                }
                ActionKind::Update => {
                    if let Some(range) = action.source {
                        updated_src.extend(range.lines());
                    }
                    if let Some(range) = action.dest {
                        updated_dst.extend(range.lines());
                    }
                }
                ActionKind::Move => {
                    if let Some(range) = action.source {
                        moved_src.extend(range.lines());
                    }
                    if let Some(range) = action.dest {
                        moved_dst.extend(range.lines());
                    }
                }
            }
        }

        Self {
            key,
            approach: approach.into(),
            deleted_src: sorted(deleted_src),
            inserted_dst: sorted(inserted_dst),
            updated_src: sorted(updated_src),
            updated_dst: sorted(updated_dst),
            moved_src: sorted(moved_src),
            moved_dst: sorted(moved_dst),
        }
    }

    /// All lines changed on the source side:
    /// `deleted_src ∪ updated_src ∪ moved_src`.
    pub fn source_changed(&self) -> FxHashSet<u32> {
        let mut set: FxHashSet<u32> = self.deleted_src.iter().copied().collect();
        set.extend(self.updated_src.iter().copied());
        set.extend(self.moved_src.iter().copied());
        set
    }

    /// All lines changed on the destination side:
    /// `inserted_dst ∪ updated_dst ∪ moved_dst`.
    pub fn dest_changed(&self) -> FxHashSet<u32> {
        let mut set: FxHashSet<u32> = self.inserted_dst.iter().copied().collect();
        set.extend(self.updated_dst.iter().copied());
        set.extend(self.moved_dst.iter().copied());
        set
    }

    /// Union of source-side and destination-side changed lines.
    pub fn changed_lines(&self) -> FxHashSet<u32> {
        let mut set = self.source_changed();
        set.extend(self.dest_changed());
        set
    }

    /// Sum of all six set sizes.
    pub fn total_lines(&self) -> usize {
        self.deleted_src.len()
            + self.inserted_dst.len()
            + self.updated_src.len()
            + self.updated_dst.len()
            + self.moved_src.len()
            + self.moved_dst.len()
    }

    /// As `total_lines`, but without `moved_src` — the figure reported for
    /// tools whose source-side moves are not comparable.
    pub fn total_lines_excluding_moved_src(&self) -> usize {
        self.total_lines() - self.moved_src.len()
    }
}

fn sorted(set: FxHashSet<u32>) -> Vec<u32> {
    let mut lines: Vec<u32> = set.into_iter().collect();
    lines.sort_unstable();
    lines
}
