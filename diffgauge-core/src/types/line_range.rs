//! Line ranges and row identity.

use serde::{Deserialize, Serialize};

/// A 1-based line reference: either a single line or an inclusive span.
///
/// Spans always satisfy `start <= end`; `new` normalizes a single-line span
/// to `Line` and swaps reversed endpoints rather than producing an empty
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineRangeSpec {
    /// A single line.
    Line(u32),
    /// An inclusive multi-line span.
    Span { start: u32, end: u32 },
}

impl LineRangeSpec {
    /// Build a spec from two endpoints, collapsing `start == end` to `Line`.
    pub fn new(start: u32, end: u32) -> Self {
        if start == end {
            Self::Line(start)
        } else if start > end {
            Self::Span { start: end, end: start }
        } else {
            Self::Span { start, end }
        }
    }

    /// First line covered by this spec.
    pub fn start(&self) -> u32 {
        match *self {
            Self::Line(n) => n,
            Self::Span { start, .. } => start,
        }
    }

    /// Last line covered by this spec.
    pub fn end(&self) -> u32 {
        match *self {
            Self::Line(n) => n,
            Self::Span { end, .. } => end,
        }
    }

    /// Number of lines covered: `end - start + 1`.
    pub fn len(&self) -> u32 {
        self.end() - self.start() + 1
    }

    /// Always false — a spec covers at least one line.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over every line number in the spec, ascending.
    pub fn lines(&self) -> impl Iterator<Item = u32> {
        self.start()..=self.end()
    }
}

/// Identity of one evaluated file revision: which project, which commit,
/// which changed file. The approach label is carried alongside, not inside,
/// so that records from different approaches for the same file share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowKey {
    pub project: String,
    pub commit: String,
    pub changed_file: String,
}

impl RowKey {
    pub fn new(
        project: impl Into<String>,
        commit: impl Into<String>,
        changed_file: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            commit: commit.into(),
            changed_file: changed_file.into(),
        }
    }
}

impl std::fmt::Display for RowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}:{}", self.project, self.commit, self.changed_file)
    }
}
