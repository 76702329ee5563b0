//! Character-offset → line-number index for one source file.
//!
//! The baseline tool addresses code by character offset; everything
//! downstream works in 1-based line numbers. The index is built in a single
//! scan and queried by binary search over line-start positions.

use diffgauge_core::types::LineRangeSpec;

/// Total mapping from character offsets to 1-based line numbers.
///
/// Offsets are character positions, not byte positions. A newline character
/// belongs to the line it terminates. Lookups outside `[0, len)` are
/// unresolved (`None`) rather than errors: a single malformed action must
/// not abort a whole file's processing.
#[derive(Debug, Clone)]
pub struct CharOffsetLineMapper {
    /// Character offset of the first character of each line, ascending.
    /// Always starts with 0, even for empty input.
    line_starts: Vec<usize>,
    /// Total character count of the file.
    len: usize,
}

impl CharOffsetLineMapper {
    /// Build the index from file contents in one pass.
    pub fn new(contents: &str) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;
        for ch in contents.chars() {
            len += 1;
            if ch == '\n' {
                line_starts.push(len);
            }
        }
        // A trailing newline opens a phantom empty line with no characters;
        // no offset can land there, so drop it from the index.
        if line_starts.len() > 1 && *line_starts.last().unwrap() == len {
            line_starts.pop();
        }
        Self { line_starts, len }
    }

    /// Number of characters in the indexed file.
    pub fn char_len(&self) -> usize {
        self.len
    }

    /// 1-based line number containing the character at `offset`.
    ///
    /// Returns `None` for offsets outside `[0, len)`.
    pub fn line_of(&self, offset: usize) -> Option<u32> {
        if offset >= self.len {
            return None;
        }
        let idx = self.line_starts.partition_point(|&start| start <= offset);
        Some(idx as u32)
    }

    /// Map a `[start, end)` character range to a line or inclusive line span.
    ///
    /// Either endpoint failing to resolve (out of range, or an empty range
    /// with `start >= end`) yields `None`.
    pub fn span(&self, start: usize, end: usize) -> Option<LineRangeSpec> {
        if start >= end {
            return None;
        }
        let start_line = self.line_of(start)?;
        let end_line = self.line_of(end - 1)?;
        Some(LineRangeSpec::new(start_line, end_line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_map_to_lines() {
        // "ab\ncd\n" — offsets 0,1,2 on line 1 (newline included), 3,4,5 on line 2.
        let mapper = CharOffsetLineMapper::new("ab\ncd\n");
        assert_eq!(mapper.line_of(0), Some(1));
        assert_eq!(mapper.line_of(2), Some(1));
        assert_eq!(mapper.line_of(3), Some(2));
        assert_eq!(mapper.line_of(5), Some(2));
    }

    #[test]
    fn test_out_of_range_is_unresolved() {
        let mapper = CharOffsetLineMapper::new("ab\ncd\n");
        assert_eq!(mapper.line_of(6), None);
        assert_eq!(mapper.line_of(100), None);
    }

    #[test]
    fn test_no_trailing_newline() {
        let mapper = CharOffsetLineMapper::new("ab\ncd");
        assert_eq!(mapper.char_len(), 5);
        assert_eq!(mapper.line_of(4), Some(2));
        assert_eq!(mapper.line_of(5), None);
    }

    #[test]
    fn test_empty_file() {
        let mapper = CharOffsetLineMapper::new("");
        assert_eq!(mapper.char_len(), 0);
        assert_eq!(mapper.line_of(0), None);
    }

    #[test]
    fn test_span_single_line() {
        let mapper = CharOffsetLineMapper::new("hello world\n");
        assert_eq!(mapper.span(0, 5), Some(LineRangeSpec::Line(1)));
    }

    #[test]
    fn test_span_multi_line() {
        // Lines: "aaa" (0..3 + newline at 3), "bbb" (4..7 + newline at 7).
        let mapper = CharOffsetLineMapper::new("aaa\nbbb\nccc\n");
        assert_eq!(
            mapper.span(1, 6),
            Some(LineRangeSpec::Span { start: 1, end: 2 })
        );
    }

    #[test]
    fn test_span_end_exclusive() {
        // End offset 4 is exclusive, so the last covered char is the newline
        // at 3, which still belongs to line 1.
        let mapper = CharOffsetLineMapper::new("aaa\nbbb\n");
        assert_eq!(mapper.span(0, 4), Some(LineRangeSpec::Line(1)));
    }

    #[test]
    fn test_span_empty_or_out_of_range_unresolved() {
        let mapper = CharOffsetLineMapper::new("aaa\n");
        assert_eq!(mapper.span(2, 2), None);
        assert_eq!(mapper.span(3, 2), None);
        assert_eq!(mapper.span(0, 50), None);
    }

    #[test]
    fn test_multibyte_chars_counted_once() {
        // Offsets are character positions: 'é' is one character.
        let mapper = CharOffsetLineMapper::new("é\nx");
        assert_eq!(mapper.char_len(), 3);
        assert_eq!(mapper.line_of(0), Some(1));
        assert_eq!(mapper.line_of(2), Some(2));
    }
}
