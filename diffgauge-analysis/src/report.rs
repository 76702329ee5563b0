//! Reporting-time helpers consumed by external CSV/plotting collaborators.
//!
//! Filtering changed lines down to representable ones is a textual
//! heuristic applied here, after records are built — never during
//! `ChangeRecord` construction.

use diffgauge_core::traits::LineClassifier;

/// Keep only the changed lines whose text the classifier accepts.
///
/// `lines` are 1-based into `file_text`. Lines beyond the end of the file
/// are kept: the classifier cannot veto text it cannot see.
pub fn filter_representable(
    lines: &[u32],
    file_text: &str,
    classifier: &dyn LineClassifier,
) -> Vec<u32> {
    let texts: Vec<&str> = file_text.lines().collect();
    lines
        .iter()
        .copied()
        .filter(|&line| match texts.get(line as usize - 1) {
            Some(text) => classifier.is_representable(text),
            None => true,
        })
        .collect()
}

/// Count of representable changed lines.
pub fn representable_count(
    lines: &[u32],
    file_text: &str,
    classifier: &dyn LineClassifier,
) -> usize {
    filter_representable(lines, file_text, classifier).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use diffgauge_core::traits::KeepAllClassifier;

    struct NoComments;
    impl LineClassifier for NoComments {
        fn is_representable(&self, line_text: &str) -> bool {
            !line_text.trim_start().starts_with("//")
        }
    }

    const FILE: &str = "int a = 1;\n// comment\nint b = 2;\n";

    #[test]
    fn test_keep_all_passes_everything_through() {
        let filtered = filter_representable(&[1, 2, 3], FILE, &KeepAllClassifier);
        assert_eq!(filtered, vec![1, 2, 3]);
    }

    #[test]
    fn test_comment_lines_filtered() {
        let filtered = filter_representable(&[1, 2, 3], FILE, &NoComments);
        assert_eq!(filtered, vec![1, 3]);
        assert_eq!(representable_count(&[1, 2, 3], FILE, &NoComments), 2);
    }

    #[test]
    fn test_lines_past_end_of_file_kept() {
        let filtered = filter_representable(&[2, 99], FILE, &NoComments);
        assert_eq!(filtered, vec![99]);
    }
}
