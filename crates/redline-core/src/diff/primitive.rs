//! Line and word diff primitives.
//!
//! The reconciler never diffs text itself; it asks a [`DiffPrimitive`] for
//! line entries and word spans. [`SimilarPrimitive`] is the default and is
//! backed by the `similar` crate.

use crate::diff::model::{push_span, DiffSpan, LineDiffEntry, SpanKind};
use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag, TextDiff};

/// Diff algorithm used by [`SimilarPrimitive`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Patience,
    Lcs,
}

impl From<DiffAlgorithm> for Algorithm {
    fn from(value: DiffAlgorithm) -> Self {
        match value {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
            DiffAlgorithm::Lcs => Algorithm::Lcs,
        }
    }
}

/// Source of line-level and word-level diffs.
///
/// Implementations must be deterministic and must return maximal sequences:
/// consecutive results of the same classification are merged into one
/// entry / span. Removals are reported before additions within a replaced
/// region.
pub trait DiffPrimitive {
    /// Diff two texts line by line.
    fn diff_lines(&self, original: &str, modified: &str) -> Vec<LineDiffEntry>;

    /// Diff two texts word by word (whitespace runs are their own tokens).
    fn diff_words(&self, original: &str, modified: &str) -> Vec<DiffSpan>;
}

/// [`DiffPrimitive`] backed by `similar::TextDiff`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimilarPrimitive {
    algorithm: DiffAlgorithm,
}

impl SimilarPrimitive {
    pub fn new(algorithm: DiffAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> DiffAlgorithm {
        self.algorithm
    }
}

fn tag_kind(tag: ChangeTag) -> SpanKind {
    match tag {
        ChangeTag::Equal => SpanKind::Same,
        ChangeTag::Insert => SpanKind::Added,
        ChangeTag::Delete => SpanKind::Removed,
    }
}

/// Collapse a token-level diff into maximal spans.
fn collect_spans<'a>(diff: &TextDiff<'a, 'a, 'a, str>) -> Vec<DiffSpan> {
    let mut spans = Vec::new();
    for change in diff.iter_all_changes() {
        push_span(&mut spans, tag_kind(change.tag()), change.value());
    }
    spans
}

impl DiffPrimitive for SimilarPrimitive {
    fn diff_lines(&self, original: &str, modified: &str) -> Vec<LineDiffEntry> {
        let diff = TextDiff::configure()
            .algorithm(self.algorithm.into())
            .diff_lines(original, modified);

        collect_spans(&diff)
            .into_iter()
            .map(|span| match span.kind {
                SpanKind::Same => LineDiffEntry::unchanged(span.text),
                SpanKind::Added => LineDiffEntry::added(span.text),
                SpanKind::Removed => LineDiffEntry::removed(span.text),
            })
            .collect()
    }

    fn diff_words(&self, original: &str, modified: &str) -> Vec<DiffSpan> {
        let diff = TextDiff::configure()
            .algorithm(self.algorithm.into())
            .diff_words(original, modified);
        collect_spans(&diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_lines_groups_runs() {
        let entries = SimilarPrimitive::default().diff_lines("a\nb\nc\n", "a\nx\nc\n");
        assert_eq!(
            entries,
            vec![
                LineDiffEntry::unchanged("a\n"),
                LineDiffEntry::removed("b\n"),
                LineDiffEntry::added("x\n"),
                LineDiffEntry::unchanged("c\n"),
            ]
        );
    }

    #[test]
    fn test_diff_lines_identical_is_single_entry() {
        let entries = SimilarPrimitive::default().diff_lines("one\ntwo\nthree", "one\ntwo\nthree");
        assert_eq!(entries, vec![LineDiffEntry::unchanged("one\ntwo\nthree")]);
    }

    #[test]
    fn test_diff_words_isolates_changed_word() {
        let spans = SimilarPrimitive::default().diff_words("the old rule", "the new rule");
        assert_eq!(
            spans,
            vec![
                DiffSpan::same("the "),
                DiffSpan::removed("old"),
                DiffSpan::added("new"),
                DiffSpan::same(" rule"),
            ]
        );
    }

    #[test]
    fn test_algorithms_agree_on_simple_replacement() {
        for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience, DiffAlgorithm::Lcs] {
            let spans = SimilarPrimitive::new(algorithm).diff_words("pay 10 days", "pay 30 days");
            assert!(spans.contains(&DiffSpan::removed("10")), "{:?}", algorithm);
            assert!(spans.contains(&DiffSpan::added("30")), "{:?}", algorithm);
        }
    }
}
