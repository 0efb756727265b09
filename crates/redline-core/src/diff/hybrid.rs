//! Hybrid line/word diff reconciliation.
//!
//! A line diff keeps the document structure; only lines that were replaced
//! (a removal immediately followed by an addition) are re-diffed word by word.
//! Unchanged, purely added and purely removed runs are emitted whole.

use crate::diff::model::{push_span, DiffSpan};
use crate::diff::primitive::{DiffPrimitive, SimilarPrimitive};

/// Hybrid diff with the default `similar`-backed primitive.
///
/// Concatenating the SAME and ADDED spans yields `modified`; SAME and REMOVED
/// yields `original`. Identical non-empty inputs produce exactly one SAME
/// span; two empty inputs produce no spans.
///
/// # Example
///
/// ```
/// use redline_core::diff::{hybrid_diff, DiffSpan};
///
/// let spans = hybrid_diff("1. old term applies", "1. new term applies");
/// assert_eq!(
///     spans,
///     vec![
///         DiffSpan::same("1. "),
///         DiffSpan::removed("old"),
///         DiffSpan::added("new"),
///         DiffSpan::same(" term applies"),
///     ]
/// );
/// ```
pub fn hybrid_diff(original: &str, modified: &str) -> Vec<DiffSpan> {
    hybrid_diff_with(&SimilarPrimitive::default(), original, modified)
}

/// Hybrid diff over an explicit primitive.
pub fn hybrid_diff_with<P: DiffPrimitive + ?Sized>(
    primitive: &P,
    original: &str,
    modified: &str,
) -> Vec<DiffSpan> {
    let entries = primitive.diff_lines(original, modified);
    let mut spans = Vec::with_capacity(entries.len());
    let mut replaced_pairs = 0usize;

    let mut i = 0;
    while i < entries.len() {
        let entry = &entries[i];
        match entries.get(i + 1) {
            // Replacement: a removal directly followed by an addition
            Some(next) if entry.removed && next.added => {
                for word in primitive.diff_words(&entry.value, &next.value) {
                    push_span(&mut spans, word.kind, &word.text);
                }
                replaced_pairs += 1;
                i += 2;
            }
            _ => {
                push_span(&mut spans, entry.kind(), &entry.value);
                i += 1;
            }
        }
    }

    tracing::debug!(
        line_entries = entries.len(),
        replaced_pairs,
        span_count = spans.len(),
        "hybrid diff reconciled"
    );

    spans
}

/// Line-only view: every line entry becomes one span, no word refinement.
pub fn line_diff(original: &str, modified: &str) -> Vec<DiffSpan> {
    line_diff_with(&SimilarPrimitive::default(), original, modified)
}

pub fn line_diff_with<P: DiffPrimitive + ?Sized>(
    primitive: &P,
    original: &str,
    modified: &str,
) -> Vec<DiffSpan> {
    let mut spans = Vec::new();
    for entry in primitive.diff_lines(original, modified) {
        push_span(&mut spans, entry.kind(), &entry.value);
    }
    spans
}

/// Word-only view: one word diff over the whole documents.
pub fn word_diff(original: &str, modified: &str) -> Vec<DiffSpan> {
    word_diff_with(&SimilarPrimitive::default(), original, modified)
}

pub fn word_diff_with<P: DiffPrimitive + ?Sized>(
    primitive: &P,
    original: &str,
    modified: &str,
) -> Vec<DiffSpan> {
    let mut spans = Vec::new();
    for word in primitive.diff_words(original, modified) {
        push_span(&mut spans, word.kind, &word.text);
    }
    spans
}
