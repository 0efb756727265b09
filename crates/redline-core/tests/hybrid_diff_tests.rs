//! Hybrid line/word reconciliation scenarios.

use redline_core::diff::{
    hybrid_diff, line_diff, modified_text, original_text, word_diff, DiffAlgorithm, DiffSpan,
    SimilarPrimitive, SpanKind,
};
use redline_core::diff::hybrid::hybrid_diff_with;

#[test]
fn test_changed_word_isolated_within_line() {
    let spans = hybrid_diff("1. old term applies", "1. new term applies");
    assert_eq!(
        spans,
        vec![
            DiffSpan::same("1. "),
            DiffSpan::removed("old"),
            DiffSpan::added("new"),
            DiffSpan::same(" term applies"),
        ]
    );
}

#[test]
fn test_identical_documents_single_same_span() {
    let text = "Clause one.\n\nClause two.\n";
    assert_eq!(hybrid_diff(text, text), vec![DiffSpan::same(text)]);
}

#[test]
fn test_pure_insertion_kept_whole() {
    let spans = hybrid_diff("a\nc\n", "a\nb\nc\n");
    assert_eq!(
        spans,
        vec![DiffSpan::same("a\n"), DiffSpan::added("b\n"), DiffSpan::same("c\n")]
    );
}

#[test]
fn test_pure_deletion_kept_whole() {
    let spans = hybrid_diff("a\nb\nc\n", "a\nc\n");
    assert_eq!(
        spans,
        vec![DiffSpan::same("a\n"), DiffSpan::removed("b\n"), DiffSpan::same("c\n")]
    );
}

#[test]
fn test_one_side_empty() {
    assert_eq!(hybrid_diff("", "new text"), vec![DiffSpan::added("new text")]);
    assert_eq!(hybrid_diff("old text", ""), vec![DiffSpan::removed("old text")]);
}

#[test]
fn test_reconstruction_across_views() {
    let original = "Term: 30 days.\nNotice by post.\nGoverning law: England.\n";
    let modified = "Term: 60 days.\nNotice by email.\nGoverning law: England.\nSeverability.\n";

    for spans in [
        hybrid_diff(original, modified),
        line_diff(original, modified),
        word_diff(original, modified),
    ] {
        assert_eq!(original_text(&spans), original);
        assert_eq!(modified_text(&spans), modified);
        assert!(spans.windows(2).all(|w| w[0].kind != w[1].kind));
    }
}

#[test]
fn test_hybrid_refines_only_replaced_lines() {
    let spans = hybrid_diff("keep\npay 10 days\n", "keep\npay 30 days\nextra\n");
    assert_eq!(spans[0], DiffSpan::same("keep\npay "));
    assert!(spans.contains(&DiffSpan::removed("10")));
    assert!(spans.iter().any(|s| s.kind == SpanKind::Added && s.text.contains("30")));
}

#[test]
fn test_algorithms_reconstruct() {
    let original = "alpha\nbeta\ngamma\n";
    let modified = "alpha\nbeta prime\ndelta\ngamma\n";
    for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience, DiffAlgorithm::Lcs] {
        let spans = hybrid_diff_with(&SimilarPrimitive::new(algorithm), original, modified);
        assert_eq!(original_text(&spans), original, "{:?}", algorithm);
        assert_eq!(modified_text(&spans), modified, "{:?}", algorithm);
    }
}
