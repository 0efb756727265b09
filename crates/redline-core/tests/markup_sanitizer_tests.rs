//! Track-changes markup resolution scenarios.

use redline_core::diff::{DiffSpan, SpanKind};
use redline_core::errors::ExErrorKind;
use redline_core::markup::{
    markup_spans, reject, sanitize, sanitize_strict, sanitize_with, validate, IssueReason,
    MarkupPolicy,
};

#[test]
fn test_deletion_region_removed() {
    assert_eq!(sanitize("keep ⟪DEL⟫gone⟪/DEL⟫ text"), "keep  text");
}

#[test]
fn test_insertion_region_unwrapped() {
    assert_eq!(sanitize("a ⟪INS⟫new⟪/INS⟫ b"), "a new b");
}

#[test]
fn test_replacement_accepts_insertion() {
    let redline = "The fee is ⟪DEL⟫10⟪/DEL⟫⟪INS⟫20⟪/INS⟫ dollars.";
    assert_eq!(sanitize(redline), "The fee is 20 dollars.");
    assert_eq!(reject(redline), "The fee is 10 dollars.");
}

#[test]
fn test_multiple_regions_resolved_lazily() {
    let redline = "⟪DEL⟫a⟪/DEL⟫ keep ⟪DEL⟫b⟪/DEL⟫";
    assert_eq!(sanitize(redline), " keep ");
}

#[test]
fn test_regions_span_newlines() {
    let redline = "1. First\n⟪DEL⟫2. Second\n⟪/DEL⟫3. Third\n⟪INS⟫4. Fourth\n⟪/INS⟫";
    assert_eq!(sanitize(redline), "1. First\n3. Third\n4. Fourth\n");
}

#[test]
fn test_text_without_markup_unchanged() {
    let plain = "No markup here.\n\nJust text.";
    assert_eq!(sanitize(plain), plain);
    assert!(validate(plain).is_empty());
}

#[test]
fn test_stray_tokens_stripped_leniently() {
    assert_eq!(sanitize("a ⟪INS⟫b"), "a b");
    assert_eq!(sanitize("a ⟪/INS⟫b"), "a b");
    assert_eq!(sanitize("a ⟪/DEL⟫b"), "a b");
}

#[test]
fn test_output_has_no_delimiters() {
    let redline = "⟪INS⟫x ⟪DEL⟫y⟪/DEL⟫ z⟪/INS⟫ ⟪DEL⟫";
    let clean = sanitize(redline);
    for token in ["⟪DEL⟫", "⟪/DEL⟫", "⟪INS⟫", "⟪/INS⟫"] {
        assert!(!clean.contains(token), "{} left in {:?}", token, clean);
    }
}

#[test]
fn test_sanitize_is_idempotent_on_scenarios() {
    for redline in [
        "keep ⟪DEL⟫gone⟪/DEL⟫ text",
        "a ⟪INS⟫new⟪/INS⟫ b",
        "⟪DEL⟫⟪DEL⟫⟪/DEL⟫⟪/DEL⟫",
        "⟪DE⟪/INS⟫L⟫x",
    ] {
        let once = sanitize(redline);
        assert_eq!(sanitize(&once), once, "input {:?}", redline);
    }
}

#[test]
fn test_markup_spans_classify_regions() {
    let spans = markup_spans("keep ⟪DEL⟫old⟪/DEL⟫⟪INS⟫new⟪/INS⟫ end");
    assert_eq!(
        spans,
        vec![
            DiffSpan::same("keep "),
            DiffSpan::removed("old"),
            DiffSpan::added("new"),
            DiffSpan::same(" end"),
        ]
    );
    assert!(spans.iter().all(|s| !s.text.is_empty()));
    assert!(spans.windows(2).all(|w| w[0].kind != w[1].kind));
    assert_eq!(spans[0].kind, SpanKind::Same);
}

#[test]
fn test_validate_reports_issues_in_offset_order() {
    let issues = validate("⟪/DEL⟫ a ⟪INS⟫ b");
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].reason, IssueReason::Stray);
    assert_eq!(issues[0].offset, 0);
    assert_eq!(issues[1].reason, IssueReason::Unmatched);
    assert!(issues[0].offset < issues[1].offset);
}

#[test]
fn test_strict_policy_fails_on_malformed_markup() {
    let err = sanitize_strict("ok ⟪INS⟫dangling").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::MalformedMarkup);
    assert_eq!(err.offset(), Some(3));

    let err = sanitize_with("ok ⟪INS⟫dangling", MarkupPolicy::Strict).unwrap_err();
    assert_eq!(err.code(), "ERR_MALFORMED_MARKUP");
}

#[test]
fn test_strict_policy_accepts_well_formed_markup() {
    let clean = sanitize_with("a ⟪DEL⟫b⟪/DEL⟫⟪INS⟫c⟪/INS⟫", MarkupPolicy::Strict).unwrap();
    assert_eq!(clean, "a c");
    assert_eq!(
        sanitize_with("a ⟪INS⟫dangling", MarkupPolicy::Lenient).unwrap(),
        "a dangling"
    );
}
