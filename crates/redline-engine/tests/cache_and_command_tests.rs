use redline_core::config::CompareOptions;
use redline_core::errors::ExErrorKind;
use redline_core::markup::{IssueReason, MarkupPolicy};
use redline_core::view::ViewMode;
use redline_core_types::RequestContext;
use redline_engine::{
    apply_engine_command, sanitize_document, ComparisonCache, EngineCommand, EngineCommandResult,
    Resolution,
};

#[test]
fn test_cache_key_changes_with_input() {
    let mut cache = ComparisonCache::new(8);
    let ctx = RequestContext::new();
    let options = CompareOptions::default();

    cache.get_or_compare(&ctx, "Clause A", "Clause B", &options).unwrap();
    cache.get_or_compare(&ctx, "Clause A", "Clause C", &options).unwrap();
    cache.get_or_compare(&ctx, "Clause A", "Clause B", &options).unwrap();

    assert_eq!(cache.misses(), 2);
    assert_eq!(cache.hits(), 1);
}

#[test]
fn test_cache_key_changes_with_view() {
    let mut cache = ComparisonCache::default();
    let ctx = RequestContext::new();
    let hybrid = CompareOptions {
        view: ViewMode::Hybrid,
        ..CompareOptions::default()
    };

    let blocks = cache
        .get_or_compare(&ctx, "a", "b", &CompareOptions::default())
        .unwrap();
    let spans = cache.get_or_compare(&ctx, "a", "b", &hybrid).unwrap();

    assert_ne!(blocks.options_digest, spans.options_digest);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_cache_hit_restamped_with_new_request() {
    let mut cache = ComparisonCache::new(2);
    let options = CompareOptions::default();
    let first_ctx = RequestContext::new();
    let second_ctx = RequestContext::new();

    cache.get_or_compare(&first_ctx, "x", "y", &options).unwrap();
    let hit = cache.get_or_compare(&second_ctx, "x", "y", &options).unwrap();

    assert_eq!(hit.request_id, second_ctx.request_id);
}

#[test]
fn test_failed_comparison_not_cached() {
    let mut cache = ComparisonCache::new(2);
    let ctx = RequestContext::new();
    let strict = CompareOptions {
        markup: MarkupPolicy::Strict,
        ..CompareOptions::default()
    };

    assert!(cache.get_or_compare(&ctx, "a", "⟪INS⟫b", &strict).is_err());
    assert!(cache.is_empty());
}

#[test]
fn test_apply_compare_command_with_cache() {
    let mut cache = ComparisonCache::new(2);
    let ctx = RequestContext::new().with_origin("test");
    let cmd = EngineCommand::Compare {
        original: "Fee: 10".to_string(),
        modified: "Fee: ⟪DEL⟫10⟪/DEL⟫⟪INS⟫20⟪/INS⟫".to_string(),
        options: CompareOptions {
            view: ViewMode::Hybrid,
            ..CompareOptions::default()
        },
    };

    let result = apply_engine_command(cmd.clone(), &ctx, Some(&mut cache)).unwrap();
    apply_engine_command(cmd, &ctx, Some(&mut cache)).unwrap();

    let EngineCommandResult::Compare(comparison) = result else {
        panic!("expected a comparison");
    };
    assert!(comparison.stats.has_changes());
    assert_eq!(cache.hits(), 1);
}

#[test]
fn test_apply_sanitize_command_reject() {
    let ctx = RequestContext::new();
    let cmd = EngineCommand::Sanitize {
        text: "Fee: ⟪DEL⟫10⟪/DEL⟫⟪INS⟫20⟪/INS⟫".to_string(),
        resolution: Resolution::Reject,
        policy: MarkupPolicy::Lenient,
    };

    let EngineCommandResult::Sanitize(result) = apply_engine_command(cmd, &ctx, None).unwrap()
    else {
        panic!("expected a sanitize result");
    };
    assert_eq!(result.text, "Fee: 10");
    assert!(result.issues.is_empty());
}

#[test]
fn test_sanitize_reports_lenient_issues() {
    let ctx = RequestContext::new();

    let result =
        sanitize_document(&ctx, "a ⟪/INS⟫b", Resolution::Accept, MarkupPolicy::Lenient).unwrap();

    assert_eq!(result.text, "a b");
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].reason, IssueReason::Stray);
}

#[test]
fn test_sanitize_strict_fails_with_request_id() {
    let ctx = RequestContext::new();

    let err = sanitize_document(&ctx, "a ⟪/INS⟫b", Resolution::Accept, MarkupPolicy::Strict)
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MalformedMarkup);
    assert_eq!(err.request_id(), Some(&ctx.request_id));
}
