//! Track-changes markup resolution.
//!
//! A modified document may carry inline redline markup:
//!
//! - `⟪DEL⟫...⟪/DEL⟫` wraps text that was deleted
//! - `⟪INS⟫...⟪/INS⟫` wraps text that was inserted
//!
//! Pairs are flat and matched first-open/first-close; regions may span
//! newlines. Deletion regions are resolved before insertion pairs, so an
//! insertion token inside a deletion region belongs to the deleted text.
//!
//! Malformed markup is resolved leniently: any delimiter token that does not
//! take part in a well-formed pair is dropped and the text around it is kept
//! in place. [`validate`] reports those tokens and [`sanitize_strict`] turns
//! them into an error.

use crate::diff::model::{push_span, DiffSpan, SpanKind};
use crate::errors::{ExError, RedlineError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEL_OPEN: &str = "⟪DEL⟫";
pub const DEL_CLOSE: &str = "⟪/DEL⟫";
pub const INS_OPEN: &str = "⟪INS⟫";
pub const INS_CLOSE: &str = "⟪/INS⟫";

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"⟪(/?)(DEL|INS)⟫").expect("token pattern is a valid regex")
    })
}

/// How malformed delimiters are treated when resolving markup.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarkupPolicy {
    /// Drop stray and unmatched tokens, keep the surrounding text
    #[default]
    Lenient,
    /// Fail with `MalformedMarkup` on the first issue
    Strict,
}

/// Resolve markup under the given policy.
///
/// # Errors
///
/// - `MalformedMarkup` - see [`sanitize_strict`]
pub fn sanitize_with(text: &str, policy: MarkupPolicy) -> Result<String> {
    match policy {
        MarkupPolicy::Lenient => Ok(sanitize(text)),
        MarkupPolicy::Strict => sanitize_strict(text),
    }
}

/// Why a delimiter token was not part of a well-formed pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueReason {
    /// An opening token with no closing token after it
    Unmatched,
    /// An opening token inside an already open region of the same kind
    Nested,
    /// A closing token with no open region
    Stray,
}

/// A delimiter token that the lenient resolution dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkupIssue {
    pub token: String,
    /// Byte offset of the token in the input
    pub offset: usize,
    pub reason: IssueReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Del,
    Ins,
}

#[derive(Debug, Clone, Copy)]
struct Token {
    start: usize,
    end: usize,
    kind: TokenKind,
    close: bool,
}

/// What the resolver does at a position in the text.
#[derive(Debug, Clone, Copy)]
enum Event {
    /// Token dropped without effect
    Drop { start: usize, end: usize },
    InsOpen { start: usize, end: usize },
    InsClose { start: usize, end: usize },
    /// A deletion region; `content` is the text between the delimiters
    Deletion {
        start: usize,
        end: usize,
        content: (usize, usize),
    },
}

impl Event {
    fn start(&self) -> usize {
        match *self {
            Event::Drop { start, .. }
            | Event::InsOpen { start, .. }
            | Event::InsClose { start, .. }
            | Event::Deletion { start, .. } => start,
        }
    }

    fn end(&self) -> usize {
        match *self {
            Event::Drop { end, .. }
            | Event::InsOpen { end, .. }
            | Event::InsClose { end, .. }
            | Event::Deletion { end, .. } => end,
        }
    }
}

/// Result of pairing every delimiter token in a text.
struct Resolution {
    events: Vec<Event>,
    issues: Vec<MarkupIssue>,
}

fn scan_tokens(text: &str) -> Vec<Token> {
    token_pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let kind = match caps.get(2)?.as_str() {
                "DEL" => TokenKind::Del,
                _ => TokenKind::Ins,
            };
            Some(Token {
                start: whole.start(),
                end: whole.end(),
                kind,
                close: caps.get(1).is_some_and(|m| !m.as_str().is_empty()),
            })
        })
        .collect()
}

fn issue(text: &str, token: &Token, reason: IssueReason) -> MarkupIssue {
    MarkupIssue {
        token: text[token.start..token.end].to_string(),
        offset: token.start,
        reason,
    }
}

/// Pair tokens of one kind lazily (first open with the next close).
///
/// Returns the matched `(open, close)` pairs; every other token is reported.
fn pair_tokens(
    text: &str,
    tokens: &[Token],
    issues: &mut Vec<MarkupIssue>,
) -> Vec<(Token, Token)> {
    let mut pairs = Vec::new();
    let mut open: Option<Token> = None;
    let mut nested: Vec<Token> = Vec::new();

    for token in tokens {
        match (token.close, open) {
            (false, None) => open = Some(*token),
            (false, Some(_)) => nested.push(*token),
            (true, Some(o)) => {
                pairs.push((o, *token));
                issues.extend(nested.drain(..).map(|t| issue(text, &t, IssueReason::Nested)));
                open = None;
            }
            (true, None) => issues.push(issue(text, token, IssueReason::Stray)),
        }
    }

    // Without a close, the pending open and everything queued after it are unmatched
    if let Some(o) = open {
        issues.push(issue(text, &o, IssueReason::Unmatched));
        issues.extend(nested.drain(..).map(|t| issue(text, &t, IssueReason::Unmatched)));
    }

    pairs
}

fn resolve(text: &str) -> Resolution {
    let tokens = scan_tokens(text);
    let mut issues = Vec::new();
    let mut events = Vec::new();

    // Deletion regions first
    let del_tokens: Vec<Token> = tokens
        .iter()
        .copied()
        .filter(|t| t.kind == TokenKind::Del)
        .collect();
    let del_pairs = pair_tokens(text, &del_tokens, &mut issues);
    let inside_deletion =
        |t: &Token| del_pairs.iter().any(|(o, c)| t.start >= o.start && t.end <= c.end);

    // Unpaired deletion tokens outside any region are dropped on their own
    for t in del_tokens.iter().filter(|t| !inside_deletion(t)) {
        events.push(Event::Drop {
            start: t.start,
            end: t.end,
        });
    }
    for (o, c) in &del_pairs {
        events.push(Event::Deletion {
            start: o.start,
            end: c.end,
            content: (o.end, c.start),
        });
    }

    // Insertion pairs, ignoring tokens swallowed by a deletion
    let ins_tokens: Vec<Token> = tokens
        .iter()
        .copied()
        .filter(|t| t.kind == TokenKind::Ins && !inside_deletion(t))
        .collect();
    let issues_before = issues.len();
    let ins_pairs = pair_tokens(text, &ins_tokens, &mut issues);
    for (o, c) in &ins_pairs {
        events.push(Event::InsOpen {
            start: o.start,
            end: o.end,
        });
        events.push(Event::InsClose {
            start: c.start,
            end: c.end,
        });
    }
    for bad in &issues[issues_before..] {
        events.push(Event::Drop {
            start: bad.offset,
            end: bad.offset + bad.token.len(),
        });
    }

    events.sort_by_key(|e| e.start());
    issues.sort_by_key(|i| i.offset);

    Resolution { events, issues }
}

/// Remove every delimiter token, repeating until none is left.
///
/// Repetition matters when removing one token joins the pieces of another.
fn strip_tokens(text: &str) -> String {
    let mut current = text.to_string();
    while token_pattern().is_match(&current) {
        current = token_pattern().replace_all(&current, "").into_owned();
    }
    current
}

/// Classify marked-up text into SAME / ADDED / REMOVED spans.
///
/// Deleted regions become REMOVED, inserted regions ADDED, the rest SAME.
/// Text deleted inside an insertion never existed in either version and is
/// dropped. For markup without stray tokens, SAME+ADDED equals
/// [`sanitize`] and SAME+REMOVED equals [`reject`].
pub fn markup_spans(text: &str) -> Vec<DiffSpan> {
    let resolution = resolve(text);
    let mut spans = Vec::new();
    let mut cursor = 0;
    let mut in_insertion = false;

    for event in &resolution.events {
        let start = event.start();
        // Already consumed by an earlier region
        if start < cursor {
            continue;
        }
        let plain = if in_insertion {
            SpanKind::Added
        } else {
            SpanKind::Same
        };
        push_span(&mut spans, plain, &text[cursor..start]);

        match *event {
            Event::Drop { .. } => {}
            Event::InsOpen { .. } => in_insertion = true,
            Event::InsClose { .. } => in_insertion = false,
            Event::Deletion { content, .. } => {
                if !in_insertion {
                    let removed = strip_tokens(&text[content.0..content.1]);
                    push_span(&mut spans, SpanKind::Removed, &removed);
                }
            }
        }
        cursor = event.end();
    }

    let tail = if in_insertion {
        SpanKind::Added
    } else {
        SpanKind::Same
    };
    push_span(&mut spans, tail, &text[cursor..]);

    spans
}

/// Accept all changes: drop deleted text, keep inserted text, drop delimiters.
///
/// Idempotent: the result never contains a delimiter token.
///
/// # Example
///
/// ```
/// use redline_core::markup::sanitize;
///
/// assert_eq!(sanitize("keep ⟪DEL⟫gone⟪/DEL⟫ text"), "keep  text");
/// assert_eq!(sanitize("a ⟪INS⟫new⟪/INS⟫ b"), "a new b");
/// ```
pub fn sanitize(text: &str) -> String {
    if !token_pattern().is_match(text) {
        return text.to_string();
    }
    let accepted: String = markup_spans(text)
        .into_iter()
        .filter(|s| s.kind != SpanKind::Removed)
        .map(|s| s.text)
        .collect();
    strip_tokens(&accepted)
}

/// Reject all changes: keep deleted text, drop inserted text, drop delimiters.
pub fn reject(text: &str) -> String {
    if !token_pattern().is_match(text) {
        return text.to_string();
    }
    let rejected: String = markup_spans(text)
        .into_iter()
        .filter(|s| s.kind != SpanKind::Added)
        .map(|s| s.text)
        .collect();
    strip_tokens(&rejected)
}

/// Report delimiter tokens that are not part of a well-formed pair.
///
/// Issues are ordered by offset. Tokens inside a deletion region other than
/// a nested `⟪DEL⟫` are part of the deleted text and are not reported.
pub fn validate(text: &str) -> Vec<MarkupIssue> {
    resolve(text).issues
}

/// Like [`sanitize`], but fails on the first malformed delimiter.
///
/// # Errors
///
/// - `MalformedMarkup` - [`validate`] reported at least one issue
pub fn sanitize_strict(text: &str) -> Result<String> {
    if let Some(first) = validate(text).into_iter().next() {
        let err: ExError = RedlineError::MalformedDelimiter {
            token: first.token,
            offset: first.offset,
            reason: first.reason,
        }
        .into();
        return Err(err.with_op("sanitize_strict"));
    }
    Ok(sanitize(text))
}
