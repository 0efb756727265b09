//! Comparison output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq` so a
//! comparison can be handed to any renderer or serialized as-is.

use serde::{Deserialize, Serialize};

/// Classification of a span of text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    /// Present in both versions
    Same,
    /// Present only in the modified version
    Added,
    /// Present only in the original version
    Removed,
}

/// A run of text sharing one classification.
///
/// Sequences of spans are kept maximal: no two adjacent spans share a kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffSpan {
    pub kind: SpanKind,
    pub text: String,
}

impl DiffSpan {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn same(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Same, text)
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Added, text)
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Removed, text)
    }
}

/// Append `text` as `kind`, extending the last span when it has the same kind.
///
/// Empty text is dropped so that callers never produce zero-length spans.
pub fn push_span(spans: &mut Vec<DiffSpan>, kind: SpanKind, text: &str) {
    if text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.kind == kind => last.text.push_str(text),
        _ => spans.push(DiffSpan::new(kind, text)),
    }
}

/// Rebuild the original text from a span sequence (SAME + REMOVED).
pub fn original_text(spans: &[DiffSpan]) -> String {
    spans
        .iter()
        .filter(|s| s.kind != SpanKind::Added)
        .map(|s| s.text.as_str())
        .collect()
}

/// Rebuild the modified text from a span sequence (SAME + ADDED).
pub fn modified_text(spans: &[DiffSpan]) -> String {
    spans
        .iter()
        .filter(|s| s.kind != SpanKind::Removed)
        .map(|s| s.text.as_str())
        .collect()
}

/// One entry of a line-level diff.
///
/// `value` may cover several physical lines (each keeping its `\n`). At most
/// one of `added` / `removed` is set; neither means unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineDiffEntry {
    pub added: bool,
    pub removed: bool,
    pub value: String,
}

impl LineDiffEntry {
    pub fn unchanged(value: impl Into<String>) -> Self {
        Self {
            added: false,
            removed: false,
            value: value.into(),
        }
    }

    pub fn added(value: impl Into<String>) -> Self {
        Self {
            added: true,
            removed: false,
            value: value.into(),
        }
    }

    pub fn removed(value: impl Into<String>) -> Self {
        Self {
            added: false,
            removed: true,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> SpanKind {
        if self.added {
            SpanKind::Added
        } else if self.removed {
            SpanKind::Removed
        } else {
            SpanKind::Same
        }
    }
}

/// A classified item of a numbered list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListItem {
    pub changed: bool,
    /// Leading number of the source line (`12` for `"12. ..."`), if it fits
    pub number: Option<u64>,
    pub spans: Vec<DiffSpan>,
}

/// A unit of the segmented document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Paragraph { changed: bool, spans: Vec<DiffSpan> },
    Blank,
    List { items: Vec<ListItem> },
}

impl Block {
    pub fn is_changed(&self) -> bool {
        match self {
            Block::Paragraph { changed, .. } => *changed,
            Block::Blank => false,
            Block::List { items } => items.iter().any(|item| item.changed),
        }
    }
}

/// Aggregate counts over a comparison result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffStats {
    pub same_spans: usize,
    pub added_spans: usize,
    pub removed_spans: usize,
    /// Characters (not bytes) of added text
    pub added_chars: usize,
    /// Characters (not bytes) of removed text
    pub removed_chars: usize,
    /// Whitespace-separated words inside added spans
    pub added_words: usize,
    /// Whitespace-separated words inside removed spans
    pub removed_words: usize,
    pub paragraphs: usize,
    pub changed_paragraphs: usize,
    pub list_blocks: usize,
    pub list_items: usize,
    pub changed_list_items: usize,
    pub blank_lines: usize,
}

impl DiffStats {
    pub fn has_changes(&self) -> bool {
        self.added_spans > 0 || self.removed_spans > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_span_merges_same_kind() {
        let mut spans = Vec::new();
        push_span(&mut spans, SpanKind::Same, "a ");
        push_span(&mut spans, SpanKind::Same, "b");
        push_span(&mut spans, SpanKind::Added, "c");
        push_span(&mut spans, SpanKind::Added, "");
        assert_eq!(spans, vec![DiffSpan::same("a b"), DiffSpan::added("c")]);
    }

    #[test]
    fn test_reconstruction_helpers() {
        let spans = vec![
            DiffSpan::same("1. "),
            DiffSpan::removed("old"),
            DiffSpan::added("new"),
            DiffSpan::same(" term"),
        ];
        assert_eq!(original_text(&spans), "1. old term");
        assert_eq!(modified_text(&spans), "1. new term");
    }

    #[test]
    fn test_block_serialization_is_tagged() {
        let block = Block::Paragraph {
            changed: false,
            spans: vec![DiffSpan::same("Heading")],
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "paragraph");
        assert_eq!(json["spans"][0]["kind"], "same");
    }

    #[test]
    fn test_line_entry_kind() {
        assert_eq!(LineDiffEntry::added("x").kind(), SpanKind::Added);
        assert_eq!(LineDiffEntry::removed("x").kind(), SpanKind::Removed);
        assert_eq!(LineDiffEntry::unchanged("x").kind(), SpanKind::Same);
    }
}
