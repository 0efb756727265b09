//! Line classification and list-aware segmentation.
//!
//! Turns an original/modified document pair into [`Block`]s: paragraphs,
//! blank lines and runs of numbered lines coalesced into lists. Each changed
//! line carries the spans of a [`hybrid_diff`](crate::diff::hybrid_diff)
//! between its two versions.
//!
//! Two pairing strategies exist:
//!
//! - [`AlignmentMode::Positional`] pairs original line `i` with modified line
//!   `i`. Inserting or deleting a whole line shifts every later pair; output
//!   degrades but stays deterministic.
//! - [`AlignmentMode::Aligned`] pairs lines through one line diff over the
//!   whole documents, so inserted and deleted lines stand on their own.

use crate::diff::hybrid::hybrid_diff_with;
use crate::diff::model::{Block, DiffSpan, ListItem, SpanKind};
use crate::diff::primitive::{DiffAlgorithm, DiffPrimitive, SimilarPrimitive};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// How original and modified lines are paired.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    /// Pair by index
    #[default]
    Positional,
    /// Pair through a line diff
    Aligned,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentOptions {
    pub alignment: AlignmentMode,
    pub algorithm: DiffAlgorithm,
}

fn numbered_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.\s*").expect("numbered prefix is a valid regex")
    })
}

/// Whether a line opens with `<digits>.` (e.g. `"12."`).
pub fn is_numbered_line(line: &str) -> bool {
    numbered_prefix().is_match(line)
}

/// The leading number of a numbered line, if it fits in a `u64`.
pub fn line_number(line: &str) -> Option<u64> {
    numbered_prefix()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// A numbered line without its `"<digits>. "` prefix.
pub fn strip_number(line: &str) -> &str {
    match numbered_prefix().find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// One original/modified line pair; `None` marks a side with no line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LinePair<'a> {
    original: Option<&'a str>,
    modified: Option<&'a str>,
}

fn positional_pairs<'a>(original: &'a str, modified: &'a str) -> Vec<LinePair<'a>> {
    let modified_lines: Vec<&str> = modified.split('\n').collect();
    original
        .split('\n')
        .enumerate()
        .map(|(i, line)| LinePair {
            original: Some(line),
            modified: Some(modified_lines.get(i).copied().unwrap_or("")),
        })
        .collect()
}

/// Lines of `text` without their terminators.
///
/// `\r\n`, a lone `\r` and `\n` each end a line, the same rule the line diff
/// tokenizes by, so counts taken from diff entries line up with the inputs.
fn value_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn aligned_pairs<'a, P: DiffPrimitive + ?Sized>(
    primitive: &P,
    original: &'a str,
    modified: &'a str,
) -> Vec<LinePair<'a>> {
    // Entry values are copies; walk both documents in step to borrow from the inputs
    let mut original_lines = value_lines(original).into_iter();
    let mut modified_lines = value_lines(modified).into_iter();
    let entries = primitive.diff_lines(original, modified);
    let mut pairs = Vec::new();

    let mut i = 0;
    while i < entries.len() {
        let entry = &entries[i];
        let count = value_lines(&entry.value).len();
        match entries.get(i + 1) {
            Some(next) if entry.removed && next.added => {
                let removed: Vec<&str> = original_lines.by_ref().take(count).collect();
                let added_count = value_lines(&next.value).len();
                let added: Vec<&str> = modified_lines.by_ref().take(added_count).collect();
                for k in 0..removed.len().max(added.len()) {
                    pairs.push(LinePair {
                        original: removed.get(k).copied(),
                        modified: added.get(k).copied(),
                    });
                }
                i += 2;
            }
            _ => {
                match entry.kind() {
                    SpanKind::Same => {
                        for line in original_lines.by_ref().take(count) {
                            modified_lines.next();
                            pairs.push(LinePair {
                                original: Some(line),
                                modified: Some(line),
                            });
                        }
                    }
                    SpanKind::Removed => {
                        pairs.extend(original_lines.by_ref().take(count).map(|line| LinePair {
                            original: Some(line),
                            modified: None,
                        }));
                    }
                    SpanKind::Added => {
                        pairs.extend(modified_lines.by_ref().take(count).map(|line| LinePair {
                            original: None,
                            modified: Some(line),
                        }));
                    }
                }
                i += 1;
            }
        }
    }

    pairs
}

/// Accumulates blocks, buffering list items until a non-list line arrives.
#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    open_list: Vec<ListItem>,
}

impl BlockBuilder {
    fn flush_list(&mut self) {
        if !self.open_list.is_empty() {
            let items = std::mem::take(&mut self.open_list);
            self.blocks.push(Block::List { items });
        }
    }

    fn push_item(&mut self, item: ListItem) {
        self.open_list.push(item);
    }

    fn push_block(&mut self, block: Block) {
        self.flush_list();
        self.blocks.push(block);
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_list();
        self.blocks
    }
}

fn classify<P: DiffPrimitive + ?Sized>(
    primitive: &P,
    pair: LinePair<'_>,
    builder: &mut BlockBuilder,
) {
    let original = pair.original.unwrap_or("");
    let modified = pair.modified.unwrap_or("");

    // Numbering is read from the original line when there is one
    let reference = pair.original.unwrap_or(modified);
    let changed = pair.original != pair.modified;
    let numbered = is_numbered_line(reference);

    let spans = if changed {
        hybrid_diff_with(primitive, original, modified)
    } else if numbered {
        vec![DiffSpan::same(strip_number(original))]
    } else {
        vec![DiffSpan::same(original)]
    };

    if numbered {
        builder.push_item(ListItem {
            changed,
            number: line_number(reference),
            spans,
        });
    } else {
        builder.push_block(Block::Paragraph { changed, spans });
    }
}

/// Segment a document pair with positional pairing.
///
/// Returns no blocks when either text is empty.
///
/// # Example
///
/// ```
/// use redline_core::segment::segment;
/// use redline_core::diff::{Block, DiffSpan};
///
/// let text = "Heading\n\n1. First\n2. Second";
/// let blocks = segment(text, text);
/// assert_eq!(blocks.len(), 3);
/// assert_eq!(blocks[1], Block::Blank);
/// match &blocks[2] {
///     Block::List { items } => assert_eq!(items[0].spans, vec![DiffSpan::same("First")]),
///     other => panic!("expected a list, got {:?}", other),
/// }
/// ```
pub fn segment(original: &str, modified: &str) -> Vec<Block> {
    segment_with(original, modified, &SegmentOptions::default())
}

pub fn segment_with(original: &str, modified: &str, options: &SegmentOptions) -> Vec<Block> {
    segment_with_primitive(&SimilarPrimitive::new(options.algorithm), original, modified, options)
}

/// Segment with an explicit diff primitive.
pub fn segment_with_primitive<P: DiffPrimitive + ?Sized>(
    primitive: &P,
    original: &str,
    modified: &str,
    options: &SegmentOptions,
) -> Vec<Block> {
    if original.is_empty() || modified.is_empty() {
        return Vec::new();
    }

    let pairs = match options.alignment {
        AlignmentMode::Positional => positional_pairs(original, modified),
        AlignmentMode::Aligned => aligned_pairs(primitive, original, modified),
    };

    let mut builder = BlockBuilder::default();
    for pair in &pairs {
        let blank = match options.alignment {
            // Positional pairing only looks at the original line
            AlignmentMode::Positional => pair.original.unwrap_or("").trim().is_empty(),
            AlignmentMode::Aligned => {
                pair.original.unwrap_or("").trim().is_empty()
                    && pair.modified.unwrap_or("").trim().is_empty()
            }
        };
        if blank {
            builder.push_block(Block::Blank);
        } else {
            classify(primitive, *pair, &mut builder);
        }
    }

    let blocks = builder.finish();
    tracing::debug!(
        alignment = ?options.alignment,
        line_pairs = pairs.len(),
        block_count = blocks.len(),
        "segmented document pair"
    );
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_line_detection() {
        assert!(is_numbered_line("1. First"));
        assert!(is_numbered_line("12.Second"));
        assert!(!is_numbered_line(" 1. Indented"));
        assert!(!is_numbered_line("1 First"));
        assert!(!is_numbered_line("Section 2."));
    }

    #[test]
    fn test_strip_number_and_line_number() {
        assert_eq!(strip_number("12.   Term"), "Term");
        assert_eq!(strip_number("Plain"), "Plain");
        assert_eq!(line_number("12. Term"), Some(12));
        assert_eq!(line_number("99999999999999999999999. Big"), None);
    }

    #[test]
    fn test_positional_pairs_pad_missing_lines() {
        let pairs = positional_pairs("a\nb\nc", "a");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2].modified, Some(""));
    }

    #[test]
    fn test_aligned_pairs_split_insertion() {
        let pairs = aligned_pairs(&SimilarPrimitive::default(), "a\nc\n", "a\nb\nc\n");
        assert_eq!(
            pairs,
            vec![
                LinePair {
                    original: Some("a"),
                    modified: Some("a"),
                },
                LinePair {
                    original: None,
                    modified: Some("b"),
                },
                LinePair {
                    original: Some("c"),
                    modified: Some("c"),
                },
            ]
        );
    }

    #[test]
    fn test_value_lines_terminators() {
        assert_eq!(value_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(value_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(value_lines("\r"), vec![""]);
        assert!(value_lines("").is_empty());
    }

    #[test]
    fn test_aligned_pairs_follow_lone_carriage_returns() {
        let pairs = aligned_pairs(&SimilarPrimitive::default(), "x\ry\n", "x\rz\n");
        assert_eq!(
            pairs,
            vec![
                LinePair {
                    original: Some("x"),
                    modified: Some("x"),
                },
                LinePair {
                    original: Some("y"),
                    modified: Some("z"),
                },
            ]
        );
    }

    #[test]
    fn test_aligned_pairs_zip_replacement_runs() {
        let pairs = aligned_pairs(&SimilarPrimitive::default(), "x\ny\n", "x2\n");
        assert_eq!(
            pairs,
            vec![
                LinePair {
                    original: Some("x"),
                    modified: Some("x2"),
                },
                LinePair {
                    original: Some("y"),
                    modified: None,
                },
            ]
        );
    }
}
