//! Change statistics and the human-readable Markdown summary.

use crate::diff::model::{Block, DiffSpan, DiffStats, SpanKind};
use crate::view::ViewOutput;

fn count_spans(stats: &mut DiffStats, spans: &[DiffSpan]) {
    for span in spans {
        let chars = span.text.chars().count();
        let words = span.text.split_whitespace().count();
        match span.kind {
            SpanKind::Same => stats.same_spans += 1,
            SpanKind::Added => {
                stats.added_spans += 1;
                stats.added_chars += chars;
                stats.added_words += words;
            }
            SpanKind::Removed => {
                stats.removed_spans += 1;
                stats.removed_chars += chars;
                stats.removed_words += words;
            }
        }
    }
}

/// Tally spans and blocks of a view result.
pub fn compute_stats(output: &ViewOutput) -> DiffStats {
    let mut stats = DiffStats::default();
    match output {
        ViewOutput::Spans(spans) => count_spans(&mut stats, spans),
        ViewOutput::Blocks(blocks) => {
            for block in blocks {
                match block {
                    Block::Paragraph { changed, spans } => {
                        stats.paragraphs += 1;
                        if *changed {
                            stats.changed_paragraphs += 1;
                        }
                        count_spans(&mut stats, spans);
                    }
                    Block::Blank => stats.blank_lines += 1,
                    Block::List { items } => {
                        stats.list_blocks += 1;
                        stats.list_items += items.len();
                        for item in items {
                            if item.changed {
                                stats.changed_list_items += 1;
                            }
                            count_spans(&mut stats, &item.spans);
                        }
                    }
                }
            }
        }
    }
    stats
}

/// Render a Markdown summary of [`DiffStats`].
///
/// Informational only; the structured output stays the source of truth.
pub fn render_human_summary(stats: &DiffStats) -> String {
    let mut out = String::new();

    out.push_str("## Document Comparison\n\n");

    let class_label = if stats.has_changes() {
        "Changed"
    } else {
        "Identical"
    };
    out.push_str(&format!("**Classification**: {class_label}\n\n"));

    if !stats.has_changes() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    out.push_str("### Text Changes\n\n");
    out.push_str(&format!(
        "| | Spans | Words | Characters |\n\
         |---|---|---|---|\n\
         | Added | {} | {} | {} |\n\
         | Removed | {} | {} | {} |\n\n",
        stats.added_spans,
        stats.added_words,
        stats.added_chars,
        stats.removed_spans,
        stats.removed_words,
        stats.removed_chars,
    ));

    let has_structure = stats.paragraphs + stats.list_items + stats.blank_lines > 0;
    if has_structure {
        out.push_str("### Structure\n\n");
        out.push_str(&format!(
            "- **Paragraphs**: {} ({} changed)\n",
            stats.paragraphs, stats.changed_paragraphs
        ));
        out.push_str(&format!(
            "- **List items**: {} in {} list(s) ({} changed)\n",
            stats.list_items, stats.list_blocks, stats.changed_list_items
        ));
        out.push_str(&format!("- **Blank lines**: {}\n", stats.blank_lines));
    }

    out
}
