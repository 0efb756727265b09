//! Plain-text rendering with inline change markers.
//!
//! Removed text is wrapped as `[-text-]`, added text as `{+text+}`.

use crate::diff::model::{Block, DiffSpan, SpanKind};
use crate::view::ViewOutput;

fn push_spans(out: &mut String, spans: &[DiffSpan]) {
    for span in spans {
        match span.kind {
            SpanKind::Same => out.push_str(&span.text),
            SpanKind::Added => {
                out.push_str("{+");
                out.push_str(&span.text);
                out.push_str("+}");
            }
            SpanKind::Removed => {
                out.push_str("[-");
                out.push_str(&span.text);
                out.push_str("-]");
            }
        }
    }
}

pub fn render_text(output: &ViewOutput) -> String {
    let mut out = String::new();
    match output {
        ViewOutput::Spans(spans) => push_spans(&mut out, spans),
        ViewOutput::Blocks(blocks) => {
            for block in blocks {
                match block {
                    Block::Paragraph { spans, .. } => {
                        push_spans(&mut out, spans);
                        out.push('\n');
                    }
                    Block::Blank => out.push('\n'),
                    Block::List { items } => {
                        for (i, item) in items.iter().enumerate() {
                            // Changed items keep their own number inside the spans
                            if !item.changed {
                                let number = item.number.unwrap_or(i as u64 + 1);
                                out.push_str(&format!("{}. ", number));
                            }
                            push_spans(&mut out, &item.spans);
                            out.push('\n');
                        }
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::ListItem;

    #[test]
    fn test_markers() {
        let output = ViewOutput::Spans(vec![
            DiffSpan::same("a "),
            DiffSpan::removed("b"),
            DiffSpan::added("c"),
        ]);
        assert_eq!(render_text(&output), "a [-b-]{+c+}");
    }

    #[test]
    fn test_list_numbers_restored_for_unchanged_items() {
        let output = ViewOutput::Blocks(vec![Block::List {
            items: vec![
                ListItem {
                    changed: false,
                    number: Some(1),
                    spans: vec![DiffSpan::same("First")],
                },
                ListItem {
                    changed: true,
                    number: Some(2),
                    spans: vec![
                        DiffSpan::same("2. "),
                        DiffSpan::removed("Old"),
                        DiffSpan::added("New"),
                    ],
                },
            ],
        }]);
        assert_eq!(render_text(&output), "1. First\n2. [-Old-]{+New+}\n");
    }
}
