//! HTML rendering.

use crate::diff::model::{Block, DiffSpan, ListItem, SpanKind};
use crate::view::ViewOutput;

const PAGE_STYLE: &str = "\
body { padding: 20px; }
.redline { background: white; padding: 20px; border: 1px solid #ddd; }
.redline .line { margin-bottom: 12px; }
.redline ol { margin-left: 40px; padding-left: 20px; }
.redline li { margin-bottom: 8px; }
.redline pre { white-space: pre-wrap; }
ins.added { background-color: #d4edda; color: #155724; text-decoration: none; }
del.removed { background-color: #f8d7da; color: #721c24; text-decoration: line-through; }
";

/// Escape text content (`&`, `<`, `>`, `"`).
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn push_spans(out: &mut String, spans: &[DiffSpan]) {
    for span in spans {
        let text = escape_html(&span.text);
        match span.kind {
            SpanKind::Same => out.push_str(&text),
            SpanKind::Added => {
                out.push_str("<ins class=\"added\">");
                out.push_str(&text);
                out.push_str("</ins>");
            }
            SpanKind::Removed => {
                out.push_str("<del class=\"removed\">");
                out.push_str(&text);
                out.push_str("</del>");
            }
        }
    }
}

fn push_item(out: &mut String, item: &ListItem) {
    match item.number {
        Some(n) => out.push_str(&format!("<li value=\"{}\">", n)),
        None => out.push_str("<li>"),
    }
    push_spans(out, &item.spans);
    out.push_str("</li>\n");
}

fn push_blocks(out: &mut String, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Paragraph { spans, .. } => {
                out.push_str("<div class=\"line\">");
                push_spans(out, spans);
                out.push_str("</div>\n");
            }
            Block::Blank => out.push_str("<br />\n"),
            Block::List { items } => {
                out.push_str("<ol>\n");
                for item in items {
                    push_item(out, item);
                }
                out.push_str("</ol>\n");
            }
        }
    }
}

/// Render a view result as an HTML fragment.
///
/// Flat spans keep their line breaks inside a `<pre>`; blocks become
/// `<div class="line">`, `<br />` and `<ol>` elements.
pub fn render_html(output: &ViewOutput) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"redline\">\n");
    match output {
        ViewOutput::Spans(spans) => {
            out.push_str("<pre>");
            push_spans(&mut out, spans);
            out.push_str("</pre>\n");
        }
        ViewOutput::Blocks(blocks) => push_blocks(&mut out, blocks),
    }
    out.push_str("</div>\n");
    out
}

/// Render a standalone HTML page with embedded styling.
pub fn render_html_page(title: &str, output: &ViewOutput) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n<title>{title}</title>\n\
         <style>\n{PAGE_STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = escape_html(title),
        body = render_html(output),
    )
}
