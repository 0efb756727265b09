//! View selection.
//!
//! A view names how a document pair is compared. Every view first resolves
//! the track-changes markup in the modified text, then dispatches to the
//! matching diff or segmentation routine.

use crate::diff::hybrid::{hybrid_diff_with, line_diff_with, word_diff_with};
use crate::diff::model::{Block, DiffSpan};
use crate::diff::primitive::{DiffAlgorithm, SimilarPrimitive};
use crate::errors::{RedlineError, Result};
use crate::markup::{self, MarkupPolicy};
use crate::segment::{segment_with_primitive, AlignmentMode, SegmentOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Whole-line spans only
    Line,
    /// One word diff over the whole documents
    Word,
    /// Line diff with word refinement of replaced lines
    Hybrid,
    /// Paragraph/list segmentation with per-line hybrid spans
    #[default]
    Blocks,
    /// The modified text's own redline, without comparing to the original
    Document,
}

impl ViewMode {
    pub const ALL: [ViewMode; 5] = [
        ViewMode::Line,
        ViewMode::Word,
        ViewMode::Hybrid,
        ViewMode::Blocks,
        ViewMode::Document,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Line => "line",
            ViewMode::Word => "word",
            ViewMode::Hybrid => "hybrid",
            ViewMode::Blocks => "blocks",
            ViewMode::Document => "document",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = crate::errors::ExError;

    fn from_str(s: &str) -> Result<Self> {
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                RedlineError::UnknownViewMode {
                    value: s.to_string(),
                }
                .into()
            })
    }
}

/// Options threaded through [`render_view`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub alignment: AlignmentMode,
    pub markup: MarkupPolicy,
    pub algorithm: DiffAlgorithm,
}

/// Result of a view: flat spans or a block tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ViewOutput {
    Spans(Vec<DiffSpan>),
    Blocks(Vec<Block>),
}

impl ViewOutput {
    pub fn is_empty(&self) -> bool {
        match self {
            ViewOutput::Spans(spans) => spans.is_empty(),
            ViewOutput::Blocks(blocks) => blocks.is_empty(),
        }
    }

    /// Number of top-level spans or blocks.
    pub fn len(&self) -> usize {
        match self {
            ViewOutput::Spans(spans) => spans.len(),
            ViewOutput::Blocks(blocks) => blocks.len(),
        }
    }
}

/// Compare `original` against `modified_with_markup` in the given view.
///
/// # Errors
///
/// - `MalformedMarkup` - strict markup policy and a malformed delimiter
pub fn render_view(
    mode: ViewMode,
    original: &str,
    modified_with_markup: &str,
    options: &ViewOptions,
) -> Result<ViewOutput> {
    let modified = markup::sanitize_with(modified_with_markup, options.markup)?;
    let primitive = SimilarPrimitive::new(options.algorithm);

    let output = match mode {
        ViewMode::Line => ViewOutput::Spans(line_diff_with(&primitive, original, &modified)),
        ViewMode::Word => ViewOutput::Spans(word_diff_with(&primitive, original, &modified)),
        ViewMode::Hybrid => ViewOutput::Spans(hybrid_diff_with(&primitive, original, &modified)),
        ViewMode::Blocks => {
            let segment_options = SegmentOptions {
                alignment: options.alignment,
                algorithm: options.algorithm,
            };
            ViewOutput::Blocks(segment_with_primitive(
                &primitive,
                original,
                &modified,
                &segment_options,
            ))
        }
        ViewMode::Document => ViewOutput::Spans(markup::markup_spans(modified_with_markup)),
    };

    tracing::debug!(view_mode = %mode, output_len = output.len(), "view rendered");
    Ok(output)
}
