//! Text diffing.
//!
//! Produces span sequences describing how a modified text differs from its
//! original, at line, word, or hybrid granularity.
//!
//! ## Entry point
//!
//! ```
//! use redline_core::diff::{hybrid_diff, original_text, modified_text};
//!
//! let spans = hybrid_diff("a\nb\n", "a\nc\n");
//! assert_eq!(original_text(&spans), "a\nb\n");
//! assert_eq!(modified_text(&spans), "a\nc\n");
//! ```
//!
//! ## Guarantees
//!
//! - **Reconstruction**: SAME+REMOVED spans rebuild the original, SAME+ADDED
//!   spans rebuild the modified text.
//! - **Maximality**: no two adjacent spans share a kind; no span is empty.
//! - **Determinism**: identical inputs and algorithm produce identical spans.

pub mod hybrid;
pub mod model;
pub mod primitive;
pub mod summary;

pub use hybrid::{hybrid_diff, line_diff, word_diff};
pub use model::{
    modified_text, original_text, Block, DiffSpan, DiffStats, LineDiffEntry, ListItem, SpanKind,
};
pub use primitive::{DiffAlgorithm, DiffPrimitive, SimilarPrimitive};
pub use summary::{compute_stats, render_human_summary};
