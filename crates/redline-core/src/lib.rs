//! Redline Core - document comparison kernel
//!
//! This crate provides the pure comparison routines behind Redline:
//! - Track-changes markup resolution (`⟪DEL⟫…⟪/DEL⟫`, `⟪INS⟫…⟪/INS⟫`)
//! - Hybrid line/word diffing over pluggable diff primitives
//! - List-aware segmentation of documents into paragraphs, blanks and lists
//! - View selection, statistics and HTML/text rendering
//!
//! Everything here is synchronous and free of I/O apart from config file
//! loading; lifecycle logging belongs to `redline-engine`.

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod markup;
pub mod render;
pub mod segment;
pub mod view;

// Re-export commonly used types
pub use config::CompareOptions;
pub use diff::{hybrid_diff, Block, DiffSpan, DiffStats, ListItem, SpanKind};
pub use errors::{ExError, ExErrorKind, RedlineError, Result};
pub use markup::{sanitize, MarkupPolicy};
pub use segment::{segment, AlignmentMode};
pub use view::{render_view, ViewMode, ViewOptions, ViewOutput};
