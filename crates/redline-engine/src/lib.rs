//! Redline Engine - Orchestration layer
//!
//! Wraps the pure comparison core with lifecycle logging, request
//! correlation, content digests and a bounded comparison cache.

pub mod cache;
pub mod commands;
pub mod digest;

pub use cache::ComparisonCache;
pub use commands::compare::{compare, Comparison};
pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::sanitize::{sanitize_document, Resolution, SanitizeResult};
