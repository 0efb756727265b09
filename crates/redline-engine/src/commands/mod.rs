//! Command orchestration layer.
//!
//! Provides high-level command functions that wrap the pure comparison
//! core with lifecycle logging, request correlation and caching.

pub mod compare;
pub mod engine_command;
pub mod sanitize;
