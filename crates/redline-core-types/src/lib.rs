//! Core types shared across the Redline crates
//!
//! This crate provides foundational types used by the error and logging
//! facilities:
//!
//! - **Correlation types**: RequestId, RequestContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId};
