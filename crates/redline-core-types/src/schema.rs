//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the core, the engine
//! and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Comparison inputs
pub const FIELD_VIEW_MODE: &str = "view_mode";
pub const FIELD_ALIGNMENT: &str = "alignment";
pub const FIELD_ORIGINAL_LEN: &str = "original_len";
pub const FIELD_MODIFIED_LEN: &str = "modified_len";

// Comparison outputs
pub const FIELD_SPAN_COUNT: &str = "span_count";
pub const FIELD_BLOCK_COUNT: &str = "block_count";
pub const FIELD_CACHE_HIT: &str = "cache_hit";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
