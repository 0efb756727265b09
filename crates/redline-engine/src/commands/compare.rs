//! Comparison orchestration.
//!
//! Owns lifecycle logging for a comparison: one start event, then exactly one
//! end or end_error event carrying the duration and request id.

use crate::digest::{compute_content_digest, compute_options_digest};
use redline_core::config::CompareOptions;
use redline_core::diff::{compute_stats, DiffStats};
use redline_core::errors::Result;
use redline_core::view::{render_view, ViewMode, ViewOutput};
use redline_core_types::{RequestContext, RequestId};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A finished comparison with its identifying digests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comparison {
    pub request_id: RequestId,
    pub view: ViewMode,
    /// SHA256 of the original text
    pub original_digest: String,
    /// SHA256 of the modified text as given, markup included
    pub modified_digest: String,
    pub options_digest: String,
    pub output: ViewOutput,
    pub stats: DiffStats,
}

/// Compare two documents under `options`.
///
/// # Errors
///
/// - `MalformedMarkup` - strict markup policy and malformed delimiters
/// - `Serialization` - options could not be digested
pub fn compare(
    ctx: &RequestContext,
    original: &str,
    modified: &str,
    options: &CompareOptions,
) -> Result<Comparison> {
    let start = Instant::now();
    redline_core::log_op_start!(
        "compare",
        request_id = ctx.request_id.as_str(),
        origin = ctx.origin.as_deref(),
        view_mode = options.view.as_str(),
        original_len = original.len(),
        modified_len = modified.len()
    );

    match compare_inner(ctx, original, modified, options) {
        Ok(comparison) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            redline_core::log_op_end!(
                "compare",
                duration_ms = duration_ms,
                request_id = ctx.request_id.as_str(),
                span_count = comparison.output.len()
            );
            Ok(comparison)
        }
        Err(e) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            let err = e
                .with_op("compare")
                .with_request_id(ctx.request_id.clone());
            redline_core::log_op_error!(
                "compare",
                err.clone(),
                duration_ms = duration_ms,
                request_id = ctx.request_id.as_str()
            );
            Err(err)
        }
    }
}

fn compare_inner(
    ctx: &RequestContext,
    original: &str,
    modified: &str,
    options: &CompareOptions,
) -> Result<Comparison> {
    let options_digest = compute_options_digest(options)?;
    let output = render_view(options.view, original, modified, &options.view_options())?;
    let stats = compute_stats(&output);

    Ok(Comparison {
        request_id: ctx.request_id.clone(),
        view: options.view,
        original_digest: compute_content_digest(original),
        modified_digest: compute_content_digest(modified),
        options_digest,
        output,
        stats,
    })
}
