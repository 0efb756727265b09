//! Markup resolution orchestration.

use redline_core::errors::Result;
use redline_core::markup::{self, MarkupIssue, MarkupPolicy};
use redline_core_types::RequestContext;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Which side of the track changes to keep.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Keep insertions, drop deletions
    #[default]
    Accept,
    /// Keep deletions, drop insertions
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SanitizeResult {
    pub text: String,
    /// Delimiters dropped by lenient resolution
    pub issues: Vec<MarkupIssue>,
}

/// Resolve track-changes markup in a document.
///
/// # Errors
///
/// - `MalformedMarkup` - strict policy and a malformed delimiter
pub fn sanitize_document(
    ctx: &RequestContext,
    text: &str,
    resolution: Resolution,
    policy: MarkupPolicy,
) -> Result<SanitizeResult> {
    let start = Instant::now();
    redline_core::log_op_start!(
        "sanitize",
        request_id = ctx.request_id.as_str(),
        original_len = text.len()
    );

    let outcome = markup::sanitize_with(text, policy).map(|accepted| {
        let resolved = match resolution {
            Resolution::Accept => accepted,
            Resolution::Reject => markup::reject(text),
        };
        SanitizeResult {
            text: resolved,
            issues: markup::validate(text),
        }
    });

    let duration_ms = start.elapsed().as_millis() as u64;
    match outcome {
        Ok(result) => {
            redline_core::log_op_end!(
                "sanitize",
                duration_ms = duration_ms,
                request_id = ctx.request_id.as_str(),
                issue_count = result.issues.len()
            );
            Ok(result)
        }
        Err(e) => {
            let err = e.with_request_id(ctx.request_id.clone());
            redline_core::log_op_error!(
                "sanitize",
                err.clone(),
                duration_ms = duration_ms,
                request_id = ctx.request_id.as_str()
            );
            Err(err)
        }
    }
}
