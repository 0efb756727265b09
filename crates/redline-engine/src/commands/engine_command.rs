//! Engine-level commands dispatched from front ends.

use crate::cache::ComparisonCache;
use crate::commands::compare::{compare, Comparison};
use crate::commands::sanitize::{sanitize_document, Resolution, SanitizeResult};
use redline_core::config::CompareOptions;
use redline_core::errors::Result;
use redline_core::markup::MarkupPolicy;
use redline_core_types::RequestContext;

/// Commands the engine can execute.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Compare an original document with a marked-up modified document.
    Compare {
        original: String,
        modified: String,
        options: CompareOptions,
    },
    /// Resolve the track changes of one document.
    Sanitize {
        text: String,
        resolution: Resolution,
        policy: MarkupPolicy,
    },
}

/// Result of applying an engine command.
#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    Compare(Comparison),
    Sanitize(SanitizeResult),
}

/// Apply an engine command, consulting the cache for comparisons when given.
///
/// # Errors
///
/// Propagates the error of the dispatched command.
pub fn apply_engine_command(
    cmd: EngineCommand,
    ctx: &RequestContext,
    cache: Option<&mut ComparisonCache>,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::Compare {
            original,
            modified,
            options,
        } => {
            let comparison = match cache {
                Some(cache) => cache.get_or_compare(ctx, &original, &modified, &options)?,
                None => compare(ctx, &original, &modified, &options)?,
            };
            Ok(EngineCommandResult::Compare(comparison))
        }
        EngineCommand::Sanitize {
            text,
            resolution,
            policy,
        } => {
            let result = sanitize_document(ctx, &text, resolution, policy)?;
            Ok(EngineCommandResult::Sanitize(result))
        }
    }
}
