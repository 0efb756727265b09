//! Sanitize command
//!
//! Usage: redline sanitize <FILE> [--reject] [--strict] [--output <FILE>]

use clap::Args;
use redline_core::MarkupPolicy;
use redline_core_types::RequestContext;
use redline_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use redline_engine::Resolution;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SanitizeArgs {
    /// Document carrying track-changes markup
    pub file: PathBuf,

    /// Keep deleted text and drop inserted text
    #[arg(long)]
    pub reject: bool,

    /// Fail on malformed track-changes markup instead of dropping it
    #[arg(long)]
    pub strict: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute sanitize command
pub fn execute(args: SanitizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = super::read_document(&args.file)?;

    let ctx = RequestContext::new().with_origin("cli");
    let cmd = EngineCommand::Sanitize {
        text,
        resolution: if args.reject {
            Resolution::Reject
        } else {
            Resolution::Accept
        },
        policy: if args.strict {
            MarkupPolicy::Strict
        } else {
            MarkupPolicy::Lenient
        },
    };
    let EngineCommandResult::Sanitize(result) = apply_engine_command(cmd, &ctx, None)? else {
        return Err("Engine returned an unexpected result for sanitize".into());
    };

    for issue in &result.issues {
        eprintln!(
            "warning: dropped {:?} delimiter {} at byte {}",
            issue.reason, issue.token, issue.offset
        );
    }

    super::emit(args.output.as_ref(), &result.text)
}
