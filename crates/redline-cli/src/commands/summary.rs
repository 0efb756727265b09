//! Summary command
//!
//! Usage: redline summary <ORIGINAL> <MODIFIED> [--config <FILE>]

use clap::Args;
use redline_core::diff::render_human_summary;
use redline_core_types::RequestContext;
use redline_engine::compare;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Original document
    pub original: PathBuf,

    /// Modified document, optionally carrying track-changes markup
    pub modified: PathBuf,

    /// TOML options file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Execute summary command
pub fn execute(args: SummaryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = super::load_options(args.config.as_ref())?;
    let original = super::read_document(&args.original)?;
    let modified = super::read_document(&args.modified)?;

    let ctx = RequestContext::new().with_origin("cli");
    let comparison = compare(&ctx, &original, &modified, &options)?;

    print!("{}", render_human_summary(&comparison.stats));
    Ok(())
}
