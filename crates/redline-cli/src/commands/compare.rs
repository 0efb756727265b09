//! Compare command
//!
//! Usage: redline compare <ORIGINAL> <MODIFIED> [--view <MODE>] [--format <FORMAT>]

use clap::{Args, ValueEnum};
use redline_core::render::{render_html_page, render_text};
use redline_core::segment::AlignmentMode;
use redline_core::view::ViewMode;
use redline_core::MarkupPolicy;
use redline_core_types::RequestContext;
use redline_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use std::path::PathBuf;

const PAGE_TITLE: &str = "Legal Document Comparison";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Line,
    Word,
    Hybrid,
    Blocks,
    Document,
}

impl From<ViewArg> for ViewMode {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Line => ViewMode::Line,
            ViewArg::Word => ViewMode::Word,
            ViewArg::Hybrid => ViewMode::Hybrid,
            ViewArg::Blocks => ViewMode::Blocks,
            ViewArg::Document => ViewMode::Document,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlignmentArg {
    Positional,
    Aligned,
}

impl From<AlignmentArg> for AlignmentMode {
    fn from(value: AlignmentArg) -> Self {
        match value {
            AlignmentArg::Positional => AlignmentMode::Positional,
            AlignmentArg::Aligned => AlignmentMode::Aligned,
        }
    }
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Original document
    pub original: PathBuf,

    /// Modified document, optionally carrying track-changes markup
    pub modified: PathBuf,

    /// View mode; defaults to the config file's, then blocks
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Line pairing for the blocks view
    #[arg(long, value_enum)]
    pub alignment: Option<AlignmentArg>,

    /// Fail on malformed track-changes markup instead of dropping it
    #[arg(long)]
    pub strict: bool,

    /// TOML options file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = super::load_options(args.config.as_ref())?;
    if let Some(view) = args.view {
        options.view = view.into();
    }
    if let Some(alignment) = args.alignment {
        options.alignment = alignment.into();
    }
    if args.strict {
        options.markup = MarkupPolicy::Strict;
    }

    let original = super::read_document(&args.original)?;
    let modified = super::read_document(&args.modified)?;

    let ctx = RequestContext::new().with_origin("cli");
    let cmd = EngineCommand::Compare {
        original,
        modified,
        options,
    };
    let EngineCommandResult::Compare(comparison) = apply_engine_command(cmd, &ctx, None)? else {
        return Err("Engine returned an unexpected result for compare".into());
    };

    let rendered = match args.format {
        OutputFormat::Text => render_text(&comparison.output),
        OutputFormat::Html => render_html_page(PAGE_TITLE, &comparison.output),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&comparison)?;
            json.push('\n');
            json
        }
    };

    super::emit(args.output.as_ref(), &rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_arg_names_match_view_modes() {
        for arg in ViewArg::value_variants() {
            let name = arg.to_possible_value().unwrap();
            assert_eq!(name.get_name(), ViewMode::from(*arg).as_str());
        }
        assert_eq!(ViewArg::value_variants().len(), ViewMode::ALL.len());
    }
}
