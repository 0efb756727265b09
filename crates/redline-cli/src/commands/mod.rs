//! Subcommand implementations and the file helpers they share.

pub mod compare;
pub mod sanitize;
pub mod summary;

use redline_core::config::{parse_options_file, CompareOptions};
use redline_core::errors::{ExError, RedlineError};
use std::path::{Path, PathBuf};

/// Read a UTF-8 document, reporting the path on failure.
pub fn read_document(path: &Path) -> Result<String, ExError> {
    std::fs::read_to_string(path).map_err(|e| {
        ExError::from(RedlineError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
        .with_op("read_document")
    })
}

/// Load options from `--config`, or defaults without one.
pub fn load_options(config: Option<&PathBuf>) -> Result<CompareOptions, ExError> {
    match config {
        Some(path) => parse_options_file(path),
        None => Ok(CompareOptions::default()),
    }
}

/// Write to `--output` when given, otherwise print to stdout.
pub fn emit(output: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(output_path) = output {
        std::fs::write(output_path, content)?;
        println!("✓ Written to {}", output_path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}
