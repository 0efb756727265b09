//! Comparison options and their TOML form.
//!
//! Every key is optional; a missing file section means defaults.
//!
//! ```toml
//! version = 1
//! view = "blocks"
//! alignment = "positional"
//! markup = "lenient"
//! algorithm = "myers"
//! cache_entries = 64
//! ```

use crate::diff::primitive::DiffAlgorithm;
use crate::errors::{ExError, RedlineError, Result};
use crate::markup::MarkupPolicy;
use crate::segment::{AlignmentMode, SegmentOptions};
use crate::view::{ViewMode, ViewOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_VERSION: u32 = 1;
pub const DEFAULT_CACHE_ENTRIES: usize = 64;

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_cache_entries() -> usize {
    DEFAULT_CACHE_ENTRIES
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CompareOptions {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub view: ViewMode,
    #[serde(default)]
    pub alignment: AlignmentMode,
    #[serde(default)]
    pub markup: MarkupPolicy,
    #[serde(default)]
    pub algorithm: DiffAlgorithm,
    /// Upper bound on memoized comparisons held by the engine cache
    #[serde(default = "default_cache_entries")]
    pub cache_entries: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            view: ViewMode::default(),
            alignment: AlignmentMode::default(),
            markup: MarkupPolicy::default(),
            algorithm: DiffAlgorithm::default(),
            cache_entries: DEFAULT_CACHE_ENTRIES,
        }
    }
}

impl CompareOptions {
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            alignment: self.alignment,
            markup: self.markup,
            algorithm: self.algorithm,
        }
    }

    pub fn segment_options(&self) -> SegmentOptions {
        SegmentOptions {
            alignment: self.alignment,
            algorithm: self.algorithm,
        }
    }
}

/// Parse options from a file path.
///
/// # Errors
///
/// - `Io` - the file could not be read
/// - `InvalidConfig` - see [`parse_options_str`]
pub fn parse_options_file(path: &Path) -> Result<CompareOptions> {
    let content = fs::read_to_string(path).map_err(|e| {
        ExError::from(RedlineError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
        .with_op("parse_options_file")
    })?;

    parse_options_str(&content).map_err(|e| e.with_path(path.display().to_string()))
}

/// Parse options from TOML text.
///
/// # Errors
///
/// - `InvalidConfig` - malformed TOML, an unknown key or value, or a value
///   outside its range
pub fn parse_options_str(content: &str) -> Result<CompareOptions> {
    let options: CompareOptions = toml::from_str(content)
        .map_err(|e| ExError::from(RedlineError::from(e)).with_op("parse_options"))?;

    validate_options(&options)?;

    Ok(options)
}

fn validate_options(options: &CompareOptions) -> Result<()> {
    if options.version != CONFIG_VERSION {
        return Err(invalid(format!(
            "Unsupported version: {}. Expected {}",
            options.version, CONFIG_VERSION
        )));
    }

    if options.cache_entries == 0 {
        return Err(invalid("cache_entries must be at least 1".to_string()));
    }

    Ok(())
}

fn invalid(reason: String) -> ExError {
    ExError::from(RedlineError::InvalidConfig { reason }).with_op("parse_options")
}
