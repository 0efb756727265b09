use crate::markup::IssueReason;
use redline_core_types::RequestId;
use thiserror::Error;

/// Result type alias using the canonical structured error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// tests and the CLI's exit messages. The diff core itself is total; these
/// kinds only arise at the edges (markup validation, configuration, I/O).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    /// Track-changes markup has a stray or unmatched delimiter (strict policy only)
    MalformedMarkup,
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MalformedMarkup => "ERR_MALFORMED_MARKUP",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, input path, byte offset, request id) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    offset: Option<usize>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            offset: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the path of the input the error relates to
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add a byte offset into the offending input
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(offset) = self.offset {
            write!(f, " (offset: {})", offset)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain failures raised by Redline operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RedlineError {
    /// A delimiter token is not part of a well-formed pair
    #[error("Malformed track-changes delimiter {token} at byte {offset} ({reason:?})")]
    MalformedDelimiter {
        token: String,
        offset: usize,
        reason: IssueReason,
    },

    /// A view mode name did not parse
    #[error("Unknown view mode: {value}")]
    UnknownViewMode { value: String },

    /// An enumerated option value did not parse
    #[error("Unknown {option} value: {value}")]
    UnknownOptionValue { option: String, value: String },

    /// Configuration could not be parsed or failed validation
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Reading or writing a document failed
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Serialization error (JSON encoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<RedlineError> for ExError {
    fn from(err: RedlineError) -> Self {
        match err {
            RedlineError::MalformedDelimiter {
                token,
                offset,
                reason,
            } => ExError::new(ExErrorKind::MalformedMarkup)
                .with_offset(offset)
                .with_message(format!("{:?} delimiter {}", reason, token)),

            RedlineError::UnknownViewMode { value } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Unknown view mode: {}", value)),

            RedlineError::UnknownOptionValue { option, value } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_message(format!("Unknown {} value: {}", option, value))
            }

            RedlineError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }

            RedlineError::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(message),

            RedlineError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for RedlineError {
    fn from(err: serde_json::Error) -> Self {
        RedlineError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for RedlineError {
    fn from(err: toml::de::Error) -> Self {
        RedlineError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        RedlineError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::MalformedMarkup, "ERR_MALFORMED_MARKUP"),
            (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
            (ExErrorKind::Io, "ERR_IO"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_op_and_offset() {
        let err = ExError::new(ExErrorKind::MalformedMarkup)
            .with_op("sanitize_strict")
            .with_offset(7)
            .with_message("Unmatched delimiter ⟪INS⟫");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_MALFORMED_MARKUP] in operation 'sanitize_strict'"));
        assert!(rendered.contains("(offset: 7)"));
    }

    #[test]
    fn test_request_id_none_by_default() {
        let err = ExError::new(ExErrorKind::Serialization);
        assert!(err.request_id().is_none());
        assert!(err.path().is_none());
    }
}
