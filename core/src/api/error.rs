//! Public error types for the Styx API.
//!
//! Internal parse errors are converted to these types at the API boundary.

use std::fmt;

use crate::parser::{ParseError, ParseErrorKind, Span};

/// Public error type for Styx operations.
#[derive(Debug)]
pub enum Error {
    /// The line could not be parsed.
    ///
    /// Contains one or more diagnostics and the source they point into.
    Compilation {
        diagnostics: Vec<Diagnostic>,
        source: String,
    },

    /// Resource limits exceeded (nesting deeper than the configured maximum).
    ResourceExceeded(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Compilation { diagnostics, .. } => {
                let error_count = diagnostics
                    .iter()
                    .filter(|d| d.severity == Severity::Error)
                    .count();
                write!(f, "Parsing failed with {} error(s)", error_count)
            }
            Error::ResourceExceeded(msg) => write!(f, "Resource limit exceeded: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Suggestions on how to fix the issue.
    pub help: Vec<String>,

    /// Stable error code (e.g., "P001").
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        if let ParseErrorKind::MaxDepthExceeded { depth, max_depth } = err.kind {
            return Error::ResourceExceeded(format!(
                "nesting depth {} exceeds maximum of {}",
                depth, max_depth
            ));
        }
        Error::Compilation {
            diagnostics: vec![err.to_diagnostic()],
            source: err.source,
        }
    }
}
