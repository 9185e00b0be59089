use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Result type for type expression parsing
pub type Result<T> = std::result::Result<T, TypeError>;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum TypeError {
    #[error("malformed type expression '{src}': {reason}")]
    #[diagnostic(
        code(cs2ts::malformed_type),
        help("a type expression is a name, optional <generic, arguments>, an optional '?' and any number of [] or [,] suffixes")
    )]
    Malformed {
        #[source_code]
        src: String,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },
}

impl TypeError {
    /// Create a malformed expression error pointing at `span` inside `src`.
    pub fn malformed(
        src: impl Into<String>,
        span: impl Into<SourceSpan>,
        reason: impl Into<String>,
    ) -> Self {
        TypeError::Malformed {
            src: src.into(),
            span: span.into(),
            reason: reason.into(),
        }
    }

    /// The human readable reason.
    pub fn reason(&self) -> &str {
        match self {
            TypeError::Malformed { reason, .. } => reason,
        }
    }

    /// Byte offset of the offending position in the expression.
    pub fn offset(&self) -> usize {
        match self {
            TypeError::Malformed { span, .. } => span.offset(),
        }
    }
}
