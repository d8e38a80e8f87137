//! Error types for the generation domain

use thiserror::Error;

/// Problems found in a single definition line
///
/// Columns are 1-based character positions within the text that was being
/// scanned: the raw line for the tokenizer, the template for the analyzer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Unterminated quote starting at column {column}")]
    UnterminatedQuote { column: usize },

    #[error("Invalid template at column {column}: {reason}")]
    InvalidTemplate { column: usize, reason: String },

    #[error("Unknown target: {0}")]
    UnknownTarget(String),

    #[error("Unknown include guard style: {0}")]
    UnknownGuardStyle(String),
}

impl GenerationError {
    /// Create a new template error
    pub fn template<S: Into<String>>(column: usize, reason: S) -> Self {
        Self::InvalidTemplate {
            column,
            reason: reason.into(),
        }
    }
}
