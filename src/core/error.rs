//! Error handling for the messagec compiler.
//!
//! This module defines the main error type `Error` returned by the compile
//! entry points, along with a convenient `Result` type alias. Line-level
//! problems found while reading a definition file are described by
//! [`GenerationError`]; they only surface here when strict mode turns them
//! into fatal errors.
//!
//! # Examples
//!
//! ```
//! use messagec::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("unknown target"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

use crate::generation::GenerationError;

/// Result type for messagec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for messagec operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading the definition file or writing the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Configuration parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed definition line, only raised in strict mode
    #[error("Definition error on line {line}: {source}")]
    Definition {
        line: usize,
        #[source]
        source: GenerationError,
    },
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new definition error for the given 1-based line number
    pub fn definition(line: usize, source: GenerationError) -> Self {
        Self::Definition { line, source }
    }
}
