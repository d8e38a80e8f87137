//! Configuration options for a compiler run.
//!
//! Options can be read from a TOML file and then overridden from the command
//! line. Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! target = "cpp"      # or "rust"
//! guard = "ifndef"    # or "pragma" (default)
//! strict = false      # fail on malformed lines instead of skipping them
//! lint = true         # warn about duplicate names and unused parameters
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::core::error::Result;
use crate::generation::{GenerationError, Target};

/// How generated C++ headers protect against double inclusion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardStyle {
    /// `#pragma once`
    #[default]
    Pragma,
    /// `#ifndef` / `#define` / `#endif` around the whole file
    Ifndef,
}

impl fmt::Display for GuardStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardStyle::Pragma => write!(f, "pragma"),
            GuardStyle::Ifndef => write!(f, "ifndef"),
        }
    }
}

impl FromStr for GuardStyle {
    type Err = GenerationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pragma" | "pragma-once" => Ok(GuardStyle::Pragma),
            "ifndef" | "define" => Ok(GuardStyle::Ifndef),
            _ => Err(GenerationError::UnknownGuardStyle(s.to_string())),
        }
    }
}

/// Options controlling one compiler run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerOptions {
    /// Language of the generated file
    pub target: Target,

    /// Include guard style, only meaningful for C++ output
    pub guard: GuardStyle,

    /// Abort on malformed lines instead of skipping them
    pub strict: bool,

    /// Warn about duplicate message names and unused parameters
    pub lint: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            target: Target::Cpp,
            guard: GuardStyle::Pragma,
            strict: false,
            lint: true,
        }
    }
}

impl CompilerOptions {
    /// Parse options from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
