//! Core types for the generation domain

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported output languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// C++ header with inline function templates
    #[default]
    #[serde(alias = "c++", alias = "hpp")]
    Cpp,
    /// Rust module with generic `Display` functions
    #[serde(alias = "rs")]
    Rust,
}

impl Target {
    /// Get the display name for this target
    pub fn display_name(&self) -> &'static str {
        match self {
            Target::Cpp => "C++",
            Target::Rust => "Rust",
        }
    }

    /// Get the file extensions conventionally used for generated output,
    /// preferred one first
    pub fn file_extensions(&self) -> &'static [&'static str] {
        match self {
            Target::Cpp => &["hpp", "h", "hh", "hxx"],
            Target::Rust => &["rs"],
        }
    }

    /// Whether `path` carries one of this target's file extensions
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.file_extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Cpp => write!(f, "cpp"),
            Target::Rust => write!(f, "rust"),
        }
    }
}

impl FromStr for Target {
    type Err = crate::generation::GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpp" | "c++" | "hpp" => Ok(Target::Cpp),
            "rust" | "rs" => Ok(Target::Rust),
            _ => Err(crate::generation::GenerationError::UnknownTarget(
                s.to_string(),
            )),
        }
    }
}

/// Counters describing one compiler run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileSummary {
    /// Lines read from the definition file, comments and blanks included
    pub lines: usize,
    /// Namespace blocks opened
    pub namespaces: usize,
    /// Functions written to the output
    pub functions: usize,
    /// Non-empty lines that produced nothing
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_str() {
        assert_eq!(Target::from_str("cpp").unwrap(), Target::Cpp);
        assert_eq!(Target::from_str("rust").unwrap(), Target::Rust);

        // Aliases
        assert_eq!(Target::from_str("c++").unwrap(), Target::Cpp);
        assert_eq!(Target::from_str("hpp").unwrap(), Target::Cpp);
        assert_eq!(Target::from_str("rs").unwrap(), Target::Rust);

        // Case insensitivity
        assert_eq!(Target::from_str("CPP").unwrap(), Target::Cpp);
        assert_eq!(Target::from_str("Rust").unwrap(), Target::Rust);

        assert!(Target::from_str("python").is_err());
        assert!(Target::from_str("").is_err());
    }

    #[test]
    fn test_target_display() {
        assert_eq!(Target::Cpp.to_string(), "cpp");
        assert_eq!(Target::Rust.to_string(), "rust");
        assert_eq!(Target::Cpp.display_name(), "C++");
        assert_eq!(Target::Rust.display_name(), "Rust");
    }

    #[test]
    fn test_target_default() {
        assert_eq!(Target::default(), Target::Cpp);
    }

    #[test]
    fn test_matches_extension() {
        assert!(Target::Cpp.matches_extension(Path::new("out/messages.hpp")));
        assert!(Target::Cpp.matches_extension(Path::new("messages.H")));
        assert!(Target::Rust.matches_extension(Path::new("src/messages.rs")));

        assert!(!Target::Cpp.matches_extension(Path::new("messages.rs")));
        assert!(!Target::Rust.matches_extension(Path::new("messages.hpp")));
        assert!(!Target::Rust.matches_extension(Path::new("messages")));
    }

    #[test]
    fn test_compile_summary_default() {
        let summary = CompileSummary::default();
        assert_eq!(summary.lines, 0);
        assert_eq!(summary.namespaces, 0);
        assert_eq!(summary.functions, 0);
        assert_eq!(summary.skipped, 0);
    }
}
