//! String transformation utilities for code generation

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static NON_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid identifier regex"));

/// Guard name used when the output has no file name to derive one from
pub const DEFAULT_GUARD: &str = "GENERATED_MESSAGES_HPP";

/// Converts a string to SCREAMING_SNAKE_CASE for preprocessor macro names.
///
/// Runs of characters that cannot appear in an identifier collapse into a
/// single underscore, and a leading digit gets an underscore prefix.
///
/// # Examples
/// ```
/// use messagec::core::utils::to_macro_case;
///
/// assert_eq!(to_macro_case("messages.hpp"), "MESSAGES_HPP");
/// assert_eq!(to_macro_case("net-errors.v2.h"), "NET_ERRORS_V2_H");
/// ```
pub fn to_macro_case(s: &str) -> String {
    let replaced = NON_IDENTIFIER.replace_all(s, "_");
    let trimmed = replaced.trim_matches('_').to_uppercase();

    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{trimmed}")
    } else {
        trimmed
    }
}

/// Derives the include guard macro for an output file path.
///
/// Only the file name takes part, so the same header generated into
/// different directories keeps the same guard.
pub fn guard_macro_name(path: &Path) -> String {
    path.file_name()
        .map(|name| to_macro_case(&name.to_string_lossy()))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_GUARD.to_string())
}
