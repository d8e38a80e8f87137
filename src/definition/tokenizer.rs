//! Line tokenizer for definition files
//!
//! A line splits into whitespace-separated words, except that a run enclosed
//! in double quotes is one token with the quotes removed. Comment lines (first
//! non-whitespace character `#`) and blank lines produce no tokens.

use crate::generation::GenerationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    OutsideQuote,
    InsideQuote { opened_at: usize },
}

/// Returns true for lines the definition parser never sees
pub fn is_comment_or_blank(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Split a raw definition line into tokens
///
/// A quote opens a quoted run only at the start of a token; inside a bare
/// word it is kept as an ordinary character. Text right after a closing
/// quote begins a new token, and adjacent quoted runs are separate tokens:
/// `name "a b" "c d"` yields three.
///
/// # Examples
/// ```
/// use messagec::definition::tokenize;
///
/// let tokens = tokenize(r#"hello "Hi {0}, welcome""#).unwrap();
/// assert_eq!(tokens, vec!["hello", "Hi {0}, welcome"]);
/// ```
pub fn tokenize(line: &str) -> Result<Vec<String>, GenerationError> {
    if is_comment_or_blank(line) {
        return Ok(Vec::new());
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut state = ScanState::OutsideQuote;

    for (offset, ch) in line.chars().enumerate() {
        match state {
            ScanState::OutsideQuote => {
                if ch.is_whitespace() {
                    if in_word {
                        tokens.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                } else if ch == '"' && !in_word {
                    state = ScanState::InsideQuote {
                        opened_at: offset + 1,
                    };
                } else {
                    current.push(ch);
                    in_word = true;
                }
            }
            ScanState::InsideQuote { .. } => {
                if ch == '"' {
                    tokens.push(std::mem::take(&mut current));
                    state = ScanState::OutsideQuote;
                } else {
                    current.push(ch);
                }
            }
        }
    }

    match state {
        ScanState::InsideQuote { opened_at } => {
            Err(GenerationError::UnterminatedQuote { column: opened_at })
        }
        ScanState::OutsideQuote => {
            if in_word {
                tokens.push(current);
            }
            Ok(tokens)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_words() {
        assert_eq!(tokenize("package demo").unwrap(), vec!["package", "demo"]);
        assert_eq!(
            tokenize("  \tgreet   Welcome  ").unwrap(),
            vec!["greet", "Welcome"]
        );
    }

    #[test]
    fn test_quoted_run_is_one_token() {
        assert_eq!(
            tokenize(r#"hello "Hi {0}, you have {1} items""#).unwrap(),
            vec!["hello", "Hi {0}, you have {1} items"]
        );
    }

    #[test]
    fn test_empty_quotes_yield_empty_token() {
        assert_eq!(tokenize(r#"blank """#).unwrap(), vec!["blank", ""]);
    }

    #[test]
    fn test_each_quoted_run_is_separate() {
        assert_eq!(
            tokenize(r#"name "a b" "c d""#).unwrap(),
            vec!["name", "a b", "c d"]
        );
    }

    #[test]
    fn test_quote_inside_word_is_kept() {
        assert_eq!(
            tokenize(r#"note say"hi""#).unwrap(),
            vec!["note", "say\"hi\""]
        );
    }

    #[test]
    fn test_text_after_closing_quote_starts_new_token() {
        assert_eq!(tokenize(r#""ab"cd"#).unwrap(), vec!["ab", "cd"]);
    }

    #[test]
    fn test_comments_and_blanks_yield_nothing() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   \t ").unwrap().is_empty());
        assert!(tokenize("# package hidden").unwrap().is_empty());
        assert!(tokenize("    # indented \"unterminated").unwrap().is_empty());
    }

    #[test]
    fn test_hash_later_in_line_is_not_a_comment() {
        assert_eq!(tokenize("tag #1").unwrap(), vec!["tag", "#1"]);
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(
            tokenize(r#"broken "never closed"#).unwrap_err(),
            GenerationError::UnterminatedQuote { column: 8 }
        );
    }

    #[test]
    fn test_is_comment_or_blank() {
        assert!(is_comment_or_blank("\n"));
        assert!(is_comment_or_blank("  # note"));
        assert!(!is_comment_or_blank("greet Welcome"));
    }
}
