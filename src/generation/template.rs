//! Placeholder analysis of message templates
//!
//! A template is plain text with positional placeholders in the usual
//! format-string syntax: `{0}`, `{1}`, ... Doubled braces (`{{`, `}}`) are
//! literal braces, and anything after `:` or `!` inside a placeholder (a
//! format spec or conversion) is accepted but ignored. Double quotes left in
//! the literal text are dropped since they only come from the quoting used in
//! definition files.
//!
//! # Examples
//!
//! ```
//! use messagec::generation::Template;
//!
//! let template = Template::parse("Hi {0}, you have {1} items").unwrap();
//! assert_eq!(template.parameter_count(), 2);
//! assert_eq!(template.segments().len(), 3);
//! ```

use std::str::FromStr;

use crate::generation::GenerationError;

/// Most parameters a generated function may declare
///
/// C++ compilers are only required to accept 1024 template arguments.
pub const MAX_PARAMETERS: usize = 1024;

/// A literal prefix optionally followed by a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSegment {
    pub literal: String,
    pub index: Option<usize>,
}

impl TemplateSegment {
    pub fn new(literal: impl Into<String>, index: Option<usize>) -> Self {
        Self {
            literal: literal.into(),
            index,
        }
    }
}

/// An analyzed message template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<TemplateSegment>,
}

impl Template {
    /// Scan a template string into its ordered segments
    pub fn parse(source: &str) -> Result<Self, GenerationError> {
        let chars: Vec<char> = source.chars().collect();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '{' if chars.get(i + 1) == Some(&'{') => {
                    literal.push('{');
                    i += 2;
                }
                '{' => {
                    let close = chars[i + 1..]
                        .iter()
                        .position(|&c| c == '}')
                        .map(|offset| i + 1 + offset)
                        .ok_or_else(|| {
                            GenerationError::template(i + 1, "placeholder is never closed")
                        })?;
                    let field: String = chars[i + 1..close].iter().collect();
                    let index = parse_field(&field, i + 1)?;
                    segments.push(TemplateSegment::new(std::mem::take(&mut literal), Some(index)));
                    i = close + 1;
                }
                '}' if chars.get(i + 1) == Some(&'}') => {
                    literal.push('}');
                    i += 2;
                }
                '}' => {
                    return Err(GenerationError::template(
                        i + 1,
                        "single '}' encountered; use '}}' for a literal brace",
                    ));
                }
                '"' => i += 1,
                c => {
                    literal.push(c);
                    i += 1;
                }
            }
        }

        if !literal.is_empty() {
            segments.push(TemplateSegment::new(literal, None));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    /// Highest placeholder index plus one, or zero without placeholders
    pub fn parameter_count(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|segment| segment.index)
            .max()
            .map_or(0, |max| max + 1)
    }

}

impl FromStr for Template {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Resolve the field between braces to a positional index
fn parse_field(field: &str, column: usize) -> Result<usize, GenerationError> {
    let name = field
        .split([':', '!'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() {
        return Err(GenerationError::template(
            column,
            "placeholder needs an explicit index such as {0}",
        ));
    }

    if !name.chars().all(|c| c.is_ascii_digit()) {
        return Err(GenerationError::template(
            column,
            format!("placeholder '{name}' is not a numeric index"),
        ));
    }

    match name.parse::<usize>() {
        Ok(index) if index < MAX_PARAMETERS => Ok(index),
        _ => Err(GenerationError::template(
            column,
            format!(
                "placeholder index {name} is out of range (at most {} parameters)",
                MAX_PARAMETERS
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(template: &Template) -> Vec<Option<usize>> {
        template.segments().iter().map(|s| s.index).collect()
    }

    #[test]
    fn test_parse_without_placeholders() {
        let template = Template::parse("Welcome").unwrap();
        assert_eq!(template.segments(), &[TemplateSegment::new("Welcome", None)]);
        assert_eq!(template.parameter_count(), 0);
    }

    #[test]
    fn test_parse_empty_template() {
        let template = Template::parse("").unwrap();
        assert!(template.segments().is_empty());
        assert_eq!(template.parameter_count(), 0);
    }

    #[test]
    fn test_parse_placeholders_in_order() {
        let template = Template::parse("Hi {0}, you have {1} items").unwrap();
        assert_eq!(
            template.segments(),
            &[
                TemplateSegment::new("Hi ", Some(0)),
                TemplateSegment::new(", you have ", Some(1)),
                TemplateSegment::new(" items", None),
            ]
        );
        assert_eq!(template.parameter_count(), 2);
    }

    #[test]
    fn test_parse_leading_placeholder_has_empty_prefix() {
        let template = Template::parse("{0} failed").unwrap();
        assert_eq!(template.segments()[0], TemplateSegment::new("", Some(0)));
        assert_eq!(indices(&template), vec![Some(0), None]);
    }

    #[test]
    fn test_parameter_count_with_gap() {
        let template = Template::parse("{0} and {2}").unwrap();
        assert_eq!(template.parameter_count(), 3);
        assert_eq!(indices(&template), vec![Some(0), Some(2)]);
    }

    #[test]
    fn test_repeated_and_out_of_order_indices() {
        let template = Template::parse("{1} then {0} then {1}").unwrap();
        assert_eq!(indices(&template), vec![Some(1), Some(0), Some(1)]);
        assert_eq!(template.parameter_count(), 2);
    }

    #[test]
    fn test_quotes_are_stripped_from_literals() {
        let template = Template::parse("say \"cheese\" {0}").unwrap();
        assert_eq!(template.segments()[0].literal, "say cheese ");
    }

    #[test]
    fn test_escaped_braces_are_literal() {
        let template = Template::parse("set {{{0}}} done").unwrap();
        assert_eq!(
            template.segments(),
            &[
                TemplateSegment::new("set {", Some(0)),
                TemplateSegment::new("} done", None),
            ]
        );
    }

    #[test]
    fn test_format_spec_and_conversion_are_ignored() {
        let template = Template::parse("{0:>8} {1!r}").unwrap();
        assert_eq!(indices(&template), vec![Some(0), Some(1)]);
        assert_eq!(template.parameter_count(), 2);
    }

    #[test]
    fn test_backslashes_pass_through() {
        let template = Template::parse("line\\n{0}").unwrap();
        assert_eq!(template.segments()[0].literal, "line\\n");
    }

    #[test]
    fn test_unclosed_placeholder_is_rejected() {
        let err = Template::parse("oops {0").unwrap_err();
        assert_eq!(
            err,
            GenerationError::template(6, "placeholder is never closed")
        );
    }

    #[test]
    fn test_single_closing_brace_is_rejected() {
        let err = Template::parse("a } b").unwrap_err();
        assert!(matches!(err, GenerationError::InvalidTemplate { column: 3, .. }));
    }

    #[test]
    fn test_non_numeric_placeholders_are_rejected() {
        assert!(matches!(
            Template::parse("{}").unwrap_err(),
            GenerationError::InvalidTemplate { column: 1, .. }
        ));
        let err = Template::parse("hello {name}").unwrap_err();
        assert!(err.to_string().contains("'name' is not a numeric index"));
    }

    #[test]
    fn test_from_str() {
        let template: Template = "{3}".parse().unwrap();
        assert_eq!(template.parameter_count(), 4);
    }

    #[test]
    fn test_highest_allowed_index() {
        let last = format!("{{{}}}", MAX_PARAMETERS - 1);
        assert_eq!(Template::parse(&last).unwrap().parameter_count(), MAX_PARAMETERS);
    }

    #[test]
    fn test_oversized_indices_are_rejected() {
        let err = Template::parse("big {18446744073709551615}").unwrap_err();
        assert!(matches!(err, GenerationError::InvalidTemplate { column: 5, .. }));
        assert!(err.to_string().contains("out of range"));

        // Beyond usize entirely
        assert!(Template::parse("{99999999999999999999999}").is_err());
        assert!(Template::parse("{2000000}").is_err());
        assert!(Template::parse(&format!("{{{}}}", MAX_PARAMETERS)).is_err());
    }

    #[test]
    fn test_signed_index_is_not_numeric() {
        let err = Template::parse("{+1}").unwrap_err();
        assert!(err.to_string().contains("'+1' is not a numeric index"));
    }
}
