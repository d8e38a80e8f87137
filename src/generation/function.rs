//! Typed description of one generated formatting function

use std::collections::BTreeSet;

use crate::generation::Template;

/// One piece of a generated function body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyPart {
    Literal(String),
    Parameter(usize),
}

/// A positional parameter `P<n>` of generic type `T<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub index: usize,
}

impl Parameter {
    pub fn type_name(&self) -> String {
        format!("T{}", self.index)
    }

    pub fn value_name(&self) -> String {
        format!("P{}", self.index)
    }
}

/// A message function ready to be rendered for any target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFunction {
    pub name: String,
    pub parameter_count: usize,
    pub body: Vec<BodyPart>,
}

impl GeneratedFunction {
    /// Build the function for a message definition from its analyzed template
    ///
    /// Empty literal fragments are dropped from the body; parameters keep
    /// the order in which the template references them.
    pub fn new(name: impl Into<String>, template: &Template) -> Self {
        let mut body = Vec::new();
        for segment in template.segments() {
            if !segment.literal.is_empty() {
                body.push(BodyPart::Literal(segment.literal.clone()));
            }
            if let Some(index) = segment.index {
                body.push(BodyPart::Parameter(index));
            }
        }

        Self {
            name: name.into(),
            parameter_count: template.parameter_count(),
            body,
        }
    }

    pub fn is_generic(&self) -> bool {
        self.parameter_count > 0
    }

    /// Declared parameters `0..parameter_count`, used or not
    pub fn parameters(&self) -> Vec<Parameter> {
        (0..self.parameter_count)
            .map(|index| Parameter { index })
            .collect()
    }

    /// Declared parameters that the body never references
    pub fn unused_parameters(&self) -> Vec<Parameter> {
        let used: BTreeSet<usize> = self
            .body
            .iter()
            .filter_map(|part| match part {
                BodyPart::Parameter(index) => Some(*index),
                BodyPart::Literal(_) => None,
            })
            .collect();
        self.parameters()
            .into_iter()
            .filter(|p| !used.contains(&p.index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function(name: &str, template: &str) -> GeneratedFunction {
        GeneratedFunction::new(name, &Template::parse(template).unwrap())
    }

    #[test]
    fn test_plain_function() {
        let greet = function("greet", "Welcome");
        assert!(!greet.is_generic());
        assert!(greet.parameters().is_empty());
        assert_eq!(greet.body, vec![BodyPart::Literal("Welcome".to_string())]);
    }

    #[test]
    fn test_generic_function_body_order() {
        let hello = function("hello", "Hi {0}, you have {1} items");
        assert!(hello.is_generic());
        assert_eq!(hello.parameter_count, 2);
        assert_eq!(
            hello.body,
            vec![
                BodyPart::Literal("Hi ".to_string()),
                BodyPart::Parameter(0),
                BodyPart::Literal(", you have ".to_string()),
                BodyPart::Parameter(1),
                BodyPart::Literal(" items".to_string()),
            ]
        );
    }

    #[test]
    fn test_gap_declares_unused_parameter() {
        let sparse = function("sparse", "{0}-{2}");
        let names: Vec<String> = sparse.parameters().iter().map(|p| p.value_name()).collect();
        assert_eq!(names, vec!["P0", "P1", "P2"]);
        assert_eq!(sparse.unused_parameters(), vec![Parameter { index: 1 }]);
    }

    #[test]
    fn test_empty_literals_are_dropped() {
        let bare = function("bare", "{0}{1}");
        assert_eq!(bare.body, vec![BodyPart::Parameter(0), BodyPart::Parameter(1)]);
        assert!(bare.unused_parameters().is_empty());
    }

    #[test]
    fn test_repeated_references_count_once() {
        let echo = function("echo", "{3} {3}");
        let unused: Vec<usize> = echo.unused_parameters().iter().map(|p| p.index).collect();
        assert_eq!(unused, vec![0, 1, 2]);
    }

    #[test]
    fn test_parameter_names() {
        let parameter = Parameter { index: 4 };
        assert_eq!(parameter.type_name(), "T4");
        assert_eq!(parameter.value_name(), "P4");
    }
}
