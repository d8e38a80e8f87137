//! Rust module renderer

use crate::generation::{BodyPart, GeneratedFunction, Target, TargetRenderer};

/// Renders messages as generic functions over `std::fmt::Display`
///
/// Parameters become `p0`, `p1`, ... and unused ones are prefixed with an
/// underscore so the generated code compiles without warnings.
pub struct RustRenderer;

impl RustRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetRenderer for RustRenderer {
    fn target(&self) -> Target {
        Target::Rust
    }

    fn preamble(&self) -> String {
        "// @generated by messagec. Do not edit by hand.\n".to_string()
    }

    fn open_namespace(&self, name: &str) -> String {
        format!("\npub mod {name} {{\n")
    }

    fn close_namespace(&self, name: &str) -> String {
        format!("\n}} // mod {name}\n")
    }

    fn function(&self, function: &GeneratedFunction) -> String {
        let unused = function.unused_parameters();
        let parameters = function.parameters();
        let mut out = String::from("\n");

        let generics = if function.is_generic() {
            let bounds: Vec<String> = parameters
                .iter()
                .map(|p| format!("{}: std::fmt::Display", p.type_name()))
                .collect();
            format!("<{}>", bounds.join(", "))
        } else {
            String::new()
        };

        let arguments: Vec<String> = parameters
            .iter()
            .map(|p| {
                let prefix = if unused.contains(p) { "_" } else { "" };
                format!("{prefix}p{}: {}", p.index, p.type_name())
            })
            .collect();

        out.push_str(&format!(
            "pub fn {}{}({}) -> String {{\n",
            function.name,
            generics,
            arguments.join(", ")
        ));

        if function.body.is_empty() {
            out.push_str("    String::new()\n");
        } else {
            out.push_str("    let mut out = String::new();\n");
            for part in &function.body {
                match part {
                    BodyPart::Literal(text) => {
                        out.push_str(&format!("    out.push_str(\"{text}\");\n"));
                    }
                    BodyPart::Parameter(index) => {
                        out.push_str(&format!("    out.push_str(&p{index}.to_string());\n"));
                    }
                }
            }
            out.push_str("    out\n");
        }

        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::Template;

    fn render(name: &str, template: &str) -> String {
        let function = GeneratedFunction::new(name, &Template::parse(template).unwrap());
        RustRenderer::new().function(&function)
    }

    #[test]
    fn test_preamble_and_namespaces() {
        let renderer = RustRenderer::new();
        assert!(renderer.preamble().starts_with("// @generated"));
        assert_eq!(renderer.postamble(), "");
        assert_eq!(renderer.open_namespace("demo"), "\npub mod demo {\n");
        assert_eq!(renderer.close_namespace("demo"), "\n} // mod demo\n");
    }

    #[test]
    fn test_plain_function() {
        assert_eq!(
            render("greet", "Welcome"),
            "\npub fn greet() -> String {\n    let mut out = String::new();\n    out.push_str(\"Welcome\");\n    out\n}\n"
        );
    }

    #[test]
    fn test_generic_function() {
        let text = render("hello", "Hi {0}, you have {1} items");
        assert!(text.contains(
            "pub fn hello<T0: std::fmt::Display, T1: std::fmt::Display>(p0: T0, p1: T1) -> String {"
        ));
        assert!(text.contains("    out.push_str(&p0.to_string());\n"));
        assert!(text.contains("    out.push_str(\" items\");\n"));
    }

    #[test]
    fn test_unused_parameter_is_underscored() {
        let text = render("sparse", "{0}{2}");
        assert!(text.contains("(p0: T0, _p1: T1, p2: T2)"));
    }

    #[test]
    fn test_empty_body() {
        let text = render("nothing", "");
        assert_eq!(text, "\npub fn nothing() -> String {\n    String::new()\n}\n");
    }
}
