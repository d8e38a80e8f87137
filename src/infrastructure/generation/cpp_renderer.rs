//! C++ header renderer

use crate::core::config::GuardStyle;
use crate::generation::{BodyPart, GeneratedFunction, Target, TargetRenderer};

/// Renders messages as inline function templates returning `std::string`
pub struct CppRenderer {
    guard: GuardStyle,
    guard_macro: String,
}

impl CppRenderer {
    pub fn new(guard: GuardStyle, guard_macro: impl Into<String>) -> Self {
        Self {
            guard,
            guard_macro: guard_macro.into(),
        }
    }

    fn signature(function: &GeneratedFunction) -> String {
        let parameters = function.parameters();
        let mut out = String::new();

        if function.is_generic() {
            let type_list: Vec<String> = parameters
                .iter()
                .map(|p| format!("typename {}", p.type_name()))
                .collect();
            out.push_str(&format!("template <{}>\n", type_list.join(", ")));
        }

        let value_list: Vec<String> = parameters
            .iter()
            .map(|p| format!("{} {}", p.type_name(), p.value_name()))
            .collect();
        out.push_str(&format!(
            "inline std::string {}({})\n",
            function.name,
            value_list.join(", ")
        ));
        out
    }
}

impl TargetRenderer for CppRenderer {
    fn target(&self) -> Target {
        Target::Cpp
    }

    fn preamble(&self) -> String {
        let mut out = String::new();
        match self.guard {
            GuardStyle::Pragma => out.push_str("#pragma once\n"),
            GuardStyle::Ifndef => {
                out.push_str(&format!("#ifndef {}\n", self.guard_macro));
                out.push_str(&format!("#define {}\n", self.guard_macro));
            }
        }
        out.push_str("#include <string>\n");
        out.push_str("#include <sstream>\n");
        out
    }

    fn postamble(&self) -> String {
        match self.guard {
            GuardStyle::Pragma => String::new(),
            GuardStyle::Ifndef => format!("\n#endif // {}\n", self.guard_macro),
        }
    }

    fn open_namespace(&self, name: &str) -> String {
        format!("\nnamespace {name} {{\n")
    }

    fn close_namespace(&self, name: &str) -> String {
        format!("\n}} // namespace {name}\n")
    }

    fn function(&self, function: &GeneratedFunction) -> String {
        let mut out = String::from("\n");
        out.push_str(&Self::signature(function));
        out.push_str("{\n");
        out.push_str("    std::ostringstream out;\n");

        if !function.body.is_empty() {
            let stream: Vec<String> = function
                .body
                .iter()
                .map(|part| match part {
                    BodyPart::Literal(text) => format!("\"{text}\""),
                    BodyPart::Parameter(index) => format!("P{index}"),
                })
                .collect();
            out.push_str(&format!("    out << {};\n", stream.join(" << ")));
        }

        out.push_str("    return out.str();\n");
        out.push_str("}\n");
        out
    }
}
