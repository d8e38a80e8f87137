//! Factory for selecting the renderer of the configured target

use std::path::Path;

use crate::core::config::CompilerOptions;
use crate::core::utils::{DEFAULT_GUARD, guard_macro_name};
use crate::generation::{Target, TargetRenderer};

use super::{CppRenderer, RustRenderer};

/// Select the renderer for `options.target`
///
/// `output` names the generated file, if there is one; C++ include guards
/// are derived from its file name.
pub fn select_renderer(options: &CompilerOptions, output: Option<&Path>) -> Box<dyn TargetRenderer> {
    match options.target {
        Target::Cpp => {
            let guard_macro = output
                .map(guard_macro_name)
                .unwrap_or_else(|| DEFAULT_GUARD.to_string());
            Box::new(CppRenderer::new(options.guard, guard_macro))
        }
        Target::Rust => Box::new(RustRenderer::new()),
    }
}
