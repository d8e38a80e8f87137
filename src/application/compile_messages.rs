//! Use cases for compiling definition files

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::config::CompilerOptions;
use crate::core::error::{Error, Result};
use crate::definition::DefinitionParser;
use crate::generation::{CompileSummary, CompilerContext};
use crate::infrastructure::{create_output_file, open_definition_file, select_renderer};

/// Request to compile one definition file into one output file
#[derive(Debug, Clone)]
pub struct CompileRequest {
    pub msgfile: PathBuf,
    pub hppfile: PathBuf,
    pub options: CompilerOptions,
}

impl CompileRequest {
    pub fn new(msgfile: impl Into<PathBuf>, hppfile: impl Into<PathBuf>) -> Self {
        Self {
            msgfile: msgfile.into(),
            hppfile: hppfile.into(),
            options: CompilerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompilerOptions) -> Self {
        self.options = options;
        self
    }

    /// Refuse to truncate the definition file by writing over it
    pub fn validate(&self) -> Result<()> {
        if self.msgfile == self.hppfile {
            return Err(Error::config(format!(
                "Output file {} would overwrite the message file",
                self.hppfile.display()
            )));
        }
        Ok(())
    }

    pub fn execute(&self) -> Result<CompileSummary> {
        self.validate()?;
        compile_file(&self.msgfile, &self.hppfile, &self.options)
    }
}

/// Compile definitions from `reader` into `writer`
///
/// `output` is the path of the generated file when there is one; it only
/// feeds the include guard name.
pub fn compile<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    options: &CompilerOptions,
    output: Option<&Path>,
) -> Result<(W, CompileSummary)> {
    let renderer = select_renderer(options, output);
    debug!(target_language = %renderer.target(), "Selected renderer");

    let mut context = CompilerContext::new(writer, renderer, options.clone());
    DefinitionParser::new(&mut context).parse(reader)?;
    Ok(context.finish()?)
}

/// Compile definition text held in memory
///
/// # Examples
/// ```
/// use messagec::{compile_str, CompilerOptions};
///
/// let output = compile_str("greet Welcome\n", &CompilerOptions::default()).unwrap();
/// assert!(output.contains("inline std::string greet()"));
/// ```
pub fn compile_str(input: &str, options: &CompilerOptions) -> Result<String> {
    let (sink, _) = compile(input.as_bytes(), Vec::new(), options, None)?;
    String::from_utf8(sink).map_err(|e| Error::config(format!("Generated output is not UTF-8: {e}")))
}

/// Compile `msgfile` into `hppfile`
///
/// The output file is only created once the definition file has been
/// opened successfully.
pub fn compile_file(msgfile: &Path, hppfile: &Path, options: &CompilerOptions) -> Result<CompileSummary> {
    if !options.target.matches_extension(hppfile) {
        warn!(
            output_path = %hppfile.display(),
            "Output file {} does not look like {} source (expected .{})",
            hppfile.display(),
            options.target.display_name(),
            options.target.file_extensions()[0]
        );
    }

    let reader = open_definition_file(msgfile)?;
    let writer = create_output_file(hppfile)?;
    let (_, summary) = compile(reader, writer, options, Some(hppfile))?;
    Ok(summary)
}
