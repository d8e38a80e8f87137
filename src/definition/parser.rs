//! Definition parser - drives the compiler context line by line

use std::io::{BufRead, Write};

use tracing::{trace, warn};

use crate::core::error::{Error, Result};
use crate::definition::tokenize;
use crate::generation::{CompilerContext, GeneratedFunction, GenerationError, Template};

/// Keyword that opens a namespace block
pub const PACKAGE_KEYWORD: &str = "package";

/// Classification of one tokenized line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionLine {
    /// Blank or comment line
    Empty,
    /// `package <name>`
    Namespace(String),
    /// `<name> <template>`
    Message { name: String, template: String },
    /// Anything else; carries the token count
    Ignored(usize),
}

impl DefinitionLine {
    pub fn classify(mut tokens: Vec<String>) -> Self {
        match tokens.len() {
            0 => DefinitionLine::Empty,
            n if tokens[0] == PACKAGE_KEYWORD => {
                if n >= 2 {
                    DefinitionLine::Namespace(tokens.swap_remove(1))
                } else {
                    DefinitionLine::Ignored(n)
                }
            }
            2 => {
                let template = tokens.pop().unwrap_or_default();
                let name = tokens.pop().unwrap_or_default();
                DefinitionLine::Message { name, template }
            }
            n => DefinitionLine::Ignored(n),
        }
    }
}

/// Reads a definition file and feeds namespaces and functions to the context
pub struct DefinitionParser<'a, W: Write> {
    context: &'a mut CompilerContext<W>,
}

impl<'a, W: Write> DefinitionParser<'a, W> {
    pub fn new(context: &'a mut CompilerContext<W>) -> Self {
        Self { context }
    }

    /// Consume every line of `reader`, then close any open namespace
    pub fn parse<R: BufRead>(&mut self, reader: R) -> Result<()> {
        self.context.begin()?;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            self.parse_line(index + 1, &line)?;
        }
        self.context.close_namespace()?;
        Ok(())
    }

    /// Handle a single line; `line_number` is 1-based and used in diagnostics
    pub fn parse_line(&mut self, line_number: usize, line: &str) -> Result<()> {
        self.context.summary.lines += 1;

        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(e) => return self.malformed(line_number, e),
        };

        match DefinitionLine::classify(tokens) {
            DefinitionLine::Empty => {}
            DefinitionLine::Namespace(name) => self.context.open_namespace(&name)?,
            DefinitionLine::Message { name, template } => {
                let template = match Template::parse(&template) {
                    Ok(template) => template,
                    Err(e) => return self.malformed(line_number, e),
                };
                let function = GeneratedFunction::new(name, &template);
                self.context.emit_function(&function)?;
            }
            DefinitionLine::Ignored(count) => {
                trace!(line = line_number, tokens = count, "Ignoring line");
                self.context.summary.skipped += 1;
            }
        }
        Ok(())
    }

    fn malformed(&mut self, line_number: usize, error: GenerationError) -> Result<()> {
        if self.context.options().strict {
            return Err(Error::definition(line_number, error));
        }
        warn!(line = line_number, "Skipping malformed line {}: {}", line_number, error);
        self.context.summary.skipped += 1;
        Ok(())
    }
}
