//! Compiler context - the state that flows through a single compiler run

use std::collections::HashSet;
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::core::config::CompilerOptions;
use crate::generation::{CompileSummary, GeneratedFunction, TargetRenderer};

/// Owns the output sink and the namespace bookkeeping of one run
///
/// Output is streamed: every call writes its chunk straight to the sink, in
/// the order the definition parser drives it.
pub struct CompilerContext<W: Write> {
    sink: W,
    renderer: Box<dyn TargetRenderer>,
    options: CompilerOptions,
    namespace: Option<String>,
    defined: HashSet<(Option<String>, String)>,
    started: bool,
    pub summary: CompileSummary,
}

impl<W: Write> CompilerContext<W> {
    /// Create a new compiler context
    pub fn new(sink: W, renderer: Box<dyn TargetRenderer>, options: CompilerOptions) -> Self {
        Self {
            sink,
            renderer,
            options,
            namespace: None,
            defined: HashSet::new(),
            started: false,
            summary: CompileSummary::default(),
        }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Write the preamble; later calls are no-ops
    pub fn begin(&mut self) -> io::Result<()> {
        if !self.started {
            self.started = true;
            let preamble = self.renderer.preamble();
            self.sink.write_all(preamble.as_bytes())?;
        }
        Ok(())
    }

    /// Close the open namespace, if any, and open `name`
    pub fn open_namespace(&mut self, name: &str) -> io::Result<()> {
        self.begin()?;
        self.close_namespace()?;

        debug!(namespace = %name, "Opening namespace");
        let chunk = self.renderer.open_namespace(name);
        self.sink.write_all(chunk.as_bytes())?;
        self.namespace = Some(name.to_string());
        self.summary.namespaces += 1;
        Ok(())
    }

    /// Close the open namespace; does nothing when none is open
    pub fn close_namespace(&mut self) -> io::Result<()> {
        if let Some(name) = self.namespace.take() {
            let chunk = self.renderer.close_namespace(&name);
            self.sink.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }

    /// Render and write one function into the current scope
    pub fn emit_function(&mut self, function: &GeneratedFunction) -> io::Result<()> {
        self.begin()?;
        if self.options.lint {
            self.lint(function);
        }

        debug!(
            function = %function.name,
            parameters = function.parameter_count,
            "Generating function"
        );
        let chunk = self.renderer.function(function);
        self.sink.write_all(chunk.as_bytes())?;
        self.summary.functions += 1;
        Ok(())
    }

    /// Close any open namespace, write the postamble and hand back the sink
    pub fn finish(mut self) -> io::Result<(W, CompileSummary)> {
        self.begin()?;
        self.close_namespace()?;
        let postamble = self.renderer.postamble();
        self.sink.write_all(postamble.as_bytes())?;
        self.sink.flush()?;
        Ok((self.sink, self.summary))
    }

    // Lints are reported only; they never change the generated output.
    fn lint(&mut self, function: &GeneratedFunction) {
        let key = (self.namespace.clone(), function.name.clone());
        if !self.defined.insert(key) {
            warn!(
                function = %function.name,
                namespace = self.namespace.as_deref().unwrap_or("<global>"),
                "Message '{}' is defined more than once in the same scope",
                function.name
            );
        }

        let unused: Vec<String> = function
            .unused_parameters()
            .iter()
            .map(|p| p.value_name())
            .collect();
        if !unused.is_empty() {
            warn!(
                function = %function.name,
                "Message '{}' declares parameters it never uses: {}",
                function.name,
                unused.join(", ")
            );
        }
    }
}
