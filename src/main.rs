//! messagec CLI entrypoint
//! Parses command-line arguments and dispatches to the message compiler.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use messagec::{CompileRequest, CompilerOptions, GuardStyle, Target};
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "messagec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Message definition file to compile
    #[arg(long, value_name = "MESSAGE FILE")]
    msgfile: PathBuf,
    /// Generated output file
    #[arg(long, value_name = "GENERATED FILE")]
    hppfile: PathBuf,
    /// TOML file with compiler options
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output language: cpp or rust
    #[arg(long)]
    target: Option<String>,
    /// Include guard style for C++ output: pragma or ifndef
    #[arg(long)]
    guard: Option<String>,
    /// Fail on malformed lines instead of skipping them
    #[arg(long)]
    strict: bool,
    /// Do not warn about duplicate names or unused parameters
    #[arg(long)]
    no_lint: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Options from the config file, if any, overridden by flags
    fn compiler_options(&self) -> anyhow::Result<CompilerOptions> {
        let mut options = match &self.config {
            Some(path) => CompilerOptions::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => CompilerOptions::default(),
        };

        if let Some(target) = &self.target {
            options.target = target
                .parse::<Target>()
                .map_err(|e| anyhow::anyhow!("Invalid target '{}': {}", target, e))?;
        }
        if let Some(guard) = &self.guard {
            options.guard = guard
                .parse::<GuardStyle>()
                .map_err(|e| anyhow::anyhow!("Invalid guard '{}': {}", guard, e))?;
        }
        if self.strict {
            options.strict = true;
        }
        if self.no_lint {
            options.lint = false;
        }
        Ok(options)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let options = cli.compiler_options()?;

    info!(
        "Generating output file {} for message file {}",
        cli.hppfile.display(),
        cli.msgfile.display()
    );

    let summary = CompileRequest::new(&cli.msgfile, &cli.hppfile)
        .with_options(options)
        .execute()
        .with_context(|| {
            format!(
                "Failed to compile {} into {}",
                cli.msgfile.display(),
                cli.hppfile.display()
            )
        })?;

    info!(
        namespaces = summary.namespaces,
        functions = summary.functions,
        skipped = summary.skipped,
        output_path = %cli.hppfile.display(),
        "Successfully generated messages"
    );
    Ok(())
}
