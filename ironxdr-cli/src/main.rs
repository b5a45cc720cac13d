//! `ironxdr` command-line tool.
//!
//! Reads the XDR files named on the command line into one namespace and
//! writes the generated Rust code to standard output. If any file fails to
//! read or parse, every failure is reported on stderr, nothing is written
//! to stdout, and the exit status is 1.
//!
//! Log verbosity is taken from `RUST_LOG` (default `warn`).

use anyhow::Context;
use clap::Parser;
use ironxdr_codegen::Generator;
use ironxdr_schema::SymbolTable;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generate Rust types from XDR (RFC 4506) definitions.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// XDR source files, sharing one namespace
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = generate(&cli.files).and_then(|code| {
        std::io::stdout()
            .lock()
            .write_all(code.as_bytes())
            .context("Failed to write generated code")
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ironxdr: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parses `files` and generates code for them.
///
/// No files means no output.
fn generate(files: &[PathBuf]) -> anyhow::Result<String> {
    if files.is_empty() {
        return Ok(String::new());
    }

    let mut syms = SymbolTable::new();
    for file in files {
        syms.parse_file(file);
    }
    for failure in syms.failures() {
        eprintln!("{}", failure);
    }
    tracing::debug!("Loaded {} definitions from {} files", syms.len(), files.len());

    Ok(Generator::new(&syms).generate()?)
}
