//! # IronXDR Codegen
//!
//! Rust code generation from XDR (RFC 4506) interface definitions.
//!
//! This crate provides:
//! - Type resolution (typedef chains, constant bounds)
//! - Naming and emission of inline nested types
//! - Memoized bounded wrapper types
//! - Generators for constants, typedefs, structs, enums and unions
//! - Build script integration
//!
//! Generated code is written against the `ironxdr-core` runtime.

pub mod build;
pub mod error;
pub mod generator;
pub mod rust;

pub use error::CodegenError;
pub use generator::{Generator, GeneratorOptions};

use ironxdr_schema::SymbolTable;
use std::path::Path;

/// Generates Rust code from XDR source text.
///
/// # Errors
/// Returns `CodegenError` if parsing or validation fails.
pub fn generate_from_str(source: &str) -> Result<String, CodegenError> {
    let mut syms = SymbolTable::new();
    syms.parse_str(source)?;
    Generator::new(&syms).generate()
}

/// Generates Rust code from one XDR file.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(path: &Path) -> Result<String, CodegenError> {
    let source = std::fs::read_to_string(path)?;
    generate_from_str(&source)
}

/// Generates Rust code from several XDR files sharing one namespace.
///
/// Every file is attempted and each failure is logged; if any fails,
/// nothing is generated.
///
/// # Errors
/// Returns `CodegenError::FrontEnd` if any input fails.
pub fn generate_from_files<P: AsRef<Path>>(paths: &[P]) -> Result<String, CodegenError> {
    generate_from_files_with_options(paths, GeneratorOptions::default())
}

/// Like [`generate_from_files`], with explicit options.
///
/// # Errors
/// Returns `CodegenError::FrontEnd` if any input fails.
pub fn generate_from_files_with_options<P: AsRef<Path>>(
    paths: &[P],
    options: GeneratorOptions,
) -> Result<String, CodegenError> {
    let mut syms = SymbolTable::new();
    for path in paths {
        syms.parse_file(path);
    }
    for failure in syms.failures() {
        tracing::error!("{}", failure);
    }
    Generator::new(&syms).with_options(options).generate()
}
