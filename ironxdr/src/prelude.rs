//! Prelude module for convenient imports.
//!
//! This module re-exports the runtime traits used by generated code along
//! with the code generation entry points.
//!
//! ```
//! use ironxdr::prelude::*;
//!
//! let mut syms = SymbolTable::new();
//! syms.parse_str("enum Color { RED = 0 };")?;
//! let code = Generator::new(&syms).generate()?;
//! assert!(code.contains("pub const RED: Color = Color(0);"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Runtime
pub use ironxdr_core::prelude::*;

// Front end
pub use ironxdr_schema::{ParseError, SchemaError, Symbol, SymbolTable};

// Code generation
pub use ironxdr_codegen::{CodegenError, Generator, GeneratorOptions};
