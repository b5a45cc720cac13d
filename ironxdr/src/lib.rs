//! # IronXDR
//!
//! Rust code generation for XDR (RFC 4506) interface definitions.
//!
//! IronXDR compiles `.x` files (constants, typedefs, structs, enums,
//! unions and RPC program blocks) into Rust type declarations written
//! against a small runtime of wire-value traits.
//!
//! ## Features
//!
//! - **Full XDR type language** - including inline nested types and
//!   bounded strings, opaque data and arrays
//! - **Checked unions** - arm accessors panic when the discriminant selects
//!   another arm
//! - **Open enums** - unknown values survive and print as `unknown_<Enum>`
//! - **Build script integration** - generate into `OUT_DIR` and `include!`
//!
//! ## Quick Start
//!
//! ```
//! let code = ironxdr::codegen::generate_from_str(
//!     "const MAX = 100; typedef string Name<MAX>;",
//! )?;
//! assert!(code.contains("pub type Name = _string_100;"));
//! # Ok::<(), ironxdr::codegen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Runtime traits generated code is written against
//! - [`schema`] - XDR parsing and the symbol table
//! - [`codegen`] - Rust code generation

pub mod prelude;

/// Runtime traits and types used by generated code.
pub mod core {
    pub use ironxdr_core::*;
}

/// XDR parsing, validation and the symbol table.
pub mod schema {
    pub use ironxdr_schema::*;
}

/// Code generation from XDR definitions.
pub mod codegen {
    pub use ironxdr_codegen::*;
}

// Re-export commonly used items at the crate root
pub use ironxdr_codegen::{
    CodegenError, Generator, GeneratorOptions, generate_from_file, generate_from_files,
    generate_from_str,
};
pub use ironxdr_schema::{ParseError, SymbolTable};
