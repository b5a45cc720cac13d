//! # IronXDR Schema
//!
//! Front end for XDR interface definitions (RFC 4506, with RFC 5531
//! program blocks).
//!
//! This crate provides:
//! - A lexer and recursive-descent parser for `.x` sources
//! - The declaration model consumed by code generation
//! - A symbol table that aggregates any number of input files
//! - Semantic validation of parsed definitions

pub mod error;
pub mod lexer;
pub mod parser;
pub mod program;
pub mod table;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::parse_xdr;
pub use program::{ProcedureDef, ProgramDef, VersionDef};
pub use table::SymbolTable;
pub use types::{
    Arm, ConstDef, Decl, EnumDef, EnumTag, PrimitiveType, Qualifier, StructDef, Symbol, UnionDef,
};
pub use validation::validate_symbol;
