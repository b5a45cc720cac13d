//! # IronXDR Core
//!
//! Runtime support layer for code generated by `ironxdr-codegen`.
//!
//! This crate provides:
//! - 32-bit and 64-bit numeric views of every primitive wire scalar
//! - Fixed and bounded byte-sequence traits
//! - Enum and union reflection traits used by generic marshaling code
//! - The abort primitive used to signal illegal union access
//!
//! Generated code imports everything it needs through [`prelude`].

pub mod aggregate;
pub mod bytes;
pub mod error;
pub mod num;
pub mod prelude;

pub use aggregate::{FALSE, TRUE, XdrAny, XdrEnum, XdrUnion, XdrVoid, xdr_panic};
pub use bytes::{
    ByteContainer, XdrArray, XdrBound, XdrBytes, XdrVarArray, XdrVariableBytes, check_bound,
    set_bounded_bytes,
};
pub use error::{Result, XdrError};
pub use num::{XdrNum32, XdrNum64, XdrValue};
