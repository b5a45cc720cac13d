//! Prelude module imported by generated code.
//!
//! ```ignore
//! use ironxdr_core::prelude::*;
//! ```

pub use crate::aggregate::{FALSE, TRUE, XdrAny, XdrEnum, XdrUnion, XdrVoid, xdr_panic};
pub use crate::bytes::{
    XdrArray, XdrBound, XdrBytes, XdrVarArray, XdrVariableBytes, set_bounded_bytes,
};
pub use crate::error::{Result as XdrResult, XdrError};
pub use crate::num::{XdrNum32, XdrNum64, XdrValue};
