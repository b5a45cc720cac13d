//! Rust code generation modules.
//!
//! Each definition kind is generated by an `impl Emitter` block in its own
//! module; [`Emitter`] threads the per-run state through all of them.

pub mod emitter;
pub mod enums;
pub mod resolve;
pub mod types;
pub mod unions;

pub use emitter::Emitter;
