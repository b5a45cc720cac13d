//! # IronXDR Bench
//!
//! Benchmarking utilities for IronXDR performance testing.

pub mod schema;
