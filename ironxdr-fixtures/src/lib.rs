//! Code generated from `xdr/fixtures.x` at build time, with tests of its
//! behavior against the runtime.

#[allow(
    non_camel_case_types,
    non_snake_case,
    non_upper_case_globals,
    dead_code,
    unreachable_patterns,
    clippy::all
)]
pub mod generated {
    include!(concat!(env!("OUT_DIR"), "/fixtures.rs"));
}
