//! Build-script integration.
//!
//! ```no_run
//! // build.rs
//! let out = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("types.rs");
//! ironxdr_codegen::build::compile(&["xdr/types.x"], &out).unwrap();
//! ```
//!
//! The generated file is then pulled in with
//! `include!(concat!(env!("OUT_DIR"), "/types.rs"));`.

use crate::error::CodegenError;
use crate::generator::GeneratorOptions;
use std::path::Path;

/// Generates code for `inputs` into `out_file` with default options.
///
/// Prints `cargo:rerun-if-changed` for every input.
///
/// # Errors
/// Returns `CodegenError` if any input fails or the output cannot be written.
pub fn compile<P: AsRef<Path>>(inputs: &[P], out_file: impl AsRef<Path>) -> Result<(), CodegenError> {
    compile_with_options(inputs, out_file, GeneratorOptions::default())
}

/// Generates code for `inputs` into `out_file`.
///
/// # Errors
/// Returns `CodegenError` if any input fails or the output cannot be written.
pub fn compile_with_options<P: AsRef<Path>>(
    inputs: &[P],
    out_file: impl AsRef<Path>,
    options: GeneratorOptions,
) -> Result<(), CodegenError> {
    for input in inputs {
        println!("cargo:rerun-if-changed={}", input.as_ref().display());
    }
    let code = crate::generate_from_files_with_options(inputs, options)?;
    std::fs::write(out_file.as_ref(), code)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_compile_writes_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("types.x");
        let mut file = std::fs::File::create(&input).expect("create");
        writeln!(file, "struct Point {{ int x; int y; }};").expect("write");

        let out = dir.path().join("types.rs");
        compile(&[&input], &out).expect("Failed to compile");

        let code = std::fs::read_to_string(&out).expect("read");
        assert!(code.contains("pub struct Point {"));
    }

    #[test]
    fn test_compile_failure_writes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("broken.x");
        std::fs::write(&input, "struct {").expect("write");

        let out = dir.path().join("types.rs");
        assert!(compile(&[&input], &out).is_err());
        assert!(!out.exists());
    }
}
