//! Generation driver and its options.

use crate::error::CodegenError;
use crate::rust::Emitter;
use ironxdr_schema::SymbolTable;

/// Default path of the runtime crate in generated `use` lines.
pub const DEFAULT_RUNTIME_CRATE: &str = "ironxdr_core";

/// Options controlling the generated output.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    runtime_crate: String,
    preamble: bool,
}

impl GeneratorOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the path of the runtime crate imported by the preamble.
    #[must_use]
    pub fn runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime_crate = path.into();
        self
    }

    /// Sets whether to emit the header comment and runtime import.
    #[must_use]
    pub fn preamble(mut self, enabled: bool) -> Self {
        self.preamble = enabled;
        self
    }

    /// Returns the runtime crate path.
    #[must_use]
    pub fn runtime_crate_path(&self) -> &str {
        &self.runtime_crate
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            preamble: true,
        }
    }
}

/// Generates Rust code for every definition in a symbol table.
pub struct Generator<'a> {
    syms: &'a SymbolTable,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a generator with default options.
    #[must_use]
    pub fn new(syms: &'a SymbolTable) -> Self {
        Self {
            syms,
            options: GeneratorOptions::default(),
        }
    }

    /// Replaces the options.
    #[must_use]
    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Generates the complete output.
    ///
    /// Fragments are emitted in discovery order, separated by blank lines.
    /// Output is deterministic for a given table.
    ///
    /// # Errors
    /// Returns `CodegenError::FrontEnd` if any input of the table failed.
    pub fn generate(&self) -> Result<String, CodegenError> {
        if self.syms.failed() {
            return Err(CodegenError::front_end(self.syms.failures().len()));
        }

        let mut emitter = Emitter::new(self.syms);
        emitter.emit_all();

        let mut fragments = Vec::new();
        if self.options.preamble {
            fragments.push(self.preamble());
        }
        fragments.extend(emitter.into_declarations());
        Ok(fragments.join("\n"))
    }

    fn preamble(&self) -> String {
        let mut output = String::new();
        output.push_str("// Code generated by ironxdr. DO NOT EDIT.\n\n");
        output.push_str("#[allow(unused_imports)]\n");
        output.push_str(&format!("use {}::prelude::*;\n", self.options.runtime_crate));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = "const MAX = 10;
        typedef string Name<MAX>;
        enum Color { RED = 0, GREEN = 1 };
        struct Pixel { Color color; Name label; int history<MAX>; struct { int x; } pos; };
        union Shape switch (Color c) { case RED: Pixel p; default: void; };
        program P { version V { void NULLPROC(void) = 0; } = 1; } = 1;";

    fn table(src: &str) -> SymbolTable {
        let mut syms = SymbolTable::new();
        syms.parse_str(src).expect("Failed to parse");
        syms
    }

    #[test]
    fn test_generate_is_deterministic() {
        let syms = table(SRC);
        let first = Generator::new(&syms).generate().expect("Failed to generate");
        let second = Generator::new(&syms).generate().expect("Failed to generate");
        assert_eq!(first, second);
    }

    #[test]
    fn test_generated_code_parses() {
        let syms = table(SRC);
        let code = Generator::new(&syms).generate().expect("Failed to generate");
        syn::parse_file(&code).expect("generated code is valid Rust");
    }

    #[test]
    fn test_preamble() {
        let syms = table("const A = 1;");
        let code = Generator::new(&syms).generate().expect("Failed to generate");
        assert!(code.starts_with("// Code generated by ironxdr. DO NOT EDIT.\n"));
        assert!(code.contains("use ironxdr_core::prelude::*;\n\npub const A: i32 = 1;\n"));

        let options = GeneratorOptions::new().runtime_crate("crate::xdr");
        let code = Generator::new(&syms)
            .with_options(options)
            .generate()
            .expect("Failed to generate");
        assert!(code.contains("use crate::xdr::prelude::*;"));

        let options = GeneratorOptions::new().preamble(false);
        let code = Generator::new(&syms)
            .with_options(options)
            .generate()
            .expect("Failed to generate");
        assert_eq!(code, "pub const A: i32 = 1;\n");
    }

    #[test]
    fn test_fragments_separated_by_blank_lines() {
        let syms = table("const A = 1; const B = 2;");
        let code = Generator::new(&syms)
            .with_options(GeneratorOptions::new().preamble(false))
            .generate()
            .expect("Failed to generate");
        assert_eq!(code, "pub const A: i32 = 1;\n\npub const B: i32 = 2;\n");
    }

    #[test]
    fn test_failed_table_generates_nothing() {
        let mut syms = table("const A = 1;");
        assert!(!syms.parse_file("/nonexistent/input.x"));
        let err = Generator::new(&syms).generate().unwrap_err();
        assert!(matches!(err, CodegenError::FrontEnd { failures: 1 }));
    }

    #[test]
    fn test_options_default() {
        let options = GeneratorOptions::default();
        assert_eq!(options.runtime_crate_path(), DEFAULT_RUNTIME_CRATE);
    }
}
