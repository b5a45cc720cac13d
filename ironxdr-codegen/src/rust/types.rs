//! Constant, typedef, struct and bounded wrapper generation.

use super::Emitter;
use super::resolve::{int_type, parse_int, rust_ident, rust_literal};
use ironxdr_schema::{ConstDef, Decl, PrimitiveType, Qualifier, StructDef, Symbol};

impl Emitter<'_> {
    /// Generates `pub const ID: T = value;`.
    ///
    /// The integer type is the smallest one holding the resolved value.
    pub(crate) fn const_fragment(&self, c: &ConstDef) -> String {
        let terminal = self.resolve_const(&c.value);
        let ty = match parse_int(terminal) {
            Some(value) => int_type(value).to_string(),
            None => self
                .syms
                .enum_of_tag(terminal)
                .map_or_else(|| "i32".to_string(), rust_ident),
        };
        let value = if parse_int(&c.value).is_some() {
            rust_literal(&c.value)
        } else {
            rust_ident(&c.value)
        };
        format!("pub const {}: {} = {};\n", rust_ident(&c.id), ty, value)
    }

    pub(crate) fn typedef_fragment(&mut self, symbol: &Symbol, decl: &Decl) -> String {
        let ty = self.decltype(symbol, decl);
        format!("pub type {} = {};\n", rust_ident(&decl.id), ty)
    }

    pub(crate) fn struct_fragment(&mut self, symbol: &Symbol, struct_def: &StructDef) -> String {
        let fields: Vec<(String, String)> = struct_def
            .fields
            .iter()
            .map(|field| (rust_ident(&field.id), self.decltype(symbol, field)))
            .collect();

        let mut output = String::new();
        output.push_str("#[derive(Debug, Clone, Default, PartialEq)]\n");
        output.push_str(&format!("pub struct {} {{\n", rust_ident(&struct_def.id)));
        for (id, ty) in fields {
            output.push_str(&format!("    pub {}: {},\n", id, ty));
        }
        output.push_str("}\n");
        output
    }

    /// Generates a distinct newtype over an unbounded container, with its
    /// bound attached.
    ///
    /// Strings and opaque data also get the byte accessors; vector wrappers
    /// get length access from the runtime's blanket impl.
    pub(crate) fn wrapper_fragment(
        &self,
        name: &str,
        qualifier: Qualifier,
        base: &str,
        bound: &str,
    ) -> String {
        let inner = self.container(qualifier, base, "");
        let mut output = String::new();

        output.push_str("#[derive(Debug, Clone, Default, PartialEq)]\n");
        output.push_str(&format!("pub struct {}(pub {});\n\n", name, inner));

        output.push_str(&format!("impl ::std::ops::Deref for {} {{\n", name));
        output.push_str(&format!("    type Target = {};\n\n", inner));
        output.push_str(&format!("    fn deref(&self) -> &{} {{\n", inner));
        output.push_str("        &self.0\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl ::std::ops::DerefMut for {} {{\n", name));
        output.push_str(&format!("    fn deref_mut(&mut self) -> &mut {} {{\n", inner));
        output.push_str("        &mut self.0\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl XdrBound for {} {{\n", name));
        output.push_str("    fn xdr_bound(&self) -> u32 {\n");
        output.push_str(&format!("        {}\n", bound));
        output.push_str("    }\n");
        output.push_str("}\n");

        let is_bytes = PrimitiveType::from_idl_name(base).is_some_and(|p| p.is_byte_sequence());
        if is_bytes {
            output.push_str(&format!("\nimpl XdrBytes for {} {{\n", name));
            output.push_str("    fn get_byte_slice(&self) -> &[u8] {\n");
            output.push_str("        self.0.get_byte_slice()\n");
            output.push_str("    }\n");
            output.push_str("}\n\n");

            output.push_str(&format!("impl XdrVariableBytes for {} {{\n", name));
            output.push_str("    fn set_byte_slice(&mut self, bytes: &[u8]) -> XdrResult<()> {\n");
            output.push_str("        let bound = self.xdr_bound();\n");
            output.push_str("        set_bounded_bytes(&mut self.0, bytes, bound)\n");
            output.push_str("    }\n");
            output.push_str("}\n");
        }

        output
    }
}
