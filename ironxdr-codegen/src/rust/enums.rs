//! Enum code generation.
//!
//! XDR enums are open: a decoded value need not match any tag. They are
//! therefore generated as `i32` newtypes with one global constant per
//! tag, rather than as Rust enums.

use super::Emitter;
use super::resolve::{parse_int, rust_ident};
use ironxdr_schema::EnumDef;

impl Emitter<'_> {
    pub(crate) fn enum_fragment(&self, enum_def: &EnumDef) -> String {
        let mut output = String::new();
        let name = rust_ident(&enum_def.id);
        let names_table = format!("_{}_names", enum_def.id);

        output.push_str("#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]\n");
        output.push_str(&format!("pub struct {}(pub i32);\n\n", name));

        for tag in &enum_def.tags {
            output.push_str(&format!(
                "pub const {}: {} = {}({});\n",
                rust_ident(&tag.id),
                name,
                name,
                self.tag_value(&tag.value)
            ));
        }
        output.push('\n');

        output.push_str(&format!("const {}: &[(i32, &str)] = &[\n", names_table));
        for tag in &enum_def.tags {
            output.push_str(&format!(
                "    ({}.0, \"{}\"),\n",
                rust_ident(&tag.id),
                tag.id
            ));
        }
        output.push_str("];\n\n");

        output.push_str(&format!("impl XdrEnum for {} {{\n", name));
        output.push_str("    fn enum_names(&self) -> &'static [(i32, &'static str)] {\n");
        output.push_str(&format!("        {}\n", names_table));
        output.push_str("    }\n\n");
        output.push_str("    fn enum_val(&mut self) -> &mut i32 {\n");
        output.push_str("        &mut self.0\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl XdrNum32 for {} {{\n", name));
        output.push_str("    fn get_u32(&self) -> u32 {\n");
        output.push_str("        self.0 as u32\n");
        output.push_str("    }\n\n");
        output.push_str("    fn set_u32(&mut self, value: u32) -> XdrResult<()> {\n");
        output.push_str("        self.0 = value as i32;\n");
        output.push_str("        Ok(())\n");
        output.push_str("    }\n\n");
        output.push_str("    fn xdr_pointer(&mut self) -> &mut dyn ::std::any::Any {\n");
        output.push_str("        &mut self.0\n");
        output.push_str("    }\n\n");
        output.push_str("    fn xdr_value(&self) -> XdrValue {\n");
        output.push_str("        XdrValue::Int(self.0)\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl ::std::fmt::Display for {} {{\n", name));
        output.push_str(
            "    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {\n",
        );
        output.push_str("        match self.enum_name() {\n");
        output.push_str("            Some(name) => f.write_str(name),\n");
        output.push_str(&format!(
            "            None => f.write_str(\"unknown_{}\"),\n",
            enum_def.id
        ));
        output.push_str("        }\n");
        output.push_str("    }\n");
        output.push_str("}\n");

        output
    }

    /// Renders a tag value as an `i32` expression.
    fn tag_value(&self, value: &str) -> String {
        match parse_int(self.resolve_const(value)) {
            // values above i32::MAX wrap, as on the wire
            Some(v) => (v as i32).to_string(),
            None if self.syms.enum_of_tag(value).is_some() => format!("{}.0", rust_ident(value)),
            None => format!("{} as i32", rust_ident(value)),
        }
    }
}
