//! Discriminated union code generation.
//!
//! A union is a struct holding the public discriminant and a private slot
//! with the payload of the arm last accessed. Each named arm gets an
//! accessor that checks the discriminant, creating the payload on first
//! access and keeping it for later ones. Accessing an arm the discriminant
//! does not select panics.

use super::Emitter;
use super::emitter::type_ref;
use super::resolve::rust_ident;
use ironxdr_schema::{Symbol, UnionDef};

/// One arm with its labels rendered as patterns.
struct ArmInfo {
    patterns: Vec<String>,
    is_default: bool,
    /// Accessor name and payload type; `None` for `void`.
    payload: Option<(String, String)>,
}

impl Emitter<'_> {
    pub(crate) fn union_fragment(&mut self, symbol: &Symbol, union: &UnionDef) -> String {
        let name = rust_ident(&union.id);
        let arm_enum = format!("__{}_Arm", union.id);
        let tag = rust_ident(&union.tag_id);
        let enum_type = self.enum_type(&union.tag_type);

        // Payload types are resolved before any output so that synthesized
        // and materialized types precede the union.
        let mut arms = Vec::with_capacity(union.arms.len());
        for arm in &union.arms {
            let patterns = arm
                .cases
                .iter()
                .map(|label| self.case_pattern(label, enum_type.as_deref()))
                .collect();
            let payload = if arm.decl.is_void() {
                None
            } else {
                Some((rust_ident(&arm.decl.id), self.decltype(symbol, &arm.decl)))
            };
            arms.push(ArmInfo {
                patterns,
                is_default: arm.is_default,
                payload,
            });
        }

        let explicit: Vec<&str> = arms
            .iter()
            .filter(|arm| !arm.is_default)
            .flat_map(|arm| arm.patterns.iter().map(String::as_str))
            .collect();
        let has_payload = arms.iter().any(|arm| arm.payload.is_some());

        let mut output = String::new();
        output.push_str("#[derive(Debug, Clone, Default, PartialEq)]\n");
        output.push_str(&format!("pub struct {} {{\n", name));
        output.push_str(&format!("    pub {}: {},\n", tag, type_ref(&union.tag_type)));
        if has_payload {
            output.push_str(&format!("    _u: Option<{}>,\n", arm_enum));
        }
        output.push_str("}\n");

        if has_payload {
            output.push_str("\n#[derive(Debug, Clone, PartialEq)]\n");
            output.push_str(&format!("enum {} {{\n", arm_enum));
            for (id, ty) in arms.iter().filter_map(|arm| arm.payload.as_ref()) {
                output.push_str(&format!("    {}({}),\n", id, ty));
            }
            output.push_str("}\n");

            output.push_str(&format!("\nimpl {} {{\n", name));
            let mut first = true;
            for arm in &arms {
                let Some((id, ty)) = &arm.payload else {
                    continue;
                };
                if !first {
                    output.push('\n');
                }
                first = false;
                output.push_str(&generate_accessor(
                    arm,
                    union.arms.len(),
                    &explicit,
                    &tag,
                    &arm_enum,
                    (id.as_str(), ty.as_str()),
                ));
            }
            output.push_str("}\n");
        }

        output.push_str(&format!("\nimpl XdrUnion for {} {{\n", name));
        output.push_str("    fn xdr_union_tag(&mut self) -> &mut dyn XdrNum32 {\n");
        output.push_str(&format!("        &mut self.{}\n", tag));
        output.push_str("    }\n\n");

        output.push_str("    fn xdr_union_valid(&self) -> bool {\n");
        if union.has_default {
            output.push_str("        true\n");
        } else {
            output.push_str(&format!(
                "        matches!(self.{}, {})\n",
                tag,
                explicit.join(" | ")
            ));
        }
        output.push_str("    }\n\n");

        output.push_str(&generate_body(&arms, &tag));
        output.push_str("}\n");

        output
    }
}

/// Generates the accessor for one non-void arm.
fn generate_accessor(
    arm: &ArmInfo,
    arm_count: usize,
    explicit: &[&str],
    tag: &str,
    arm_enum: &str,
    (id, ty): (&str, &str),
) -> String {
    let mut output = String::new();
    let bad_case = format!(
        "xdr_panic(\"{} accessed when not selected\")",
        id.trim_start_matches("r#")
    );

    output.push_str(&format!("    pub fn {}(&mut self) -> &mut {} {{\n", id, ty));
    if arm.is_default {
        // The default arm is selected by every tag no other arm names.
        if arm_count > 1 {
            output.push_str(&format!(
                "        if matches!(self.{}, {}) {{\n",
                tag,
                explicit.join(" | ")
            ));
            output.push_str(&format!("            {};\n", bad_case));
            output.push_str("        }\n");
        }
    } else {
        output.push_str(&format!(
            "        if !matches!(self.{}, {}) {{\n",
            tag,
            arm.patterns.join(" | ")
        ));
        output.push_str(&format!("            {};\n", bad_case));
        output.push_str("        }\n");
    }

    output.push_str(&format!(
        "        if !matches!(self._u, Some({}::{}(_))) {{\n",
        arm_enum, id
    ));
    output.push_str(&format!(
        "            self._u = Some({}::{}(Default::default()));\n",
        arm_enum, id
    ));
    output.push_str("        }\n");
    output.push_str("        match &mut self._u {\n");
    output.push_str(&format!("            Some({}::{}(v)) => v,\n", arm_enum, id));
    output.push_str(&format!("            _ => {},\n", bad_case));
    output.push_str("        }\n");
    output.push_str("    }\n");
    output
}

/// Generates `xdr_union_body`, dispatching on the discriminant to the
/// selected arm's accessor.
fn generate_body(arms: &[ArmInfo], tag: &str) -> String {
    let mut output = String::new();
    output.push_str("    fn xdr_union_body(&mut self) -> Option<&mut dyn XdrAny> {\n");
    output.push_str(&format!("        match self.{} {{\n", tag));

    let body = |arm: &ArmInfo| match &arm.payload {
        Some((id, _)) => format!("Some(self.{}() as &mut dyn XdrAny)", id),
        None => "None".to_string(),
    };

    for arm in arms.iter().filter(|arm| !arm.is_default) {
        output.push_str(&format!(
            "            {} => {},\n",
            arm.patterns.join(" | "),
            body(arm)
        ));
    }
    match arms.iter().find(|arm| arm.is_default) {
        Some(default) => output.push_str(&format!("            _ => {},\n", body(default))),
        None => output.push_str("            _ => None,\n"),
    }

    output.push_str("        }\n");
    output.push_str("    }\n");
    output
}
