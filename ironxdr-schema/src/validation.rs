//! Semantic validation of parsed definitions.
//!
//! Grammar is checked by the parser; this module checks the rules that
//! span several declarations of one definition.

use crate::error::SchemaError;
use crate::types::{Decl, EnumDef, StructDef, Symbol, UnionDef};
use std::collections::HashSet;

/// Validates one definition, including any inline definitions nested in it.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_symbol(symbol: &Symbol) -> Result<(), SchemaError> {
    match symbol {
        Symbol::Struct(s) => validate_struct(s),
        Symbol::Union(u) => validate_union(u),
        Symbol::Enum(e) => validate_enum(e),
        Symbol::Typedef(d) => validate_inline(d),
        Symbol::Const(_) | Symbol::Program(_) => Ok(()),
    }
}

fn validate_inline(decl: &Decl) -> Result<(), SchemaError> {
    match &decl.inline {
        Some(inline) => validate_symbol(inline),
        None => Ok(()),
    }
}

/// Validates a struct: field names must be unique.
fn validate_struct(struct_def: &StructDef) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for field in &struct_def.fields {
        if !seen.insert(field.id.as_str()) {
            return Err(SchemaError::DuplicateField {
                parent: struct_def.id.clone(),
                field: field.id.clone(),
            });
        }
        validate_inline(field)?;
    }
    Ok(())
}

fn validate_union(union: &UnionDef) -> Result<(), SchemaError> {
    let mut labels = HashSet::new();
    for label in union.labels() {
        if !labels.insert(label) {
            return Err(SchemaError::DuplicateCase {
                union: union.id.clone(),
                label: label.to_string(),
            });
        }
    }

    if union.arms.iter().filter(|arm| arm.is_default).count() > 1 {
        return Err(SchemaError::MultipleDefaults {
            union: union.id.clone(),
        });
    }

    let mut fields = HashSet::from([union.tag_id.as_str()]);
    for arm in &union.arms {
        if arm.decl.is_void() {
            continue;
        }
        if !fields.insert(arm.decl.id.as_str()) {
            return Err(SchemaError::DuplicateField {
                parent: union.id.clone(),
                field: arm.decl.id.clone(),
            });
        }
        validate_inline(&arm.decl)?;
    }
    Ok(())
}

fn validate_enum(enum_def: &EnumDef) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for tag in &enum_def.tags {
        if !seen.insert(tag.id.as_str()) {
            return Err(SchemaError::Validation {
                message: format!(
                    "Duplicate enum tag '{}' in enum '{}'",
                    tag.id, enum_def.id
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_xdr;

    fn validate_src(src: &str) -> Result<(), SchemaError> {
        let symbols = parse_xdr(src).expect("Failed to parse");
        symbols.iter().try_for_each(validate_symbol)
    }

    #[test]
    fn test_valid_definitions() {
        validate_src(
            "struct S { int a; int b; };
             union U switch (int t) { case 0: int a; case 1: void; default: int b; };
             enum E { A = 0, B = 1 };",
        )
        .expect("valid");
    }

    #[test]
    fn test_duplicate_struct_field() {
        let err = validate_src("struct S { int a; hyper a; };").unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { field, .. } if field == "a"));
    }

    #[test]
    fn test_duplicate_case_label() {
        let err =
            validate_src("union U switch (int t) { case 1: int a; case 1: int b; };").unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateCase { label, .. } if label == "1"));
    }

    #[test]
    fn test_multiple_defaults() {
        let err = validate_src(
            "union U switch (int t) { case 1: int a; default: void; default: int b; };",
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::MultipleDefaults { .. }));
    }

    #[test]
    fn test_arm_shadows_discriminant() {
        let err = validate_src("union U switch (int t) { case 1: int t; };").unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { .. }));
    }

    #[test]
    fn test_duplicate_enum_tag() {
        let err = validate_src("enum E { A = 0, A = 1 };").unwrap_err();
        assert!(err.to_string().contains("Duplicate enum tag 'A'"));
    }

    #[test]
    fn test_nested_inline_validated() {
        let err = validate_src("struct S { struct { int x; int x; } inner; };").unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { field, .. } if field == "x"));
    }
}
