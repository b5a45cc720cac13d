//! Type and bound resolution.
//!
//! Typedef chasing is only used to name materialized wrappers; field types
//! keep referring to the names written in the source.

use super::Emitter;
use ironxdr_schema::{PrimitiveType, Qualifier, Symbol};
use std::collections::HashSet;

/// Resolved bound equal to this value means unbounded.
pub const UNBOUNDED: i128 = 0xFFFF_FFFF;

impl Emitter<'_> {
    /// Follows scalar, non-inline typedefs from `id` to the first identifier
    /// that is not a trivial alias.
    ///
    /// A typedef of `string` names a variable-length type of its own and is
    /// not followed.
    #[must_use]
    pub fn chase_typedef<'s>(&'s self, id: &'s str) -> &'s str {
        let mut current = id;
        let mut seen = HashSet::new();
        while seen.insert(current) {
            match self.syms.get(current) {
                Some(Symbol::Typedef(decl))
                    if decl.qualifier == Qualifier::Scalar
                        && decl.inline.is_none()
                        && decl.type_name != PrimitiveType::String.idl_name() =>
                {
                    current = &decl.type_name;
                }
                _ => break,
            }
        }
        current
    }

    /// Follows constant indirection from `expr` to its terminal value.
    #[must_use]
    pub fn resolve_const<'s>(&'s self, expr: &'s str) -> &'s str {
        let mut current = expr;
        let mut seen = HashSet::new();
        while seen.insert(current) {
            match self.syms.get(current) {
                Some(Symbol::Const(c)) => current = &c.value,
                _ => break,
            }
        }
        current
    }

    /// Resolves a length bound.
    ///
    /// Returns `None` for an empty or unbounded bound, the decimal text of a
    /// bound that fits in a `u32`, or the unresolved expression verbatim.
    #[must_use]
    pub fn chase_bound(&self, expr: &str) -> Option<String> {
        let terminal = self.resolve_const(expr);
        if terminal.is_empty() {
            return None;
        }
        match parse_int(terminal) {
            Some(UNBOUNDED) => None,
            Some(value) if u32::try_from(value).is_ok() => Some(value.to_string()),
            _ => {
                tracing::warn!("Bound '{}' does not resolve to a 32-bit integer", expr);
                Some(expr.to_string())
            }
        }
    }

    /// Returns the const-generic length expression for a fixed array.
    #[must_use]
    pub fn array_length(&self, expr: &str) -> String {
        match parse_int(self.resolve_const(expr)) {
            Some(value) => value.to_string(),
            None => format!("{{ {} as usize }}", rust_ident(expr)),
        }
    }

    /// Returns the enum type a discriminant of type `type_name` is, if any.
    ///
    /// Typedefs are followed, including typedefs of inline enums.
    #[must_use]
    pub fn enum_type(&self, type_name: &str) -> Option<String> {
        let mut current = type_name;
        let mut seen = HashSet::new();
        while seen.insert(current) {
            let symbol = self.syms.get(current)?;
            match symbol {
                Symbol::Enum(e) => return Some(e.id.clone()),
                Symbol::Typedef(decl) => match decl.inline.as_deref() {
                    Some(Symbol::Enum(_)) => return Some(symbol.inline_name(&decl.id)),
                    Some(_) => return None,
                    None => current = &decl.type_name,
                },
                _ => return None,
            }
        }
        None
    }

    /// Renders a union case label as a Rust pattern.
    ///
    /// Labels resolving to integers become literals (or `Enum(n)` under an
    /// enum discriminant); other labels are used as identifiers.
    #[must_use]
    pub fn case_pattern(&self, label: &str, enum_type: Option<&str>) -> String {
        let terminal = self.resolve_const(label);
        match (parse_int(terminal), enum_type) {
            (Some(value), Some(e)) => format!("{}({})", rust_ident(e), value),
            (Some(_), None) => rust_literal(terminal),
            (None, _) => rust_ident(label),
        }
    }
}

/// Parses an IDL integer literal: decimal, `0x` hex or leading-`0` octal,
/// with an optional `-`.
#[must_use]
pub fn parse_int(text: &str) -> Option<i128> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    let value = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i128::from_str_radix(hex, 16).ok()?
    } else if digits.len() > 1 && digits.starts_with('0') {
        i128::from_str_radix(&digits[1..], 8).ok()?
    } else {
        digits.parse::<i128>().ok()?
    };
    Some(if negative { -value } else { value })
}

/// Rewrites an IDL integer literal in Rust syntax.
#[must_use]
pub fn rust_literal(text: &str) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        format!("{sign}0x{hex}")
    } else if digits.len() > 1 && digits.starts_with('0') {
        format!("{sign}0o{}", &digits[1..])
    } else {
        text.to_string()
    }
}

/// Smallest Rust integer type holding `value`.
#[must_use]
pub fn int_type(value: i128) -> &'static str {
    if i32::try_from(value).is_ok() {
        "i32"
    } else if u32::try_from(value).is_ok() {
        "u32"
    } else if i64::try_from(value).is_ok() {
        "i64"
    } else {
        "u64"
    }
}

/// Escapes an IDL identifier that is not a valid Rust identifier.
///
/// Keywords become raw identifiers; `self`, `Self`, `super` and `crate`
/// cannot be raw and get a trailing underscore.
#[must_use]
pub fn rust_ident(name: &str) -> String {
    match name {
        "self" | "Self" | "super" | "crate" => format!("{name}_"),
        // reserved in edition 2024
        "gen" => format!("r#{name}"),
        _ if syn::parse_str::<syn::Ident>(name).is_ok() => name.to_string(),
        _ => format!("r#{name}"),
    }
}

/// Prefixes `_` unless already present.
#[must_use]
pub fn underscore(name: &str) -> String {
    if name.starts_with('_') {
        name.to_string()
    } else {
        format!("_{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironxdr_schema::SymbolTable;

    fn table(src: &str) -> SymbolTable {
        let mut syms = SymbolTable::new();
        syms.parse_str(src).expect("Failed to parse");
        syms
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("100"), Some(100));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("0x10"), Some(16));
        assert_eq!(parse_int("0XfF"), Some(255));
        assert_eq!(parse_int("010"), Some(8));
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("4294967295"), Some(UNBOUNDED));
        assert_eq!(parse_int("MAX"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("09"), None);
    }

    #[test]
    fn test_rust_literal() {
        assert_eq!(rust_literal("010"), "0o10");
        assert_eq!(rust_literal("-010"), "-0o10");
        assert_eq!(rust_literal("0X1F"), "0x1F");
        assert_eq!(rust_literal("42"), "42");
        assert_eq!(rust_literal("0"), "0");
    }

    #[test]
    fn test_int_type() {
        assert_eq!(int_type(-1), "i32");
        assert_eq!(int_type(0xFFFF_FFFF), "u32");
        assert_eq!(int_type(-0x1_0000_0000), "i64");
        assert_eq!(int_type(0xFFFF_FFFF_FFFF_FFFF), "u64");
    }

    #[test]
    fn test_rust_ident() {
        assert_eq!(rust_ident("value"), "value");
        assert_eq!(rust_ident("type"), "r#type");
        assert_eq!(rust_ident("match"), "r#match");
        assert_eq!(rust_ident("self"), "self_");
        assert_eq!(rust_ident("Self"), "Self_");
        assert_eq!(rust_ident("gen"), "r#gen");
    }

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("foo"), "_foo");
        assert_eq!(underscore("_Bar_foo"), "_Bar_foo");
    }

    #[test]
    fn test_chase_bound_through_constants() {
        let syms = table("const CONST_A = CONST_B; const CONST_B = 100;");
        let emitter = Emitter::new(&syms);
        assert_eq!(emitter.chase_bound("CONST_A"), Some("100".to_string()));
        assert_eq!(emitter.chase_bound("0x20"), Some("32".to_string()));
        assert_eq!(emitter.chase_bound(""), None);
    }

    #[test]
    fn test_chase_bound_unbounded() {
        let syms = table("const BIG = HUGE; const HUGE = 4294967295; const HEX = 0xffffffff;");
        let emitter = Emitter::new(&syms);
        assert_eq!(emitter.chase_bound("BIG"), None);
        assert_eq!(emitter.chase_bound("HEX"), None);
    }

    #[test]
    fn test_chase_bound_verbatim() {
        let syms = table("enum E { LIMIT = 5 }; const L = LIMIT;");
        let emitter = Emitter::new(&syms);
        assert_eq!(emitter.chase_bound("L"), Some("L".to_string()));
        assert_eq!(emitter.chase_bound("UNDEFINED"), Some("UNDEFINED".to_string()));
    }

    #[test]
    fn test_chase_bound_out_of_range_is_verbatim() {
        let syms = table("const WIDE = 0x100000000; const NEG = -1; const TOP = 4294967294;");
        let emitter = Emitter::new(&syms);
        assert_eq!(emitter.chase_bound("WIDE"), Some("WIDE".to_string()));
        assert_eq!(
            emitter.chase_bound("0x100000000"),
            Some("0x100000000".to_string())
        );
        assert_eq!(emitter.chase_bound("NEG"), Some("NEG".to_string()));
        assert_eq!(emitter.chase_bound("TOP"), Some("4294967294".to_string()));
    }

    #[test]
    fn test_chase_typedef() {
        let syms = table(
            "typedef int A; typedef A B; typedef B C<>; typedef C D;
             typedef struct { int x; } E; typedef E F;",
        );
        let emitter = Emitter::new(&syms);
        assert_eq!(emitter.chase_typedef("B"), "int");
        assert_eq!(emitter.chase_typedef("C"), "C");
        assert_eq!(emitter.chase_typedef("D"), "C");
        assert_eq!(emitter.chase_typedef("F"), "E");
        assert_eq!(emitter.chase_typedef("unknown"), "unknown");

        let syms = table("typedef string Label<10>; typedef Label Tag; typedef string Text<>;");
        let emitter = Emitter::new(&syms);
        assert_eq!(emitter.chase_typedef("Label"), "Label");
        assert_eq!(emitter.chase_typedef("Tag"), "Label");
        assert_eq!(emitter.chase_typedef("Text"), "Text");
    }

    #[test]
    fn test_enum_type() {
        let syms = table(
            "enum Color { RED = 0 }; typedef Color Hue;
             typedef enum { ON = 1 } Switch; typedef int Plain;",
        );
        let emitter = Emitter::new(&syms);
        assert_eq!(emitter.enum_type("Hue").as_deref(), Some("Color"));
        assert_eq!(emitter.enum_type("Switch").as_deref(), Some("_Switch"));
        assert_eq!(emitter.enum_type("Plain"), None);
        assert_eq!(emitter.enum_type("int"), None);
    }

    #[test]
    fn test_case_pattern() {
        let syms = table("const ONE = 1; const OCT = 010;");
        let emitter = Emitter::new(&syms);
        assert_eq!(emitter.case_pattern("ONE", None), "1");
        assert_eq!(emitter.case_pattern("OCT", None), "0o10");
        assert_eq!(emitter.case_pattern("3", Some("Color")), "Color(3)");
        assert_eq!(emitter.case_pattern("RED", Some("Color")), "RED");
        assert_eq!(emitter.case_pattern("TRUE", None), "TRUE");
    }

    #[test]
    fn test_array_length() {
        let syms = table("const N = 0x8;");
        let emitter = Emitter::new(&syms);
        assert_eq!(emitter.array_length("N"), "8");
        assert_eq!(emitter.array_length("OTHER"), "{ OTHER as usize }");
    }
}
