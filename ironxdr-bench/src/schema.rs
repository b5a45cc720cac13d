//! Synthetic `.x` sources for front-end and generator benchmarks.

use std::fmt::Write;

/// Builds an XDR source with `groups` repetitions of a const, an enum,
/// a struct and a union that switches on the enum.
///
/// Every group refers to the previous one so the generator has to chase
/// typedefs across the whole file.
pub fn synthetic_schema(groups: usize) -> String {
    let mut out = String::with_capacity(groups * 320);
    for i in 0..groups {
        let _ = writeln!(out, "const MAX_{i} = {};", 16 + i);
        let _ = writeln!(out, "typedef string Name{i}<MAX_{i}>;");
        let _ = writeln!(
            out,
            "enum Kind{i} {{ K{i}_A = 0, K{i}_B = 1, K{i}_C = 2 }};"
        );
        let _ = writeln!(out, "struct Item{i} {{");
        let _ = writeln!(out, "    Name{i} name;");
        let _ = writeln!(out, "    unsigned hyper id;");
        let _ = writeln!(out, "    opaque digest[32];");
        let _ = writeln!(out, "    int values<MAX_{i}>;");
        if i > 0 {
            let _ = writeln!(out, "    Item{} *prev;", i - 1);
        }
        let _ = writeln!(out, "}};");
        let _ = writeln!(out, "union Body{i} switch (Kind{i} kind) {{");
        let _ = writeln!(out, "case K{i}_A:");
        let _ = writeln!(out, "    Item{i} item;");
        let _ = writeln!(out, "case K{i}_B:");
        let _ = writeln!(out, "case K{i}_C:");
        let _ = writeln!(out, "    double weight;");
        let _ = writeln!(out, "default:");
        let _ = writeln!(out, "    void;");
        let _ = writeln!(out, "}};");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironxdr_schema::{Symbol, SymbolTable};

    #[test]
    fn test_synthetic_schema_parses() {
        let mut table = SymbolTable::new();
        let count = table.parse_str(&synthetic_schema(3)).expect("parse");
        assert_eq!(count, 15);
        assert!(matches!(table.get("Body2"), Some(Symbol::Union(_))));
        assert!(!table.failed());
    }

    #[test]
    fn test_synthetic_schema_generates() {
        let code = ironxdr_codegen::generate_from_str(&synthetic_schema(2)).expect("generate");
        assert!(code.contains("pub struct Item1"));
        assert!(code.contains("pub prev: Option<Box<Item0>>"));
        assert!(code.contains("impl XdrUnion for Body0"));
    }

    #[test]
    fn test_empty_schema() {
        assert!(synthetic_schema(0).is_empty());
    }
}
