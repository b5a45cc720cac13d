//! Emission context for one generation run.

use super::resolve::{rust_ident, underscore};
use ironxdr_schema::{Decl, PrimitiveType, Qualifier, Symbol, SymbolTable};
use std::collections::HashSet;

/// Generation state for one run over a symbol table.
///
/// Holds the ordered output fragments and the names of types already
/// synthesized or materialized. Independent runs use independent emitters.
pub struct Emitter<'a> {
    pub(crate) syms: &'a SymbolTable,
    declarations: Vec<String>,
    emitted: HashSet<String>,
}

impl<'a> Emitter<'a> {
    /// Creates an emitter with no output.
    #[must_use]
    pub fn new(syms: &'a SymbolTable) -> Self {
        Self {
            syms,
            declarations: Vec::new(),
            emitted: HashSet::new(),
        }
    }

    /// Generates every top-level symbol in discovery order.
    pub fn emit_all(&mut self) {
        let syms = self.syms;
        for symbol in syms.symbols() {
            self.emit(symbol);
        }
    }

    /// Generates one symbol.
    ///
    /// Types synthesized while generating it are emitted first.
    pub fn emit(&mut self, symbol: &Symbol) {
        let fragment = match symbol {
            Symbol::Const(c) => self.const_fragment(c),
            Symbol::Typedef(decl) => self.typedef_fragment(symbol, decl),
            Symbol::Struct(s) => self.struct_fragment(symbol, s),
            Symbol::Enum(e) => self.enum_fragment(e),
            Symbol::Union(u) => self.union_fragment(symbol, u),
            Symbol::Program(p) => {
                tracing::debug!("Skipping program {}", p.id);
                return;
            }
        };
        tracing::debug!("Generated {} {}", symbol.kind(), symbol.id());
        self.declarations.push(fragment);
    }

    /// Consumes the emitter, returning its fragments.
    #[must_use]
    pub fn into_declarations(self) -> Vec<String> {
        self.declarations
    }

    /// Returns the Rust type of a declaration.
    ///
    /// An inline type is named, generated and emitted before this returns.
    /// A bounded variable-length type is replaced by its wrapper.
    pub fn decltype(&mut self, parent: &Symbol, decl: &Decl) -> String {
        let base = match &decl.inline {
            Some(inline) => self.synthesize(parent, decl, inline),
            None => decl.type_name.clone(),
        };

        let bound = match decl.qualifier {
            Qualifier::Scalar if base == PrimitiveType::String.idl_name() => {
                self.chase_bound(&decl.bound)
            }
            Qualifier::Vec => self.chase_bound(&decl.bound),
            _ => None,
        };

        match bound {
            Some(bound) => self.materialize(decl.qualifier, &base, &bound),
            None => self.container(decl.qualifier, &base, &decl.bound),
        }
    }

    /// Names an inline definition after its parent and field, and emits it.
    fn synthesize(&mut self, parent: &Symbol, decl: &Decl, inline: &Symbol) -> String {
        let name = parent.inline_name(&decl.id);
        if self.emitted.insert(name.clone()) {
            let mut symbol = inline.clone();
            symbol.set_id(name.clone());
            self.emit(&symbol);
        }
        name
    }

    /// Returns the wrapper type for `base` with `bound`, emitting it the
    /// first time each wrapper name is requested.
    pub fn materialize(&mut self, qualifier: Qualifier, base: &str, bound: &str) -> String {
        let chased = self.chase_typedef(base).replace(' ', "_");
        let suffix = bound.replace(|c: char| !c.is_ascii_alphanumeric() && c != '_', "_");
        let name = format!("{}_{}", underscore(&chased), suffix);
        if self.emitted.insert(name.clone()) {
            let fragment = self.wrapper_fragment(&name, qualifier, base, bound);
            tracing::debug!("Materialized {} with bound {}", name, bound);
            self.declarations.push(fragment);
        }
        name
    }

    /// Unbounded container syntax for `base`.
    pub(crate) fn container(&self, qualifier: Qualifier, base: &str, bound: &str) -> String {
        let elem = type_ref(base);
        match qualifier {
            Qualifier::Scalar => elem,
            Qualifier::Ptr => format!("Option<Box<{elem}>>"),
            Qualifier::Array => format!("XdrArray<{elem}, {}>", self.array_length(bound)),
            Qualifier::Vec => format!("Vec<{elem}>"),
        }
    }
}

/// Rust spelling of a type name.
pub(crate) fn type_ref(name: &str) -> String {
    match PrimitiveType::from_idl_name(name) {
        Some(prim) => prim.rust_type().to_string(),
        None => rust_ident(name),
    }
}
