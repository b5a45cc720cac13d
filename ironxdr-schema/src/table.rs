//! Symbol table aggregating the definitions of every input.

use crate::error::{ParseError, SchemaError};
use crate::parser::parse_xdr;
use crate::types::{Decl, Symbol};
use crate::validation::validate_symbol;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Ordered top-level definitions plus an identifier index.
///
/// Failures of individual inputs are recorded rather than returned so that
/// every input is attempted and all errors can be reported together.
#[derive(Debug, Default)]
pub struct SymbolTable {
    /// Definitions in discovery order.
    symbols: Vec<Symbol>,
    /// Identifier to position in `symbols`.
    index: HashMap<String, usize>,
    /// Enum tag name to the enum defining it.
    tags: HashMap<String, String>,
    /// Recorded per-input failures.
    failures: Vec<ParseError>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses one file, adding its definitions.
    ///
    /// On failure the error is recorded (see [`Self::failures`]) and false
    /// is returned; the table stays usable for further inputs.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let result = std::fs::read_to_string(path)
            .map_err(|source| ParseError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|source| self.parse_str(&source));

        match result {
            Ok(count) => {
                tracing::debug!("Parsed {} with {} definitions", path.display(), count);
                true
            }
            Err(e) => {
                self.failures.push(e.in_file(path));
                false
            }
        }
    }

    /// Parses source text and adds its definitions.
    ///
    /// Returns the number of definitions added.
    ///
    /// # Errors
    /// Returns `ParseError` on syntax errors or semantic conflicts. Definitions
    /// before a conflicting one remain in the table.
    pub fn parse_str(&mut self, source: &str) -> Result<usize, ParseError> {
        let symbols = parse_xdr(source)?;
        let count = symbols.len();
        for symbol in symbols {
            self.insert(symbol)?;
        }
        Ok(count)
    }

    /// Adds one definition after validating it.
    ///
    /// # Errors
    /// Returns `SchemaError` if the definition is invalid or its identifier
    /// (or one of its enum tags) is already defined.
    pub fn insert(&mut self, symbol: Symbol) -> Result<(), SchemaError> {
        validate_symbol(&symbol)?;

        let id = symbol.id().to_string();
        if self.is_defined(&id) {
            return Err(SchemaError::duplicate(id));
        }

        let mut tags = Vec::new();
        collect_tags(&symbol, &mut tags);
        let mut seen = HashSet::new();
        for (tag, _) in &tags {
            if self.is_defined(tag) || *tag == id || !seen.insert(tag.as_str()) {
                return Err(SchemaError::duplicate(tag));
            }
        }
        self.tags.extend(tags);

        self.index.insert(id, self.symbols.len());
        self.symbols.push(symbol);
        Ok(())
    }

    fn is_defined(&self, id: &str) -> bool {
        self.index.contains_key(id) || self.tags.contains_key(id)
    }

    /// Returns the definition named `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Symbol> {
        self.index.get(id).map(|&i| &self.symbols[i])
    }

    /// Returns the name of the enum that defines tag `tag`.
    #[must_use]
    pub fn enum_of_tag(&self, tag: &str) -> Option<&str> {
        self.tags.get(tag).map(String::as_str)
    }

    /// Returns all definitions in discovery order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the table has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns true if any input failed to read or parse.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns the recorded failures, one per failing input.
    #[must_use]
    pub fn failures(&self) -> &[ParseError] {
        &self.failures
    }
}

/// Collects `(tag, enum name)` for every enum tag `symbol` defines,
/// including tags of inline enums at any depth.
///
/// Inline enums are named the way code generation names them.
fn collect_tags(symbol: &Symbol, out: &mut Vec<(String, String)>) {
    let decls: Vec<&Decl> = match symbol {
        Symbol::Enum(e) => {
            out.extend(e.tags.iter().map(|tag| (tag.id.clone(), e.id.clone())));
            return;
        }
        Symbol::Typedef(decl) => vec![decl],
        Symbol::Struct(s) => s.fields.iter().collect(),
        Symbol::Union(u) => u.arms.iter().map(|arm| &arm.decl).collect(),
        Symbol::Const(_) | Symbol::Program(_) => return,
    };
    for decl in decls {
        if let Some(inline) = &decl.inline {
            let mut named = inline.as_ref().clone();
            named.set_id(symbol.inline_name(&decl.id));
            collect_tags(&named, out);
        }
    }
}
