//! Declaration model.
//!
//! This module contains the data structures produced by the parser:
//! top-level [`Symbol`]s and the [`Decl`] type occurrences they contain.

/// A top-level (or inline nested) definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    /// `const ID = value;`
    Const(ConstDef),
    /// `typedef decl;` where the declaration's id is the alias name.
    Typedef(Decl),
    /// `struct ID { ... };`
    Struct(StructDef),
    /// `enum ID { ... };`
    Enum(EnumDef),
    /// `union ID switch (...) { ... };`
    Union(UnionDef),
    /// `program ID { ... } = N;`
    Program(crate::program::ProgramDef),
}

impl Symbol {
    /// Returns the identifier of the symbol.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Const(c) => &c.id,
            Self::Typedef(d) => &d.id,
            Self::Struct(s) => &s.id,
            Self::Enum(e) => &e.id,
            Self::Union(u) => &u.id,
            Self::Program(p) => &p.id,
        }
    }

    /// Replaces the identifier of the symbol.
    ///
    /// Used when an anonymous inline definition is given a synthesized name.
    pub fn set_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        match self {
            Self::Const(c) => c.id = id,
            Self::Typedef(d) => d.id = id,
            Self::Struct(s) => s.id = id,
            Self::Enum(e) => e.id = id,
            Self::Union(u) => u.id = id,
            Self::Program(p) => p.id = id,
        }
    }

    /// Returns the name given to an anonymous type declared at `field` of
    /// this definition.
    ///
    /// Directly under a typedef the name is `_field`; elsewhere it is
    /// `_Parent_field`.
    #[must_use]
    pub fn inline_name(&self, field: &str) -> String {
        let prefixed = |name: &str| {
            if name.starts_with('_') {
                name.to_string()
            } else {
                format!("_{name}")
            }
        };
        match self {
            Self::Typedef(_) => prefixed(field),
            _ => format!("{}_{}", prefixed(self.id()), field),
        }
    }

    /// Returns a short name for the kind of definition.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Const(_) => "const",
            Self::Typedef(_) => "typedef",
            Self::Struct(_) => "struct",
            Self::Enum(_) => "enum",
            Self::Union(_) => "union",
            Self::Program(_) => "program",
        }
    }
}

/// Constant definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstDef {
    /// Constant name.
    pub id: String,
    /// Value expression: an integer literal or another constant's name.
    pub value: String,
}

/// How a declaration wraps its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Qualifier {
    /// `T id` (for `string`, possibly with a length bound).
    #[default]
    Scalar,
    /// `T *id`, an optional value.
    Ptr,
    /// `T id[N]`, fixed length.
    Array,
    /// `T id<N>` or `T id<>`, variable length.
    Vec,
}

/// One type occurrence: a struct field, typedef target or union arm.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Decl {
    /// Declared name (empty for `void`).
    pub id: String,
    /// Referenced type name; empty when the type is declared inline.
    pub type_name: String,
    /// Qualifier.
    pub qualifier: Qualifier,
    /// Length expression (literal, constant name, or empty).
    pub bound: String,
    /// Inline nested definition, present iff `type_name` is empty.
    pub inline: Option<Box<Symbol>>,
}

impl Decl {
    /// Creates a scalar declaration of a named type.
    #[must_use]
    pub fn new(id: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Creates a `void` declaration.
    #[must_use]
    pub fn void() -> Self {
        Self::new("", PrimitiveType::Void.idl_name())
    }

    /// Sets the qualifier.
    #[must_use]
    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = qualifier;
        self
    }

    /// Sets the bound expression.
    #[must_use]
    pub fn with_bound(mut self, bound: impl Into<String>) -> Self {
        self.bound = bound.into();
        self
    }

    /// Returns true if this declaration carries no value.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.id.is_empty() || self.type_name == PrimitiveType::Void.idl_name()
    }

    /// Returns true if the type is declared inline.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.type_name.is_empty()
    }
}

/// Struct definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructDef {
    /// Struct name.
    pub id: String,
    /// Fields in declaration order.
    pub fields: Vec<Decl>,
}

/// One `NAME = value` entry of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTag {
    /// Tag name.
    pub id: String,
    /// Value expression.
    pub value: String,
}

/// Enum definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumDef {
    /// Enum name.
    pub id: String,
    /// Tags in declaration order.
    pub tags: Vec<EnumTag>,
}

/// One arm of a union.
#[derive(Debug, Clone, PartialEq)]
pub struct Arm {
    /// Case labels (literals or identifiers); empty for the default arm.
    pub cases: Vec<String>,
    /// True for the `default:` arm.
    pub is_default: bool,
    /// Payload declaration, possibly `void`.
    pub decl: Decl,
}

/// Discriminated union definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnionDef {
    /// Union name.
    pub id: String,
    /// Name of the discriminant field.
    pub tag_id: String,
    /// Type of the discriminant.
    pub tag_type: String,
    /// Arms in declaration order.
    pub arms: Vec<Arm>,
    /// True if one of the arms is `default:`.
    pub has_default: bool,
}

impl UnionDef {
    /// Iterates over every label of every non-default arm.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.arms
            .iter()
            .filter(|arm| !arm.is_default)
            .flat_map(|arm| arm.cases.iter().map(String::as_str))
    }
}

/// XDR built-in types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// `int`, 32-bit signed.
    Int,
    /// `unsigned int`, 32-bit unsigned.
    UnsignedInt,
    /// `hyper`, 64-bit signed.
    Hyper,
    /// `unsigned hyper`, 64-bit unsigned.
    UnsignedHyper,
    /// `float`, 32-bit IEEE 754.
    Float,
    /// `double`, 64-bit IEEE 754.
    Double,
    /// `bool`.
    Bool,
    /// `string<N>`.
    String,
    /// `opaque[N]` / `opaque<N>`.
    Opaque,
    /// `void`.
    Void,
}

impl PrimitiveType {
    /// Returns the IDL spelling of the type.
    #[must_use]
    pub const fn idl_name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::UnsignedInt => "unsigned int",
            Self::Hyper => "hyper",
            Self::UnsignedHyper => "unsigned hyper",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Opaque => "opaque",
            Self::Void => "void",
        }
    }

    /// Returns the Rust type a value of this type is stored in.
    ///
    /// For `opaque` this is the element type.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::Int => "i32",
            Self::UnsignedInt => "u32",
            Self::Hyper => "i64",
            Self::UnsignedHyper => "u64",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::Bool => "bool",
            Self::String => "String",
            Self::Opaque => "u8",
            Self::Void => "XdrVoid",
        }
    }

    /// Parses a primitive type from its IDL spelling.
    #[must_use]
    pub fn from_idl_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(Self::Int),
            "unsigned int" => Some(Self::UnsignedInt),
            "hyper" => Some(Self::Hyper),
            "unsigned hyper" => Some(Self::UnsignedHyper),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "bool" => Some(Self::Bool),
            "string" => Some(Self::String),
            "opaque" => Some(Self::Opaque),
            "void" => Some(Self::Void),
            _ => None,
        }
    }

    /// Returns true for `string` and `opaque`.
    #[must_use]
    pub const fn is_byte_sequence(&self) -> bool {
        matches!(self, Self::String | Self::Opaque)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_round_trip_names() {
        for prim in [
            PrimitiveType::Int,
            PrimitiveType::UnsignedInt,
            PrimitiveType::Hyper,
            PrimitiveType::UnsignedHyper,
            PrimitiveType::Float,
            PrimitiveType::Double,
            PrimitiveType::Bool,
            PrimitiveType::String,
            PrimitiveType::Opaque,
            PrimitiveType::Void,
        ] {
            assert_eq!(PrimitiveType::from_idl_name(prim.idl_name()), Some(prim));
        }
        assert_eq!(PrimitiveType::from_idl_name("quadruple"), None);
    }

    #[test]
    fn test_inline_name() {
        let typedef = Symbol::Typedef(Decl::new("foo", ""));
        assert_eq!(typedef.inline_name("foo"), "_foo");

        let bar = Symbol::Struct(StructDef {
            id: "Bar".to_string(),
            fields: Vec::new(),
        });
        assert_eq!(bar.inline_name("foo"), "_Bar_foo");

        let nested = Symbol::Struct(StructDef {
            id: "_Bar_foo".to_string(),
            fields: Vec::new(),
        });
        assert_eq!(nested.inline_name("x"), "_Bar_foo_x");
    }

    #[test]
    fn test_primitive_rust_type() {
        assert_eq!(PrimitiveType::UnsignedHyper.rust_type(), "u64");
        assert_eq!(PrimitiveType::Opaque.rust_type(), "u8");
        assert!(PrimitiveType::String.is_byte_sequence());
        assert!(!PrimitiveType::Int.is_byte_sequence());
    }

    #[test]
    fn test_decl_void() {
        assert!(Decl::void().is_void());
        assert!(!Decl::new("x", "int").is_void());
        assert!(Decl::new("", "int").is_void());
    }

    #[test]
    fn test_symbol_set_id() {
        let mut sym = Symbol::Struct(StructDef::default());
        sym.set_id("_Bar_foo");
        assert_eq!(sym.id(), "_Bar_foo");
        assert_eq!(sym.kind(), "struct");
    }

    #[test]
    fn test_union_labels_skip_default() {
        let u = UnionDef {
            id: "U".into(),
            tag_id: "t".into(),
            tag_type: "int".into(),
            arms: vec![
                Arm {
                    cases: vec!["1".into(), "2".into()],
                    is_default: false,
                    decl: Decl::new("a", "int"),
                },
                Arm {
                    cases: vec![],
                    is_default: true,
                    decl: Decl::void(),
                },
            ],
            has_default: true,
        };
        assert_eq!(u.labels().collect::<Vec<_>>(), vec!["1", "2"]);
    }
}
