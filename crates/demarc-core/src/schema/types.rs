//! Declarations produced by parsing a schema file.

use serde::Serialize;

/// Scalar type names that never reference another declaration.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "String", "Int", "Float", "Boolean", "DateTime", "Json", "Bytes",
];

/// Whether a base type name is one of the built-in scalars.
pub fn is_primitive(name: &str) -> bool {
    PRIMITIVE_TYPES.contains(&name)
}

/// Kind of a top-level schema declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Model,
    Enum,
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Model => write!(f, "model"),
            Self::Enum => write!(f, "enum"),
        }
    }
}

/// Type of a model field, with list and optional wrappers kept as nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeRef {
    Base(String),
    ArrayOf(Box<TypeRef>),
    OptionalOf(Box<TypeRef>),
}

impl TypeRef {
    pub fn base(name: impl Into<String>) -> Self {
        Self::Base(name.into())
    }

    pub fn array_of(inner: TypeRef) -> Self {
        Self::ArrayOf(Box::new(inner))
    }

    pub fn optional_of(inner: TypeRef) -> Self {
        Self::OptionalOf(Box::new(inner))
    }

    /// The referenced type name with every wrapper removed.
    pub fn base_name(&self) -> &str {
        match self {
            Self::Base(name) => name,
            Self::ArrayOf(inner) | Self::OptionalOf(inner) => inner.base_name(),
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(name) => write!(f, "{}", name),
            Self::ArrayOf(inner) => write!(f, "{}[]", inner),
            Self::OptionalOf(inner) => write!(f, "{}?", inner),
        }
    }
}

/// A field of a model declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub type_ref: TypeRef,
}

/// A named model or enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub name: String,
    /// Model fields; empty for enums.
    pub fields: Vec<Field>,
    /// Enum values; empty for models.
    pub values: Vec<String>,
}

impl Declaration {
    pub fn model(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            kind: DeclarationKind::Model,
            name: name.into(),
            fields,
            values: Vec::new(),
        }
    }

    pub fn enumeration(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            kind: DeclarationKind::Enum,
            name: name.into(),
            fields: Vec::new(),
            values,
        }
    }

    pub fn is_model(&self) -> bool {
        self.kind == DeclarationKind::Model
    }
}

/// Ordered declarations of one schema file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaDocument {
    pub declarations: Vec<Declaration>,
}

impl SchemaDocument {
    pub fn models(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().filter(|d| d.is_model())
    }

    /// Every declared name, models and enums alike.
    pub fn declared_names(&self) -> std::collections::HashSet<&str> {
        self.declarations.iter().map(|d| d.name.as_str()).collect()
    }
}
