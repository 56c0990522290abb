//! The closed set of syntax shapes the boundary checks inspect.

use serde::Serialize;

/// 1-based position in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Anchor for findings that concern the whole file.
    pub fn file_start() -> Self {
        Self::new(1, 1)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Shape of the expression on the left of a property access or used as a
/// template tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprShape {
    /// A bare identifier: `prisma`, `sql`.
    Identifier(String),
    /// A property access, reduced to its final property: `this.prisma` is
    /// `Member { property: "prisma" }`.
    Member { property: String },
    /// Anything else (calls, literals, `this`, ...).
    Other,
}

impl ExprShape {
    /// Whether this is `name` or `<anything>.name`.
    pub fn names(&self, name: &str) -> bool {
        match self {
            Self::Identifier(ident) => ident == name,
            Self::Member { property } => property == name,
            Self::Other => false,
        }
    }
}

/// `receiver.property`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAccess {
    pub receiver: ExprShape,
    pub property: String,
    pub location: Location,
}

/// `` tag`literal ${expr} literal` ``
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedTemplate {
    pub tag: ExprShape,
    /// Literal text between interpolations; always one more than the number
    /// of interpolated expressions.
    pub quasis: Vec<String>,
    pub location: Location,
}

/// A node handed to the checkers, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceNode {
    /// Emitted once, before any other node of the file.
    Program,
    PropertyAccess(PropertyAccess),
    TaggedTemplate(TaggedTemplate),
}
