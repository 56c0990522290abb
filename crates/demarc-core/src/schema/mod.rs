//! Schema declarations and the parser that produces them.
//!
//! ## Components
//!
//! - `SchemaParser` trait - Turns schema text into a `SchemaDocument`
//! - `PrismaParser` - Parser for `.prisma` sources
//! - `TypeRef` - Field type with list/optional wrappers as nesting

mod error;
mod parser;
mod types;

pub use error::SchemaError;
pub use parser::{parse_type, PrismaParser};
pub use types::{
    is_primitive, Declaration, DeclarationKind, Field, SchemaDocument, TypeRef, PRIMITIVE_TYPES,
};

/// Parser from schema text to declarations.
///
/// Implementations fail loudly on malformed input; callers decide whether
/// the error propagates or is logged and dropped.
pub trait SchemaParser: Send + Sync {
    /// Parse a schema source into its ordered declarations.
    fn parse(&self, content: &str) -> Result<SchemaDocument, SchemaError>;

    /// File extensions this parser handles.
    fn supported_extensions(&self) -> &[&'static str];

    /// Check if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
