//! Application source parsing.
//!
//! The checkers never see a concrete syntax tree. [`TypeScriptSource`] reduces a
//! file to a flat list of [`SourceNode`]s (file entry, property accesses and
//! tagged templates), and each checker handles that closed set with one match.

mod node;
mod treesitter;

pub use node::{ExprShape, Location, PropertyAccess, SourceNode, TaggedTemplate};
pub use treesitter::TypeScriptSource;

use thiserror::Error;

/// Errors raised while parsing application source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to set language: {0}")]
    Language(String),

    #[error("Failed to parse {path}")]
    Parse { path: String },
}
