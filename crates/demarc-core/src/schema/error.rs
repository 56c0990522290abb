//! Schema parsing error types.

use thiserror::Error;

/// Errors raised while parsing schema text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A top-level line that opens no known block.
    #[error("line {line}: unexpected `{token}` at top level")]
    UnexpectedToken { line: usize, token: String },

    /// Block keyword without a name.
    #[error("line {line}: `{keyword}` block is missing a name")]
    MissingName { line: usize, keyword: String },

    /// Block header not followed by `{`.
    #[error("line {line}: expected `{{` after `{keyword} {name}`")]
    MissingBrace {
        line: usize,
        keyword: String,
        name: String,
    },

    /// End of input inside a block.
    #[error("line {line}: block `{name}` is never closed")]
    Unterminated { line: usize, name: String },

    /// Field line with no type.
    #[error("line {line}: field `{field}` has no type")]
    MissingFieldType { line: usize, field: String },

    /// Same declaration name twice in one file.
    #[error("line {line}: `{name}` is declared more than once")]
    Duplicate { line: usize, name: String },
}

impl SchemaError {
    /// 1-based line the error was raised at.
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::MissingName { line, .. }
            | Self::MissingBrace { line, .. }
            | Self::Unterminated { line, .. }
            | Self::MissingFieldType { line, .. }
            | Self::Duplicate { line, .. } => *line,
        }
    }
}
