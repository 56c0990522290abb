//! Table references in SQL text.
//!
//! A template is flattened to plain SQL (interpolations become a placeholder),
//! comments and redundant whitespace are removed, and the result is scanned
//! for the tables each clause touches. Nothing here parses SQL; a reference
//! the patterns miss is simply not reported.

mod tables;
mod template;

pub use tables::{extract_table_refs, TableRef, TABLE_CLAUSE_PATTERNS};
pub use template::{flatten_template, normalize_sql};
