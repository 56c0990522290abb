//! Boundary checkers.
//!
//! Each checker declares the files it applies to and turns one file into
//! findings. TypeScript checkers receive the file as a list of
//! [`SourceNode`]s and handle every variant in a single `match`.
//!
//! ## Checkers
//!
//! - [`ClientAccessChecker`] - `this.prisma.<model>` against the domain index
//! - [`SqlTableChecker`] - tables named in `` sql`...` `` templates
//! - [`CrossReferenceChecker`] - schema fields typed with another file's declarations

mod client_access;
mod cross_reference;
mod registry;
mod sql_tables;

pub use client_access::{classify_access, is_client_access, ClientAccessChecker};
pub use cross_reference::{locate_field, unresolved_references, CrossReferenceChecker};
pub use registry::CheckerRegistry;
pub use sql_tables::{classify_table, is_sql_tag, table_refs_in_template, SqlTableChecker};

use std::path::Path;

use crate::config::BoundaryConfig;
use crate::domain::{has_extension, DomainIndex, DomainIndexCache};
use crate::finding::Finding;
use crate::source::SourceNode;

/// A file handed to a checker.
#[derive(Debug, Clone, Copy)]
pub struct SourceFile<'a> {
    pub path: &'a str,
    pub content: &'a str,
    /// Parsed nodes for application source; empty for schema files.
    pub nodes: &'a [SourceNode],
}

/// Per-file state shared by the checkers of one run.
pub struct CheckContext<'a> {
    pub config: &'a BoundaryConfig,
    cache: Option<&'a mut DomainIndexCache>,
}

impl<'a> CheckContext<'a> {
    /// Context that builds a fresh domain index whenever one is needed.
    pub fn new(config: &'a BoundaryConfig) -> Self {
        Self {
            config,
            cache: None,
        }
    }

    /// Context that serves domain indexes from `cache`.
    pub fn with_cache(config: &'a BoundaryConfig, cache: &'a mut DomainIndexCache) -> Self {
        Self {
            config,
            cache: Some(cache),
        }
    }

    /// Domain index for `schema_dir`.
    pub fn domain_index(&mut self, schema_dir: &Path) -> DomainIndex {
        match self.cache.as_deref_mut() {
            Some(cache) => cache.get(schema_dir).clone(),
            None => DomainIndex::build(schema_dir),
        }
    }
}

/// A boundary rule applied to one file at a time.
pub trait Checker: Send + Sync {
    /// Unique identifier for this checker.
    fn name(&self) -> &'static str;

    /// File extensions this checker inspects.
    fn supported_extensions(&self) -> &[&'static str];

    /// Check if this checker applies to the given path.
    fn can_check(&self, path: &str) -> bool {
        has_extension(path, self.supported_extensions())
    }

    /// Findings for one file.
    fn check(&self, file: &SourceFile<'_>, ctx: &mut CheckContext<'_>) -> Vec<Finding>;
}
