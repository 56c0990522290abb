//! Domain ownership: which domain a model or a source file belongs to.
//!
//! - [`DomainIndex`] - model name to domain, built from the schema directory
//! - [`DomainIndexCache`] - memoized indexes for multi-file runs
//! - [`extract_domain`] - domain of an application source path
//! - [`looks_like_entity_name`] / [`to_declaration_casing`] - accessor heuristics

mod cache;
mod index;
mod names;
mod path;

pub use cache::DomainIndexCache;
pub use index::{domain_for_schema_file, DomainIndex};
pub use names::{
    looks_like_entity_name, to_declaration_casing, DATA_ACCESS_METHODS, LANGUAGE_PROPERTIES,
};
pub use path::{extract_domain, find_marked_ancestor, find_project_root, has_extension};
