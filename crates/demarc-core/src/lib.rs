//! # demarc-core
//!
//! Domain boundary analysis for codebases built on a Prisma schema split
//! into one file per domain.
//!
//! Application modules live under a marker path (`src/modules/<domain>/`).
//! The checks report when a module reaches into data owned by another
//! domain, through the ORM client or through raw SQL, and when one schema
//! file's models reference types declared in another.
//!
//! # Example
//!
//! ```ignore
//! use demarc_core::{Config, Linter};
//!
//! let mut linter = Linter::new(Config::load()?).with_index_cache();
//! let report = linter.lint_path(Path::new("."))?;
//! for finding in &report.findings {
//!     println!("{}", finding);
//! }
//! ```

pub mod config;
pub mod domain;
pub mod finding;
pub mod linter;
pub mod rules;
pub mod schema;
pub mod source;
pub mod sql;

pub use config::{BoundaryConfig, Config, ConfigError, ScanConfig};
pub use domain::{DomainIndex, DomainIndexCache};
pub use finding::{Finding, FindingKind};
pub use linter::{LintError, LintReport, Linter};
pub use schema::{PrismaParser, SchemaError, SchemaParser};
pub use source::{Location, SourceNode, TypeScriptSource};
