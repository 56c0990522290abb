//! Model-name to domain lookup built from a directory of schema files.

use ignore::WalkBuilder;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{SCHEMA_EXTENSION, SHARED_DOMAIN, SHARED_SCHEMA_NAMES};
use crate::schema::{PrismaParser, SchemaParser};

use super::path::has_extension;

/// Maps every model declared under a schema directory to its domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainIndex {
    models: BTreeMap<String, String>,
}

impl DomainIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index with the default Prisma parser.
    ///
    /// Never fails: an unreadable directory or any unparsable schema file
    /// yields an empty index and a warning.
    pub fn build(schema_dir: &Path) -> Self {
        Self::build_with(schema_dir, &PrismaParser::new())
    }

    /// Build the index with a caller-supplied parser.
    pub fn build_with(schema_dir: &Path, parser: &dyn SchemaParser) -> Self {
        match Self::try_build(schema_dir, parser) {
            Ok(index) => {
                tracing::debug!(
                    schema_dir = %schema_dir.display(),
                    models = index.len(),
                    "built domain index"
                );
                index
            }
            Err(message) => {
                tracing::warn!(
                    schema_dir = %schema_dir.display(),
                    "could not build domain index, continuing with an empty one: {}",
                    message
                );
                Self::new()
            }
        }
    }

    fn try_build(schema_dir: &Path, parser: &dyn SchemaParser) -> Result<Self, String> {
        let mut index = Self::new();

        for file in schema_files(schema_dir)? {
            let content = fs::read_to_string(&file)
                .map_err(|e| format!("failed to read {}: {}", file.display(), e))?;
            let document = parser
                .parse(&content)
                .map_err(|e| format!("failed to parse {}: {}", file.display(), e))?;

            let domain = domain_for_schema_file(&file);
            for model in document.models() {
                index.insert(&model.name, &domain);
            }
        }

        Ok(index)
    }

    /// Record a model's domain. A later insert for the same name wins.
    pub fn insert(&mut self, model: impl Into<String>, domain: impl Into<String>) {
        self.models.insert(model.into(), domain.into());
    }

    /// Domain owning `model`, if it is declared anywhere.
    pub fn domain_of(&self, model: &str) -> Option<&str> {
        self.models.get(model).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// `(model, domain)` pairs in model-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.models.iter().map(|(m, d)| (m.as_str(), d.as_str()))
    }
}

impl FromIterator<(String, String)> for DomainIndex {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            models: iter.into_iter().collect(),
        }
    }
}

/// Domain label of a schema file: its base name, or `shared` for the common files.
pub fn domain_for_schema_file(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    if SHARED_SCHEMA_NAMES.contains(&stem) {
        SHARED_DOMAIN.to_string()
    } else {
        stem.to_string()
    }
}

/// Every schema source under `schema_dir`, sorted by path.
pub(crate) fn schema_files(schema_dir: &Path) -> Result<Vec<PathBuf>, String> {
    if !schema_dir.is_dir() {
        return Err(format!("{} is not a directory", schema_dir.display()));
    }

    // Every schema file counts, including hidden and ignore-listed ones.
    let walker = WalkBuilder::new(schema_dir)
        .standard_filters(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| e.to_string())?;
        let path = entry.path();
        if path.is_file() && has_extension(&path.to_string_lossy(), &[SCHEMA_EXTENSION]) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
