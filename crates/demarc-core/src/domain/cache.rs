//! Memoized domain indexes, rebuilt when the schema directory changes.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use super::index::{schema_files, DomainIndex};

/// Cache of domain indexes keyed by schema directory.
///
/// Each entry stores a fingerprint of the directory's schema files (path,
/// size, modification time). A lookup whose fingerprint differs rebuilds the
/// index, so a cached result is always identical to a fresh build.
#[derive(Debug, Default)]
pub struct DomainIndexCache {
    entries: HashMap<PathBuf, CachedIndex>,
}

#[derive(Debug)]
struct CachedIndex {
    fingerprint: String,
    index: DomainIndex,
}

impl DomainIndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index for `schema_dir`, built on first use or after any schema change.
    pub fn get(&mut self, schema_dir: &Path) -> &DomainIndex {
        let fingerprint = fingerprint(schema_dir);
        let stale = self
            .entries
            .get(schema_dir)
            .map_or(true, |cached| cached.fingerprint != fingerprint);

        if stale {
            tracing::debug!(schema_dir = %schema_dir.display(), "domain index cache miss");
            self.entries.insert(
                schema_dir.to_path_buf(),
                CachedIndex {
                    fingerprint: fingerprint.clone(),
                    index: DomainIndex::build(schema_dir),
                },
            );
        }

        &self.entries[schema_dir].index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// SHA-256 over every schema file's path, size and modification time.
fn fingerprint(schema_dir: &Path) -> String {
    let mut hasher = Sha256::new();

    match schema_files(schema_dir) {
        Ok(files) => {
            for file in files {
                hasher.update(file.to_string_lossy().as_bytes());
                if let Ok(meta) = fs::metadata(&file) {
                    hasher.update(meta.len().to_le_bytes());
                    let modified = meta
                        .modified()
                        .ok()
                        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                        .map(|d| d.as_nanos())
                        .unwrap_or_default();
                    hasher.update(modified.to_le_bytes());
                }
            }
        }
        Err(message) => hasher.update(message.as_bytes()),
    }

    hex::encode(hasher.finalize())
}
