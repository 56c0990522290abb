//! Running every applicable checker over files and directories.

use chrono::{DateTime, Utc};
use ignore::WalkBuilder;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{Config, ConfigError, SOURCE_EXTENSIONS};
use crate::domain::{has_extension, DomainIndexCache};
use crate::finding::Finding;
use crate::rules::{CheckContext, CheckerRegistry, SourceFile};
use crate::source::{SourceError, TypeScriptSource};

/// Errors that stop a lint run.
#[derive(Debug, Error)]
pub enum LintError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of linting a directory tree.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    pub findings: Vec<Finding>,
    pub files_checked: usize,
    pub files_skipped: usize,
    pub generated_at: DateTime<Utc>,
}

impl LintReport {
    fn new() -> Self {
        Self {
            findings: Vec::new(),
            files_checked: 0,
            files_skipped: 0,
            generated_at: Utc::now(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of findings per kind id.
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.kind.id()).or_insert(0) += 1;
        }
        counts
    }
}

/// Entry point for checking files against the configured boundaries.
pub struct Linter {
    config: Config,
    registry: CheckerRegistry,
    source: TypeScriptSource,
    cache: Option<DomainIndexCache>,
}

impl Linter {
    /// Linter with all built-in checkers. Domain indexes are rebuilt for
    /// every file unless [`Linter::with_index_cache`] is used.
    pub fn new(config: Config) -> Self {
        Self::with_registry(config, CheckerRegistry::new())
    }

    pub fn with_registry(config: Config, registry: CheckerRegistry) -> Self {
        Self {
            config,
            registry,
            source: TypeScriptSource::new(),
            cache: None,
        }
    }

    /// Reuse domain indexes across files while the schema files are unchanged.
    pub fn with_index_cache(mut self) -> Self {
        self.cache = Some(DomainIndexCache::new());
        self
    }

    /// Findings for one file's content, sorted by position.
    pub fn lint_source(&mut self, path: &str, content: &str) -> Result<Vec<Finding>, LintError> {
        let checkers = self.registry.checkers_for(path);
        if checkers.is_empty() {
            return Ok(Vec::new());
        }

        let nodes = if has_extension(path, SOURCE_EXTENSIONS) {
            self.source.nodes(path, content)?
        } else {
            Vec::new()
        };
        let file = SourceFile {
            path,
            content,
            nodes: &nodes,
        };

        let boundaries = &self.config.boundaries;
        let mut ctx = match self.cache.as_mut() {
            Some(cache) => CheckContext::with_cache(boundaries, cache),
            None => CheckContext::new(boundaries),
        };

        let mut findings = Vec::new();
        for checker in checkers {
            let found = checker.check(&file, &mut ctx);
            tracing::debug!(
                checker = checker.name(),
                file = path,
                findings = found.len(),
                "checked file"
            );
            findings.extend(found);
        }

        findings.sort_by_key(|f| f.location);
        Ok(findings)
    }

    /// Read and lint a single file.
    pub fn lint_file(&mut self, path: &Path) -> Result<Vec<Finding>, LintError> {
        let content = fs::read_to_string(path).map_err(|source| LintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.lint_source(&path.to_string_lossy(), &content)
    }

    /// Lint a file, or every checkable file under a directory.
    ///
    /// Unreadable files are skipped with a warning.
    pub fn lint_path(&mut self, root: &Path) -> Result<LintReport, LintError> {
        let root = root.canonicalize().map_err(|source| LintError::Io {
            path: root.to_path_buf(),
            source,
        })?;

        let mut report = LintReport::new();
        for file in self.files_under(&root) {
            match self.lint_file(&file) {
                Ok(findings) => {
                    report.files_checked += 1;
                    report.findings.extend(findings);
                }
                Err(LintError::Io { path, source }) => {
                    tracing::warn!("Failed to read {}: {}", path.display(), source);
                    report.files_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        report
            .findings
            .sort_by(|a, b| a.file.cmp(&b.file).then(a.location.cmp(&b.location)));
        Ok(report)
    }

    fn files_under(&self, root: &Path) -> Vec<PathBuf> {
        if root.is_file() {
            return vec![root.to_path_buf()];
        }

        let exclude_dirs = self.config.scan.exclude_dirs.clone();
        let walker = WalkBuilder::new(root)
            .hidden(true)
            .git_ignore(true)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| exclude_dirs.iter().any(|d| d == name)))
            })
            .build();

        let extensions: Vec<&str> = self
            .config
            .scan
            .include_extensions
            .iter()
            .map(String::as_str)
            .collect();

        let mut files: Vec<PathBuf> = walker
            .flatten()
            .map(|entry| entry.into_path())
            .filter(|path| path.is_file() && has_extension(&path.to_string_lossy(), &extensions))
            .collect();
        files.sort();
        files
    }
}
