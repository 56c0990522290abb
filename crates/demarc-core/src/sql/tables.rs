//! Table-reference extraction from normalized SQL.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Clause patterns, each capturing an optional schema and a table name.
///
/// Identifiers may be double-quoted (`"auth"."users"`).
pub const TABLE_CLAUSE_PATTERNS: &[&str] = &[
    r#"(?i)\bFROM\s+(?:"?([A-Za-z_][A-Za-z0-9_]*)"?\.)?"?([A-Za-z_][A-Za-z0-9_]*)"?"#,
    r#"(?i)\bJOIN\s+(?:"?([A-Za-z_][A-Za-z0-9_]*)"?\.)?"?([A-Za-z_][A-Za-z0-9_]*)"?"#,
    r#"(?i)\bINSERT\s+INTO\s+(?:"?([A-Za-z_][A-Za-z0-9_]*)"?\.)?"?([A-Za-z_][A-Za-z0-9_]*)"?"#,
    r#"(?i)\bUPDATE\s+(?:"?([A-Za-z_][A-Za-z0-9_]*)"?\.)?"?([A-Za-z_][A-Za-z0-9_]*)"?"#,
    r#"(?i)\bDELETE\s+FROM\s+(?:"?([A-Za-z_][A-Za-z0-9_]*)"?\.)?"?([A-Za-z_][A-Za-z0-9_]*)"?"#,
];

/// Keywords a clause pattern can capture in place of a table name:
/// `FROM (SELECT`, `DO UPDATE SET`, `FOR UPDATE SKIP LOCKED`, `FOR UPDATE OF`,
/// `FOR UPDATE NOWAIT`, `JOIN LATERAL`.
const NON_TABLE_KEYWORDS: &[&str] = &["select", "set", "skip", "of", "nowait", "lateral"];

/// A table named in SQL text, with its schema when qualified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TableRef {
    pub schema: Option<String>,
    pub table: String,
}

impl TableRef {
    pub fn qualified(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            table: table.into(),
        }
    }

    pub fn bare(table: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: table.into(),
        }
    }
}

impl std::fmt::Display for TableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.table),
            None => write!(f, "{}", self.table),
        }
    }
}

/// Distinct table references in `sql`.
///
/// Patterns are scanned one after another in [`TABLE_CLAUSE_PATTERNS`] order,
/// so every FROM reference comes before any JOIN reference, and so on. A
/// reference seen again later is dropped.
pub fn extract_table_refs(sql: &str) -> Vec<TableRef> {
    let mut seen = HashSet::new();
    let mut refs = Vec::new();

    for re in clause_regexes() {
        for cap in re.captures_iter(sql) {
            let Some(table) = cap.get(2) else {
                continue;
            };
            if NON_TABLE_KEYWORDS
                .iter()
                .any(|kw| kw.eq_ignore_ascii_case(table.as_str()))
            {
                continue;
            }

            let table_ref = match cap.get(1) {
                Some(schema) => TableRef::qualified(schema.as_str(), table.as_str()),
                None => TableRef::bare(table.as_str()),
            };
            if seen.insert(table_ref.clone()) {
                refs.push(table_ref);
            }
        }
    }

    refs
}

fn clause_regexes() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        TABLE_CLAUSE_PATTERNS
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect()
    })
}
