//! Raw SQL written with the `sql` template tag.

use super::{CheckContext, Checker, SourceFile};
use crate::config::{SOURCE_EXTENSIONS, SQL_TAG_IDENTIFIER};
use crate::domain::extract_domain;
use crate::finding::{Finding, FindingKind};
use crate::source::{SourceNode, TaggedTemplate};
use crate::sql::{extract_table_refs, flatten_template, normalize_sql, TableRef};

/// Flags SQL that touches another domain's schema or leaves tables unqualified.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlTableChecker;

impl SqlTableChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Checker for SqlTableChecker {
    fn name(&self) -> &'static str {
        "sql-tables"
    }

    fn supported_extensions(&self) -> &[&'static str] {
        SOURCE_EXTENSIONS
    }

    fn check(&self, file: &SourceFile<'_>, ctx: &mut CheckContext<'_>) -> Vec<Finding> {
        let Some(current) = extract_domain(file.path, &ctx.config.module_marker) else {
            return Vec::new();
        };

        let mut findings = Vec::new();
        for node in file.nodes {
            match node {
                SourceNode::TaggedTemplate(template) if is_sql_tag(template) => {
                    findings.extend(
                        table_refs_in_template(template)
                            .iter()
                            .filter_map(|table_ref| classify_table(table_ref, &current))
                            .map(|kind| Finding::new(file.path, template.location, kind)),
                    );
                }
                SourceNode::TaggedTemplate(_)
                | SourceNode::Program
                | SourceNode::PropertyAccess(_) => {}
            }
        }

        findings
    }
}

/// Whether the template is tagged `sql` or `<expr>.sql`.
pub fn is_sql_tag(template: &TaggedTemplate) -> bool {
    template.tag.names(SQL_TAG_IDENTIFIER)
}

/// Distinct tables the template's SQL refers to.
pub fn table_refs_in_template(template: &TaggedTemplate) -> Vec<TableRef> {
    let sql = normalize_sql(&flatten_template(&template.quasis));
    extract_table_refs(&sql)
}

/// Finding for one table reference made from `current_domain`.
///
/// Every table must be schema-qualified; qualification with the current
/// domain is the only accepted form.
pub fn classify_table(table_ref: &TableRef, current_domain: &str) -> Option<FindingKind> {
    match &table_ref.schema {
        Some(schema) if schema == current_domain => None,
        Some(schema) => Some(FindingKind::CrossSchemaAccess {
            current_module: current_domain.to_string(),
            schema: schema.clone(),
            table: table_ref.table.clone(),
        }),
        None => Some(FindingKind::UnqualifiedTable {
            current_module: current_domain.to_string(),
            table: table_ref.table.clone(),
        }),
    }
}
