use demarc_core::rules::{CheckerRegistry, SqlTableChecker};
use demarc_core::sql::{extract_table_refs, flatten_template, normalize_sql, TableRef};
use demarc_core::{Config, FindingKind, Linter};
use std::sync::Arc;

fn linter() -> Linter {
    let mut registry = CheckerRegistry::empty();
    registry.register(Arc::new(SqlTableChecker::new()));
    Linter::with_registry(Config::default(), registry)
}

fn kinds(path: &str, content: &str) -> Vec<FindingKind> {
    linter()
        .lint_source(path, content)
        .unwrap()
        .into_iter()
        .map(|f| f.kind)
        .collect()
}

#[test]
fn test_cross_schema_table_reported() {
    let found = kinds(
        "/app/src/modules/organization/members.ts",
        "const rows = await db.execute(sql`SELECT * FROM auth.users WHERE id = ${id}`);\n",
    );
    assert_eq!(
        found,
        vec![FindingKind::CrossSchemaAccess {
            current_module: "organization".to_string(),
            schema: "auth".to_string(),
            table: "users".to_string(),
        }]
    );
}

#[test]
fn test_own_schema_allowed() {
    let found = kinds(
        "/app/src/modules/auth/users.ts",
        "await db.execute(sql`SELECT * FROM auth.users WHERE id = ${id}`);\n",
    );
    assert!(found.is_empty());
}

#[test]
fn test_unqualified_table_reported() {
    let found = kinds(
        "/app/src/modules/auth/users.ts",
        "await db.execute(sql`UPDATE users SET name = ${name} WHERE id = ${id}`);\n",
    );
    assert_eq!(
        found,
        vec![FindingKind::UnqualifiedTable {
            current_module: "auth".to_string(),
            table: "users".to_string(),
        }]
    );
}

#[test]
fn test_join_reports_each_table_once() {
    let found = kinds(
        "/app/src/modules/billing/report.ts",
        r#"const q = sql`
  SELECT i.id, o.name
  FROM billing.invoices i
  JOIN organization.organizations o ON o.id = i.org_id
  LEFT JOIN auth.users u ON u.id = i.created_by
  JOIN organization.organizations o2 ON o2.id = i.parent_org_id
`;
"#,
    );
    assert_eq!(
        found,
        vec![
            FindingKind::CrossSchemaAccess {
                current_module: "billing".to_string(),
                schema: "organization".to_string(),
                table: "organizations".to_string(),
            },
            FindingKind::CrossSchemaAccess {
                current_module: "billing".to_string(),
                schema: "auth".to_string(),
                table: "users".to_string(),
            },
        ]
    );
}

#[test]
fn test_member_tag_and_comments() {
    let found = kinds(
        "/app/src/modules/auth/users.ts",
        "await this.db.sql`-- FROM billing.invoices\nSELECT 1 /* JOIN billing.lines */ FROM auth.users`;\n",
    );
    assert!(found.is_empty());
}

#[test]
fn test_other_tags_ignored() {
    let found = kinds(
        "/app/src/modules/auth/users.ts",
        "const q = gql`query { users { id } }`;\nconst s = html`<p>FROM users</p>`;\n",
    );
    assert!(found.is_empty());
}

#[test]
fn test_interpolated_table_name_not_matched() {
    let found = kinds(
        "/app/src/modules/auth/users.ts",
        "await db.execute(sql`SELECT * FROM ${table} WHERE id = ${id}`);\n",
    );
    assert!(found.is_empty());
}

#[test]
fn test_outside_modules_not_checked() {
    let found = kinds("/app/scripts/seed.ts", "sql`DELETE FROM auth.users`;\n");
    assert!(found.is_empty());
}

#[test]
fn test_template_helpers() {
    assert_eq!(
        flatten_template(&["SELECT * FROM t WHERE a = ", " AND b = ", ""]),
        "SELECT * FROM t WHERE a = ? AND b = ?"
    );
    assert_eq!(
        normalize_sql("SELECT *\n  FROM   auth.users -- trailing\n"),
        "SELECT * FROM auth.users"
    );
    assert_eq!(
        extract_table_refs("insert into billing.invoices (id) select id from staging"),
        vec![
            TableRef::bare("staging"),
            TableRef::qualified("billing", "invoices"),
        ]
    );
}

#[test]
fn test_three_foreign_tables_reported_once_each() {
    let found = kinds(
        "/app/src/modules/reporting/summary.ts",
        r#"const q = sql`
  SELECT * FROM auth.users u
  JOIN organization.organizations o ON o.owner_id = u.id
  JOIN billing.invoices i ON i.org_id = o.id
  JOIN auth.users u2 ON u2.id = i.created_by
`;
"#,
    );
    assert_eq!(found.len(), 3);
    assert!(found
        .iter()
        .all(|k| matches!(k, FindingKind::CrossSchemaAccess { .. })));
}

#[test]
fn test_findings_follow_clause_order() {
    let found = kinds(
        "/app/src/modules/reporting/sync.ts",
        "await db.execute(sql`UPDATE auth.users SET plan = (SELECT plan FROM billing.invoices WHERE id = ${id})`);\n",
    );
    assert_eq!(
        found,
        vec![
            FindingKind::CrossSchemaAccess {
                current_module: "reporting".to_string(),
                schema: "billing".to_string(),
                table: "invoices".to_string(),
            },
            FindingKind::CrossSchemaAccess {
                current_module: "reporting".to_string(),
                schema: "auth".to_string(),
                table: "users".to_string(),
            },
        ]
    );
}
