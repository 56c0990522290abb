use demarc_core::rules::{unresolved_references, CheckerRegistry, CrossReferenceChecker};
use demarc_core::source::Location;
use demarc_core::{Config, FindingKind, Linter, PrismaParser, SchemaParser};
use std::sync::Arc;

fn linter() -> Linter {
    let mut registry = CheckerRegistry::empty();
    registry.register(Arc::new(CrossReferenceChecker::new()));
    Linter::with_registry(Config::default(), registry)
}

const BILLING: &str = r#"model Invoice {
  id             Int          @id
  amount         Float
  organization   Organization @relation(fields: [organizationId], references: [id])
  organizationId Int
  lines          InvoiceLine[]
  status         Status
}

model InvoiceLine {
  id      Int      @id
  invoice Invoice  @relation(fields: [invoiceId], references: [id])
  invoiceId Int
  owner   User?
}

enum Status {
  OPEN
  PAID
}
"#;

#[test]
fn test_foreign_types_reported() {
    let findings = linter()
        .lint_source("prisma/schema/billing.prisma", BILLING)
        .unwrap();

    let kinds: Vec<_> = findings.iter().map(|f| f.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            FindingKind::CrossFileReference {
                field_name: "organization".to_string(),
                referenced_type: "Organization".to_string(),
            },
            FindingKind::CrossFileReference {
                field_name: "owner".to_string(),
                referenced_type: "User".to_string(),
            },
        ]
    );
    assert_eq!(findings[0].location, Location::new(4, 3));
    assert_eq!(findings[1].location, Location::new(14, 3));
}

#[test]
fn test_self_contained_schema_is_clean() {
    let content = "model Team {\n  id Int @id\n  members Member[]\n}\n\nmodel Member {\n  id Int @id\n  team Team\n  joined DateTime\n  meta Json?\n}\n";
    assert!(linter()
        .lint_source("prisma/schema/team.prisma", content)
        .unwrap()
        .is_empty());
}

#[test]
fn test_unparsable_schema_produces_no_findings() {
    let findings = linter()
        .lint_source("prisma/schema/broken.prisma", "model Broken {\n  owner User\n")
        .unwrap();
    assert!(findings.is_empty());
}

#[test]
fn test_source_files_not_checked() {
    assert!(linter()
        .lint_source("src/modules/auth/a.ts", "const owner: User = x;")
        .unwrap()
        .is_empty());
}

#[test]
fn test_unresolved_references_on_document() {
    let doc = PrismaParser::new().parse(BILLING).unwrap();
    assert_eq!(
        unresolved_references(&doc),
        vec![
            ("organization".to_string(), "Organization".to_string()),
            ("owner".to_string(), "User".to_string()),
        ]
    );
}

#[test]
fn test_wrapped_local_types_not_flagged() {
    let content = "model Node {\n  id Int @id\n  parent Node?\n  children Node[]\n  tags Tag[]\n}\n\nmodel Tag {\n  id Int @id\n}\n";
    assert!(linter()
        .lint_source("prisma/schema/graph.prisma", content)
        .unwrap()
        .is_empty());
}
