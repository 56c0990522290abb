use demarc_core::schema::{DeclarationKind, TypeRef};
use demarc_core::{PrismaParser, SchemaError, SchemaParser};

const AUTH_SCHEMA: &str = r#"
// Accounts and sessions
model User {
  id        Int       @id @default(autoincrement())
  email     String    @unique
  role      Role      @default(USER)
  sessions  Session[]
  profile   Profile?
  createdAt DateTime  @default(now())

  @@map("users")
}

model Session {
  id     String @id
  user   User   @relation(fields: [userId], references: [id])
  userId Int
}

enum Role {
  USER
  ADMIN // full access
}
"#;

#[test]
fn test_parse_models_and_enums() {
    let doc = PrismaParser::new().parse(AUTH_SCHEMA).unwrap();

    let names: Vec<_> = doc.declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["User", "Session", "Role"]);
    assert_eq!(doc.declarations[2].kind, DeclarationKind::Enum);
    assert_eq!(doc.declarations[2].values, vec!["USER", "ADMIN"]);
    assert_eq!(doc.models().count(), 2);
}

#[test]
fn test_field_types() {
    let doc = PrismaParser::new().parse(AUTH_SCHEMA).unwrap();
    let user = &doc.declarations[0];

    let field = |name: &str| {
        user.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.type_ref.clone())
            .unwrap()
    };
    assert_eq!(field("email"), TypeRef::base("String"));
    assert_eq!(field("sessions"), TypeRef::array_of(TypeRef::base("Session")));
    assert_eq!(field("profile"), TypeRef::optional_of(TypeRef::base("Profile")));
    assert_eq!(user.fields.len(), 6);
}

#[test]
fn test_datasource_and_generator_skipped() {
    let content = r#"
datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

generator client {
  provider        = "prisma-client-js"
  previewFeatures = ["multiSchema"]
}

model Team {
  id Int @id
}
"#;
    let doc = PrismaParser::new().parse(content).unwrap();
    assert_eq!(doc.declarations.len(), 1);
    assert_eq!(doc.declarations[0].name, "Team");
}

#[test]
fn test_unterminated_block() {
    let err = PrismaParser::new()
        .parse("model User {\n  id Int\n")
        .unwrap_err();
    assert_eq!(
        err,
        SchemaError::Unterminated {
            line: 1,
            name: "User".to_string()
        }
    );
}

#[test]
fn test_unknown_top_level_token() {
    let err = PrismaParser::new().parse("modle User {\n}\n").unwrap_err();
    assert!(matches!(err, SchemaError::UnexpectedToken { line: 1, .. }));
}

#[test]
fn test_field_without_type() {
    let err = PrismaParser::new()
        .parse("model User {\n  id\n}\n")
        .unwrap_err();
    assert!(matches!(err, SchemaError::MissingFieldType { line: 2, .. }));
    assert_eq!(err.line(), 2);
}

#[test]
fn test_missing_brace_and_name() {
    let parser = PrismaParser::new();
    assert!(matches!(
        parser.parse("model User\n"),
        Err(SchemaError::MissingBrace { .. })
    ));
    assert!(matches!(
        parser.parse("model {\n}\n"),
        Err(SchemaError::MissingName { .. })
    ));
}

#[test]
fn test_duplicate_declaration() {
    let err = PrismaParser::new()
        .parse("model A {\n  id Int\n}\nenum A {\n  X\n}\n")
        .unwrap_err();
    assert_eq!(
        err,
        SchemaError::Duplicate {
            line: 4,
            name: "A".to_string()
        }
    );
}

#[test]
fn test_can_parse_extension() {
    let parser = PrismaParser::new();
    assert!(parser.can_parse("prisma"));
    assert!(parser.can_parse("PRISMA"));
    assert!(!parser.can_parse("ts"));
}
