//! Schema relations that reach into another schema file.

use super::{CheckContext, Checker, SourceFile};
use crate::config::SCHEMA_EXTENSION;
use crate::finding::{Finding, FindingKind};
use crate::schema::{is_primitive, PrismaParser, SchemaDocument, SchemaParser};
use crate::source::Location;

/// Flags model fields whose type is not declared in the same schema file.
///
/// Each schema file is one domain, so a relation to a type declared
/// elsewhere couples two domains at the database level.
pub struct CrossReferenceChecker {
    parser: Box<dyn SchemaParser>,
}

impl CrossReferenceChecker {
    pub fn new() -> Self {
        Self::with_parser(Box::new(PrismaParser::new()))
    }

    pub fn with_parser(parser: Box<dyn SchemaParser>) -> Self {
        Self { parser }
    }
}

impl Default for CrossReferenceChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for CrossReferenceChecker {
    fn name(&self) -> &'static str {
        "cross-reference"
    }

    fn supported_extensions(&self) -> &[&'static str] {
        &[SCHEMA_EXTENSION]
    }

    fn check(&self, file: &SourceFile<'_>, _ctx: &mut CheckContext<'_>) -> Vec<Finding> {
        let document = match self.parser.parse(file.content) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(file = file.path, "skipping unparsable schema: {}", e);
                return Vec::new();
            }
        };

        unresolved_references(&document)
            .into_iter()
            .map(|(field_name, referenced_type)| {
                let location = locate_field(file.content, &field_name);
                Finding::new(
                    file.path,
                    location,
                    FindingKind::CrossFileReference {
                        field_name,
                        referenced_type,
                    },
                )
            })
            .collect()
    }
}

/// `(field, type)` for every model field whose base type is neither a
/// primitive nor declared in this document.
pub fn unresolved_references(document: &SchemaDocument) -> Vec<(String, String)> {
    let declared = document.declared_names();

    document
        .models()
        .flat_map(|model| model.fields.iter())
        .filter_map(|field| {
            let base = field.type_ref.base_name();
            if base.is_empty() || is_primitive(base) || declared.contains(base) {
                None
            } else {
                Some((field.name.clone(), base.to_string()))
            }
        })
        .collect()
}

/// Best-effort position of a field declaration in schema text.
///
/// Prefers a line that starts with the field name followed by a type, then
/// any line mentioning the name, then the top of the file.
pub fn locate_field(content: &str, field_name: &str) -> Location {
    let declaration = content.lines().enumerate().find_map(|(idx, line)| {
        let trimmed = line.trim_start();
        let rest = trimmed.strip_prefix(field_name)?;
        let followed_by_type = rest.starts_with(char::is_whitespace) && !rest.trim().is_empty();
        followed_by_type.then(|| {
            let column = line.len() - trimmed.len() + 1;
            Location::new(idx as u32 + 1, column as u32)
        })
    });
    if let Some(location) = declaration {
        return location;
    }

    content
        .lines()
        .enumerate()
        .find_map(|(idx, line)| {
            line.find(field_name)
                .map(|col| Location::new(idx as u32 + 1, col as u32 + 1))
        })
        .unwrap_or_else(Location::file_start)
}
