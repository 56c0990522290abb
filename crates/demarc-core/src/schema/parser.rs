//! Line-oriented parser for Prisma schema files.

use std::collections::HashSet;

use super::error::SchemaError;
use super::types::{Declaration, Field, SchemaDocument, TypeRef};
use super::SchemaParser;
use crate::config::SCHEMA_EXTENSION;

/// Parser for `.prisma` schema sources.
///
/// Only declarations the boundary checks need are kept: `model` blocks with
/// their fields and `enum` blocks with their values. `datasource`,
/// `generator`, `type` and `view` blocks are consumed and dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrismaParser;

impl PrismaParser {
    pub fn new() -> Self {
        Self
    }

    fn open_block(&self, line: &str, line_no: usize) -> Result<OpenBlock, SchemaError> {
        let (header, body) = match line.find('{') {
            Some(i) => (&line[..i], Some(&line[i + 1..])),
            None => (line, None),
        };

        let mut tokens = header.split_whitespace();
        let keyword = tokens.next().unwrap_or_default();
        let kind = match keyword {
            "model" => BlockKind::Model,
            "enum" => BlockKind::Enum,
            "datasource" | "generator" | "type" | "view" => BlockKind::Skipped,
            other => {
                return Err(SchemaError::UnexpectedToken {
                    line: line_no,
                    token: other.to_string(),
                })
            }
        };

        let name = tokens.next().ok_or_else(|| SchemaError::MissingName {
            line: line_no,
            keyword: keyword.to_string(),
        })?;

        let body = body.ok_or_else(|| SchemaError::MissingBrace {
            line: line_no,
            keyword: keyword.to_string(),
            name: name.to_string(),
        })?;

        let mut block = OpenBlock {
            kind,
            name: name.to_string(),
            line: line_no,
            fields: Vec::new(),
            values: Vec::new(),
            closed: false,
        };

        // Single-line blocks: `enum Role { USER ADMIN }`
        let inner = match body.find('}') {
            Some(end) => {
                block.closed = true;
                &body[..end]
            }
            None => body,
        };
        let inner = inner.trim();
        if !inner.is_empty() {
            if block.kind == BlockKind::Enum {
                block
                    .values
                    .extend(inner.split_whitespace().map(str::to_string));
            } else {
                block.push_line(inner, line_no)?;
            }
        }

        Ok(block)
    }
}

impl SchemaParser for PrismaParser {
    fn parse(&self, content: &str) -> Result<SchemaDocument, SchemaError> {
        let mut document = SchemaDocument::default();
        let mut seen = HashSet::new();
        let mut open: Option<OpenBlock> = None;

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }

            match open.take() {
                Some(block) => {
                    if let Some(rest) = line.strip_prefix('}') {
                        if !rest.trim().is_empty() {
                            return Err(SchemaError::UnexpectedToken {
                                line: line_no,
                                token: rest.trim().to_string(),
                            });
                        }
                        block.finish(&mut document, &mut seen)?;
                    } else {
                        let mut block = block;
                        block.push_line(line, line_no)?;
                        open = Some(block);
                    }
                }
                None => {
                    let block = self.open_block(line, line_no)?;
                    if block.closed {
                        block.finish(&mut document, &mut seen)?;
                    } else {
                        open = Some(block);
                    }
                }
            }
        }

        if let Some(block) = open {
            return Err(SchemaError::Unterminated {
                line: block.line,
                name: block.name,
            });
        }

        Ok(document)
    }

    fn supported_extensions(&self) -> &[&'static str] {
        &[SCHEMA_EXTENSION]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Model,
    Enum,
    Skipped,
}

/// A block whose closing brace has not been seen yet.
struct OpenBlock {
    kind: BlockKind,
    name: String,
    line: usize,
    fields: Vec<Field>,
    values: Vec<String>,
    closed: bool,
}

impl OpenBlock {
    fn push_line(&mut self, line: &str, line_no: usize) -> Result<(), SchemaError> {
        // Block attributes (`@@id`, `@@map`, ...)
        if line.starts_with('@') {
            return Ok(());
        }

        match self.kind {
            BlockKind::Model => {
                let mut tokens = line.split_whitespace();
                let name = tokens.next().unwrap_or_default();
                let ty = tokens.next().ok_or_else(|| SchemaError::MissingFieldType {
                    line: line_no,
                    field: name.to_string(),
                })?;
                self.fields.push(Field {
                    name: name.to_string(),
                    type_ref: parse_type(ty),
                });
            }
            BlockKind::Enum => {
                if let Some(value) = line.split_whitespace().next() {
                    self.values.push(value.to_string());
                }
            }
            BlockKind::Skipped => {}
        }
        Ok(())
    }

    fn finish(
        self,
        document: &mut SchemaDocument,
        seen: &mut HashSet<String>,
    ) -> Result<(), SchemaError> {
        let declaration = match self.kind {
            BlockKind::Model => Declaration::model(&self.name, self.fields),
            BlockKind::Enum => Declaration::enumeration(&self.name, self.values),
            BlockKind::Skipped => return Ok(()),
        };

        if !seen.insert(self.name.clone()) {
            return Err(SchemaError::Duplicate {
                line: self.line,
                name: self.name,
            });
        }

        document.declarations.push(declaration);
        Ok(())
    }
}

/// Parse a field type token such as `Post[]`, `User?` or `Unsupported("x")?`.
pub fn parse_type(token: &str) -> TypeRef {
    if let Some(inner) = token.strip_suffix('?') {
        return TypeRef::optional_of(parse_type(inner));
    }
    if let Some(inner) = token.strip_suffix("[]") {
        return TypeRef::array_of(parse_type(inner));
    }
    match token.find('(') {
        Some(paren) => TypeRef::base(&token[..paren]),
        None => TypeRef::base(token),
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}
