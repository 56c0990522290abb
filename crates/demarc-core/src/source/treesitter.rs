//! TypeScript source walker built on tree-sitter.

use tree_sitter::{Language, Node, Parser as TSParser, Tree};

use super::node::{ExprShape, Location, PropertyAccess, SourceNode, TaggedTemplate};
use super::SourceError;

/// Turns TypeScript (and TSX) source into [`SourceNode`]s.
pub struct TypeScriptSource {
    typescript: Language,
    tsx: Language,
}

impl TypeScriptSource {
    pub fn new() -> Self {
        Self {
            typescript: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            tsx: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Parse `content` and list the nodes the checkers care about.
    ///
    /// `Program` comes first; the rest follow in depth-first document order.
    pub fn nodes(&self, path: &str, content: &str) -> Result<Vec<SourceNode>, SourceError> {
        let tree = self.parse_tree(path, content)?;
        let mut nodes = vec![SourceNode::Program];
        collect(tree.root_node(), content, &mut nodes);
        Ok(nodes)
    }

    /// Parse source code into a tree-sitter tree.
    pub fn parse_tree(&self, path: &str, content: &str) -> Result<Tree, SourceError> {
        let language = if path.to_ascii_lowercase().ends_with(".tsx") {
            &self.tsx
        } else {
            &self.typescript
        };

        let mut parser = TSParser::new();
        parser
            .set_language(language)
            .map_err(|e| SourceError::Language(e.to_string()))?;

        parser.parse(content, None).ok_or_else(|| SourceError::Parse {
            path: path.to_string(),
        })
    }
}

impl Default for TypeScriptSource {
    fn default() -> Self {
        Self::new()
    }
}

fn collect(node: Node, content: &str, out: &mut Vec<SourceNode>) {
    match node.kind() {
        "member_expression" => {
            if let Some(access) = property_access(&node, content) {
                out.push(SourceNode::PropertyAccess(access));
            }
        }
        "call_expression" => {
            if let Some(template) = tagged_template(&node, content) {
                out.push(SourceNode::TaggedTemplate(template));
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, content, out);
    }
}

fn property_access(node: &Node, content: &str) -> Option<PropertyAccess> {
    let object = node.child_by_field_name("object")?;
    let property = node.child_by_field_name("property")?;
    if property.kind() != "property_identifier" {
        return None;
    }

    Some(PropertyAccess {
        receiver: expr_shape(&object, content),
        property: node_text(&property, content).to_string(),
        location: node_location(&property),
    })
}

fn tagged_template(node: &Node, content: &str) -> Option<TaggedTemplate> {
    let tag = node.child_by_field_name("function")?;
    let template = node.child_by_field_name("arguments")?;
    if template.kind() != "template_string" {
        return None;
    }

    Some(TaggedTemplate {
        tag: expr_shape(&tag, content),
        quasis: template_quasis(&template, content),
        location: node_location(node),
    })
}

/// Literal text of a template string, split at each `${...}`.
fn template_quasis(template: &Node, content: &str) -> Vec<String> {
    // Skip the opening and closing backticks.
    let start = (template.start_byte() + 1).min(template.end_byte());
    let end = template.end_byte().saturating_sub(1).max(start);

    let mut quasis = Vec::new();
    let mut cursor_byte = start;
    let mut cursor = template.walk();
    for child in template.children(&mut cursor) {
        if child.kind() == "template_substitution" {
            let until = child.start_byte().clamp(cursor_byte, end);
            quasis.push(content[cursor_byte..until].to_string());
            cursor_byte = child.end_byte().clamp(cursor_byte, end);
        }
    }
    quasis.push(content[cursor_byte..end].to_string());
    quasis
}

fn expr_shape(node: &Node, content: &str) -> ExprShape {
    match node.kind() {
        "identifier" => ExprShape::Identifier(node_text(node, content).to_string()),
        "member_expression" => node
            .child_by_field_name("property")
            .filter(|p| p.kind() == "property_identifier")
            .map(|p| ExprShape::Member {
                property: node_text(&p, content).to_string(),
            })
            .unwrap_or(ExprShape::Other),
        // `this.prisma!.user`
        "non_null_expression" | "parenthesized_expression" => node
            .named_child(0)
            .map(|inner| expr_shape(&inner, content))
            .unwrap_or(ExprShape::Other),
        _ => ExprShape::Other,
    }
}

/// Get text for a node from source content.
fn node_text<'a>(node: &Node, content: &'a str) -> &'a str {
    &content[node.byte_range()]
}

/// 1-based line and column of a node's start.
fn node_location(node: &Node) -> Location {
    let pos = node.start_position();
    Location::new(pos.row as u32 + 1, pos.column as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(src: &str) -> Vec<SourceNode> {
        TypeScriptSource::new().nodes("a.ts", src).unwrap()
    }

    #[test]
    fn test_program_first() {
        assert_eq!(nodes("const x = 1;")[0], SourceNode::Program);
    }

    #[test]
    fn test_member_receiver_shape() {
        let found = nodes("this.prisma.user.findMany();");
        let access = found
            .iter()
            .find_map(|n| match n {
                SourceNode::PropertyAccess(a) if a.property == "user" => Some(a.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            access.receiver,
            ExprShape::Member {
                property: "prisma".to_string()
            }
        );
        assert_eq!(access.location.line, 1);
    }

    #[test]
    fn test_template_quasis() {
        let found = nodes("const r = sql`SELECT * FROM t WHERE a = ${a} AND b = ${b}`;");
        let template = found
            .iter()
            .find_map(|n| match n {
                SourceNode::TaggedTemplate(t) => Some(t.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(template.tag, ExprShape::Identifier("sql".to_string()));
        assert_eq!(
            template.quasis,
            vec!["SELECT * FROM t WHERE a = ", " AND b = ", ""]
        );
    }

    #[test]
    fn test_untagged_template_ignored() {
        let found = nodes("const s = `FROM users`;");
        assert!(!found
            .iter()
            .any(|n| matches!(n, SourceNode::TaggedTemplate(_))));
    }
}
