//! Data access through the ORM client (`this.prisma.user.findMany()`).

use std::path::Path;

use super::{CheckContext, Checker, SourceFile};
use crate::config::{CLIENT_IDENTIFIER, SOURCE_EXTENSIONS};
use crate::domain::{
    extract_domain, find_project_root, looks_like_entity_name, to_declaration_casing,
    DomainIndex,
};
use crate::finding::{Finding, FindingKind};
use crate::source::{Location, PropertyAccess, SourceNode};

/// Flags client access to models owned by another domain.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClientAccessChecker;

impl ClientAccessChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Checker for ClientAccessChecker {
    fn name(&self) -> &'static str {
        "client-access"
    }

    fn supported_extensions(&self) -> &[&'static str] {
        SOURCE_EXTENSIONS
    }

    fn check(&self, file: &SourceFile<'_>, ctx: &mut CheckContext<'_>) -> Vec<Finding> {
        let config = ctx.config;
        let Some(current) = extract_domain(file.path, &config.module_marker) else {
            return Vec::new();
        };

        let mut findings = Vec::new();
        let mut index = None;

        for node in file.nodes {
            match node {
                SourceNode::Program => match find_project_root(Path::new(file.path)) {
                    Ok(root) => index = Some(ctx.domain_index(&config.schema_path(&root))),
                    Err(e) => {
                        tracing::warn!(file = file.path, "{}", e);
                        return vec![Finding::new(
                            file.path,
                            Location::file_start(),
                            FindingKind::ConfigError {
                                message: e.to_string(),
                            },
                        )];
                    }
                },
                SourceNode::PropertyAccess(access) => {
                    let Some(index) = index.as_ref() else {
                        continue;
                    };
                    if let Some(kind) = classify_access(access, &current, index) {
                        findings.push(Finding::new(file.path, access.location, kind));
                    }
                }
                SourceNode::TaggedTemplate(_) => {}
            }
        }

        findings
    }
}

/// Whether `access` reads a model off the client: `prisma.x` or `<expr>.prisma.x`.
pub fn is_client_access(access: &PropertyAccess) -> bool {
    access.receiver.names(CLIENT_IDENTIFIER)
}

/// Finding for one property access, if it crosses a boundary.
pub fn classify_access(
    access: &PropertyAccess,
    current_domain: &str,
    index: &DomainIndex,
) -> Option<FindingKind> {
    if !is_client_access(access) || !looks_like_entity_name(&access.property) {
        return None;
    }

    let model_name = to_declaration_casing(&access.property);
    let Some(model_domain) = index.domain_of(&model_name) else {
        return Some(FindingKind::ModelNotFound { model_name });
    };

    if model_domain == current_domain {
        return None;
    }

    Some(FindingKind::CrossDomainAccess {
        current_module: current_domain.to_string(),
        model_name,
        model_domain: model_domain.to_string(),
    })
}
