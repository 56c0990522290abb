//! Findings: the located diagnostics the checkers emit.

use serde::Serialize;

use crate::source::Location;

/// What a finding reports, with the data its message needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FindingKind {
    /// Client access to a model owned by another domain.
    #[serde(rename_all = "camelCase")]
    CrossDomainAccess {
        current_module: String,
        model_name: String,
        model_domain: String,
    },

    /// Client access to a name no schema file declares as a model.
    #[serde(rename_all = "camelCase")]
    ModelNotFound { model_name: String },

    /// The file could not be checked at all.
    #[serde(rename_all = "camelCase")]
    ConfigError { message: String },

    /// A schema field whose type is declared in another schema file.
    #[serde(rename_all = "camelCase")]
    CrossFileReference {
        field_name: String,
        referenced_type: String,
    },

    /// Raw SQL against a table in another domain's schema.
    #[serde(rename_all = "camelCase")]
    CrossSchemaAccess {
        current_module: String,
        schema: String,
        table: String,
    },

    /// Raw SQL naming a table without its schema.
    #[serde(rename_all = "camelCase")]
    UnqualifiedTable { current_module: String, table: String },
}

impl FindingKind {
    /// Stable identifier, used in reports and counts.
    pub fn id(&self) -> &'static str {
        match self {
            Self::CrossDomainAccess { .. } => "crossDomainAccess",
            Self::ModelNotFound { .. } => "modelNotFound",
            Self::ConfigError { .. } => "configError",
            Self::CrossFileReference { .. } => "crossFileReference",
            Self::CrossSchemaAccess { .. } => "crossSchemaAccess",
            Self::UnqualifiedTable { .. } => "unqualifiedTable",
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        match self {
            Self::CrossDomainAccess {
                current_module,
                model_name,
                model_domain,
            } => format!(
                "Module '{}' accesses model '{}' owned by domain '{}'; go through that domain's public API instead",
                current_module, model_name, model_domain
            ),
            Self::ModelNotFound { model_name } => format!(
                "Model '{}' is not declared in any schema file",
                model_name
            ),
            Self::ConfigError { message } => {
                format!("Boundary check could not run: {}", message)
            }
            Self::CrossFileReference {
                field_name,
                referenced_type,
            } => format!(
                "Field '{}' references '{}', which is declared in another schema file",
                field_name, referenced_type
            ),
            Self::CrossSchemaAccess {
                current_module,
                schema,
                table,
            } => format!(
                "Module '{}' queries table '{}.{}' in another domain's schema",
                current_module, schema, table
            ),
            Self::UnqualifiedTable {
                current_module,
                table,
            } => format!(
                "Table '{}' is not schema-qualified; use '{}.{}' or the owning domain's schema",
                table, current_module, table
            ),
        }
    }
}

/// A located finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub file: String,
    #[serde(flatten)]
    pub location: Location,
    #[serde(flatten)]
    pub kind: FindingKind,
}

impl Finding {
    pub fn new(file: impl Into<String>, location: Location, kind: FindingKind) -> Self {
        Self {
            file: file.into(),
            location,
            kind,
        }
    }

    pub fn message(&self) -> String {
        self.kind.message()
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: [{}] {}",
            self.file,
            self.location,
            self.kind.id(),
            self.message()
        )
    }
}
