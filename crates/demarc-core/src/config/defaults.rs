//! Default values for demarc configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Boundary Defaults
// ============================================================================

/// Directory (relative to the project root) holding the schema sources.
pub const DEFAULT_SCHEMA_DIR: &str = "prisma/schema";

/// Path fragment whose following segment names a module's domain.
pub const DEFAULT_MODULE_MARKER: &str = "/modules/";

/// Alternative module marker for projects laid out as `src/<domain>/...`.
pub const ALTERNATE_MODULE_MARKER: &str = "/src/";

/// Domain label given to models declared in the common schema files.
pub const SHARED_DOMAIN: &str = "shared";

/// Schema file base names whose models belong to the shared domain.
pub const SHARED_SCHEMA_NAMES: &[&str] = &["schema", "main"];

/// Extension of schema source files.
pub const SCHEMA_EXTENSION: &str = "prisma";

/// Extensions of application source files checked for data access.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts"];

/// File whose presence marks the project root.
pub const PROJECT_MARKER_FILE: &str = "package.json";

/// Identifier the data-access client is bound to (`this.prisma.user`).
pub const CLIENT_IDENTIFIER: &str = "prisma";

/// Identifier the SQL template builder is bound to (`` sql`...` ``).
pub const SQL_TAG_IDENTIFIER: &str = "sql";

/// Token substituted for every interpolated expression of a SQL template.
pub const SQL_PLACEHOLDER: &str = "?";

// ============================================================================
// Scan Defaults
// ============================================================================

/// File extensions the directory walk hands to the checkers.
pub const DEFAULT_SCAN_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts", "prisma"];

/// Directories skipped by the directory walk.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    // Version control
    ".git",
    ".svn",
    ".hg",
    // Dependencies
    "node_modules",
    "vendor",
    // Build outputs
    "target",
    "build",
    "dist",
    "out",
    // IDE/Editor
    ".idea",
    ".vscode",
    // Other common excludes
    "coverage",
    ".next",
    ".cache",
];

// ============================================================================
// File Names
// ============================================================================

/// Project-local configuration file.
pub const PROJECT_CONFIG_FILE: &str = "demarc.toml";

/// Directory under the user config dir holding `config.toml`.
pub const USER_CONFIG_DIR: &str = "demarc";
