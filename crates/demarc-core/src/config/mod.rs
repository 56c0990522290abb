//! Configuration management for demarc.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `demarc.toml` file
//! 3. User config `~/.config/demarc/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Could not find {marker} in any parent directory of {}", start.display())]
    ProjectRootNotFound { start: PathBuf, marker: &'static str },
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Boundary rule configuration.
    pub boundaries: BoundaryConfig,

    /// Directory scan configuration.
    pub scan: ScanConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./demarc.toml` (project local)
    /// 2. `~/.config/demarc/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(PROJECT_CONFIG_FILE).exists() {
            return Self::from_file(PROJECT_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(USER_CONFIG_DIR).join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        if config.boundaries.allow_shared_models.is_some() {
            tracing::warn!(
                "`boundaries.allow_shared_models` is no longer supported and has no effect; \
                 shared models are only accessible from the shared domain"
            );
        }

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("DEMARC_SCHEMA_DIR") {
            self.boundaries.schema_dir = dir;
        }
        if let Ok(marker) = std::env::var("DEMARC_MODULE_MARKER") {
            self.boundaries.module_marker = marker;
        }
    }

    /// Reject settings no check can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boundaries.module_marker.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "boundaries.module_marker must not be empty".to_string(),
            ));
        }
        if self.boundaries.schema_dir.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "boundaries.schema_dir must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Boundary rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    /// Schema source directory, relative to the project root.
    pub schema_dir: String,

    /// Path fragment preceding the domain segment of a module path.
    pub module_marker: String,

    /// Legacy switch from older releases. Read so old config files still load,
    /// but ignored: access to shared models follows the same domain-equality rule.
    #[serde(skip_serializing)]
    pub allow_shared_models: Option<bool>,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            schema_dir: DEFAULT_SCHEMA_DIR.to_string(),
            module_marker: DEFAULT_MODULE_MARKER.to_string(),
            allow_shared_models: None,
        }
    }
}

impl BoundaryConfig {
    /// Resolve the schema directory against a project root.
    pub fn schema_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.schema_dir)
    }
}

/// Directory scan configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions to check (without leading dot).
    pub include_extensions: Vec<String>,

    /// Directories to exclude from scanning.
    pub exclude_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_extensions: DEFAULT_SCAN_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.boundaries.schema_dir, DEFAULT_SCHEMA_DIR);
        assert_eq!(config.boundaries.module_marker, DEFAULT_MODULE_MARKER);
        assert!(config.scan.include_extensions.iter().any(|e| e == "prisma"));
    }

    #[test]
    fn test_config_to_toml() {
        let toml_str = Config::default_config_string();
        assert!(toml_str.contains("[boundaries]"));
        assert!(toml_str.contains("[scan]"));
        assert!(!toml_str.contains("allow_shared_models"));
    }

    #[test]
    fn test_validate_rejects_empty_marker() {
        let mut config = Config::default();
        config.boundaries.module_marker = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
