use demarc_core::config::{
    ALTERNATE_MODULE_MARKER, DEFAULT_MODULE_MARKER, DEFAULT_SCHEMA_DIR,
};
use demarc_core::{BoundaryConfig, Config, ConfigError};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.boundaries.schema_dir, DEFAULT_SCHEMA_DIR);
    assert_eq!(config.boundaries.module_marker, DEFAULT_MODULE_MARKER);
    assert!(config.boundaries.allow_shared_models.is_none());
}

#[test]
fn test_config_to_toml() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("[boundaries]"));
    assert!(toml_str.contains("[scan]"));
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
[boundaries]
schema_dir = "db/schema"
module_marker = "/src/"

[scan]
exclude_dirs = ["generated"]
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.boundaries.schema_dir, "db/schema");
    assert_eq!(config.boundaries.module_marker, ALTERNATE_MODULE_MARKER);
    assert_eq!(config.scan.exclude_dirs, vec!["generated".to_string()]);
    assert!(config.scan.include_extensions.iter().any(|e| e == "ts"));
}

#[test]
fn test_legacy_allow_shared_models_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demarc.toml");
    std::fs::write(&path, "[boundaries]\nallow_shared_models = true\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.boundaries.allow_shared_models, Some(true));
    assert!(!Config::default_config_string().contains("allow_shared_models"));
}

#[test]
fn test_from_file_rejects_bad_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demarc.toml");
    std::fs::write(&path, "[boundaries\n").unwrap();

    assert!(matches!(
        Config::from_file(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn test_from_file_rejects_empty_schema_dir() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demarc.toml");
    std::fs::write(&path, "[boundaries]\nschema_dir = \"\"\n").unwrap();

    assert!(matches!(
        Config::from_file(&path),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_schema_path() {
    let config = BoundaryConfig::default();
    assert_eq!(
        config.schema_path(Path::new("/repo")),
        Path::new("/repo/prisma/schema")
    );
}
