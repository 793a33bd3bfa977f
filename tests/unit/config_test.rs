//! Tests for configuration loading

use std::fs;

use taskgate::api::{ApiRequest, LOCATION};
use taskgate::config::{Config, ConfigError, StoreBackend};
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.location_prefix, "/api/task");
    assert_eq!(config.server.address(), "127.0.0.1:3000");
    assert_eq!(config.store.backend, StoreBackend::Memory);
    assert!(config.store.path.is_none());
    assert!(config.validation.max_task_length.is_none());
}

#[test]
fn test_empty_file_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_load_full_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
location_prefix = "/todo"

[server]
host = "0.0.0.0"
port = 8080

[store]
backend = "file"
path = "/tmp/tasks.json"

[validation]
max_task_length = 280
"#,
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.location_prefix, "/todo");
    assert_eq!(config.server.address(), "0.0.0.0:8080");
    assert_eq!(config.store.backend, StoreBackend::File);
    assert_eq!(config.store.file_path(), std::path::PathBuf::from("/tmp/tasks.json"));
    assert_eq!(config.validation.max_task_length, Some(280));
    assert_eq!(config.validator().max_task_length(), Some(280));
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config: Config = toml::from_str("[server]\nport = 9000\n").unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
}

#[test]
fn test_explicit_missing_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_unknown_key_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[server]\nprot = 1\n").unwrap();

    assert!(matches!(Config::load(Some(&path)), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_unknown_backend_is_error() {
    assert!(toml::from_str::<Config>("[store]\nbackend = \"dynamo\"\n").is_err());
}

#[test]
fn test_config_roundtrips_through_toml() {
    let config: Config = toml::from_str("[validation]\nmax_task_length = 10\n").unwrap();
    let rendered = toml::to_string_pretty(&config).unwrap();
    assert_eq!(toml::from_str::<Config>(&rendered).unwrap(), config);
}

// =============================================================================
// WIRING
// =============================================================================

#[test]
fn test_dispatcher_uses_configured_prefix_and_file_store() {
    let temp = TempDir::new().unwrap();
    let tasks = temp.path().join("tasks.json");
    let config: Config = toml::from_str(&format!(
        "location_prefix = \"/todo\"\n[store]\nbackend = \"file\"\npath = {:?}\n",
        tasks.display().to_string()
    ))
    .unwrap();

    let resp = config
        .dispatcher()
        .dispatch(&ApiRequest::new("POST", "/api/task").with_body(r#"{"task": "Buy milk"}"#));
    assert_eq!(resp.status_code, 201);
    assert_eq!(resp.header(LOCATION), Some("/todo/TSK-1"));
    assert!(tasks.exists());

    // A second dispatcher sees the same file
    let list = config.dispatcher().dispatch(&ApiRequest::new("GET", "/api/task"));
    assert!(list.body.contains("Buy milk"));
}
