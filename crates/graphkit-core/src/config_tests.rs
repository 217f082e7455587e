//! Tests for graph configuration loading.

use std::io::Write;

use serial_test::serial;

use super::config::{ConfigError, EndpointPolicy, GraphConfig};

#[test]
fn test_default_config() {
    let config = GraphConfig::default();
    assert!(!config.directed);
    assert!(!config.weighted);
    assert!(config.allow_multi_edges);
    assert_eq!(config.endpoint_policy, EndpointPolicy::AutoCreate);
}

#[test]
fn test_builder_methods() {
    let config = GraphConfig::new(false, false)
        .directed()
        .weighted()
        .with_multi_edges(false)
        .with_endpoint_policy(EndpointPolicy::Reject);
    assert!(config.directed);
    assert!(config.weighted);
    assert!(!config.allow_multi_edges);
    assert_eq!(config.endpoint_policy, EndpointPolicy::Reject);
}

#[test]
fn test_from_toml_str_partial() {
    let config =
        GraphConfig::from_toml_str("directed = true\nendpoint_policy = \"reject\"").unwrap();
    assert!(config.directed);
    assert!(!config.weighted);
    assert_eq!(config.endpoint_policy, EndpointPolicy::Reject);
}

#[test]
fn test_from_toml_str_wrong_type() {
    let result = GraphConfig::from_toml_str("directed = [1, 2]");
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
fn test_toml_round_trip() {
    let config = GraphConfig::new(true, true).with_multi_edges(false);
    let rendered = config.to_toml_string().unwrap();
    let parsed = GraphConfig::from_toml_str(&rendered).unwrap();
    assert_eq!(parsed, config);
}

#[test]
#[serial]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "weighted = true").unwrap();
    writeln!(file, "allow_multi_edges = false").unwrap();

    let config = GraphConfig::load(file.path()).unwrap();
    assert!(config.weighted);
    assert!(!config.allow_multi_edges);
    assert!(!config.directed);
}

#[test]
#[serial]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GraphConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GraphConfig::default());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "directed = false").unwrap();

    std::env::set_var("GRAPHKIT_DIRECTED", "true");
    let loaded = GraphConfig::load(file.path());
    let from_env = GraphConfig::from_env();
    std::env::remove_var("GRAPHKIT_DIRECTED");

    assert!(loaded.unwrap().directed);
    assert!(from_env.unwrap().directed);
}
