//! Tests for the crate error type.

use super::config::GraphConfig;
use super::error::Error;

#[test]
fn test_error_display() {
    let err = Error::VertexNotFound("7".to_string());
    assert_eq!(err.to_string(), "Vertex not found: 7");

    let err = Error::DuplicateEdge("1 -> 2".to_string());
    assert_eq!(err.to_string(), "Duplicate edge: 1 -> 2");
}

#[test]
fn test_error_from_json() {
    let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_error_from_config_error() {
    let err: Error = GraphConfig::from_toml_str("weighted = [1, 2]").unwrap_err().into();
    assert!(matches!(err, Error::Config(_)));
}
