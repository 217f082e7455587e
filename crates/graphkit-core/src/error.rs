//! Error types for graphkit.
//!
//! Graph algorithms report absent vertices, unreachable targets and invalid
//! structure through their return values (`false`, empty collections, the
//! weight sentinel). This enum covers the surfaces that are fallible in the
//! usual sense: strict mutation, configuration loading and snapshots.

use thiserror::Error;

/// graphkit error types.
#[derive(Error, Debug)]
pub enum Error {
    /// An edge endpoint is not a vertex of the graph.
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    /// The edge already exists and the graph does not allow parallel edges.
    #[error("Duplicate edge: {0}")]
    DuplicateEdge(String),

    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A snapshot is structurally inconsistent.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for graphkit operations.
pub type Result<T> = std::result::Result<T, Error>;
