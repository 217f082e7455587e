//! Graph construction settings.
//!
//! A [`GraphConfig`] fixes the shape of a graph for its whole lifetime:
//! directedness, weighting, whether parallel edges are kept, and what
//! `add_edge` does when an endpoint is missing. Configs can be built in code
//! or layered from defaults, a TOML file and `GRAPHKIT_*` environment
//! variables.
//!
//! # Example
//!
//! ```rust
//! use graphkit_core::{EndpointPolicy, GraphConfig};
//!
//! let config = GraphConfig::default()
//!     .directed()
//!     .weighted()
//!     .with_endpoint_policy(EndpointPolicy::Reject);
//!
//! assert!(config.directed);
//! assert!(config.allow_multi_edges);
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "GRAPHKIT_";

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A provider failed or a value had the wrong type.
    #[error("failed to load graph config: {0}")]
    Load(Box<figment::Error>),

    /// The config could not be rendered as TOML.
    #[error("failed to serialize graph config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

/// What `add_edge` does when one of its endpoints is not yet a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointPolicy {
    /// Missing endpoints are inserted as new vertices.
    #[default]
    AutoCreate,
    /// The edge is refused and the graph is left unchanged.
    Reject,
}

/// Shape of a graph, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Edges are one-way.
    pub directed: bool,
    /// Edge weights are kept; otherwise every edge weighs one.
    pub weighted: bool,
    /// Re-adding an existing edge appends a parallel entry.
    pub allow_multi_edges: bool,
    /// Handling of missing endpoints in `add_edge`.
    pub endpoint_policy: EndpointPolicy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            weighted: false,
            allow_multi_edges: true,
            endpoint_policy: EndpointPolicy::AutoCreate,
        }
    }
}

impl GraphConfig {
    /// Creates a config with the given directedness and weighting.
    #[must_use]
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            directed,
            weighted,
            ..Self::default()
        }
    }

    /// Marks the graph as directed (builder pattern).
    #[must_use]
    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }

    /// Marks the graph as weighted (builder pattern).
    #[must_use]
    pub fn weighted(mut self) -> Self {
        self.weighted = true;
        self
    }

    /// Sets whether parallel edges are kept (builder pattern).
    #[must_use]
    pub fn with_multi_edges(mut self, allow: bool) -> Self {
        self.allow_multi_edges = allow;
        self
    }

    /// Sets the missing-endpoint policy (builder pattern).
    #[must_use]
    pub fn with_endpoint_policy(mut self, policy: EndpointPolicy) -> Self {
        self.endpoint_policy = policy;
        self
    }

    /// Loads a config from defaults, then `path` (TOML), then `GRAPHKIT_*`
    /// environment variables. A missing file is not an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "Loaded graph config");
        Ok(config)
    }

    /// Loads a config from defaults overlaid by `GRAPHKIT_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?)
    }

    /// Parses a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(source))
            .extract()?)
    }

    /// Renders the config as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
